//! Parent-pointer spanning tree.

use crate::distance::DistanceMatrix;

/// A spanning tree rooted at city 0, stored as parent pointers.
///
/// `parent(0)` is `None`; every other city points at its tree predecessor.
/// Following parents from any city reaches the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    parent: Vec<Option<usize>>,
    order: Vec<usize>,
}

impl SpanningTree {
    /// Creates a tree from parent pointers and the order in which nodes
    /// joined the tree.
    pub(crate) fn new(parent: Vec<Option<usize>>, order: Vec<usize>) -> Self {
        Self { parent, order }
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Parent of `node`, or `None` for the root.
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parent[node]
    }

    pub fn parents(&self) -> &[Option<usize>] {
        &self.parent
    }

    /// Nodes in the order Prim's algorithm attached them, starting with 0.
    pub fn attach_order(&self) -> &[usize] {
        &self.order
    }

    /// Tree edges as `(parent, child)` pairs, in child index order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter_map(|(child, parent)| parent.map(|p| (p, child)))
    }

    /// Children adjacency: `children()[u]` lists the direct children of `u`
    /// in increasing node index.
    pub fn children(&self) -> Vec<Vec<usize>> {
        let mut children = vec![Vec::new(); self.len()];
        for (parent, child) in self.edges() {
            children[parent].push(child);
        }
        children
    }

    /// Total edge weight under `dist`.
    pub fn weight(&self, dist: &DistanceMatrix) -> f64 {
        self.edges().map(|(p, c)| dist.get(p, c)).sum()
    }
}
