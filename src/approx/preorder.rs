//! Preorder linearization of a spanning tree.

use crate::mst::SpanningTree;
use crate::tour::Tour;

/// Walks `tree` in depth-first preorder from root 0, visiting each node's
/// children in increasing index, then returns to 0.
///
/// Uses an explicit stack, so path-shaped trees of any depth are fine. The
/// result has length `n + 1`; an empty tree yields an empty tour.
///
/// # Examples
///
/// ```
/// use u_tsp::approx::preorder_tour;
/// use u_tsp::distance::{distances, Point};
/// use u_tsp::mst::prim;
///
/// let dist = distances(&[
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(-1.0, 0.0),
/// ]);
/// let tour = preorder_tour(&prim(&dist).unwrap());
/// assert_eq!(tour.cities(), &[0, 1, 2, 0]);
/// ```
pub fn preorder_tour(tree: &SpanningTree) -> Tour {
    let n = tree.len();
    if n == 0 {
        return Tour::default();
    }

    let children = tree.children();
    let mut walk = Vec::with_capacity(n + 1);
    let mut stack = vec![0usize];

    while let Some(node) = stack.pop() {
        walk.push(node);
        // Reverse so the lowest-index child is popped first.
        stack.extend(children[node].iter().rev());
    }

    walk.push(0);
    Tour::new(walk)
}
