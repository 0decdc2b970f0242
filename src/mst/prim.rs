//! Dense Prim's algorithm.

use super::types::SpanningTree;
use crate::distance::DistanceMatrix;
use crate::error::{TspError, TspResult};
use tracing::trace;

/// Computes a minimum spanning tree of the complete graph described by
/// `dist`, rooted at city 0.
///
/// Each round attaches the unvisited node with the smallest connection
/// cost; among equal costs the lowest index wins. A node's parent is only
/// replaced by a strictly cheaper connection. Runs in O(n²) time and O(n)
/// extra space.
///
/// Returns [`TspError::InvalidInstance`] for an empty matrix.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::{distances, Point};
/// use u_tsp::mst::prim;
///
/// let dist = distances(&[
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(2.0, 0.0),
/// ]);
/// let tree = prim(&dist).unwrap();
/// assert_eq!(tree.parent(1), Some(0));
/// assert_eq!(tree.parent(2), Some(1));
/// assert!((tree.weight(&dist) - 2.0).abs() < 1e-10);
/// ```
pub fn prim(dist: &DistanceMatrix) -> TspResult<SpanningTree> {
    let n = dist.size();
    if n == 0 {
        return Err(TspError::invalid_instance(
            "spanning tree needs at least one city",
        ));
    }

    let mut visited = vec![false; n];
    let mut key = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut order = Vec::with_capacity(n);
    key[0] = 0.0;

    while let Some(u) = closest_unvisited(&key, &visited) {
        visited[u] = true;
        order.push(u);

        for (v, &d) in dist.row(u).iter().enumerate() {
            if !visited[v] && d < key[v] {
                key[v] = d;
                parent[v] = Some(u);
            }
        }
    }

    trace!(cities = n, "prim: spanning tree complete");
    Ok(SpanningTree::new(parent, order))
}

/// Unvisited node with the smallest key, lowest index on ties.
fn closest_unvisited(key: &[f64], visited: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &k) in key.iter().enumerate() {
        if visited[i] {
            continue;
        }
        match best {
            Some(b) if k >= key[b] => {}
            _ => best = Some(i),
        }
    }
    best
}
