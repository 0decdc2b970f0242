//! MST-preorder 2-approximation.
//!
//! Builds a minimum spanning tree, linearizes it with a depth-first
//! preorder walk, and closes the walk back at city 0. Skipping already
//! visited cities is a shortcut of the doubled tree walk, so on metric
//! instances the tour costs at most twice the MST weight, which itself
//! is at most the optimal tour cost.
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//!   for the Traveling Salesman Problem", *SIAM J. Comput.* 6(3), 563-581.

mod preorder;
mod runner;

pub use preorder::preorder_tour;
pub use runner::{approximate_cost, MstApproximation};
