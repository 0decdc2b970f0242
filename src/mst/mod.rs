//! Minimum Spanning Tree (MST).
//!
//! Dense O(n²) Prim's algorithm over a complete distance graph, returning a
//! parent-pointer tree rooted at city 0. Ties are broken deterministically
//! (lowest index first) so the approximate tour built on top of the tree is
//! reproducible.
//!
//! # References
//!
//! - Prim, R. C. (1957). "Shortest connection networks and some generalizations",
//!   *Bell System Technical Journal* 36(6), 1389-1401.

mod prim;
mod types;

pub use prim::prim;
pub use types::SpanningTree;
