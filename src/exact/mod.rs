//! Exact Held-Karp dynamic program.
//!
//! Computes the minimum Hamiltonian cycle cost by dynamic programming over
//! `(subset, endpoint)` states: the cheapest path that starts at city 0,
//! visits exactly the cities of the subset, and ends at the endpoint.
//! States are filled in strictly increasing subset size, then the cycle is
//! closed back to city 0.
//!
//! Time is O(n²·2ⁿ) and memory O(n·2ⁿ). There is no internal cap on `n`
//! beyond what a subset bitmask can hold; choosing an instance small enough
//! to fit in time and memory is the caller's job (n ≈ 20 already needs
//! about 100 MB).
//!
//! # References
//!
//! - Held, M. & Karp, R. M. (1962). "A Dynamic Programming Approach to
//!   Sequencing Problems", *J. SIAM* 10(1), 196-210.
//! - Bellman, R. (1962). "Dynamic Programming Treatment of the Travelling
//!   Salesman Problem", *J. ACM* 9(1), 61-63.

mod runner;
mod subsets;
mod table;

pub use runner::{exact_cost, exact_tour, HeldKarp};
pub use table::MAX_EXACT_CITIES;
pub(crate) use table::state_count;
