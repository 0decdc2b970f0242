//! Euclidean Traveling Salesman Problem solvers.
//!
//! Two algorithms with different cost/quality trade-offs:
//!
//! - **Held-Karp** ([`exact`]): exact dynamic program over
//!   `(subset, endpoint)` states. O(n²·2ⁿ) time, usable up to roughly
//!   n ≈ 20.
//! - **MST-preorder** ([`approx`]): builds a minimum spanning tree with
//!   dense Prim ([`mst`]) and linearizes it with a preorder walk. O(n²) time,
//!   and never more than twice the optimum on metric instances.
//!
//! Both read a [`DistanceMatrix`] built from planar [`Point`]s by
//! [`distance`], and both implement [`TspSolver`]. The [`instance`] and
//! [`experiment`] modules generate random instances and time the solvers
//! over a range of sizes.
//!
//! # Example
//!
//! ```
//! use u_tsp::distance::{distances, Point};
//! use u_tsp::{approx, exact};
//!
//! let dist = distances(&[
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(1.0, 0.0),
//! ]);
//! let optimum = exact::exact_cost(&dist).unwrap();
//! let bound = approx::approximate_cost(&dist).unwrap();
//! assert!(bound.cost >= optimum - 1e-10);
//! assert!(bound.cost <= 2.0 * optimum + 1e-10);
//! assert_eq!(bound.tour.cities().first(), Some(&0));
//! ```
//!
//! # Features
//!
//! - `parallel`: rayon-parallel Held-Karp layers and experiment sweeps.
//! - `serde`: `Serialize`/`Deserialize` for points, tours, solutions and
//!   experiment records.

pub mod approx;
pub mod distance;
pub mod error;
pub mod exact;
pub mod experiment;
pub mod instance;
pub mod mst;
pub mod solver;
pub mod tour;

pub use approx::MstApproximation;
pub use distance::{DistanceMatrix, Point};
pub use error::{TspError, TspResult};
pub use exact::HeldKarp;
pub use solver::{Algorithm, TspSolver};
pub use tour::{Solution, Tour};
