//! Common interface implemented by every TSP solver in this crate.

use crate::distance::DistanceMatrix;
use crate::error::TspResult;
use crate::tour::Solution;

/// Identifies which algorithm produced a result.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Exact Held-Karp dynamic program.
    HeldKarp,
    /// Minimum spanning tree + preorder walk 2-approximation.
    MstPreorder,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::HeldKarp => write!(f, "Held-Karp"),
            Algorithm::MstPreorder => write!(f, "MST-preorder"),
        }
    }
}

/// Solves a TSP instance given as a distance matrix.
///
/// Implementations are pure functions of the matrix and hold no mutable
/// state, so one solver value may be shared across threads.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::{distances, Point};
/// use u_tsp::{HeldKarp, MstApproximation, TspSolver};
///
/// let dist = distances(&[
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ]);
/// let exact = HeldKarp::default().solve(&dist).unwrap();
/// let approx = MstApproximation.solve(&dist).unwrap();
/// assert!((exact.cost - 4.0).abs() < 1e-10);
/// assert!(approx.cost <= 2.0 * exact.cost + 1e-10);
/// ```
pub trait TspSolver: Send + Sync {
    /// The algorithm this solver runs.
    fn algorithm(&self) -> Algorithm;

    /// Solves the instance, returning the tour cost and a witness tour.
    fn solve(&self, dist: &DistanceMatrix) -> TspResult<Solution>;
}
