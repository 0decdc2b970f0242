//! Approximate solver: MST, preorder walk, cost accumulation.

use super::preorder::preorder_tour;
use crate::distance::DistanceMatrix;
use crate::error::TspResult;
use crate::mst::prim;
use crate::solver::{Algorithm, TspSolver};
use crate::tour::Solution;
use tracing::debug;

/// Computes an upper bound on the optimal tour cost together with the
/// preorder tour that attains it.
///
/// For metric instances the returned cost lies between the optimum and
/// twice the optimum. A single city gives cost 0 and tour `[0, 0]`.
///
/// Returns [`TspError::InvalidInstance`](crate::TspError::InvalidInstance)
/// for an empty matrix.
pub fn approximate_cost(dist: &DistanceMatrix) -> TspResult<Solution> {
    let tree = prim(dist)?;
    let tour = preorder_tour(&tree);
    let cost = tour.cost(dist);

    debug!(
        cities = dist.size(),
        mst_weight = tree.weight(dist),
        cost,
        "mst-preorder tour built"
    );

    Ok(Solution { cost, tour })
}

/// [`TspSolver`] running the MST-preorder 2-approximation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MstApproximation;

impl TspSolver for MstApproximation {
    fn algorithm(&self) -> Algorithm {
        Algorithm::MstPreorder
    }

    fn solve(&self, dist: &DistanceMatrix) -> TspResult<Solution> {
        approximate_cost(dist)
    }
}
