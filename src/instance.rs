//! Random instance generation.

use crate::distance::Point;
use crate::error::{TspError, TspResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Side length of the sampling square used by default.
pub const DEFAULT_COORDINATE_LIMIT: f64 = 100.0;

/// Creates a deterministic RNG from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Samples `n` cities uniformly from the square `[0, limit)²`.
///
/// Returns [`TspError::InvalidConfig`] if `limit` is not a positive finite
/// number.
///
/// # Examples
///
/// ```
/// use u_tsp::instance::{create_rng, random_points};
///
/// let mut rng = create_rng(42);
/// let points = random_points(5, 100.0, &mut rng).unwrap();
/// assert_eq!(points.len(), 5);
/// assert!(points.iter().all(|p| (0.0..100.0).contains(&p.x)));
/// ```
pub fn random_points<R: Rng>(n: usize, limit: f64, rng: &mut R) -> TspResult<Vec<Point>> {
    if !(limit.is_finite() && limit > 0.0) {
        return Err(TspError::invalid_config(format!(
            "coordinate limit must be positive and finite, got {limit}"
        )));
    }
    Ok((0..n)
        .map(|_| Point::new(rng.random_range(0.0..limit), rng.random_range(0.0..limit)))
        .collect())
}
