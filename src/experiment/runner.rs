//! Experiment execution.

use super::config::ExperimentConfig;
use super::types::{ExperimentReport, TimingRecord};
use crate::approx::MstApproximation;
use crate::distance::DistanceMatrix;
use crate::error::{TspError, TspResult};
use crate::exact::HeldKarp;
use crate::instance::{create_rng, random_points};
use crate::solver::TspSolver;
use std::time::Instant;
use tracing::{info, info_span};

/// Runs timing sweeps.
///
/// # Usage
///
/// ```
/// use u_tsp::experiment::{ExperimentConfig, ExperimentRunner};
///
/// let config = ExperimentConfig::default()
///     .with_exact_sizes(vec![4, 5, 6])
///     .with_approximate_sizes(vec![10, 20])
///     .with_seed(42);
/// let report = ExperimentRunner::run(&config).unwrap();
/// assert_eq!(report.exact.len(), 3);
/// assert_eq!(report.approximate.len(), 2);
/// ```
pub struct ExperimentRunner;

impl ExperimentRunner {
    /// Runs the Held-Karp sweep, then the approximation sweep.
    ///
    /// Both sweeps share the base seed, so equal sizes at equal positions
    /// see the same instance.
    pub fn run(config: &ExperimentConfig) -> TspResult<ExperimentReport> {
        let config = config.clone().with_seed(config.seed.unwrap_or_else(rand::random));

        let exact = Self::sweep(&HeldKarp::default(), &config.exact_sizes, &config)?;
        let approximate = Self::sweep(&MstApproximation, &config.approximate_sizes, &config)?;

        Ok(ExperimentReport { exact, approximate })
    }

    /// Solves one random instance per entry of `sizes` with `solver`.
    ///
    /// Records come back in the order of `sizes`.
    pub fn sweep<S: TspSolver>(
        solver: &S,
        sizes: &[usize],
        config: &ExperimentConfig,
    ) -> TspResult<Vec<TimingRecord>> {
        config.validate().map_err(TspError::InvalidConfig)?;
        let base_seed = config.seed.unwrap_or_else(rand::random);

        let span = info_span!("sweep", algorithm = %solver.algorithm(), instances = sizes.len());
        let _enter = span.enter();

        #[cfg(feature = "parallel")]
        if config.parallel {
            use rayon::prelude::*;
            return sizes
                .par_iter()
                .enumerate()
                .map(|(i, &n)| time_instance(solver, n, base_seed.wrapping_add(i as u64), config))
                .collect();
        }

        sizes
            .iter()
            .enumerate()
            .map(|(i, &n)| time_instance(solver, n, base_seed.wrapping_add(i as u64), config))
            .collect()
    }
}

fn time_instance<S: TspSolver>(
    solver: &S,
    cities: usize,
    seed: u64,
    config: &ExperimentConfig,
) -> TspResult<TimingRecord> {
    let mut rng = create_rng(seed);
    let points = random_points(cities, config.coordinate_limit, &mut rng)?;
    let dist = DistanceMatrix::from_points(&points);

    let start = Instant::now();
    let solution = solver.solve(&dist)?;
    let elapsed = start.elapsed();

    info!(
        algorithm = %solver.algorithm(),
        cities,
        seconds = elapsed.as_secs_f64(),
        cost = solution.cost,
        "instance solved"
    );

    Ok(TimingRecord {
        algorithm: solver.algorithm(),
        cities,
        cost: solution.cost,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Algorithm;

    fn small_config() -> ExperimentConfig {
        ExperimentConfig::default()
            .with_exact_sizes(vec![4, 5, 6, 7])
            .with_approximate_sizes(vec![4, 5, 6, 7, 50])
            .with_seed(42)
    }

    #[test]
    fn test_run_records_every_size() {
        let report = ExperimentRunner::run(&small_config()).unwrap();
        let exact_sizes: Vec<_> = report.exact.iter().map(|r| r.cities).collect();
        let approx_sizes: Vec<_> = report.approximate.iter().map(|r| r.cities).collect();
        assert_eq!(exact_sizes, vec![4, 5, 6, 7]);
        assert_eq!(approx_sizes, vec![4, 5, 6, 7, 50]);
        assert!(report.exact.iter().all(|r| r.algorithm == Algorithm::HeldKarp));
        assert!(report
            .approximate
            .iter()
            .all(|r| r.algorithm == Algorithm::MstPreorder));
    }

    #[test]
    fn test_same_instances_bound_each_other() {
        // Position i of both sweeps uses seed + i, so the first four
        // approximate instances are the exact sweep's instances.
        let report = ExperimentRunner::run(&small_config()).unwrap();
        for (exact, approx) in report.exact.iter().zip(&report.approximate) {
            assert_eq!(exact.cities, approx.cities);
            assert!(approx.cost >= exact.cost - 1e-9);
            assert!(approx.cost <= 2.0 * exact.cost + 1e-9);
        }
    }

    #[test]
    fn test_seeded_sweep_is_reproducible() {
        let config = small_config();
        let a = ExperimentRunner::sweep(&MstApproximation, &[8, 16, 32], &config).unwrap();
        let b = ExperimentRunner::sweep(&MstApproximation, &[8, 16, 32], &config).unwrap();
        let costs_a: Vec<_> = a.iter().map(|r| r.cost).collect();
        let costs_b: Vec<_> = b.iter().map(|r| r.cost).collect();
        assert_eq!(costs_a, costs_b);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = small_config().with_coordinate_limit(-1.0);
        assert!(matches!(
            ExperimentRunner::run(&config),
            Err(TspError::InvalidConfig(_))
        ));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = small_config();
        let parallel = small_config().with_parallel(true);
        let a = ExperimentRunner::sweep(&HeldKarp::default(), &[4, 6, 8, 9], &sequential).unwrap();
        let b = ExperimentRunner::sweep(&HeldKarp::default(), &[4, 6, 8, 9], &parallel).unwrap();
        let costs_a: Vec<_> = a.iter().map(|r| (r.cities, r.cost)).collect();
        let costs_b: Vec<_> = b.iter().map(|r| (r.cities, r.cost)).collect();
        assert_eq!(costs_a, costs_b);
    }
}
