//! Experiment output.

use crate::solver::Algorithm;
use std::time::Duration;

/// One solved instance of a sweep.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TimingRecord {
    /// Algorithm that solved the instance.
    pub algorithm: Algorithm,
    /// Number of cities.
    pub cities: usize,
    /// Tour cost reported by the solver.
    pub cost: f64,
    /// Wall-clock solve time, excluding instance generation.
    pub elapsed: Duration,
}

impl TimingRecord {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Records of both sweeps.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperimentReport {
    pub exact: Vec<TimingRecord>,
    pub approximate: Vec<TimingRecord>,
}

impl ExperimentReport {
    /// `(cities, seconds)` pairs of a sweep, ready for plotting.
    pub fn series(&self, algorithm: Algorithm) -> Vec<(usize, f64)> {
        let records = match algorithm {
            Algorithm::HeldKarp => &self.exact,
            Algorithm::MstPreorder => &self.approximate,
        };
        records.iter().map(|r| (r.cities, r.seconds())).collect()
    }
}
