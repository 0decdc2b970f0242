//! Timing experiments.
//!
//! Generates one random instance per requested size, solves it, and records
//! the wall-clock time. The default sweep runs Held-Karp on 4..=16 cities
//! and the MST approximation on 10 to 400 cities, which is enough to show
//! exponential versus polynomial growth. Rendering the records is left to
//! the caller; with the `serde` feature they serialize directly.

mod config;
mod runner;
mod types;

pub use config::ExperimentConfig;
pub use runner::ExperimentRunner;
pub use types::{ExperimentReport, TimingRecord};
