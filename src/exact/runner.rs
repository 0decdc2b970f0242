//! Held-Karp table filling, cycle closing, and tour reconstruction.

use super::subsets::SubsetsOfSize;
use super::table::{HeldKarpTable, NO_PREDECESSOR};
use crate::distance::DistanceMatrix;
use crate::error::{TspError, TspResult};
use crate::solver::{Algorithm, TspSolver};
use crate::tour::{Solution, Tour};
use tracing::{debug, debug_span, trace};

/// Exact Held-Karp [`TspSolver`].
///
/// With the `parallel` feature enabled and `parallel` set, the states of
/// each subset-size layer are computed concurrently with rayon. Layers are
/// always processed one after another. Without the feature the flag is
/// ignored.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::{distances, Point};
/// use u_tsp::{HeldKarp, TspSolver};
///
/// let dist = distances(&[
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ]);
/// let solution = HeldKarp::default().solve(&dist).unwrap();
/// assert!((solution.cost - 4.0).abs() < 1e-10);
/// assert_eq!(solution.tour.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldKarp {
    /// Compute each subset-size layer in parallel.
    pub parallel: bool,
}

impl HeldKarp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Minimum Hamiltonian cycle cost. `0.0` for fewer than two cities.
    ///
    /// Skips the predecessor table and tour reconstruction. If every path
    /// sum overflows, the cost is `f64::INFINITY`.
    pub fn cost(&self, dist: &DistanceMatrix) -> TspResult<f64> {
        if dist.size() <= 1 {
            return Ok(0.0);
        }
        let (_, cost, _) = self.fill_and_close(dist, false)?;
        Ok(cost)
    }

    /// Minimum Hamiltonian cycle cost and an optimal tour.
    pub fn run(&self, dist: &DistanceMatrix) -> TspResult<Solution> {
        let n = dist.size();
        match n {
            0 => {
                return Ok(Solution {
                    cost: 0.0,
                    tour: Tour::default(),
                })
            }
            1 => {
                return Ok(Solution {
                    cost: 0.0,
                    tour: Tour::new(vec![0, 0]),
                })
            }
            _ => {}
        }

        let (table, cost, last) = self.fill_and_close(dist, true)?;
        if !cost.is_finite() {
            return Err(TspError::invalid_instance(format!(
                "no finite tour: path costs overflow ({cost})"
            )));
        }
        let tour = reconstruct(&table, last)?;
        Ok(Solution { cost, tour })
    }

    /// Fills the table for `n >= 2` cities and closes the cycle. Returns the
    /// table, the optimal cost, and the endpoint column it closes from.
    fn fill_and_close(
        &self,
        dist: &DistanceMatrix,
        track_predecessors: bool,
    ) -> TspResult<(HeldKarpTable, f64, usize)> {
        let span = debug_span!("held_karp", cities = dist.size());
        let _enter = span.enter();

        let mut table = HeldKarpTable::new(dist.size() - 1, track_predecessors)?;
        debug!(
            states = table.costs().len(),
            track_predecessors, "state table allocated"
        );

        fill(&mut table, dist, self.parallel);
        let (cost, last) = close(&table, dist);

        debug!(cost, "optimal cycle found");
        Ok((table, cost, last))
    }
}

impl TspSolver for HeldKarp {
    fn algorithm(&self) -> Algorithm {
        Algorithm::HeldKarp
    }

    fn solve(&self, dist: &DistanceMatrix) -> TspResult<Solution> {
        self.run(dist)
    }
}

/// Minimum Hamiltonian cycle cost of `dist`.
///
/// Returns `0.0` for fewer than two cities and `2·dist[0][1]` for two.
/// Fails with [`TspError::InstanceTooLarge`](crate::TspError::InstanceTooLarge)
/// only above [`MAX_EXACT_CITIES`](super::MAX_EXACT_CITIES). No tour is
/// built, so no predecessor table is allocated.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::{distances, Point};
/// use u_tsp::exact::exact_cost;
///
/// let dist = distances(&[
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(2.0, 0.0),
/// ]);
/// assert!((exact_cost(&dist).unwrap() - 4.0).abs() < 1e-10);
/// ```
pub fn exact_cost(dist: &DistanceMatrix) -> TspResult<f64> {
    HeldKarp::default().cost(dist)
}

/// Minimum Hamiltonian cycle cost of `dist` with an optimal tour,
/// reconstructed from the stored predecessor of each state.
///
/// Returns [`TspError::InvalidInstance`](crate::TspError::InvalidInstance)
/// when no cycle has a finite cost.
pub fn exact_tour(dist: &DistanceMatrix) -> TspResult<Solution> {
    HeldKarp::default().run(dist)
}

/// Fills every state, layer by layer in increasing subset size.
fn fill(table: &mut HeldKarpTable, dist: &DistanceMatrix, parallel: bool) {
    let width = table.width();

    // Size 1: straight from the origin.
    for k in 0..width {
        table.set(1 << k, k, dist.get(0, k + 1), NO_PREDECESSOR);
    }

    for size in 2..=width {
        trace!(size, "filling layer");
        fill_layer(table, dist, size, parallel);
    }
}

#[cfg(not(feature = "parallel"))]
fn fill_layer(table: &mut HeldKarpTable, dist: &DistanceMatrix, size: usize, _parallel: bool) {
    fill_layer_sequential(table, dist, size);
}

#[cfg(feature = "parallel")]
fn fill_layer(table: &mut HeldKarpTable, dist: &DistanceMatrix, size: usize, parallel: bool) {
    use rayon::prelude::*;

    if !parallel {
        fill_layer_sequential(table, dist, size);
        return;
    }

    let width = table.width();
    let track = table.tracks_predecessors();
    let masks: Vec<usize> = SubsetsOfSize::new(width, size).collect();
    let rows: Vec<Vec<(f64, u8)>> = {
        let costs = table.costs();
        masks
            .par_iter()
            .map(|&mask| {
                let mut cost = vec![f64::INFINITY; width];
                let mut pred = vec![NO_PREDECESSOR; width];
                let tracked = if track { Some(pred.as_mut_slice()) } else { None };
                relax_row(costs, dist, width, mask, &mut cost, tracked);
                cost.into_iter().zip(pred).collect()
            })
            .collect()
    };
    for (&mask, row) in masks.iter().zip(&rows) {
        table.write_row(mask, row);
    }
}

fn fill_layer_sequential(table: &mut HeldKarpTable, dist: &DistanceMatrix, size: usize) {
    let width = table.width();
    for mask in SubsetsOfSize::new(width, size) {
        let (below, cost, pred) = table.split_row(mask);
        relax_row(below, dist, width, mask, cost, pred);
    }
}

/// Computes `state(mask, k)` for every `k` in `mask`.
///
/// `below` holds every row with a smaller mask value, which covers all
/// `mask \ {k}` rows this reads.
fn relax_row(
    below: &[f64],
    dist: &DistanceMatrix,
    width: usize,
    mask: usize,
    cost: &mut [f64],
    mut pred: Option<&mut [u8]>,
) {
    for k in members(mask, width) {
        let prev = mask & !(1 << k);
        let prev_row = &below[prev * width..(prev + 1) * width];
        let mut best = f64::INFINITY;
        let mut best_m = NO_PREDECESSOR;
        for m in members(prev, width) {
            let candidate = prev_row[m] + dist.get(m + 1, k + 1);
            if candidate < best {
                best = candidate;
                best_m = m as u8;
            }
        }
        cost[k] = best;
        if let Some(pred) = pred.as_deref_mut() {
            pred[k] = best_m;
        }
    }
}

/// Closes the cycle back to city 0: returns the optimal cost and the
/// endpoint (column) it closes from. Lowest endpoint wins ties.
fn close(table: &HeldKarpTable, dist: &DistanceMatrix) -> (f64, usize) {
    let full = table.full_mask();
    let mut best = f64::INFINITY;
    let mut last = 0;
    for k in 0..table.width() {
        let candidate = table.cost(full, k) + dist.get(k + 1, 0);
        if candidate < best {
            best = candidate;
            last = k;
        }
    }
    (best, last)
}

/// Backtracks predecessors from `(full, last)` to a single-city state.
///
/// Fails if the chain ends before every city is placed, which happens when
/// no predecessor improved on an infinite cost.
fn reconstruct(table: &HeldKarpTable, last: usize) -> TspResult<Tour> {
    let broken = || TspError::invalid_instance("predecessor chain does not cover every city");

    let mut mask = table.full_mask();
    let mut end = last;
    let mut reversed = Vec::with_capacity(table.width());
    loop {
        reversed.push(end + 1);
        let pred = table.pred(mask, end).ok_or_else(broken)?;
        mask &= !(1 << end);
        if pred == NO_PREDECESSOR {
            break;
        }
        end = pred as usize;
    }
    if mask != 0 {
        return Err(broken());
    }

    let mut walk = Vec::with_capacity(table.width() + 2);
    walk.push(0);
    walk.extend(reversed.into_iter().rev());
    walk.push(0);
    Ok(Tour::new(walk))
}

/// Set bit positions of `mask` below `width`, in increasing order.
fn members(mask: usize, width: usize) -> impl Iterator<Item = usize> {
    (0..width).filter(move |&b| mask & (1 << b) != 0)
}
