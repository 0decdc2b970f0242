//! Dense `[mask][endpoint]` state table.

use crate::error::{TspError, TspResult};

/// Largest city count the exact solver accepts: the cost table for
/// `n - 1` non-origin cities must be addressable in memory.
pub const MAX_EXACT_CITIES: usize = max_exact_cities();

/// Marks a state with no predecessor (a single-city subset).
pub(crate) const NO_PREDECESSOR: u8 = u8::MAX;

const fn max_exact_cities() -> usize {
    let mut width = usize::BITS as usize - 1;
    loop {
        if let Some(states) = (1usize << width).checked_mul(width) {
            if let Some(bytes) = states.checked_mul(std::mem::size_of::<f64>()) {
                if bytes <= isize::MAX as usize {
                    return width + 1;
                }
            }
        }
        width -= 1;
    }
}

/// Number of `(mask, endpoint)` states for `width` non-origin cities.
///
/// Fails with [`TspError::InstanceTooLarge`] above [`MAX_EXACT_CITIES`].
pub(crate) fn state_count(width: usize) -> TspResult<usize> {
    let cities = width + 1;
    if cities > MAX_EXACT_CITIES {
        return Err(TspError::InstanceTooLarge {
            cities,
            max: MAX_EXACT_CITIES,
        });
    }
    Ok((1usize << width) * width)
}

/// Held-Karp states for cities `1..n`, indexed by subset mask and endpoint.
///
/// City `c` is bit `c - 1` of the mask and column `c - 1` of each row.
/// City 0 is the implicit origin and never appears in a mask. Row `mask`
/// only depends on rows with smaller mask values. Predecessors are only
/// stored when a tour is going to be reconstructed.
pub(crate) struct HeldKarpTable {
    width: usize,
    cost: Vec<f64>,
    pred: Option<Vec<u8>>,
}

impl HeldKarpTable {
    /// Allocates a table for `width = n - 1` non-origin cities.
    pub(crate) fn new(width: usize, track_predecessors: bool) -> TspResult<Self> {
        let states = state_count(width)?;
        Ok(Self {
            width,
            cost: vec![f64::INFINITY; states],
            pred: track_predecessors.then(|| vec![NO_PREDECESSOR; states]),
        })
    }

    /// Number of non-origin cities.
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    /// Mask containing every non-origin city.
    pub(crate) fn full_mask(&self) -> usize {
        (1usize << self.width) - 1
    }

    #[inline]
    pub(crate) fn cost(&self, mask: usize, end: usize) -> f64 {
        self.cost[mask * self.width + end]
    }

    /// Stored predecessor, or `None` if predecessors are not tracked.
    #[inline]
    pub(crate) fn pred(&self, mask: usize, end: usize) -> Option<u8> {
        self.pred.as_ref().map(|p| p[mask * self.width + end])
    }

    pub(crate) fn set(&mut self, mask: usize, end: usize, cost: f64, pred: u8) {
        let i = mask * self.width + end;
        self.cost[i] = cost;
        if let Some(p) = self.pred.as_mut() {
            p[i] = pred;
        }
    }

    /// Splits the table at row `mask`: every row below it (read-only) and
    /// row `mask` itself (cost and, when tracked, predecessor slices).
    pub(crate) fn split_row(&mut self, mask: usize) -> (&[f64], &mut [f64], Option<&mut [u8]>) {
        let start = mask * self.width;
        let end = start + self.width;
        let (done, rest) = self.cost.split_at_mut(start);
        let pred = self.pred.as_mut().map(|p| &mut p[start..end]);
        (done, &mut rest[..self.width], pred)
    }

    /// All rows as a read-only cost slice.
    pub(crate) fn costs(&self) -> &[f64] {
        &self.cost
    }

    pub(crate) fn tracks_predecessors(&self) -> bool {
        self.pred.is_some()
    }

    /// Overwrites row `mask` with precomputed `(cost, pred)` entries.
    #[cfg(feature = "parallel")]
    pub(crate) fn write_row(&mut self, mask: usize, row: &[(f64, u8)]) {
        for (end, &(cost, pred)) in row.iter().enumerate() {
            self.set(mask, end, cost, pred);
        }
    }
}
