//! Closed tours and solver output.

use crate::distance::DistanceMatrix;

/// A closed walk over city indices that starts and ends at city 0.
///
/// A well-formed tour over `n` cities has length `n + 1`, and its first `n`
/// positions are a permutation of `0..n`. The single-city tour is `[0, 0]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tour(Vec<usize>);

impl Tour {
    pub fn new(cities: Vec<usize>) -> Self {
        Self(cities)
    }

    /// The visitation sequence, including the closing return to 0.
    pub fn cities(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Sum of `dist[t_i][t_{i+1}]` over consecutive pairs of the walk.
    pub fn cost(&self, dist: &DistanceMatrix) -> f64 {
        self.0.windows(2).map(|w| dist.get(w[0], w[1])).sum()
    }

    /// Returns `true` if this is a closed Hamiltonian cycle over `n` cities
    /// rooted at city 0.
    pub fn is_valid_for(&self, n: usize) -> bool {
        if n == 0 {
            return self.0.is_empty();
        }
        if self.0.len() != n + 1 || self.0[0] != 0 || self.0[n] != 0 {
            return false;
        }
        let mut seen = vec![false; n];
        for &city in &self.0[..n] {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for Tour {
    fn from(cities: Vec<usize>) -> Self {
        Self(cities)
    }
}

/// Cost of a tour together with the tour itself.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Total length of the closed walk.
    pub cost: f64,
    /// The witness tour.
    pub tour: Tour,
}
