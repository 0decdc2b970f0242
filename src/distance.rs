//! Points in the plane and the dense distance matrix both solvers read.

use crate::error::{TspError, TspResult};

/// Tolerance used by [`DistanceMatrix::from_rows`] for the symmetry and
/// zero-diagonal checks.
pub const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// A city location in the plane.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per instance and read-only afterwards. Matrices produced by
/// [`DistanceMatrix::from_points`] are metric; matrices supplied through
/// [`DistanceMatrix::from_rows`] are checked for shape, sign, diagonal and
/// symmetry but not for the triangle inequality.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::{DistanceMatrix, Point};
///
/// let points = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(dm.size(), 2);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.get(1, 1), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the Euclidean distance matrix of `points`.
    ///
    /// Each unordered pair is measured once and mirrored, so the result is
    /// exactly symmetric.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Creates a matrix from explicit rows, validating it.
    ///
    /// Returns [`TspError::InvalidInstance`] if the rows are not square, an
    /// entry is negative or non-finite, the diagonal is non-zero, or the
    /// matrix is asymmetric.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> TspResult<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(TspError::invalid_instance(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            data.extend(row);
        }

        let dm = Self { data, size: n };
        dm.validate()?;
        Ok(dm)
    }

    fn validate(&self) -> TspResult<()> {
        let n = self.size;
        for i in 0..n {
            if self.get(i, i).abs() > SYMMETRY_TOLERANCE {
                return Err(TspError::invalid_instance(format!(
                    "distance({i}, {i}) = {} is not zero",
                    self.get(i, i)
                )));
            }
            for j in 0..n {
                let d = self.get(i, j);
                if !d.is_finite() || d < 0.0 {
                    return Err(TspError::invalid_instance(format!(
                        "distance({i}, {j}) = {d} is not a finite non-negative value"
                    )));
                }
            }
        }
        if !self.is_symmetric(SYMMETRY_TOLERANCE) {
            return Err(TspError::invalid_instance("distance matrix is not symmetric"));
        }
        Ok(())
    }

    /// Returns the distance between cities `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Distances from city `from` to every city.
    #[inline]
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the matrix is symmetric within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

/// Builds the Euclidean distance matrix for `points`.
///
/// Shorthand for [`DistanceMatrix::from_points`].
pub fn distances(points: &[Point]) -> DistanceMatrix {
    DistanceMatrix::from_points(points)
}
