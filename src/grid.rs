//! The domain grid: evenly spaced points over the realized feature range.
//!
//! [`DomainGrid`] carries the same grid in two forms:
//!
//! - **raw**: `Array1<f64>` of [`GRID_POINTS`] evenly spaced values spanning
//!   the closed interval from the smallest to the largest value in the feature
//!   matrix
//! - **tensor**: the raw grid cast to `f32` with a trailing singleton axis,
//!   shape `(GRID_POINTS, 1)` - the column layout a model evaluation interface
//!   expects
//!
//! The tensor form is always derived from the raw form, never computed
//! independently, so the two agree in length and ordering by construction.
//!
//! The range is taken over the *entire* matrix flattened, not per feature.
//! Multi-feature inputs therefore collapse to one shared 1-D domain; that
//! mirrors the single-scatter diagnostic this crate renders and keeps the grid
//! directly usable as the x-axis of a 2-D plot.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// Number of points in the domain grid.
pub const GRID_POINTS: usize = 20;

/// The evaluation grid over the observed feature range.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use synthreg::{DomainGrid, GRID_POINTS};
///
/// let features = array![[0.0], [5.0], [19.0]];
/// let grid = DomainGrid::from_features(features.view());
///
/// assert_eq!(grid.raw().len(), GRID_POINTS);
/// assert_eq!(grid.raw()[0], 0.0);
/// assert_eq!(grid.raw()[GRID_POINTS - 1], 19.0);
/// assert_eq!(grid.tensor().dim(), (GRID_POINTS, 1));
/// ```
#[derive(Debug, Clone)]
pub struct DomainGrid {
    /// Raw form: length [`GRID_POINTS`], non-decreasing.
    raw: Array1<f64>,

    /// Tensor form: shape `(GRID_POINTS, 1)`, single precision.
    tensor: Array2<f32>,
}

impl DomainGrid {
    /// Build the grid spanning `[min, max]` of the whole feature matrix.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the matrix is non-empty; an empty matrix has no
    /// range to span.
    pub fn from_features(features: ArrayView2<'_, f64>) -> Self {
        debug_assert!(
            !features.is_empty(),
            "cannot derive a domain grid from an empty feature matrix"
        );
        let (lo, hi) = value_range(features.iter());
        Self::from_range(lo, hi)
    }

    /// Build the grid over an explicit closed interval.
    ///
    /// A degenerate interval (`lo == hi`) yields [`GRID_POINTS`] identical
    /// points, which is still a valid (constant) grid.
    pub fn from_range(lo: f64, hi: f64) -> Self {
        let raw = Array1::linspace(lo, hi, GRID_POINTS);
        let tensor = raw.mapv(|v| v as f32).insert_axis(Axis(1));
        Self { raw, tensor }
    }

    /// The raw grid, length [`GRID_POINTS`].
    #[inline]
    pub fn raw(&self) -> ArrayView1<'_, f64> {
        self.raw.view()
    }

    /// The tensor grid, shape `(GRID_POINTS, 1)`.
    #[inline]
    pub fn tensor(&self) -> ArrayView2<'_, f32> {
        self.tensor.view()
    }

    /// Consume the grid, yielding `(raw, tensor)`.
    pub fn into_parts(self) -> (Array1<f64>, Array2<f32>) {
        (self.raw, self.tensor)
    }
}

/// Min and max over an iterator of values.
///
/// Caller guarantees at least one value; with none, the result is the
/// `(INFINITY, NEG_INFINITY)` identity.
pub(crate) fn value_range<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    })
}
