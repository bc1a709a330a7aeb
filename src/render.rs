//! The scatter sink: a fire-and-forget diagnostic plot.
//!
//! [`ScatterRenderer`] is the seam between the generation routine and whatever
//! draws the features-vs-targets scatter. The generator calls it once per run
//! (when plotting is enabled) and consumes nothing back except the error
//! channel.
//!
//! Two implementations ship with the crate:
//!
//! - [`TextScatter`]: a plain-text scatter on a character canvas, written to
//!   any [`io::Write`] sink. Enough to eyeball whether the data looks linear.
//! - [`NullRenderer`]: a no-op for headless use.
//!
//! The scatter is 2-D: every feature column is plotted against the targets on
//! the same axes. With more than one feature the columns overlap, which is the
//! documented limitation of this diagnostic.

use std::io::{self, Write};

use ndarray::{ArrayView1, ArrayView2};

use crate::grid::value_range;

/// Default canvas width in characters.
const DEFAULT_WIDTH: usize = 72;
/// Default canvas height in characters.
const DEFAULT_HEIGHT: usize = 20;

// =============================================================================
// ScatterRenderer
// =============================================================================

/// A rendering sink for a 2-D scatter of features against targets.
pub trait ScatterRenderer {
    /// Render one scatter. Called at most once per generation run.
    ///
    /// `features` is `[n_samples, n_features]`; `targets` has one entry per
    /// sample. Implementations plot each feature column against the targets.
    fn scatter(
        &mut self,
        features: ArrayView2<'_, f64>,
        targets: ArrayView1<'_, f64>,
    ) -> Result<(), RenderError>;
}

impl<T: ScatterRenderer + ?Sized> ScatterRenderer for &mut T {
    fn scatter(
        &mut self,
        features: ArrayView2<'_, f64>,
        targets: ArrayView1<'_, f64>,
    ) -> Result<(), RenderError> {
        (**self).scatter(features, targets)
    }
}

/// Errors raised by a scatter sink.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The underlying writer failed.
    #[error("failed to write scatter output: {0}")]
    Io(#[from] io::Error),
}

// =============================================================================
// NullRenderer
// =============================================================================

/// A renderer that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl ScatterRenderer for NullRenderer {
    fn scatter(
        &mut self,
        _features: ArrayView2<'_, f64>,
        _targets: ArrayView1<'_, f64>,
    ) -> Result<(), RenderError> {
        Ok(())
    }
}

// =============================================================================
// TextScatter
// =============================================================================

/// Plain-text scatter plot on a fixed-size character canvas.
///
/// Rows run top-down from the largest target to the smallest; columns run
/// left-right over the feature range. Range labels frame the canvas so the
/// axes can be read off without a real plotting backend.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use synthreg::{ScatterRenderer, TextScatter};
///
/// let features = array![[0.0], [1.0], [2.0]];
/// let targets = array![0.0, 10.0, 20.0];
///
/// let mut out = Vec::new();
/// TextScatter::new(&mut out).scatter(features.view(), targets.view())?;
/// assert!(!out.is_empty());
/// # Ok::<(), synthreg::RenderError>(())
/// ```
#[derive(Debug)]
pub struct TextScatter<W> {
    width: usize,
    height: usize,
    out: W,
}

impl TextScatter<io::Stdout> {
    /// A scatter sink writing to standard output at the default canvas size.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextScatter<W> {
    /// Wrap a writer at the default canvas size.
    pub fn new(out: W) -> Self {
        Self::with_size(out, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Wrap a writer with an explicit canvas size (minimum 2x2).
    pub fn with_size(out: W, width: usize, height: usize) -> Self {
        Self {
            width: width.max(2),
            height: height.max(2),
            out,
        }
    }
}

impl<W: Write> ScatterRenderer for TextScatter<W> {
    fn scatter(
        &mut self,
        features: ArrayView2<'_, f64>,
        targets: ArrayView1<'_, f64>,
    ) -> Result<(), RenderError> {
        let x_scale = CellScale::over(value_range(features.iter()), self.width);
        let y_scale = CellScale::over(value_range(targets.iter()), self.height);

        let mut canvas = vec![vec![' '; self.width]; self.height];
        for column in features.columns() {
            for (&x, &y) in column.iter().zip(targets.iter()) {
                let col = x_scale.to_cell(x);
                // Row 0 is the top of the canvas, so the y axis is flipped.
                let row = self.height - 1 - y_scale.to_cell(y);
                canvas[row][col] = '*';
            }
        }

        writeln!(
            self.out,
            "targets vs features ({} samples x {} features)",
            features.nrows(),
            features.ncols()
        )?;
        writeln!(self.out, "y_max = {:>12.4}", y_scale.max())?;
        for row in &canvas {
            let line: String = row.iter().collect();
            writeln!(self.out, "|{line}|")?;
        }
        writeln!(self.out, "y_min = {:>12.4}", y_scale.min())?;
        writeln!(
            self.out,
            "x: [{:.4}, {:.4}]",
            x_scale.min(),
            x_scale.max()
        )?;
        Ok(())
    }
}

// =============================================================================
// CellScale
// =============================================================================

/// Linear map from a data range onto `[0, cells)` canvas indices.
#[derive(Debug, Clone, Copy)]
struct CellScale {
    min: f64,
    span: f64,
    cells: usize,
}

impl CellScale {
    fn over((min, max): (f64, f64), cells: usize) -> Self {
        // Degenerate spans (single point, constant data) map everything to
        // cell 0 via the clamped span below.
        Self {
            min,
            span: (max - min).max(1e-12),
            cells,
        }
    }

    fn to_cell(&self, v: f64) -> usize {
        let frac = (v - self.min) / self.span;
        let cell = (frac * (self.cells - 1) as f64).round();
        (cell.max(0.0) as usize).min(self.cells - 1)
    }

    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.min + self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn cell_scale_maps_endpoints_to_canvas_edges() {
        let scale = CellScale::over((-5.0, 5.0), 10);
        assert_eq!(scale.to_cell(-5.0), 0);
        assert_eq!(scale.to_cell(5.0), 9);
        assert_eq!(scale.to_cell(0.0), 5);
    }

    #[test]
    fn cell_scale_clamps_out_of_range_values() {
        let scale = CellScale::over((0.0, 1.0), 4);
        assert_eq!(scale.to_cell(-10.0), 0);
        assert_eq!(scale.to_cell(10.0), 3);
    }

    #[test]
    fn degenerate_range_maps_to_a_single_cell() {
        let scale = CellScale::over((2.0, 2.0), 8);
        assert_eq!(scale.to_cell(2.0), 0);
    }

    #[test]
    fn text_scatter_marks_the_corners() {
        let features = array![[0.0], [10.0]];
        let targets = array![0.0, 100.0];

        let mut out = Vec::new();
        TextScatter::with_size(&mut out, 10, 4)
            .scatter(features.view(), targets.view())
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let rows: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with('|'))
            .collect();
        assert_eq!(rows.len(), 4);
        // Max target at the max feature: top-right. Min at bottom-left.
        assert_eq!(&rows[0][1..11], "         *");
        assert_eq!(&rows[3][1..11], "*         ");
    }

    #[test]
    fn null_renderer_accepts_any_input() {
        let features = array![[1.0, 2.0]];
        let targets = array![3.0];
        NullRenderer
            .scatter(features.view(), targets.view())
            .unwrap();
    }
}
