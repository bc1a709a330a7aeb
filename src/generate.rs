//! The generation routine: samples in, four artifacts out.
//!
//! [`Generator`] wires a [`LinearSampler`] to a [`ScatterRenderer`] and runs
//! the whole pipeline: draw a noisy-linear sample set, derive the domain grid
//! from the realized feature range, optionally render the diagnostic scatter,
//! and hand everything back as [`Generated`].
//!
//! The free function [`generate`] is the one-line path with the stock
//! backends; [`Generator::new`] exists so tests (or callers with their own
//! numeric/plotting stack) can inject both seams.

use ndarray::{Array1, Array2};

use crate::config::GenerateConfig;
use crate::grid::DomainGrid;
use crate::render::{RenderError, ScatterRenderer, TextScatter};
use crate::sampler::{GaussianSampler, LinearSampler, SampleError};

// =============================================================================
// GenerateError
// =============================================================================

/// Errors surfacing from a generation run.
///
/// The generator adds no failure modes of its own; both variants carry the
/// collaborator's error unchanged.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The sampling primitive rejected the configuration.
    #[error(transparent)]
    Sample(#[from] SampleError),

    /// The scatter sink failed while rendering.
    #[error(transparent)]
    Render(#[from] RenderError),
}

// =============================================================================
// Generated
// =============================================================================

/// All artifacts of one generation run.
///
/// Field order matches the fixed artifact order of [`Generated::into_parts`]:
/// raw grid, tensor grid, features, targets.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Domain grid, raw form: [`GRID_POINTS`](crate::GRID_POINTS) evenly
    /// spaced `f64` values spanning the realized feature range.
    pub raw_grid: Array1<f64>,

    /// Domain grid, tensor form: the raw grid as a single-precision column,
    /// shape `(GRID_POINTS, 1)`.
    pub tensor_grid: Array2<f32>,

    /// Feature matrix, shape `[sample_count, feature_count]`.
    pub features: Array2<f64>,

    /// Target vector, length `sample_count`.
    pub targets: Array1<f64>,
}

impl Generated {
    /// Consume the bundle, yielding
    /// `(raw_grid, tensor_grid, features, targets)` in that fixed order.
    pub fn into_parts(self) -> (Array1<f64>, Array2<f32>, Array2<f64>, Array1<f64>) {
        (self.raw_grid, self.tensor_grid, self.features, self.targets)
    }
}

// =============================================================================
// Generator
// =============================================================================

/// The generation pipeline over injectable sampling and rendering backends.
///
/// Stateless between runs apart from the sampler's random stream; each call
/// draws a fresh sample set and derives fresh grids from it.
///
/// # Example
///
/// ```
/// use synthreg::{GaussianSampler, GenerateConfig, Generator, NullRenderer};
///
/// let mut generator = Generator::new(GaussianSampler::seeded(3), NullRenderer);
/// let config = GenerateConfig::builder().sample_count(10).build();
/// let data = generator.generate(&config)?;
/// assert_eq!(data.targets.len(), 10);
/// # Ok::<(), synthreg::GenerateError>(())
/// ```
#[derive(Debug)]
pub struct Generator<S, R> {
    sampler: S,
    renderer: R,
}

impl<S: LinearSampler, R: ScatterRenderer> Generator<S, R> {
    /// Wire a sampler to a renderer.
    pub fn new(sampler: S, renderer: R) -> Self {
        Self { sampler, renderer }
    }

    /// Run one generation.
    ///
    /// Sampler errors for invalid configuration (zero counts, bad noise)
    /// propagate unchanged; no validation happens here. The renderer runs only
    /// when `show_plot` is set and never affects the returned artifacts.
    pub fn generate(&mut self, config: &GenerateConfig) -> Result<Generated, GenerateError> {
        let sample = self
            .sampler
            .sample(config.sample_count, config.feature_count, config.noise)?;
        let grid = DomainGrid::from_features(sample.features());

        if config.show_plot {
            self.renderer.scatter(sample.features(), sample.targets())?;
        }

        let (features, targets) = sample.into_parts();
        let (raw_grid, tensor_grid) = grid.into_parts();
        Ok(Generated {
            raw_grid,
            tensor_grid,
            features,
            targets,
        })
    }
}

/// Generate one dataset with the stock backends.
///
/// Uses [`GaussianSampler::new`] (fresh OS entropy, not reproducible) and a
/// [`TextScatter`] on standard output when `show_plot` is set.
pub fn generate(config: &GenerateConfig) -> Result<Generated, GenerateError> {
    Generator::new(GaussianSampler::new(), TextScatter::stdout()).generate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::NullRenderer;
    use crate::GRID_POINTS;

    #[test]
    fn generated_into_parts_preserves_artifact_order() {
        let mut generator = Generator::new(GaussianSampler::seeded(1), NullRenderer);
        let config = GenerateConfig::builder()
            .sample_count(5)
            .show_plot(false)
            .build();

        let data = generator.generate(&config).unwrap();
        let expected_first = data.raw_grid[0];
        let (raw_grid, tensor_grid, features, targets) = data.into_parts();

        assert_eq!(raw_grid[0], expected_first);
        assert_eq!(raw_grid.len(), GRID_POINTS);
        assert_eq!(tensor_grid.dim(), (GRID_POINTS, 1));
        assert_eq!(features.dim(), (5, 1));
        assert_eq!(targets.len(), 5);
    }

    #[test]
    fn sampler_errors_pass_through_unwrapped() {
        let mut generator = Generator::new(GaussianSampler::seeded(1), NullRenderer);
        let config = GenerateConfig::builder().sample_count(0).build();

        match generator.generate(&config) {
            Err(GenerateError::Sample(SampleError::EmptySamples)) => {}
            other => panic!("expected EmptySamples, got {other:?}"),
        }
    }
}
