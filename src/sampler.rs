//! The statistical sampling primitive behind data generation.
//!
//! [`LinearSampler`] is the seam between the generation routine and whatever
//! produces the noisy-linear samples. The stock implementation,
//! [`GaussianSampler`], draws a standard-normal feature matrix, a hidden
//! uniform weight vector, and Gaussian target noise - the classic
//! `make_regression`-style primitive.
//!
//! The realized samples are all that leaves this module: the true weights are
//! drawn fresh per call and never exposed, so downstream code can only reason
//! about the data itself.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, StandardNormal};

/// Scale applied to the hidden uniform weights, so targets are visibly larger
/// than the unit-variance features.
const WEIGHT_SCALE: f64 = 100.0;

// =============================================================================
// SampleError
// =============================================================================

/// Errors raised by a sampling primitive for invalid configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SampleError {
    /// Sample count was zero.
    #[error("sample_count must be at least 1")]
    EmptySamples,

    /// Feature count was zero.
    #[error("feature_count must be at least 1")]
    EmptyFeatures,

    /// The noise scale was rejected by the noise distribution
    /// (negative or non-finite standard deviation).
    #[error("noise must be a finite non-negative standard deviation, got {value}")]
    InvalidNoise {
        /// The rejected noise scale.
        value: f64,
    },
}

// =============================================================================
// SampleSet
// =============================================================================

/// A realized sample set: feature matrix plus target vector.
///
/// Features are sample-major: `[n_samples, n_features]`, one observation per
/// row. Targets have one entry per sample and satisfy
/// `target ≈ features · weights + N(0, noise)` for some hidden weight vector.
#[derive(Debug, Clone)]
pub struct SampleSet {
    /// Feature matrix, shape `[n_samples, n_features]`.
    features: Array2<f64>,

    /// Target vector, length `n_samples`.
    targets: Array1<f64>,
}

impl SampleSet {
    /// Bundle a feature matrix with its target vector.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the target length matches the feature row count.
    pub fn new(features: Array2<f64>, targets: Array1<f64>) -> Self {
        debug_assert_eq!(
            features.nrows(),
            targets.len(),
            "targets must have one entry per feature row"
        );
        Self { features, targets }
    }

    /// Number of observations.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    /// Number of independent variables.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Read-only view of the feature matrix, `[n_samples, n_features]`.
    #[inline]
    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.features.view()
    }

    /// Read-only view of the target vector.
    #[inline]
    pub fn targets(&self) -> ArrayView1<'_, f64> {
        self.targets.view()
    }

    /// Consume the set, yielding `(features, targets)`.
    pub fn into_parts(self) -> (Array2<f64>, Array1<f64>) {
        (self.features, self.targets)
    }
}

// =============================================================================
// LinearSampler
// =============================================================================

/// A source of noisy-linear regression samples.
///
/// Implementations own their random state; sampling therefore takes `&mut
/// self`. The returned set must have exactly `sample_count` rows and
/// `feature_count` columns, with targets linear in the features up to additive
/// Gaussian noise of standard deviation `noise`.
pub trait LinearSampler {
    /// Draw one sample set.
    fn sample(
        &mut self,
        sample_count: usize,
        feature_count: usize,
        noise: f64,
    ) -> Result<SampleSet, SampleError>;
}

// =============================================================================
// GaussianSampler
// =============================================================================

/// The stock sampling primitive.
///
/// Per call: features are drawn i.i.d. standard normal, one weight per feature
/// is drawn uniform in `[0, 100)`, and each target is the weighted feature sum
/// plus `Normal(0, noise)` noise. The intercept is fixed at zero. A noise
/// scale of zero yields exactly linear targets.
///
/// # Example
///
/// ```
/// use synthreg::{GaussianSampler, LinearSampler};
///
/// let mut sampler = GaussianSampler::seeded(7);
/// let set = sampler.sample(10, 2, 1.0)?;
/// assert_eq!(set.n_samples(), 10);
/// assert_eq!(set.n_features(), 2);
/// # Ok::<(), synthreg::SampleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GaussianSampler {
    rng: StdRng,
}

impl GaussianSampler {
    /// Create a sampler backed by fresh OS entropy.
    ///
    /// Successive calls (and successive samplers) produce unrelated data;
    /// there is no way to reproduce a run made through this constructor.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic sampler from a seed.
    ///
    /// Same seed, same call sequence, same data. Intended for tests and
    /// benchmarks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GaussianSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearSampler for GaussianSampler {
    fn sample(
        &mut self,
        sample_count: usize,
        feature_count: usize,
        noise: f64,
    ) -> Result<SampleSet, SampleError> {
        if sample_count == 0 {
            return Err(SampleError::EmptySamples);
        }
        if feature_count == 0 {
            return Err(SampleError::EmptyFeatures);
        }
        // Validate the noise scale up front so a bad value fails before any
        // drawing happens, even though the noise term is applied last.
        let noise_dist =
            Normal::new(0.0, noise).map_err(|_| SampleError::InvalidNoise { value: noise })?;

        let features = Array2::from_shape_simple_fn((sample_count, feature_count), || {
            StandardNormal.sample(&mut self.rng)
        });
        let weights =
            Array1::from_shape_simple_fn(feature_count, || self.rng.random::<f64>() * WEIGHT_SCALE);

        let mut targets = features.dot(&weights);
        for target in targets.iter_mut() {
            *target += noise_dist.sample(&mut self.rng);
        }

        Ok(SampleSet::new(features, targets))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sample_shapes_match_request() {
        let mut sampler = GaussianSampler::seeded(42);
        let set = sampler.sample(25, 3, 10.0).unwrap();
        assert_eq!(set.n_samples(), 25);
        assert_eq!(set.n_features(), 3);
        assert_eq!(set.features().dim(), (25, 3));
        assert_eq!(set.targets().len(), 25);
    }

    #[test]
    fn zero_counts_are_rejected() {
        let mut sampler = GaussianSampler::seeded(0);
        assert_eq!(sampler.sample(0, 1, 1.0).unwrap_err(), SampleError::EmptySamples);
        assert_eq!(sampler.sample(1, 0, 1.0).unwrap_err(), SampleError::EmptyFeatures);
    }

    #[test]
    fn negative_noise_is_rejected_by_the_distribution() {
        let mut sampler = GaussianSampler::seeded(0);
        assert_eq!(
            sampler.sample(10, 1, -1.0).unwrap_err(),
            SampleError::InvalidNoise { value: -1.0 }
        );
    }

    #[test]
    fn zero_noise_single_feature_is_exactly_collinear() {
        let mut sampler = GaussianSampler::seeded(7);
        let set = sampler.sample(50, 1, 0.0).unwrap();

        // y = w * x with hidden w and zero intercept, so cross-ratios between
        // any two samples must agree: y_i * x_j == y_j * x_i.
        let x = set.features();
        let y = set.targets();
        for i in 1..set.n_samples() {
            assert_abs_diff_eq!(
                y[i] * x[[0, 0]],
                y[0] * x[[i, 0]],
                epsilon = 1e-9 * y[0].abs().max(1.0)
            );
        }
    }

    #[test]
    fn zero_noise_multi_feature_targets_are_a_fixed_linear_combination() {
        let mut sampler = GaussianSampler::seeded(11);
        let set = sampler.sample(40, 3, 0.0).unwrap();

        // Solve for the hidden weights from the first 3 samples, then check
        // the remaining targets against them. 3x3 solve via Cramer's rule.
        let x = set.features();
        let y = set.targets();
        let a = [
            [x[[0, 0]], x[[0, 1]], x[[0, 2]]],
            [x[[1, 0]], x[[1, 1]], x[[1, 2]]],
            [x[[2, 0]], x[[2, 1]], x[[2, 2]]],
        ];
        let det = det3(&a);
        assert!(det.abs() > 1e-12, "degenerate test system");
        let mut w = [0.0; 3];
        for (col, weight) in w.iter_mut().enumerate() {
            let mut m = a;
            for row in 0..3 {
                m[row][col] = y[row];
            }
            *weight = det3(&m) / det;
        }

        for i in 3..set.n_samples() {
            let predicted = w[0] * x[[i, 0]] + w[1] * x[[i, 1]] + w[2] * x[[i, 2]];
            assert_abs_diff_eq!(predicted, y[i], epsilon = 1e-4 * y[i].abs().max(1.0));
        }
    }

    #[test]
    fn seeded_samplers_reproduce_data() {
        let a = GaussianSampler::seeded(99).sample(20, 2, 5.0).unwrap();
        let b = GaussianSampler::seeded(99).sample(20, 2, 5.0).unwrap();
        assert_eq!(a.features(), b.features());
        assert_eq!(a.targets(), b.targets());
    }

    fn det3(m: &[[f64; 3]; 3]) -> f64 {
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }
}
