//! Generation configuration with builder pattern.
//!
//! [`GenerateConfig`] bundles the four knobs of a generation run. It uses the
//! `bon` crate for builder generation; every field has a default, so
//! `GenerateConfig::builder().build()` (or [`GenerateConfig::default`]) is a
//! complete configuration.
//!
//! There is deliberately no build-time validation here: zero counts or a
//! negative noise scale are the sampling primitive's business and surface as
//! [`SampleError`](crate::SampleError) when [`generate`](crate::generate()) runs.
//!
//! # Example
//!
//! ```
//! use synthreg::GenerateConfig;
//!
//! // All defaults: 100 samples, 1 feature, noise std-dev 10, plot shown.
//! let config = GenerateConfig::default();
//! assert_eq!(config.sample_count, 100);
//!
//! // Customize.
//! let config = GenerateConfig::builder()
//!     .feature_count(3)
//!     .sample_count(500)
//!     .noise(2.5)
//!     .show_plot(false)
//!     .build();
//! assert_eq!(config.feature_count, 3);
//! ```

use bon::Builder;

/// Configuration for one generation run.
///
/// Lives only for the duration of a [`generate`](crate::generate()) call; the
/// crate keeps no state between invocations.
#[derive(Debug, Clone, Builder)]
#[builder(derive(Clone, Debug))]
pub struct GenerateConfig {
    /// Number of independent variables in the synthetic relationship.
    /// Default: 1.
    #[builder(default = 1)]
    pub feature_count: usize,

    /// Number of observations to generate. Default: 100.
    #[builder(default = 100)]
    pub sample_count: usize,

    /// Standard deviation of the Gaussian noise added to each target.
    /// Zero yields an exactly linear relationship. Default: 10.0.
    #[builder(default = 10.0)]
    pub noise: f64,

    /// Render a diagnostic scatter of features vs. targets before returning.
    /// Has no effect on the returned artifacts. Default: true.
    #[builder(default = true)]
    pub show_plot: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = GenerateConfig::default();
        assert_eq!(config.feature_count, 1);
        assert_eq!(config.sample_count, 100);
        assert_eq!(config.noise, 10.0);
        assert!(config.show_plot);
    }

    #[test]
    fn builder_overrides_only_named_fields() {
        let config = GenerateConfig::builder().noise(0.0).build();
        assert_eq!(config.noise, 0.0);
        assert_eq!(config.sample_count, 100);
    }
}
