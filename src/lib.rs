//! synthreg: synthetic noisy-linear regression data for Rust.
//!
//! Generates a toy regression dataset (feature matrix + target vector with an
//! approximately linear relationship and Gaussian noise) together with a dense
//! evaluation grid spanning the realized feature range. Intended for quickly
//! fitting and visually sanity-checking a regression model in a script or
//! notebook-style workflow.
//!
//! # Key Types
//!
//! - [`generate()`] / [`GenerateConfig`] - One-call data generation
//! - [`Generator`] - The same operation with injectable sampler/renderer
//! - [`SampleSet`] - Realized feature matrix and target vector
//! - [`DomainGrid`] - Evaluation grid in raw (`f64`) and tensor (`f32`, column) forms
//! - [`LinearSampler`] / [`ScatterRenderer`] - Seams for custom backends
//!
//! # Quick Start
//!
//! ```
//! use synthreg::{generate, GenerateConfig, GRID_POINTS};
//!
//! let config = GenerateConfig::builder()
//!     .sample_count(50)
//!     .noise(5.0)
//!     .show_plot(false)
//!     .build();
//!
//! let data = generate(&config)?;
//! assert_eq!(data.features.nrows(), 50);
//! assert_eq!(data.raw_grid.len(), GRID_POINTS);
//! assert_eq!(data.tensor_grid.dim(), (GRID_POINTS, 1));
//! # Ok::<(), synthreg::GenerateError>(())
//! ```
//!
//! # Determinism
//!
//! The convenience path draws fresh OS entropy on every call; runs are not
//! reproducible. For deterministic data (tests, benchmarks), construct a
//! [`Generator`] with [`GaussianSampler::seeded`].

pub mod config;
pub mod generate;
pub mod grid;
pub mod render;
pub mod sampler;

pub use config::GenerateConfig;
pub use generate::{generate, GenerateError, Generated, Generator};
pub use grid::{DomainGrid, GRID_POINTS};
pub use render::{NullRenderer, RenderError, ScatterRenderer, TextScatter};
pub use sampler::{GaussianSampler, LinearSampler, SampleError, SampleSet};
