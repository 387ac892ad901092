//! Gradient engine: option resolution, per-channel Gaussian evaluation
//! and output formatting.

pub mod error;
pub mod gaussian;
pub mod gradient;
pub mod types;

pub use error::ConfigurationError;
pub use gradient::{GradientEngine, ResolvedParams};
pub use types::{ColorOutput, GradientOptions, OutputFormat, Overrides, Rgba};
