//! Reference parameter sets and error-vector sampling.

pub mod parameters;

pub use parameters::{ErrorSource, PRESETS, Preset, sample_error_vector};
