//! Type-safe domain wrappers

pub mod quality;

pub use quality::{Quality, QualityError, QUALITY_DEFAULT, QUALITY_MAX, QUALITY_MIN};
