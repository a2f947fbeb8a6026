//! Table preprocessing.

mod engine;
mod operations;

pub use engine::TransformEngine;
pub use operations::{PreprocessOptions, TransformChange, TransformResult};
