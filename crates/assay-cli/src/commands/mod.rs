//! CLI command implementations.

mod display;
pub mod preprocess;
pub mod quality;
pub mod validate;
