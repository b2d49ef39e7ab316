//! Core rendering abstractions for report artifacts.
//!
//! This crate provides what every artifact backend shares:
//! - `ArtifactRenderer` trait implemented by the PDF and CSV backends
//! - Error type for rendering operations

mod error;
mod traits;

pub use error::RenderError;
pub use traits::ArtifactRenderer;
