//! Error types for the gallery renderer

use thiserror::Error;

/// Result type alias for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling the gallery page
#[derive(Error, Debug)]
pub enum Error {
    /// A descriptor violated the catalog data contract. Image-backed variants
    /// must carry an image reference; the infographic variant must not.
    #[error("catalog contract violated for visual `{id}`: {reason}")]
    Contract { id: String, reason: String },

    /// Two descriptors in one catalog share an id
    #[error("duplicate visual id `{0}` in catalog")]
    DuplicateId(String),
}
