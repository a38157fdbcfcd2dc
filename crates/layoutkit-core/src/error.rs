//! Error handling for LayoutKit
//!
//! Provides the error types shared by every layer of the workspace:
//! - Document errors (unknown shapes or pages)
//! - Serialization and I/O errors raised while loading documents
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Document error type
///
/// Represents lookups against the shape registry that could not be resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// A shape id is not present on the page
    #[error("Shape {id} not found on page {page_id}")]
    ShapeNotFound {
        /// The shape id that was requested.
        id: String,
        /// The page that was searched.
        page_id: String,
    },

    /// A page id is not present in the document
    #[error("Page {page_id} not found")]
    PageNotFound {
        /// The page id that was requested.
        page_id: String,
    },
}

impl DocumentError {
    /// Shorthand for [`DocumentError::ShapeNotFound`].
    pub fn shape_not_found(id: impl Into<String>, page_id: impl Into<String>) -> Self {
        DocumentError::ShapeNotFound {
            id: id.into(),
            page_id: page_id.into(),
        }
    }

    /// Shorthand for [`DocumentError::PageNotFound`].
    pub fn page_not_found(page_id: impl Into<String>) -> Self {
        DocumentError::PageNotFound {
            page_id: page_id.into(),
        }
    }
}

/// Main error type for LayoutKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Document lookup error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a missing shape or page
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Document(_))
    }

    /// Check if this is a missing shape
    pub fn is_shape_not_found(&self) -> bool {
        matches!(self, Error::Document(DocumentError::ShapeNotFound { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
