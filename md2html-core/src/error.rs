//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
///
/// Parsing and rendering themselves are total; these only surface when a caller
/// asks the registry for something it cannot do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}
