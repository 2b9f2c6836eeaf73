//! Error types for mapping operations.

use thiserror::Error;

/// Errors from mapping operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Required-field validation is enabled and these fields are blank.
    #[error("missing required fields: {}", fields.join(", "))]
    MissingRequiredFields { fields: Vec<String> },
}
