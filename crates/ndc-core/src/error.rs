use thiserror::Error;

use ndc_map::MappingError;

#[derive(Debug, Error)]
pub enum DocumentError {
    /// A leaf holds a character with no single-byte Latin encoding.
    #[error("text cannot be encoded as ISO-8859-1: {text:?}")]
    Encoding { text: String },
}

/// Failure of one record on its way from raw row to finished document.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Mapping(#[from] MappingError),
    #[error(transparent)]
    Document(#[from] DocumentError),
}
