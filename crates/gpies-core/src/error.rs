//! Error types for GPIES core

use thiserror::Error;

/// Core GPIES errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GpiesError {
    #[error("Unknown field `{field}` on {record}")]
    UnknownField { record: &'static str, field: String },
}

/// Result type for GPIES core operations
pub type GpiesResult<T> = Result<T, GpiesError>;
