/// Domain-level error type shared across crates.
///
/// HTTP mapping lives in `atelier-api`; this enum only carries the
/// classification and a human-readable message.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced record does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// The payload was well-formed but failed a domain rule.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The operation name is not one the mutation router recognizes.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A failure in the backing store (I/O, malformed file).
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] with a displayable id.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
