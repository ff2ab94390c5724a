use thiserror::Error;

/// A common error representing that a requested entity was not found.
///
/// This error is shared across layers (store, service, handler) without
/// depending on domain-specific business rules; the HTTP layer maps it to
/// `404 Not Found`.
///
/// # Example
/// ```
/// use ludoteca::error::entity::NotFoundError;
///
/// let err = NotFoundError::new("game");
/// assert_eq!(err.to_string(), "game not found");
/// ```
#[derive(Debug, Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Name of the entity that was not found (e.g. `"game"`, `"user"`)
    pub entity: &'static str,
}

impl NotFoundError {
    /// Create a new `NotFoundError` for the specified entity.
    pub fn new(entity: &'static str) -> Self {
        Self { entity }
    }
}
