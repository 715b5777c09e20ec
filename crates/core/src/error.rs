//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Keep this focused on deterministic, recoverable domain failures. Empty
/// stores and empty query results are legal states, not errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An add targeted a name that is already stocked (store left unchanged).
    #[error("item '{name}' already exists in the store")]
    DuplicateItem { name: String },

    /// An update, removal, or read targeted a name that is not stocked
    /// (store left unchanged).
    #[error("item '{name}' not found")]
    ItemNotFound { name: String },
}

impl StoreError {
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateItem { name: name.into() }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ItemNotFound { name: name.into() }
    }
}
