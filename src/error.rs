//! Error type shared by every structure in the catalog. Each variant belongs
//! to exactly one of three families (validation, state, lookup-miss) so a
//! driver can decide how to phrase the message without matching on every
//! variant. None of them are fatal; every operation leaves its structure
//! untouched when it fails.

use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Broad category of a [`CatalogError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed arguments: empty fields, blank names, bad capacity.
    Validation,
    /// The structure is in the wrong state for the operation (full/empty).
    State,
    /// The requested name is not present in the index.
    LookupMiss,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid input: recipe {0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Recipe name cannot be empty")]
    BlankName,

    #[error("Queue capacity must be positive (got {0})")]
    InvalidCapacity(usize),

    #[error("Recipe list cannot be empty")]
    EmptySequence,

    #[error("Invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("Queue is full (capacity {capacity})")]
    QueueFull { capacity: usize },

    #[error("Queue is empty")]
    QueueEmpty,

    #[error("Stack is empty, cannot pop")]
    StackEmpty,

    #[error("Recipe not found: {0}")]
    NotFound(String),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::EmptyField(_)
            | CatalogError::BlankName
            | CatalogError::InvalidCapacity(_)
            | CatalogError::EmptySequence
            | CatalogError::InvalidConfig { .. } => ErrorKind::Validation,
            CatalogError::QueueFull { .. } | CatalogError::QueueEmpty | CatalogError::StackEmpty => {
                ErrorKind::State
            }
            CatalogError::NotFound(_) => ErrorKind::LookupMiss,
        }
    }
}

/// Reject empty or whitespace-only lookup names before touching a structure.
pub(crate) fn require_name(name: &str) -> Result<&str> {
    if name.trim().is_empty() {
        Err(CatalogError::BlankName)
    } else {
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(CatalogError::BlankName.kind(), ErrorKind::Validation);
        assert_eq!(CatalogError::InvalidCapacity(0).kind(), ErrorKind::Validation);
        assert_eq!(CatalogError::QueueFull { capacity: 2 }.kind(), ErrorKind::State);
        assert_eq!(CatalogError::StackEmpty.kind(), ErrorKind::State);
        assert_eq!(
            CatalogError::NotFound("Pizza".into()).kind(),
            ErrorKind::LookupMiss
        );
    }

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(require_name("   "), Err(CatalogError::BlankName));
        assert_eq!(require_name(""), Err(CatalogError::BlankName));
        assert_eq!(require_name(" Pasta "), Ok(" Pasta "));
    }
}
