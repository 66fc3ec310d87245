//! Error types for tensr

use thiserror::Error;

/// Result type alias using tensr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tensr operations
///
/// Every error aborts the enclosing operation immediately and propagates to
/// the caller; nothing is retried or recovered internally. Copying
/// operations discard their partial result on failure. In-place operations
/// make no atomicity guarantee: entries already written before the failure
/// stay written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Integer coefficient arithmetic overflowed
    #[error("Overflow in coefficient operation '{op}'")]
    Overflow {
        /// The operation name
        op: &'static str,
    },

    /// Division by the additive identity
    #[error("Division by zero in coefficient operation '{op}'")]
    DivisionByZero {
        /// The operation name
        op: &'static str,
    },

    /// Coefficient type does not support the requested operation
    #[error("Unsupported operation '{op}' for coefficient type {ty}")]
    UnsupportedOperation {
        /// The operation name
        op: &'static str,
        /// The coefficient type name
        ty: &'static str,
    },

    /// Elementwise operation found no matching entry in the right operand
    #[error("Missing right-operand entry in elementwise operation '{op}'")]
    MissingEntry {
        /// The operation name
        op: &'static str,
    },
}

impl Error {
    /// Create an overflow error
    pub fn overflow(op: &'static str) -> Self {
        Self::Overflow { op }
    }

    /// Create a division-by-zero error
    pub fn division_by_zero(op: &'static str) -> Self {
        Self::DivisionByZero { op }
    }

    /// Create an unsupported-operation error
    pub fn unsupported(op: &'static str, ty: &'static str) -> Self {
        Self::UnsupportedOperation { op, ty }
    }

    /// Create a missing-entry error
    pub fn missing_entry(op: &'static str) -> Self {
        Self::MissingEntry { op }
    }
}
