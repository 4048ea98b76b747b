//! Error types for arithmetic evaluation.
//!
//! `ArithErrorKind` provides typed error categories. Factory functions
//! (e.g. `division_by_zero()`) are the public construction points; they
//! populate both `kind` and `message`.

use crate::number::Number;
use std::fmt;

/// Result of an arithmetic operation.
pub type ArithResult = Result<Number, ArithError>;

/// Typed error category.
///
/// Each variant carries the data of its error condition, enabling
/// programmatic matching rather than string parsing. The `Display` impl
/// produces the message strings stored on `ArithError`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArithErrorKind {
    /// The divisor was zero.
    DivisionByZero,
    /// An operation name did not match any known operation.
    UnknownOperation { name: String },
}

impl fmt::Display for ArithErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::UnknownOperation { name } => write!(f, "unknown operation: {name}"),
        }
    }
}

/// Arithmetic evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArithError {
    /// Structured error category.
    pub kind: ArithErrorKind,
    /// Human-readable error message; equals `kind.to_string()`.
    pub message: String,
}

impl ArithError {
    /// Create an error from a structured kind.
    ///
    /// The message is computed from the kind's `Display` impl.
    /// Used internally by the factory functions.
    fn from_kind(kind: ArithErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

impl fmt::Display for ArithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ArithError {}

// Factory Functions

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> ArithError {
    ArithError::from_kind(ArithErrorKind::DivisionByZero)
}

/// Unknown operation name.
#[cold]
pub fn unknown_operation(name: &str) -> ArithError {
    ArithError::from_kind(ArithErrorKind::UnknownOperation {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn division_by_zero_has_correct_kind() {
        let err = division_by_zero();
        assert_eq!(err.kind, ArithErrorKind::DivisionByZero);
        assert_eq!(err.message, "division by zero");
    }

    #[test]
    fn unknown_operation_has_correct_kind() {
        let err = unknown_operation("modulo");
        assert_eq!(
            err.kind,
            ArithErrorKind::UnknownOperation {
                name: "modulo".to_string()
            }
        );
        assert_eq!(err.message, "unknown operation: modulo");
    }

    #[test]
    fn kind_display_matches_message() {
        let errors = [division_by_zero(), unknown_operation("pow")];
        for err in &errors {
            assert_eq!(
                err.message,
                err.kind.to_string(),
                "message/kind mismatch for {:?}",
                err.kind
            );
        }
    }

    #[test]
    fn display_uses_message() {
        assert_eq!(division_by_zero().to_string(), "division by zero");
    }
}
