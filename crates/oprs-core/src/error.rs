//! Error types for oprs

use std::fmt;

use thiserror::Error;

/// Which side of the accepted argument count a call fell on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArityKind {
    /// Fewer than one argument
    TooFew,
    /// More than three arguments
    TooMany,
}

impl fmt::Display for ArityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArityKind::TooFew => f.write_str("not enough args"),
            ArityKind::TooMany => f.write_str("too many args"),
        }
    }
}

/// Core oprs errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OprsError {
    // Range errors
    #[error("upto: {kind} ({count}). want 1, 2, or 3")]
    Arity { kind: ArityKind, count: usize },

    // Parse errors
    #[error("Unsupported radix: {0}")]
    InvalidRadix(u32),

    #[error("Invalid integer {literal:?} in base {radix}: {reason}")]
    ParseInt {
        literal: String,
        radix: u32,
        reason: String,
    },

    #[error("Invalid float {literal:?}: {reason}")]
    ParseFloat { literal: String, reason: String },

    #[error("Value {literal:?} out of range for {target}")]
    OutOfRange {
        literal: String,
        target: &'static str,
    },

    // Producer errors
    #[error("Failed to spawn producer {name}: {reason}")]
    ProducerSpawn { name: String, reason: String },
}

impl OprsError {
    /// Build the arity error for an argument list of the given length
    pub fn arity(count: usize) -> Self {
        let kind = if count == 0 {
            ArityKind::TooFew
        } else {
            ArityKind::TooMany
        };
        OprsError::Arity { kind, count }
    }

    pub fn is_arity(&self) -> bool {
        matches!(self, OprsError::Arity { .. })
    }
}

/// Result type for oprs operations
pub type OprsResult<T> = Result<T, OprsError>;
