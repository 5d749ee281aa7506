//! Error types, one enum per component.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning external tags or config files into settings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("unknown difficulty tag: {0:?} (expected easy, medium or hard)")]
    UnknownDifficulty(String),
    #[error("unknown problem kind: {0:?} (expected division or multiplication)")]
    UnknownKind(String),
    #[error("failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised when operands cannot form a valid problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProblemError {
    #[error("{name} must be a positive integer")]
    ZeroOperand { name: &'static str },
    #[error("divisor {0} is too small (must be at least 2)")]
    DivisorTooSmall(u32),
    #[error("division by zero")]
    ZeroDivisor,
}

/// Errors surfaced by ledger storage backends.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("ledger i/o failed at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid ledger key {0:?} (must be non-empty with no path separators)")]
    InvalidKey(String),
    #[error("ledger store unavailable: {0}")]
    Unavailable(String),
}
