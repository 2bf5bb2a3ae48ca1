//! Error type shared by the generators.

use std::path::PathBuf;
use thiserror::Error;

/// Anything that can stop a generator run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed table row at line {line}: {reason}")]
    MalformedEntry { line: usize, reason: String },

    #[error("no operand value for type {ty} (needed by {instruction})")]
    UnknownValueType { ty: String, instruction: String },

    #[error("invalid operand values: {0}")]
    Values(#[from] serde_json::Error),

    #[error("invalid opcode: {0}")]
    InvalidOpcode(String),

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Format(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
