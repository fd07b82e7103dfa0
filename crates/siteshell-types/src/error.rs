//! Shell error taxonomy.
//!
//! Only genuine failures live here. Unknown verbs, missing sub-verbs,
//! and usage mistakes are rendered as ordinary output guiding the user
//! to `help` — they never become errors.

use thiserror::Error;

/// Failures surfaced by command execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// The input tokenized to nothing (empty or whitespace-only).
    #[error("Invalid command format")]
    InvalidCommand,

    /// A domain operation reported failure; carries its message verbatim.
    #[error("{0}")]
    Domain(String),
}
