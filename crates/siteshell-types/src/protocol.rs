//! Wire envelope for the front-end ↔ kernel boundary.
//!
//! The original panel posted `{ command, nonce }` and received the
//! `wp_send_json_*` shape `{ success, data }`. These types keep that
//! contract: one command string plus an opaque session token in, a
//! discriminated success/failure envelope out. The clear-screen outcome
//! travels as the literal [`CLEAR_SENTINEL`] string in a success
//! envelope.

use serde::{Deserialize, Serialize};

use crate::error::ShellError;
use crate::outcome::ExecOutcome;

/// A single command submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellRequest {
    /// Raw command line as typed by the user.
    pub command: String,
    /// Opaque session-authentication token.
    #[serde(default)]
    pub token: String,
}

impl ShellRequest {
    /// Build a request for the given command line and token.
    pub fn new(command: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            token: token.into(),
        }
    }
}

/// The response envelope: either success output or an error message.
///
/// `data` holds output text (possibly the clear sentinel) when
/// `success` is true, and the error message when it is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellResponse {
    pub success: bool,
    pub data: String,
}

impl ShellResponse {
    /// Build a success envelope from an outcome.
    pub fn ok(outcome: &ExecOutcome) -> Self {
        Self {
            success: true,
            data: outcome.as_wire_text().to_string(),
        }
    }

    /// Build a failure envelope carrying an error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: message.into(),
        }
    }

    /// Wrap an execution result in an envelope.
    pub fn from_result(result: &Result<ExecOutcome, ShellError>) -> Self {
        match result {
            Ok(outcome) => Self::ok(outcome),
            Err(err) => Self::error(err.to_string()),
        }
    }

    /// Unwrap an envelope back into an execution result.
    ///
    /// Failure envelopes come back as [`ShellError::Domain`] — the
    /// receiving side only needs the message, not the original kind.
    pub fn into_result(self) -> Result<ExecOutcome, ShellError> {
        if self.success {
            Ok(ExecOutcome::from_wire_text(self.data))
        } else {
            Err(ShellError::Domain(self.data))
        }
    }
}
