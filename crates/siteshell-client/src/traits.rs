//! Common trait for shell clients.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use siteshell_types::ExecOutcome;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur when using a shell client.
///
/// `Execution` carries a failure the command itself produced;
/// everything else is a transport-kind problem. Front ends style the
/// two differently.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The command executed and reported failure.
    #[error("{0}")]
    Execution(String),

    /// The backend could not be reached.
    #[error("transport error: {0}")]
    Transport(String),

    /// The round-trip exceeded the configured timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// True for transport-kind failures (anything but `Execution`).
    pub fn is_transport(&self) -> bool {
        !matches!(self, ClientError::Execution(_))
    }
}

/// Common interface for submitting commands to a kernel.
///
/// At most one call may be in flight per session; the line editor
/// enforces this by locking its input while a submission is pending.
#[async_trait]
pub trait ShellClient: Send + Sync {
    /// Execute one command line and return its outcome.
    async fn execute(&self, command: &str) -> ClientResult<ExecOutcome>;

    /// Health check.
    async fn ping(&self) -> ClientResult<String>;
}
