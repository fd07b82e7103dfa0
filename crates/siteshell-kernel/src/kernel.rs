//! The ShellKernel — the assembly point of siteshell.
//!
//! The kernel owns the tokenizer and the backend reference and wires
//! them to the verb table by construction. There is no ambient
//! registry: an embedding host passes its own `SiteBackend` in, the
//! standalone binary passes the seeded in-memory one.
//!
//! ```text
//! line ──▶ Tokenizer ──▶ clear/cls check ──▶ Verb::resolve ──▶ handler(backend)
//!                                   │                │
//!                             ClearScreen     "Unknown command"
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use siteshell_types::{ExecOutcome, ShellError, ShellRequest, ShellResponse};

use crate::backend::{MemoryBackend, SiteBackend};
use crate::command::Tokenizer;
use crate::dispatch::{self, Verb};
use crate::settings::Settings;

/// Fallback output for handlers that produced nothing.
const EMPTY_OUTPUT_FALLBACK: &str = "Command executed successfully";

/// Configuration for kernel construction.
#[derive(Debug, Clone, Default)]
pub struct KernelConfig {
    /// Persisted path settings, surfaced via `/settings` in the REPL.
    pub settings: Settings,
    /// Expected session token for [`ShellKernel::handle_request`].
    /// `None` disables the check (trusted in-process use).
    pub session_token: Option<String>,
}

impl KernelConfig {
    /// Config with the given settings record.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            session_token: None,
        }
    }

    /// Require this session token on the request boundary.
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}

/// The command execution engine.
pub struct ShellKernel {
    config: KernelConfig,
    tokenizer: Tokenizer,
    backend: Arc<dyn SiteBackend>,
}

impl ShellKernel {
    /// Create a kernel over the demo in-memory backend.
    pub fn new(config: KernelConfig) -> Result<Self> {
        Self::with_backend(config, Arc::new(MemoryBackend::demo()))
    }

    /// Create a kernel over the given backend.
    pub fn with_backend(config: KernelConfig, backend: Arc<dyn SiteBackend>) -> Result<Self> {
        let tokenizer = Tokenizer::new().context("failed to compile token pattern")?;
        Ok(Self {
            config,
            tokenizer,
            backend,
        })
    }

    /// The settings record this kernel was built with.
    pub fn settings(&self) -> &Settings {
        &self.config.settings
    }

    /// The backend this kernel dispatches into.
    pub fn backend(&self) -> &Arc<dyn SiteBackend> {
        &self.backend
    }

    /// Execute one command line.
    ///
    /// Tokenizes, short-circuits `clear`/`cls` to the clear-screen
    /// outcome, resolves the leading verb, and runs its handler with
    /// the remaining tokens. Unknown verbs are a normal result guiding
    /// the user to `help`; an empty output block is replaced by a fixed
    /// fallback message.
    pub async fn execute(&self, line: &str) -> Result<ExecOutcome, ShellError> {
        let tokens = self.tokenizer.tokenize(line)?;
        let Some((first, rest)) = tokens.split_first() else {
            return Err(ShellError::InvalidCommand);
        };

        if dispatch::is_clear(first) {
            debug!("clear-screen command");
            return Ok(ExecOutcome::ClearScreen);
        }

        let output = match Verb::resolve(first) {
            Some(verb) => {
                debug!(verb = verb.name(), args = rest.len(), "dispatching");
                dispatch::run_verb(verb, rest, self.backend.as_ref()).await?
            }
            None => {
                debug!(verb = first.as_str(), "unknown verb");
                format!("Unknown command: {first}\nType 'help' to see available commands.\n")
            }
        };

        if output.is_empty() {
            Ok(ExecOutcome::Output(EMPTY_OUTPUT_FALLBACK.to_string()))
        } else {
            Ok(ExecOutcome::Output(output))
        }
    }

    /// Handle one wire request: validate the session token and the
    /// presence of a command, then execute and wrap the result.
    pub async fn handle_request(&self, request: &ShellRequest) -> ShellResponse {
        if let Some(expected) = &self.config.session_token {
            if &request.token != expected {
                return ShellResponse::error("Invalid security token");
            }
        }
        if request.command.trim().is_empty() {
            return ShellResponse::error("No command provided");
        }
        ShellResponse::from_result(&self.execute(&request.command).await)
    }
}
