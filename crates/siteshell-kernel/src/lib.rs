//! siteshell-kernel: the core of siteshell.
//!
//! This crate provides:
//!
//! - **Tokenizer**: splits a raw command line into tokens, honoring
//!   double-quoted spans (`command` module)
//! - **Dispatch**: the static verb table and the verb handlers
//! - **Backend**: the `SiteBackend` trait for the domain collaborators,
//!   plus an in-memory implementation
//! - **Settings**: the persisted path configuration record
//! - **Kernel**: the assembly that wires tokenizer, verbs, and backend
//!   together with no ambient global state

pub mod backend;
pub mod command;
pub mod dispatch;
pub mod kernel;
pub mod settings;
pub mod verbs;

pub use backend::{
    MemoryBackend, NewPost, NewUser, PluginInfo, PostRecord, SiteBackend, SiteInfo, StoreError,
    StoreResult, ThemeInfo, UserRecord,
};
pub use command::Tokenizer;
pub use dispatch::Verb;
pub use kernel::{KernelConfig, ShellKernel};
pub use settings::Settings;
