//! Client implementations for talking to a siteshell kernel.
//!
//! The front end never calls the kernel directly; it goes through a
//! [`ShellClient`], which owns the transport policy (timeout, failure
//! mapping). `EmbeddedClient` wraps a kernel in-process; a remote
//! transport would implement the same trait over the wire envelope in
//! siteshell-types.

mod embedded;
mod traits;

pub use embedded::{EmbeddedClient, DEFAULT_TIMEOUT};
pub use traits::{ClientError, ClientResult, ShellClient};
