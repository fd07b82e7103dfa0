//! Pure data types for siteshell — execution outcomes, errors, and the
//! wire envelope.
//!
//! This crate is a leaf dependency with no async runtime and no I/O.
//! It exists so that front ends (a web panel, a terminal REPL, tests)
//! can speak the shell's result types without pulling in the kernel.

pub mod error;
pub mod outcome;
pub mod protocol;

// Flat re-exports for convenience
pub use error::*;
pub use outcome::*;
pub use protocol::*;
