//! Verb handlers.
//!
//! Each handler is a pure async function from the remaining tokens and
//! the backend to an output block: menus, usage lines, and soft
//! not-found messages are ordinary output, and only failing domain
//! mutations become errors. The dispatcher owns the mapping from verbs
//! to these modules.

pub mod help;
pub mod option;
pub mod plugin;
pub mod post;
pub mod site;
pub mod theme;
pub mod user;
