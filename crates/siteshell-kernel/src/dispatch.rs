//! Static verb table.
//!
//! Verbs are a closed set, so the table is a tagged enum rather than a
//! registry of callables: resolution is an exact case-sensitive match
//! and dispatch is an exhaustive `match`, which keeps every handler
//! unit-testable in isolation.

use siteshell_types::ShellError;

use crate::backend::SiteBackend;
use crate::verbs;

/// Top-level command verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Plugin,
    Theme,
    User,
    Post,
    Option,
    Site,
    Help,
}

impl Verb {
    /// All verbs, in help-listing order.
    pub const ALL: [Verb; 7] = [
        Verb::Plugin,
        Verb::Theme,
        Verb::User,
        Verb::Post,
        Verb::Option,
        Verb::Site,
        Verb::Help,
    ];

    /// Resolve a token to a verb. Exact, case-sensitive.
    pub fn resolve(token: &str) -> Option<Self> {
        match token {
            "plugin" => Some(Verb::Plugin),
            "theme" => Some(Verb::Theme),
            "user" => Some(Verb::User),
            "post" => Some(Verb::Post),
            "option" => Some(Verb::Option),
            "site" => Some(Verb::Site),
            "help" => Some(Verb::Help),
            _ => None,
        }
    }

    /// The verb's command name.
    pub fn name(&self) -> &'static str {
        match self {
            Verb::Plugin => "plugin",
            Verb::Theme => "theme",
            Verb::User => "user",
            Verb::Post => "post",
            Verb::Option => "option",
            Verb::Site => "site",
            Verb::Help => "help",
        }
    }
}

/// True if `token` is the clear-screen command (`clear` or `cls`, any
/// case). Checked before verb resolution; never dispatched.
pub fn is_clear(token: &str) -> bool {
    token.eq_ignore_ascii_case("clear") || token.eq_ignore_ascii_case("cls")
}

/// Invoke the handler for a resolved verb with the remaining tokens.
pub async fn run_verb(
    verb: Verb,
    args: &[String],
    backend: &dyn SiteBackend,
) -> Result<String, ShellError> {
    match verb {
        Verb::Plugin => verbs::plugin::run(args, backend).await,
        Verb::Theme => verbs::theme::run(args, backend).await,
        Verb::User => verbs::user::run(args, backend).await,
        Verb::Post => verbs::post::run(args, backend).await,
        Verb::Option => verbs::option::run(args, backend).await,
        Verb::Site => verbs::site::run(args, backend).await,
        Verb::Help => Ok(verbs::help::text().to_string()),
    }
}
