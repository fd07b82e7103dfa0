//! ExecOutcome — the successful result of every command execution.

/// Wire marker for the clear-screen outcome.
///
/// Front ends that receive this literal string in a success envelope
/// must wipe their display instead of rendering it as output.
pub const CLEAR_SENTINEL: &str = "<clear>";

/// The success payload of a dispatched command.
///
/// Exactly one of two shapes: an opaque block of output text, or the
/// distinguished "clear the display" marker. Failures travel separately
/// as [`crate::ShellError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecOutcome {
    /// Free-form output lines, as produced by a verb handler.
    Output(String),
    /// Wipe the display and re-show the welcome banner.
    ClearScreen,
}

impl ExecOutcome {
    /// True if this outcome is the clear-screen marker.
    pub fn is_clear(&self) -> bool {
        matches!(self, ExecOutcome::ClearScreen)
    }

    /// The output text, or the wire sentinel for clear-screen.
    pub fn as_wire_text(&self) -> &str {
        match self {
            ExecOutcome::Output(text) => text,
            ExecOutcome::ClearScreen => CLEAR_SENTINEL,
        }
    }

    /// Parse a wire payload back into an outcome.
    pub fn from_wire_text(text: String) -> Self {
        if text == CLEAR_SENTINEL {
            ExecOutcome::ClearScreen
        } else {
            ExecOutcome::Output(text)
        }
    }
}
