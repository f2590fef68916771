// ABOUTME: Defines the Action enum representing every request the presentation layer can make.
// ABOUTME: Actions are intent-based inputs that the session maps onto text log operations.

use serde::{Deserialize, Serialize};

/// A request from the presentation layer against the text log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// Append the text followed by a line terminator.
    Append { text: String },
    /// Return the accumulated contents.
    Read,
    /// Discard all prior contents.
    Clear,
    /// Append the text, then end the session.
    SaveAndExit { text: String },
}

impl Action {
    /// Whether the session should terminate once this action completes.
    pub fn terminates(&self) -> bool {
        matches!(self, Action::SaveAndExit { .. })
    }
}
