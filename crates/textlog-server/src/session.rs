// ABOUTME: Maps presentation actions onto text log operations.
// ABOUTME: Every action yields the contents to display afterwards, or the storage error to report.

use textlog_core::Action;
use textlog_store::{StorageError, TextLog};

/// Apply `action` to `log` and return the contents the presentation layer
/// should show next. Storage failures are returned, never swallowed, so
/// the caller decides whether to keep the previously displayed text.
pub fn apply(log: &TextLog, action: &Action) -> Result<String, StorageError> {
    match action {
        Action::Append { text } | Action::SaveAndExit { text } => {
            log.append(text)?;
            log.read()
        }
        Action::Read => log.read(),
        Action::Clear => {
            log.clear()?;
            Ok(String::new())
        }
    }
}
