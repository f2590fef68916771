// ABOUTME: Core library for textlog, containing the shared domain types.
// ABOUTME: Defines the validated log identifier and the actions a presentation layer may request.

pub mod action;
pub mod name;

pub use action::Action;
pub use name::{DEFAULT_LOG_NAME, LogName, NameError};
