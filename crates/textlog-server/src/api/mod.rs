// ABOUTME: API module containing the HTTP handler functions for the textlog JSON API.
// ABOUTME: All handlers operate on the single configured text log.

pub mod log;
