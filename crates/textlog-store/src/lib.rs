// ABOUTME: Persistence layer for textlog, handling the durable backing text resource.
// ABOUTME: Provides the append/read/clear text log and the application-scoped storage layout.

pub mod manager;
pub mod text_log;

pub use manager::{ManagerError, StorageManager};
pub use text_log::{StorageError, StorageOp, TextLog};
