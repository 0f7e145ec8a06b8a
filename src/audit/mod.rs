//! Operation log for the calculator
//!
//! Records every mutation (add, subtract, clear) with the total before and
//! after it, in an append-only JSONL file.
//!
//! # Example
//!
//! ```rust,ignore
//! use calculator::audit::{AuditLogger, LogEntry};
//! use calculator::models::Operation;
//!
//! let logger = AuditLogger::new(paths.operation_log());
//! if let Some(entry) = LogEntry::for_operation(&Operation::Add(5), 0, 5) {
//!     logger.log(&entry)?;
//! }
//! ```

mod entry;
mod logger;

pub use entry::{LogEntry, OperationKind};
pub use logger::AuditLogger;
