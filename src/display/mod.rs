//! Display formatting for terminal output

pub mod log;

pub use log::format_log_entries;
