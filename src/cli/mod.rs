//! CLI command handlers
//!
//! Bridges the clap argument parsing in `main.rs` with the service layer.

pub mod log;
pub mod session;

pub use log::handle_log_command;
pub use session::{handle_repl_command, handle_run_command};
