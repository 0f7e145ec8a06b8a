//! Configuration module for the calculator
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CalculatorPaths;
pub use settings::Settings;
