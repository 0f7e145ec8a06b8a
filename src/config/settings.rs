//! User settings for the calculator
//!
//! Settings control the operation log and how the command line reports the
//! total. The running total itself is never stored here.

use serde::{Deserialize, Serialize};

use super::paths::CalculatorPaths;
use crate::error::CalculatorError;

/// User settings for the calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Record every mutation in the operation log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Print the total after every mutation, not only on `total`
    #[serde(default)]
    pub echo_total: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            audit_enabled: default_audit_enabled(),
            echo_total: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CalculatorPaths) -> Result<Self, CalculatorError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                CalculatorError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CalculatorError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CalculatorPaths) -> Result<(), CalculatorError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            CalculatorError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            CalculatorError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
