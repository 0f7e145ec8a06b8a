//! Where the calculator keeps its files
//!
//! Everything lives in one directory, chosen in this order:
//!
//! 1. `CALCULATOR_DATA_DIR`, when set and non-empty
//! 2. Unix: `$XDG_CONFIG_HOME/calculator`, falling back to `~/.config/calculator`
//! 3. Windows: `%APPDATA%\calculator`

use std::path::PathBuf;

use crate::error::CalculatorError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "CALCULATOR_DATA_DIR";

const DIR_NAME: &str = "calculator";

/// The calculator's directory and the two files inside it
#[derive(Debug, Clone)]
pub struct CalculatorPaths {
    base_dir: PathBuf,
}

impl CalculatorPaths {
    /// Resolve the directory from the environment
    ///
    /// # Errors
    ///
    /// `Config` when neither the override nor a home directory is available.
    pub fn new() -> Result<Self, CalculatorError> {
        let base_dir = match non_empty_var(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => platform_dir()?.join(DIR_NAME),
        };
        Ok(Self { base_dir })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// `config.json`
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// `operations.log`
    pub fn operation_log(&self) -> PathBuf {
        self.base_dir.join("operations.log")
    }

    /// Create the directory (and parents) if missing
    pub fn ensure_directories(&self) -> Result<(), CalculatorError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            CalculatorError::Io(format!(
                "cannot create {}: {}",
                self.base_dir.display(),
                e
            ))
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(not(windows))]
fn platform_dir() -> Result<PathBuf, CalculatorError> {
    if let Some(xdg) = non_empty_var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg));
    }
    non_empty_var("HOME")
        .map(|home| PathBuf::from(home).join(".config"))
        .ok_or_else(|| {
            CalculatorError::Config(format!(
                "no home directory; set {} to choose where files go",
                DATA_DIR_ENV
            ))
        })
}

#[cfg(windows)]
fn platform_dir() -> Result<PathBuf, CalculatorError> {
    non_empty_var("APPDATA").map(PathBuf::from).ok_or_else(|| {
        CalculatorError::Config(format!(
            "APPDATA is not set; set {} to choose where files go",
            DATA_DIR_ENV
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CalculatorPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.operation_log(), temp_dir.path().join("operations.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);

        let paths = CalculatorPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("calculator");
        let paths = CalculatorPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.is_dir());
    }
}
