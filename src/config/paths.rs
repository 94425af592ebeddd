//! Path management for the budget tracker
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the `--data-dir` flag)
//! 2. `BUDGET_TRACKER_DATA_DIR` environment variable (if set)
//! 3. The directory holding the running executable
//! 4. The platform data directory (e.g. `~/.local/share/budget-tracker`)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::BudgetError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "BUDGET_TRACKER_DATA_DIR";

const DATABASE_FILE: &str = "my_budget.db";
const SETTINGS_FILE: &str = "config.json";

/// Manages all paths used by the budget tracker
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Directory holding the database and settings
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Resolve the data directory
    ///
    /// # Errors
    ///
    /// Returns an error if no candidate directory can be determined.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, BudgetError> {
        if let Some(dir) = explicit {
            return Ok(Self::with_base_dir(dir));
        }

        if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            if !custom.trim().is_empty() {
                return Ok(Self::with_base_dir(PathBuf::from(custom)));
            }
        }

        if let Some(dir) = executable_dir() {
            return Ok(Self::with_base_dir(dir));
        }

        ProjectDirs::from("", "", "budget-tracker")
            .map(|dirs| Self::with_base_dir(dirs.data_dir().to_path_buf()))
            .ok_or_else(|| BudgetError::Config("Could not determine a data directory".into()))
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the SQLite database
    pub fn database_file(&self) -> PathBuf {
        self.base_dir.join(DATABASE_FILE)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))
    }
}

/// Directory of the running program, if it can be determined
fn executable_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.database_file(), temp_dir.path().join("my_budget.db"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_explicit_dir_wins() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::resolve(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(DATA_DIR_ENV, temp_dir.path());
        let paths = BudgetPaths::resolve(None).unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().join("a").join("b"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
    }
}
