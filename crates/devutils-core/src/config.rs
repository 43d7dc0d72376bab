// Rust guideline compliant 2026-10-17

//! Configuration management for tracker devutils.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the tracker helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the tracker web interface, with trailing slash.
    #[serde(default = "default_tracker_web")]
    pub tracker_web: String,

    /// Status node id that marks an issue as open.
    #[serde(default = "default_open_status_id")]
    pub open_status_id: String,

    /// Role that may view any user's history.
    #[serde(default = "default_coordinator_role")]
    pub coordinator_role: String,

    /// Role that marks a user as a triager.
    #[serde(default = "default_triager_role")]
    pub triager_role: String,
}

fn default_tracker_web() -> String {
    "http://localhost:8080/tracker/".to_string()
}

fn default_open_status_id() -> String {
    "1".to_string()
}

fn default_coordinator_role() -> String {
    "Coordinator".to_string()
}

fn default_triager_role() -> String {
    "Developer".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracker_web: default_tracker_web(),
            open_status_id: default_open_status_id(),
            coordinator_role: default_coordinator_role(),
            triager_role: default_triager_role(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `.tracker/config.toml`
    /// 3. Environment variables with `DEVUTILS_` prefix
    ///
    /// # Arguments
    ///
    /// * `tracker_dir` - Path to the `.tracker` directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(tracker_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = tracker_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `DEVUTILS_TRACKER_WEB` - Tracker base URL
    /// - `DEVUTILS_OPEN_STATUS_ID` - Open status node id
    /// - `DEVUTILS_COORDINATOR_ROLE` - Coordinator role name
    /// - `DEVUTILS_TRIAGER_ROLE` - Triager role name
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("DEVUTILS_TRACKER_WEB") {
            self.tracker_web = val;
        }
        if let Ok(val) = std::env::var("DEVUTILS_OPEN_STATUS_ID") {
            self.open_status_id = val;
        }
        if let Ok(val) = std::env::var("DEVUTILS_COORDINATOR_ROLE") {
            self.coordinator_role = val;
        }
        if let Ok(val) = std::env::var("DEVUTILS_TRIAGER_ROLE") {
            self.triager_role = val;
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `tracker_web` is empty or lacks a trailing slash
    /// - `open_status_id` or a role name is empty
    fn validate(&self) -> Result<()> {
        if self.tracker_web.trim().is_empty() {
            return Err(Error::Config("tracker_web cannot be empty".to_string()));
        }

        if !self.tracker_web.ends_with('/') {
            return Err(Error::Config(format!(
                "tracker_web must end with '/', got {}",
                self.tracker_web
            )));
        }

        if self.open_status_id.trim().is_empty() {
            return Err(Error::Config("open_status_id cannot be empty".to_string()));
        }

        if self.coordinator_role.trim().is_empty() || self.triager_role.trim().is_empty() {
            return Err(Error::Config("role names cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file.
    ///
    /// # Arguments
    ///
    /// * `tracker_dir` - Path to the `.tracker` directory
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, tracker_dir: &Path) -> Result<()> {
        let config_path = tracker_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests share the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all_env_vars() {
        std::env::remove_var("DEVUTILS_TRACKER_WEB");
        std::env::remove_var("DEVUTILS_OPEN_STATUS_ID");
        std::env::remove_var("DEVUTILS_COORDINATOR_ROLE");
        std::env::remove_var("DEVUTILS_TRIAGER_ROLE");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tracker_web, "http://localhost:8080/tracker/");
        assert_eq!(config.open_status_id, "1");
        assert_eq!(config.coordinator_role, "Coordinator");
        assert_eq!(config.triager_role, "Developer");
    }

    #[test]
    fn test_config_load_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        let content = r#"
tracker_web = "https://bugs.example.org/"
open_status_id = "3"
triager_role = "Triager"
"#;
        std::fs::write(temp_dir.path().join("config.toml"), content).unwrap();

        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.tracker_web, "https://bugs.example.org/");
        assert_eq!(config.open_status_id, "3");
        assert_eq!(config.coordinator_role, "Coordinator");
        assert_eq!(config.triager_role, "Triager");
    }

    #[test]
    fn test_config_rejects_missing_trailing_slash() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("config.toml"),
            "tracker_web = \"https://bugs.example.org\"",
        )
        .unwrap();

        let result = Config::load(temp_dir.path());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_config_rejects_invalid_toml() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "tracker_web = [").unwrap();

        assert!(Config::load(temp_dir.path()).is_err());
    }

    #[test]
    fn test_config_file_overridden_by_env() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "open_status_id = \"2\"").unwrap();

        std::env::set_var("DEVUTILS_OPEN_STATUS_ID", "5");
        std::env::set_var("DEVUTILS_COORDINATOR_ROLE", "Admin");
        let config = Config::load(temp_dir.path()).unwrap();
        assert_eq!(config.open_status_id, "5");
        assert_eq!(config.coordinator_role, "Admin");

        clear_all_env_vars();
    }

    #[test]
    fn test_config_env_empty_role_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        std::env::set_var("DEVUTILS_TRIAGER_ROLE", " ");
        let result = Config::load(temp_dir.path());
        assert!(result.is_err());

        clear_all_env_vars();
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_all_env_vars();
        let temp_dir = TempDir::new().unwrap();

        let original = Config {
            tracker_web: "https://bugs.example.org/".to_string(),
            open_status_id: "7".to_string(),
            coordinator_role: "Coordinator".to_string(),
            triager_role: "Developer".to_string(),
        };

        original.save(temp_dir.path()).unwrap();
        let loaded = Config::load(temp_dir.path()).unwrap();
        assert_eq!(original, loaded);
    }
}
