// Rust guideline compliant 2026-10-17

//! Tracker directory discovery and path management utilities.

use crate::error::{AppError, Result};
use devutils_core::{Config, TrackerDb};
use std::path::{Path, PathBuf};

/// Default name of the tracker directory.
pub const TRACKER_DIR: &str = ".tracker";

/// Path metadata for a tracker directory.
#[derive(Debug, Clone)]
pub struct TrackerContext {
    tracker_dir: PathBuf,
}

impl TrackerContext {
    /// Locates an existing tracker directory.
    ///
    /// # Arguments
    ///
    /// * `tracker_dir` - Explicit tracker directory, or `None` for
    ///   `.tracker` under the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The tracker directory is missing
    pub fn discover(tracker_dir: Option<&Path>) -> Result<Self> {
        let tracker_dir = Self::resolve(tracker_dir)?;
        if !tracker_dir.is_dir() {
            return Err(AppError::TrackerNotInitialized { path: tracker_dir });
        }
        Ok(Self { tracker_dir })
    }

    /// Creates a tracker directory with empty data files and a default
    /// config. Existing files are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or files cannot be created.
    pub fn init(tracker_dir: Option<&Path>) -> Result<Self> {
        let tracker_dir = Self::resolve(tracker_dir)?;
        TrackerDb::init(&tracker_dir)?;
        let context = Self { tracker_dir };
        if !context.config_path().exists() {
            Config::default().save(context.tracker_dir())?;
        }
        tracing::info!(path = %context.tracker_dir.display(), "tracker directory initialized");
        Ok(context)
    }

    fn resolve(tracker_dir: Option<&Path>) -> Result<PathBuf> {
        Ok(match tracker_dir {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir()?.join(TRACKER_DIR),
        })
    }

    /// Returns the tracker directory path.
    #[must_use]
    pub fn tracker_dir(&self) -> &Path {
        self.tracker_dir.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.tracker_dir.join("config.toml")
    }

    /// Opens the tracker database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open_db(&self) -> Result<TrackerDb> {
        Ok(TrackerDb::open(&self.tracker_dir)?)
    }

    /// Loads the tracker configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(&self.tracker_dir)?)
    }
}
