// Rust guideline compliant 2026-10-17

//! Storage module for the JSONL-backed tracker database.
//!
//! A tracker directory holds one JSONL file per record type. The audit log
//! (`history.jsonl`) is append-only; its line order is the traversal order
//! handed to the history scanner.

use crate::action::IssueIndex;
use crate::history::HistoryProvider;
use crate::roles::UserDirectory;
use crate::{ChangeEvent, Error, HistoryRecord, Issue, Result, User};
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// A record type that can live in a JSONL file.
pub trait Record: Serialize + DeserializeOwned {
    /// Validates the record after loading and before writing.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is invalid.
    fn validate(&self) -> Result<()>;
}

impl Record for HistoryRecord {
    fn validate(&self) -> Result<()> {
        HistoryRecord::validate(self)
    }
}

impl Record for User {
    fn validate(&self) -> Result<()> {
        User::validate(self)
    }
}

impl Record for Issue {
    fn validate(&self) -> Result<()> {
        Issue::validate(self)
    }
}

/// A JSONL file of records of one type.
#[derive(Debug, Clone)]
pub struct JsonlFile<T> {
    path: PathBuf,
    _record: PhantomData<T>,
}

impl<T: Record> JsonlFile<T> {
    /// Creates a handle for the JSONL file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self {
            path,
            _record: PhantomData,
        })
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all records, one JSON value per line.
    ///
    /// A missing file yields no records. Blank lines are ignored. Lines that
    /// are not UTF-8 or not valid JSON for `T` are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a record fails
    /// validation.
    pub fn load_all(&self) -> Result<Vec<T>> {
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = BufReader::new(File::open(&self.path)?);
        let mut records = Vec::new();
        let mut buf = Vec::new();
        let mut line_no = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim(),
                Err(e) => {
                    self.warn_skipped(line_no, &e);
                    continue;
                }
            };
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<T>(line) {
                Ok(record) => {
                    record.validate()?;
                    records.push(record);
                }
                Err(e) => self.warn_skipped(line_no, &e),
            }
        }

        Ok(records)
    }

    fn warn_skipped(&self, line_no: usize, error: &dyn std::fmt::Display) {
        tracing::warn!(
            path = %self.path.display(),
            line = line_no,
            error = %error,
            "skipping malformed JSON line"
        );
    }

    /// Replaces the file contents with `records`.
    ///
    /// Writes to a temp file and renames it over the original.
    ///
    /// # Errors
    ///
    /// Returns an error if a record fails validation or the write fails.
    pub fn save_all(&self, records: &[T]) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        for record in records {
            record.validate()?;
        }

        let temp_path = self.path.with_extension("jsonl.tmp");
        {
            let mut file = File::create(&temp_path)?;
            for record in records {
                let json = serde_json::to_string(record)?;
                file.write_all(json.as_bytes())?;
                file.write_all(b"\n")?;
            }
            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }

    /// Appends one record to the end of the file under an exclusive lock.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is invalid, the lock cannot be taken or
    /// the write fails.
    pub fn append(&self, record: &T) -> Result<()> {
        use std::fs::OpenOptions;
        use std::io::Write;

        record.validate()?;
        let json = serde_json::to_string(record)?;

        self.with_lock(|| {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
            Ok(())
        })
    }

    /// Executes a closure while holding an exclusive lock on the file.
    ///
    /// Blocks until any other holder releases the lock.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock file cannot be opened or locked, or the
    /// closure fails.
    pub fn with_lock<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce() -> Result<R>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to acquire lock on {}: {}", lock_path.display(), e),
            ))
        })?;

        let result = f();
        let _ = lock_file.unlock();
        result
    }
}

/// The tracker database: audit log, users and issues in one directory.
#[derive(Debug, Clone)]
pub struct TrackerDb {
    dir: PathBuf,
    history: JsonlFile<HistoryRecord>,
    users: JsonlFile<User>,
    issues: JsonlFile<Issue>,
}

impl TrackerDb {
    /// Opens the database in `dir` without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` is empty.
    pub fn open(dir: &Path) -> Result<Self> {
        Ok(Self {
            dir: dir.to_path_buf(),
            history: JsonlFile::new(dir.join("history.jsonl"))?,
            users: JsonlFile::new(dir.join("users.jsonl"))?,
            issues: JsonlFile::new(dir.join("issues.jsonl"))?,
        })
    }

    /// Creates `dir` and empty data files, keeping existing files.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or files cannot be created.
    pub fn init(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        let db = Self::open(dir)?;
        for path in [db.history.path(), db.users.path(), db.issues.path()] {
            if !path.exists() {
                std::fs::File::create(path)?;
            }
        }
        Ok(db)
    }

    /// Returns the database directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the audit-log file.
    pub fn history(&self) -> &JsonlFile<HistoryRecord> {
        &self.history
    }

    /// Returns the users file.
    pub fn users(&self) -> &JsonlFile<User> {
        &self.users
    }

    /// Returns the issues file.
    pub fn issues(&self) -> &JsonlFile<Issue> {
        &self.issues
    }

    /// Appends an event to the audit log.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is invalid or cannot be written.
    pub fn record_event(&self, record: &HistoryRecord) -> Result<()> {
        self.history.append(record)
    }

    /// Loads all users.
    ///
    /// # Errors
    ///
    /// Returns an error if the users file cannot be read.
    pub fn load_users(&self) -> Result<Vec<User>> {
        self.users.load_all()
    }
}

impl HistoryProvider for TrackerDb {
    fn get_history(&self, class: &str, node_id: &str) -> Result<Vec<ChangeEvent>> {
        let records = self.history.load_all()?;
        records.get_history(class, node_id)
    }
}

impl UserDirectory for TrackerDb {
    fn user(&self, user_id: &str) -> Result<User> {
        self.users
            .load_all()?
            .into_iter()
            .find(|user| user.id == user_id)
            .ok_or_else(|| Error::NotFound(format!("user{}", user_id)))
    }
}

impl IssueIndex for TrackerDb {
    fn issue_ids_with_status(&self, status: &str) -> Result<Vec<String>> {
        let issues = self.issues.load_all()?;
        Ok(issues
            .into_par_iter()
            .filter(|issue| issue.status == status)
            .map(|issue| issue.id)
            .collect())
    }
}

impl HistoryProvider for [HistoryRecord] {
    fn get_history(&self, class: &str, node_id: &str) -> Result<Vec<ChangeEvent>> {
        Ok(self
            .iter()
            .filter(|record| record.class == class && record.node_id == node_id)
            .map(|record| record.event.clone())
            .collect())
    }
}

impl HistoryProvider for Vec<HistoryRecord> {
    fn get_history(&self, class: &str, node_id: &str) -> Result<Vec<ChangeEvent>> {
        self.as_slice().get_history(class, node_id)
    }
}
