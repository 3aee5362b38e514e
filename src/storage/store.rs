//! JSON storage for shortcuts
//!
//! The whole database lives in one JSON document that is read at the start
//! of every invocation and rewritten in full after a successful mutation.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::Database;

/// File name of the shortcuts document
pub const DATABASE_FILE: &str = "shortcuts.json";

/// Store for the shortcut database
pub struct ShortcutStore {
    path: PathBuf,
}

impl ShortcutStore {
    /// Creates a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the database, creating an empty document if none exists yet
    pub fn load(&self) -> Result<Database> {
        if !self.path.exists() {
            let db = Database::new();
            self.save(&db)?;
            return Ok(db);
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read shortcuts: {}", self.path.display()))?;

        if content.trim().is_empty() {
            return Ok(Database::new());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse shortcuts: {}", self.path.display()))
    }

    /// Writes the whole database (full rewrite)
    pub fn save(&self, db: &Database) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let temp_path = self.path.with_extension("json.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            let mut writer = BufWriter::new(&file);
            serde_json::to_writer_pretty(&mut writer, db).context("Failed to serialize shortcuts")?;
            writeln!(writer).context("Failed to write shortcuts")?;
            writer.flush().context("Failed to flush shortcuts")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}
