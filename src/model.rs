use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Format of the `timestamp` field of a log entry, in local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A study task. Tasks have no identifier, two tasks may share a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub estimated_minutes: u32,
}

/// A completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Copy of the task name at completion time.
    pub task: String,
    /// In minutes.
    pub duration: u32,
    pub timestamp: String,
}

/// The whole persisted state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

/// An open data file: the store is loaded once and every mutation
/// rewrites the whole file.
#[derive(Debug)]
pub struct Journal {
    path: PathBuf,
    store: Store,
}

impl Journal {
    /// Open the journal at `path`, creating it with empty arrays if it
    /// does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Journal> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            let journal = Journal {
                path,
                store: Store::default(),
            };
            journal.save()?;
            return Ok(journal);
        }

        let file = File::open(&path)
            .with_context(|| format!("Failed to open data file {}.", path.display()))?;
        let store: Store = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse data file {}.", path.display()))?;
        debug!(
            path = %path.display(),
            tasks = store.tasks.len(),
            logs = store.logs.len(),
            "loaded store"
        );
        Ok(Journal { path, store })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[Task] {
        &self.store.tasks
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.store.logs
    }

    /// Append a task and persist.
    pub fn add_task(&mut self, name: &str, estimated_minutes: u32) -> Result<()> {
        self.store.tasks.push(Task {
            name: name.to_string(),
            estimated_minutes,
        });
        self.save().context("Failed to save new task.")?;
        info!(name, estimated_minutes, "task added");
        Ok(())
    }

    /// Append a log entry stamped with the current local time and persist.
    pub fn log_completion(&mut self, name: &str, duration_minutes: u32) -> Result<()> {
        self.store.logs.push(LogEntry {
            task: name.to_string(),
            duration: duration_minutes,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        });
        self.save().context("Failed to save completed session.")?;
        info!(name, duration_minutes, "completion logged");
        Ok(())
    }

    /// Rewrite the whole data file.
    pub fn save(&self) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to write data file {}.", self.path.display()))?;
        let mut writer = BufWriter::new(file);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
        self.store
            .serialize(&mut ser)
            .context("Failed to serialize store.")?;
        writer.flush().context("Failed to flush data file.")?;
        debug!(
            path = %self.path.display(),
            tasks = self.store.tasks.len(),
            logs = self.store.logs.len(),
            "saved store"
        );
        Ok(())
    }
}
