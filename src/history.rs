//! Bounded match history persisted as JSON

use crate::error::{Result, ResumeMatcherError};
use chrono::{DateTime, Local};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub filename: String,
    pub score: f64,
    pub date: String,
}

impl HistoryEntry {
    pub fn new(filename: impl Into<String>, score: f64, timestamp: DateTime<Local>) -> Self {
        Self {
            filename: filename.into(),
            score,
            date: timestamp.format(DATE_FORMAT).to_string(),
        }
    }
}

/// On-disk layout: `{"history": [...]}`, newest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

pub struct HistoryStore {
    path: PathBuf,
    max_entries: usize,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>, max_entries: usize) -> Self {
        Self {
            path: path.into(),
            max_entries,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable files yield an empty history
    pub fn load(&self) -> History {
        if !self.path.exists() {
            return History::default();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Could not read history {}: {}", self.path.display(), e);
                return History::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!("Ignoring corrupt history {}: {}", self.path.display(), e);
            History::default()
        })
    }

    pub fn save(&self, history: &History) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ResumeMatcherError::History(format!(
                    "Failed to create history directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = serde_json::to_string_pretty(history)?;
        std::fs::write(&self.path, content).map_err(|e| {
            ResumeMatcherError::History(format!(
                "Failed to write history {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Insert `entry` as the newest record and keep the most recent entries
    pub fn record(&self, entry: HistoryEntry) -> Result<History> {
        let mut history = self.load();
        history.history.insert(0, entry);
        history.history.truncate(self.max_entries);
        self.save(&history)?;

        info!(
            "Recorded match in history ({} entries)",
            history.history.len()
        );
        Ok(history)
    }

    pub fn clear(&self) -> Result<()> {
        self.save(&History::default())
    }
}
