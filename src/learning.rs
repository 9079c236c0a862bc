//! Behavior Learning Log - append-only markdown entries at a repository root
//!
//! Writes dated trigger/pattern/action records to `<repo-root>/learning.md`,
//! creating the file with a fixed header on first use.

use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the learning log inside the repository root.
pub const LOG_FILE_NAME: &str = "learning.md";

/// Header written when the log file is first created.
const LOG_HEADER: &str = "# Behavior Learning Log\n\n";

/// A single dated trigger/pattern/action record.
#[derive(Debug, Clone)]
pub struct LearningEntry {
    pub date: String,
    pub trigger: String,
    pub pattern: String,
    pub action: String,
}

impl LearningEntry {
    /// Build an entry dated today (local date), trimming surrounding
    /// whitespace from each field. Empty fields are accepted.
    pub fn new(trigger: &str, pattern: &str, action: &str) -> Self {
        Self {
            date: Local::now().format("%Y-%m-%d").to_string(),
            trigger: trigger.trim().to_string(),
            pattern: pattern.trim().to_string(),
            action: action.trim().to_string(),
        }
    }

    /// Render the fixed markdown block. Ends with a single newline after the
    /// Action line; the blank line between entries comes from the separator
    /// chosen at append time.
    fn render(&self) -> String {
        format!(
            "## Learning Entry - {date}\n\
             - Date: {date}\n\
             - Trigger: {trigger}\n\
             - Pattern: {pattern}\n\
             - Action: {action}\n",
            date = self.date,
            trigger = self.trigger,
            pattern = self.pattern,
            action = self.action,
        )
    }
}

/// Create-or-append `entry` to `learning.md` under `repo_root`.
///
/// Creates the file with the log header if absent; otherwise appends after a
/// separator that keeps at most one blank line at the seam. Returns the path
/// to the log file. Not transactional: concurrent writers race.
pub fn append_learning(repo_root: &Path, entry: &LearningEntry) -> Result<PathBuf> {
    let path = repo_root.join(LOG_FILE_NAME);
    let block = entry.render();

    let content = if path.exists() {
        let existing = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let separator = if existing.ends_with("\n\n") {
            ""
        } else if existing.ends_with('\n') {
            "\n"
        } else {
            "\n\n"
        };
        format!("{existing}{separator}{block}")
    } else {
        format!("{LOG_HEADER}{block}")
    };

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    debug!("Appended learning entry to {}", path.display());
    Ok(path)
}
