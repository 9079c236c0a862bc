//! CLI interface for learning-log

use anyhow::{bail, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use crate::learning::{append_learning, LearningEntry};

#[derive(Parser)]
#[command(name = "learning-log")]
#[command(about = "Append a behavior-learning entry to learning.md in the repository root", long_about = None)]
#[command(version)]
struct Cli {
    /// Absolute or relative repository root path
    #[arg(long)]
    repo_root: PathBuf,

    /// Short factual trigger description
    #[arg(long)]
    trigger: String,

    /// Abstract reusable behavior rule
    #[arg(long)]
    pattern: String,

    /// Concrete future action
    #[arg(long)]
    action: String,
}

/// Parse arguments, append the entry, and print the log file path.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let repo_root = resolve_repo_root(&cli.repo_root)?;
    let entry = LearningEntry::new(&cli.trigger, &cli.pattern, &cli.action);
    let path = append_learning(&repo_root, &entry)?;

    println!("{}", path.display());
    Ok(())
}

/// Expand `~`, resolve to an absolute path, and require an existing directory.
/// Fails before anything is written.
fn resolve_repo_root(raw: &Path) -> Result<PathBuf> {
    let expanded = expand_home(raw);
    let resolved = expanded
        .canonicalize()
        .unwrap_or_else(|_| absolutize(&expanded));

    if !resolved.is_dir() {
        bail!("Invalid --repo-root directory: {}", resolved.display());
    }
    Ok(resolved)
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Fallback for paths that cannot be canonicalized (nonexistent roots), so the
/// error message still shows a resolved absolute path.
fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}
