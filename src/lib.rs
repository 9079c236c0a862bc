//! Behavior Learning Log library
//!
//! Appends dated trigger/pattern/action entries to `learning.md` at a
//! repository root. The file is created with a fixed header on first use and
//! grows append-only afterwards.
//!
//! # Example
//!
//! ```no_run
//! use learning_log::{append_learning, LearningEntry};
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let entry = LearningEntry::new(
//!         "First workflow attempt failed",
//!         "Extract behavioral rule after process corrections",
//!         "Write learning entry immediately",
//!     );
//!     let path = append_learning(Path::new("."), &entry)?;
//!     println!("{}", path.display());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod learning;

pub use learning::{append_learning, LearningEntry, LOG_FILE_NAME};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
