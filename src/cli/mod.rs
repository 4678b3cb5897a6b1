//! CLI interface for librhyme
//!
//! Provides command-line utilities for rhyme queries and lexicon snapshots.

pub mod args;
pub mod commands;
pub mod detect;
pub mod paths;

pub use args::{Cli, Commands, DictFormat};
pub use detect::{detect_format, FormatDetection};
pub use paths::{config_dir, PersistentConfig};
