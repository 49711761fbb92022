//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - The destination directory is the single required positional argument.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::LogLevel;

/// Collect files listed on standard input into one destination directory,
/// renaming on collision so no two collected files share a name.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Collect files listed on stdin into a destination directory"
)]
pub struct Args {
    /// Destination directory for collected files.
    #[arg(value_name = "DEST", value_hint = ValueHint::DirPath)]
    pub dest: PathBuf,

    /// Print the planned cp/mv actions without touching the filesystem.
    #[arg(
        short = 'n',
        long,
        help = "Do not copy any files, only print what would be done"
    )]
    pub simulate: bool,

    /// Move files instead of copying them.
    #[arg(short = 'm', long = "move", help = "Move files instead of copying them")]
    pub move_files: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use the default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }
}

pub fn parse() -> Args {
    Args::parse()
}
