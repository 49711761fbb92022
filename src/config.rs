//! Runtime configuration.
//! - Config holds the settings for one run, built from parsed CLI args.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::Args;
use crate::errors::CollectError;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Settings for one collection run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory collected files land in
    pub dest: PathBuf,
    /// If true, print actions but do not modify the filesystem
    pub simulate: bool,
    /// If true, move files instead of copying them
    pub move_files: bool,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Emit logs as structured JSON
    pub json_logs: bool,
}

impl Config {
    /// Build a Config from parsed CLI arguments.
    pub fn from_args(args: &Args) -> Self {
        Self {
            dest: args.dest.clone(),
            simulate: args.simulate,
            move_files: args.move_files,
            log_level: args.effective_log_level().unwrap_or_default(),
            json_logs: args.json,
        }
    }

    /// Validate the destination directory.
    ///
    /// - Created if missing.
    /// - An existing non-directory is a fatal typed error.
    /// - Writability is probed with a create-and-remove temp file so a
    ///   permission problem surfaces before any input is consumed.
    pub fn validate(&self) -> Result<()> {
        if self.dest.exists() && !self.dest.is_dir() {
            return Err(CollectError::DestNotDirectory(self.dest.clone()).into());
        }
        if !self.dest.exists() {
            fs::create_dir_all(&self.dest).with_context(|| {
                format!("Failed to create destination directory '{}'", self.dest.display())
            })?;
            info!("Created destination directory: {}", self.dest.display());
        }

        // writability probe: create & remove a small temp file
        let probe = self
            .dest
            .join(format!(".collectf_probe_{}.tmp", std::process::id()));
        match fs::OpenOptions::new().create_new(true).write(true).open(&probe) {
            Ok(_) => {
                let _ = fs::remove_file(&probe);
                debug!("Destination writable: {}", self.dest.display());
                Ok(())
            }
            Err(e) => Err(e).with_context(|| {
                format!(
                    "Cannot write to destination '{}'. Check directory permissions.",
                    self.dest.display()
                )
            }),
        }
    }
}
