//! Core library for `collectf`.
//!
//! Collects file paths supplied line-by-line on stdin into a single
//! destination directory, copying or moving each one under a name guaranteed
//! unique for the run. The interesting piece is [`rename::RenameRegistry`],
//! which owns the name-collision bookkeeping; everything else is plumbing
//! around it (stdin line source, copy/move primitives, CLI surface).

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod input;
pub mod logging;
pub mod output;
pub mod rename;
pub mod shutdown;

pub use config::{Config, LogLevel};
pub use errors::CollectError;
pub use rename::RenameRegistry;
