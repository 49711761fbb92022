//! Typed error definitions for collectf.
//! Provides the small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("Destination exists but is not a directory: {0}")]
    DestNotDirectory(PathBuf),

    #[error("Operation interrupted by user")]
    Interrupted,
}
