//! Move operation.
//! - Atomic rename where the filesystem supports it.
//! - Cross-device renames fall back to copy + remove-source.
//! - On Unix, best-effort fsync of the destination directory after a rename.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, trace};

use super::copy::copy_file;
use super::helpers::io_error_with_help;

/// Move `src` to `dst`. Rename when possible, otherwise copy then remove the
/// source (EXDEV / not-same-device).
pub fn move_file(src: &Path, dst: &Path) -> Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => {
            #[cfg(unix)]
            if let Some(parent) = dst.parent() {
                // Ignore fsync errors to avoid turning a successful rename into a failure.
                let _ = fsync_dir(parent);
            }
            trace!(src = %src.display(), dst = %dst.display(), "renamed file atomically");
            Ok(())
        }
        Err(e) if is_cross_device(&e) => {
            debug!(src = %src.display(), dst = %dst.display(), "cross-device rename; falling back to copy + remove");
            copy_file(src, dst)?;
            fs::remove_file(src).map_err(io_error_with_help("remove source after copy", src))?;
            Ok(())
        }
        Err(e) => Err(io_error_with_help("rename file", src)(e)),
    }
}

fn is_cross_device(e: &io::Error) -> bool {
    // std::io::ErrorKind has no CrossDeviceLink variant on stable platforms,
    // so detect EXDEV / ERROR_NOT_SAME_DEVICE via raw OS error codes.
    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            if code == libc::EXDEV {
                return true;
            }
        }
        #[cfg(windows)]
        {
            // ERROR_NOT_SAME_DEVICE
            if code == 17 {
                return true;
            }
        }
    }
    false
}

#[cfg(unix)]
fn fsync_dir(dir: &Path) -> io::Result<()> {
    let f = fs::File::open(dir)?;
    f.sync_all()
}
