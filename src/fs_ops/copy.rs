//! Durable file copy.
//!
//! - Buffered I/O with large (1 MiB) buffers to reduce syscall count.
//! - Flushes and fsyncs the destination before returning.
//! - Propagates the source's permission mode bits to the destination
//!   (readonly attribute on Windows).
//! - Overwrites an existing destination: name uniqueness is decided per run
//!   by the rename registry, not by filesystem state.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::trace;

use super::helpers::io_error_with_help;

const BUF_SIZE: usize = 1024 * 1024; // 1 MiB buffers

/// Copy `src` -> `dst`, fsync the destination, then mirror the source's
/// permission bits onto it. Any failure, including setting permissions, is
/// fatal to the copy.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    let bytes =
        copy_streaming(src, dst).map_err(io_error_with_help("copy file to destination", dst))?;
    propagate_permissions(src, dst)?;
    trace!(src = %src.display(), dst = %dst.display(), bytes, "copied file");
    Ok(())
}

/// Stream the file contents and force them to stable storage.
/// Returns the number of bytes written.
fn copy_streaming(src: &Path, dst: &Path) -> io::Result<u64> {
    let src_f = File::open(src)?;
    // create() truncates an existing destination; see module docs.
    let dst_f = File::create(dst)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(bytes)
}

/// Mirror the source's mode bits (Unix) or readonly attribute (Windows) onto `dst`.
fn propagate_permissions(src: &Path, dst: &Path) -> Result<()> {
    let src_meta = fs::metadata(src).with_context(|| format!("stat {}", src.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = src_meta.permissions().mode() & 0o777;
        fs::set_permissions(dst, fs::Permissions::from_mode(mode))
            .with_context(|| format!("set mode {:o} on {}", mode, dst.display()))?;
        trace!(path = %dst.display(), mode = format!("{:o}", mode), "set permissions on destination");
    }
    #[cfg(windows)]
    {
        let mut perms = fs::metadata(dst)
            .with_context(|| format!("stat {}", dst.display()))?
            .permissions();
        perms.set_readonly(src_meta.permissions().readonly());
        fs::set_permissions(dst, perms)
            .with_context(|| format!("set readonly attribute on {}", dst.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copy_small_file_ok() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("src.txt");
        let dst_path = dir.path().join("dst.txt");

        let data = b"hello world";
        fs::write(&src_path, data).unwrap();

        copy_file(&src_path, &dst_path).unwrap();

        let got = fs::read(&dst_path).unwrap();
        assert_eq!(&got, data);
        // Source stays in place on copy.
        assert!(src_path.exists());
    }

    #[test]
    fn copy_zero_length_ok() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("empty");
        let dst_path = dir.path().join("out");
        File::create(&src_path).unwrap();

        copy_file(&src_path, &dst_path).unwrap();
        assert_eq!(fs::metadata(&dst_path).unwrap().len(), 0);
    }

    #[test]
    fn overwrites_existing_destination() {
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("src");
        let dst_path = dir.path().join("dst");
        fs::write(&src_path, b"fresh").unwrap();
        fs::write(&dst_path, b"stale-and-longer").unwrap();

        copy_file(&src_path, &dst_path).unwrap();
        assert_eq!(fs::read(&dst_path).unwrap(), b"fresh");
    }

    #[test]
    fn missing_source_fails() {
        let dir = tempdir().unwrap();
        let err = copy_file(&dir.path().join("nope"), &dir.path().join("out")).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[cfg(unix)]
    #[test]
    fn mode_bits_are_propagated() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempdir().unwrap();
        let src_path = dir.path().join("script.sh");
        let dst_path = dir.path().join("collected.sh");
        fs::write(&src_path, b"#!/bin/sh\n").unwrap();
        fs::set_permissions(&src_path, fs::Permissions::from_mode(0o755)).unwrap();

        copy_file(&src_path, &dst_path).unwrap();

        let mode = fs::metadata(&dst_path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o755);
    }
}
