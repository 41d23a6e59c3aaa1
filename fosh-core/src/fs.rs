// fosh-core/src/fs.rs
//! Filesystem primitives the installer consumes.
use std::io;
use std::os::unix::fs::symlink;
use std::path::Path;

use tracing::debug;

/// The two operations needed to place a link. Tests substitute doubles.
pub trait LinkFs {
    /// True if any entry (file, directory, or link, dangling or not) is at `path`.
    fn entry_exists(&self, path: &Path) -> bool;

    /// Creates `link` as a symbolic link to `target`. Fails with
    /// `AlreadyExists` if `link` is occupied.
    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostFs;

impl LinkFs for HostFs {
    fn entry_exists(&self, path: &Path) -> bool {
        path.symlink_metadata().is_ok()
    }

    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        debug!("Creating symlink: {} -> {}", link.display(), target.display());
        symlink(target, link)
    }
}
