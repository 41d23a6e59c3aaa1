// fosh-core/src/install.rs
//! The `install-fosh` command: places a link to the running executable at a
//! fixed path so it can be called as a system command.
//!
//! The existence check does not look at what occupies the link path. A stale
//! file or a link to somewhere else is reported as already installed.
use std::io;
use std::path::Path;
use std::sync::Arc;

use fosh_common::args::CommandArgs;
use fosh_common::config::Config;
use fosh_common::error::{FoshError, Result};
use tracing::debug;

use crate::fs::{HostFs, LinkFs};
use crate::registry::CommandRegistry;

/// Version of this install step. Not consulted anywhere yet.
pub const SCRIPT_VERSION: u32 = 1;

pub const COMMAND_NAME: &str = "install-fosh";
pub const COMMAND_HELP: &str = "Install the fosh script on the current server.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Created,
    AlreadyInstalled,
}

pub fn build_commands(commands: &mut impl CommandRegistry) {
    commands.add(COMMAND_NAME, install_fosh, COMMAND_HELP);
}

/// Install/configure fosh on the current machine.
pub fn install_fosh(config: &Config, _args: &CommandArgs) -> Result<()> {
    debug!("Install fosh");
    ensure_link(&HostFs, config.link_path(), &config.link_target())?;
    Ok(())
}

/// Creates `link -> target` unless something already occupies `link`.
///
/// The check and the creation are two steps. Creation itself refuses an
/// occupied path, so losing a race to another installer ends up as
/// `AlreadyInstalled` instead of an error.
pub fn ensure_link(fs: &impl LinkFs, link: &Path, target: &Path) -> Result<InstallOutcome> {
    if fs.entry_exists(link) {
        debug!("   Already installed");
        return Ok(InstallOutcome::AlreadyInstalled);
    }

    debug!("Create symlink {}", link.display());
    match fs.symlink(target, link) {
        Ok(()) => Ok(InstallOutcome::Created),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            debug!("   Already installed (created concurrently)");
            Ok(InstallOutcome::AlreadyInstalled)
        }
        Err(e) => Err(FoshError::Io(Arc::new(io::Error::new(
            e.kind(),
            format!(
                "Failed to create symlink {} -> {}: {}",
                link.display(),
                target.display(),
                e
            ),
        )))),
    }
}
