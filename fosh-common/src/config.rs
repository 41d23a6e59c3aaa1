// fosh-common/src/config.rs
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::{FoshError, Result};

// Where the installed command lives unless FOSH_LINK_PATH says otherwise.
const DEFAULT_LINK_PATH: &str = "/sbin/fosh";
const DEFAULT_SCRIPT_NAME: &str = "fosh";
const LINK_PATH_ENV: &str = "FOSH_LINK_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub link_path: PathBuf,
    pub script_dir: PathBuf,
    pub script_name: OsString,
}

impl Config {
    pub fn new(
        link_path: impl Into<PathBuf>,
        script_dir: impl Into<PathBuf>,
        script_name: impl Into<OsString>,
    ) -> Self {
        Self {
            link_path: link_path.into(),
            script_dir: script_dir.into(),
            script_name: script_name.into(),
        }
    }

    pub fn load() -> Result<Self> {
        debug!("Loading fosh configuration");

        let link_path = env::var(LINK_PATH_ENV)
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                debug!(
                    "{} not set or empty, falling back to default: {}",
                    LINK_PATH_ENV, DEFAULT_LINK_PATH
                );
                DEFAULT_LINK_PATH.to_string()
            });

        let exe = env::current_exe().map_err(|e| {
            FoshError::Config(format!("Could not locate the running executable: {e}"))
        })?;
        let script_dir = exe
            .parent()
            .ok_or_else(|| {
                FoshError::Config(format!(
                    "Executable path {} has no parent directory",
                    exe.display()
                ))
            })?
            .to_path_buf();
        let script_name = exe
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from(DEFAULT_SCRIPT_NAME));

        debug!(
            "Effective link path: {}, script: {}/{}",
            link_path,
            script_dir.display(),
            Path::new(&script_name).display()
        );
        Ok(Self::new(link_path, script_dir, script_name))
    }

    pub fn link_path(&self) -> &Path {
        &self.link_path
    }

    pub fn script_dir(&self) -> &Path {
        &self.script_dir
    }

    /// Target of the installed link: `script_dir + "/" + script_name`,
    /// concatenated as-is without any path normalization.
    pub fn link_target(&self) -> PathBuf {
        let mut target = self.script_dir.as_os_str().to_os_string();
        target.push("/");
        target.push(&self.script_name);
        PathBuf::from(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_target_joins_dir_and_name_with_slash() {
        let config = Config::new("/sbin/fosh", "/opt/fosh/bin", "fosh.py");
        assert_eq!(config.link_target(), PathBuf::from("/opt/fosh/bin/fosh.py"));
    }

    #[test]
    fn link_target_does_not_normalize() {
        let config = Config::new("/sbin/fosh", "/opt/fosh/", "fosh");
        assert_eq!(
            config.link_target().as_os_str(),
            std::ffi::OsStr::new("/opt/fosh//fosh")
        );

        // An absolute-looking name is appended, not substituted as Path::join would.
        let config = Config::new("/sbin/fosh", "/opt", "/fosh");
        assert_eq!(
            config.link_target().as_os_str(),
            std::ffi::OsStr::new("/opt//fosh")
        );
    }

    #[test]
    fn load_points_at_running_executable() {
        let config = Config::load().unwrap();
        let exe = env::current_exe().unwrap();
        assert_eq!(config.link_target(), exe);
        assert!(!config.link_path().as_os_str().is_empty());
    }
}
