// fosh-core/src/lib.rs

pub mod fs;
pub mod install;
pub mod registry;

// Re-export key types for easier use by the CLI crate
pub use install::{InstallOutcome, SCRIPT_VERSION};
pub use registry::{CommandEntry, CommandRegistry, Commands, Handler};
