// fosh-common/src/lib.rs
pub mod args;
pub mod config;
pub mod error;

// Re-export key types
pub use args::CommandArgs;
pub use config::Config;
pub use error::{FoshError, Result};
