use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum FoshError {
    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl From<std::io::Error> for FoshError {
    fn from(err: std::io::Error) -> Self {
        FoshError::Io(Arc::new(err))
    }
}

impl FoshError {
    /// The underlying I/O error kind, if this is a filesystem failure.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            FoshError::Io(e) => Some(e.kind()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FoshError>;
