use std::path::PathBuf;

use crate::RegisterId;

/// Errors that abort a vbrtool run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: malformed or incomplete bank, register {register} is missing", .path.display())]
    IncompleteBank { path: PathBuf, register: RegisterId },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
