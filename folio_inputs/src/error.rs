//! Errors raised while loading input records.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn an input document into a record.
#[derive(Debug, Error)]
pub enum InputError {
    /// The document exists but is not in its expected structured form.
    #[error("malformed input {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    /// The document exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InputError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        InputError::Malformed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InputError::Io {
            path: path.into(),
            source,
        }
    }

    /// Path of the input that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            InputError::Malformed { path, .. } | InputError::Io { path, .. } => path,
        }
    }
}

pub type InputResult<T> = Result<T, InputError>;
