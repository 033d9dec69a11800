//! Error types for translation runs.

use folio_inputs::InputError;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Anything that aborts a translation run.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error(transparent)]
    Input(#[from] InputError),

    /// A frame lacks the line that separates its two layers.
    #[error("{frame} frame has no layer marker line {marker:?}")]
    MissingMarker { frame: String, marker: String },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type TranslationResult<T> = Result<T, TranslationError>;
