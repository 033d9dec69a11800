//! Pipeline configuration - where inputs are read from and artifacts written to.
//!
//! Maps directly to an optional `folio.toml`. Every field has a default, so an
//! absent file or an empty table is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::frame::{FrameConfig, FrameKind};

/// Configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    #[error("failed to parse config {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    #[error("invalid config: {0}")]
    Validation(String),
}

/// The root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub frame: FrameConfig,

    #[serde(default)]
    pub inputs: InputPaths,

    #[serde(default)]
    pub outputs: OutputLayout,
}

/// Locations of the three input documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPaths {
    /// Operator sequence / histogram (JSON).
    #[serde(default = "default_sequence_path")]
    pub sequence: PathBuf,

    /// Pictorial feature counts (CSV).
    #[serde(default = "default_pictorial_path")]
    pub pictorial: PathBuf,

    /// Decision note (plain text).
    #[serde(default = "default_decision_path")]
    pub decision: PathBuf,
}

fn default_sequence_path() -> PathBuf {
    "operator_sequence.json".into()
}
fn default_pictorial_path() -> PathBuf {
    "pictorial_counts.csv".into()
}
fn default_decision_path() -> PathBuf {
    "decision_note.txt".into()
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            sequence: default_sequence_path(),
            pictorial: default_pictorial_path(),
            decision: default_decision_path(),
        }
    }
}

/// Directory and naming of the written artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLayout {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// File name prefix, usually the folio name.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Also write each full frame under a `_translation` name.
    #[serde(default)]
    pub mirror_full_text: bool,
}

fn default_output_dir() -> PathBuf {
    ".".into()
}
fn default_prefix() -> String {
    "f1r".into()
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            prefix: default_prefix(),
            mirror_full_text: false,
        }
    }
}

/// Paths of every artifact written for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameArtifacts {
    pub full: PathBuf,
    pub head: PathBuf,
    pub tail: PathBuf,
    pub merged: PathBuf,
    pub mirror: Option<PathBuf>,
}

impl OutputLayout {
    fn file(&self, kind: FrameKind, suffix: &str) -> PathBuf {
        self.dir.join(format!(
            "{}_translation_{}{}.txt",
            self.prefix,
            kind.file_tag(),
            suffix
        ))
    }

    /// Artifact paths for a frame, e.g. `f1r_translation_12key_lab.txt`.
    pub fn artifacts(&self, kind: FrameKind) -> FrameArtifacts {
        FrameArtifacts {
            full: self.file(kind, ""),
            head: self.file(kind, "_lab"),
            tail: self.file(kind, "_spirit"),
            merged: self.file(kind, "_merged"),
            mirror: self
                .mirror_full_text
                .then(|| self.file(kind, "_translation")),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a file path, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame.top_operators == 0 {
            return Err(ConfigError::Validation(
                "frame.top_operators must be at least 1".into(),
            ));
        }

        if self.frame.folio.trim().is_empty() {
            return Err(ConfigError::Validation("frame.folio must not be empty".into()));
        }

        if self.outputs.prefix.trim().is_empty() {
            return Err(ConfigError::Validation(
                "outputs.prefix must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
