//! Layer splitting and merging.
//!
//! A rendered frame is cut at its marker line into a head layer (everything
//! before the marker) and a tail layer (everything after it). The marker itself
//! belongs to neither. The merged layer pairs head and tail lines by position:
//!
//! | head      | tail      | merged          |
//! |-----------|-----------|-----------------|
//! | non-blank | non-blank | `head / tail`   |
//! | non-blank | blank     | `head`          |
//! | blank     | any       | dropped         |
//!
//! Pairing stops at the shorter layer. Unpaired lines still appear in their own
//! layer's text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Joins a head line and its tail partner in the merged layer.
pub const MERGE_SEPARATOR: &str = " / ";

/// The marker line was not found in the frame text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no layer marker line {marker:?} in frame text")]
pub struct MissingMarkerError {
    pub marker: String,
}

/// The two layers of a frame and their line-by-line merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerPair {
    pub head: Vec<String>,
    pub tail: Vec<String>,
    pub merged: Vec<String>,
}

impl LayerPair {
    /// Build the pair from already separated layers.
    pub fn from_layers(head: Vec<String>, tail: Vec<String>) -> Self {
        let merged = merge_layers(&head, &tail);
        Self { head, tail, merged }
    }

    /// Head layer text, trimmed as a whole.
    pub fn head_text(&self) -> String {
        trimmed_text(&self.head)
    }

    /// Tail layer text, trimmed as a whole.
    pub fn tail_text(&self) -> String {
        trimmed_text(&self.tail)
    }

    /// Merged layer text.
    pub fn merged_text(&self) -> String {
        let mut text = self.merged.join("\n");
        text.push('\n');
        text
    }
}

/// Join lines and trim leading/trailing whitespace of the whole block, leaving
/// inner lines untouched.
fn trimmed_text(lines: &[String]) -> String {
    let joined = lines.join("\n");
    let mut text = joined.trim().to_string();
    text.push('\n');
    text
}

/// Pair head and tail lines by position.
pub fn merge_layers<S: AsRef<str>>(head: &[S], tail: &[S]) -> Vec<String> {
    head.iter()
        .zip(tail)
        .filter_map(|(h, t)| {
            let h = h.as_ref().trim();
            let t = t.as_ref().trim();
            match (h.is_empty(), t.is_empty()) {
                (false, false) => Some(format!("{}{}{}", h, MERGE_SEPARATOR, t)),
                (false, true) => Some(h.to_string()),
                (true, _) => None,
            }
        })
        .collect()
}

/// Split frame lines at the first line equal to `marker` and merge the layers.
pub fn split_and_merge<S: AsRef<str>>(
    lines: &[S],
    marker: &str,
) -> Result<LayerPair, MissingMarkerError> {
    let at = lines
        .iter()
        .position(|line| line.as_ref() == marker)
        .ok_or_else(|| MissingMarkerError {
            marker: marker.to_string(),
        })?;

    let to_owned = |ls: &[S]| ls.iter().map(|l| l.as_ref().to_string()).collect::<Vec<_>>();
    Ok(LayerPair::from_layers(
        to_owned(&lines[..at]),
        to_owned(&lines[at + 1..]),
    ))
}

/// Split document text, one line per `\n`.
pub fn split_text(text: &str, marker: &str) -> Result<LayerPair, MissingMarkerError> {
    let lines: Vec<&str> = text.lines().collect();
    split_and_merge(&lines, marker)
}
