//! Pictorial summaries - counts read off the illustration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{InputError, InputResult};

/// Placeholder rendered for any slot the summary does not provide.
pub const MISSING_VALUE: &str = "?";

/// The semantically distinguished slots of a pictorial summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PictorialSlot {
    Roots,
    Leaves,
    Buds,
    BudState,
    BudColour,
}

impl PictorialSlot {
    /// Column names tried in priority order; the first present one wins.
    pub fn candidates(&self) -> &'static [&'static str] {
        match self {
            PictorialSlot::Roots => &["roots_count"],
            PictorialSlot::Leaves => &["leaf_groups_count", "leaf_pairs_count"],
            PictorialSlot::Buds => &["bud_count"],
            PictorialSlot::BudState => &["bud_state"],
            PictorialSlot::BudColour => &["bud_colour"],
        }
    }
}

/// One row of named pictorial features.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictorialSummary {
    fields: BTreeMap<String, String>,
}

impl PictorialSummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a feature value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Raw value of a column. Blank values count as absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Resolve a slot through its candidate columns.
    pub fn slot(&self, slot: PictorialSlot) -> Option<&str> {
        slot.candidates().iter().find_map(|name| self.get(name))
    }

    /// Resolve a slot, substituting the placeholder when absent.
    pub fn slot_or_placeholder(&self, slot: PictorialSlot) -> &str {
        self.slot(slot).unwrap_or(MISSING_VALUE)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// Load the first data row of a pictorial counts table.
///
/// A missing file or a header without data rows yields an empty summary.
/// Fails with [`InputError::Malformed`] when the table cannot be parsed.
pub fn load_pictorial(path: &Path) -> InputResult<PictorialSummary> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "no pictorial counts found, using placeholders");
        return Ok(PictorialSummary::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| InputError::io(path, e))?;
    let summary = parse_pictorial(&content).map_err(|e| InputError::malformed(path, e))?;
    tracing::debug!(path = %path.display(), fields = summary.len(), "loaded pictorial counts");
    Ok(summary)
}

/// Parse CSV text with a header row, keeping only the first data row.
pub fn parse_pictorial(content: &str) -> Result<PictorialSummary, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let Some(row) = reader.records().next() else {
        return Ok(PictorialSummary::default());
    };
    let row = row?;

    let fields = headers
        .iter()
        .zip(row.iter())
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .collect();

    Ok(PictorialSummary { fields })
}
