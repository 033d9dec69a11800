//! Operator sequence records - the histogram of operator symbols seen in the text.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::error::{InputError, InputResult};

/// Key holding the `[symbol, count]` histogram in the upstream document.
pub const HISTOGRAM_KEY: &str = "operator_histogram";

/// Key holding the raw operator sequence in the upstream document.
pub const SEQUENCE_KEY: &str = "operator_sequence";

/// One histogram entry: how often an operator symbol appears.
///
/// Both sides keep the text of the upstream scalar, so `14.0` stays `14.0`
/// and a numeric symbol `5` shows as `5`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramEntry {
    pub symbol: String,
    pub count: String,
}

impl HistogramEntry {
    pub fn new(symbol: impl Into<String>, count: impl std::fmt::Display) -> Self {
        Self {
            symbol: symbol.into(),
            count: count.to_string(),
        }
    }
}

impl std::fmt::Display for HistogramEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×{}", self.symbol, self.count)
    }
}

/// Upstream encodings of a histogram entry.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Pair(Value, Value),
    Keyed {
        #[serde(alias = "operator", alias = "symbol")]
        op: Value,
        count: Value,
    },
}

/// The operator histogram in upstream order, most frequent first.
///
/// The order is trusted as given and never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    histogram: Vec<HistogramEntry>,
    sequence: Vec<String>,
}

impl SequenceRecord {
    /// Create a record from histogram entries.
    pub fn new(histogram: Vec<HistogramEntry>) -> Self {
        Self {
            histogram,
            sequence: Vec::new(),
        }
    }

    /// Build a record from an already-parsed document.
    ///
    /// A document without a histogram yields an empty record. Entries that are
    /// neither `[symbol, count]` pairs nor `{op, count}` objects are skipped;
    /// every readable pair is kept whatever its value types.
    pub fn from_value(doc: &Value) -> Self {
        let histogram = match doc.get(HISTOGRAM_KEY) {
            Some(Value::Array(entries)) => entries
                .iter()
                .enumerate()
                .filter_map(|(idx, raw)| {
                    let entry = parse_entry(raw);
                    if entry.is_none() {
                        tracing::warn!(index = idx, entry = %raw, "skipping unreadable histogram entry");
                    }
                    entry
                })
                .collect(),
            Some(other) => {
                tracing::warn!(found = %other, "{} is not an array, ignoring it", HISTOGRAM_KEY);
                Vec::new()
            }
            None => Vec::new(),
        };

        let sequence = doc
            .get(SEQUENCE_KEY)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            histogram,
            sequence,
        }
    }

    /// Histogram entries in upstream order.
    pub fn histogram(&self) -> &[HistogramEntry] {
        &self.histogram
    }

    /// Length of the raw operator sequence, zero when the document carried none.
    pub fn sequence_len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }
}

fn parse_entry(raw: &Value) -> Option<HistogramEntry> {
    let (symbol, count) = match serde_json::from_value::<RawEntry>(raw.clone()).ok()? {
        RawEntry::Pair(symbol, count) => (symbol, count),
        RawEntry::Keyed { op, count } => (op, count),
    };
    Some(HistogramEntry {
        symbol: display_text(symbol),
        count: display_text(count),
    })
}

/// Strings are shown without quotes, anything else as its JSON text.
fn display_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Load an operator sequence document.
///
/// Fails with [`InputError::Malformed`] when the file is not valid UTF-8 JSON.
/// No schema is enforced beyond that.
pub fn load_sequence(path: &Path) -> InputResult<SequenceRecord> {
    let bytes = std::fs::read(path).map_err(|e| InputError::io(path, e))?;
    let doc: Value = serde_json::from_slice(&bytes).map_err(|e| InputError::malformed(path, e))?;
    let record = SequenceRecord::from_value(&doc);
    tracing::debug!(
        path = %path.display(),
        entries = record.histogram().len(),
        sequence_len = record.sequence_len(),
        "loaded operator sequence"
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_pairs_keep_upstream_order() {
        let doc = json!({
            "operator_histogram": [["D", 3], ["Ĉ", 9], ["T", 1]]
        });
        let record = SequenceRecord::from_value(&doc);

        let symbols: Vec<_> = record.histogram().iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["D", "Ĉ", "T"]);
        assert_eq!(record.histogram()[1].count, "9");
    }

    #[test]
    fn test_keyed_entries_and_string_counts() {
        let doc = json!({
            "operator_histogram": [
                {"op": "M", "count": 4},
                {"symbol": "X", "count": "2"}
            ]
        });
        let record = SequenceRecord::from_value(&doc);

        assert_eq!(
            record.histogram(),
            &[HistogramEntry::new("M", 4), HistogramEntry::new("X", 2)]
        );
    }

    #[test]
    fn test_unreadable_entries_are_skipped() {
        let doc = json!({
            "operator_histogram": [["E", 5], "junk", ["F"], ["G", 1, 2], ["N", 1]]
        });
        let record = SequenceRecord::from_value(&doc);

        assert_eq!(
            record.histogram(),
            &[HistogramEntry::new("E", 5), HistogramEntry::new("N", 1)]
        );
    }

    #[test]
    fn test_counts_render_as_given() {
        let doc = json!({
            "operator_histogram": [["Ĉ", 14.0], ["D", 9], ["T", -1], [5, 3]]
        });
        let record = SequenceRecord::from_value(&doc);
        let shown: Vec<_> = record.histogram().iter().map(|e| e.to_string()).collect();

        assert_eq!(shown, vec!["Ĉ×14.0", "D×9", "T×-1", "5×3"]);
    }

    #[test]
    fn test_missing_histogram_is_empty() {
        let record = SequenceRecord::from_value(&json!({"folio": "f1r"}));
        assert!(record.is_empty());

        let record = SequenceRecord::from_value(&json!([1, 2, 3]));
        assert!(record.is_empty());
    }

    #[test]
    fn test_raw_sequence_is_retained() {
        let doc = json!({"operator_sequence": ["Ĉ", "Ŝ", "Ĉ"], "operator_histogram": []});
        let record = SequenceRecord::from_value(&doc);

        assert_eq!(record.sequence_len(), 3);
        assert!(record.is_empty());
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(HistogramEntry::new("B̂", 7).to_string(), "B̂×7");
    }

    #[test]
    fn test_load_sequence_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_sequence(file.path()).unwrap_err();
        assert!(matches!(err, InputError::Malformed { .. }));
        assert_eq!(err.path(), file.path());
    }

    #[test]
    fn test_load_sequence_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"operator_histogram": [["R̂", 2]]}}"#).unwrap();

        let record = load_sequence(file.path()).unwrap();
        assert_eq!(record.histogram(), &[HistogramEntry::new("R̂", 2)]);
    }

    #[test]
    fn test_load_sequence_rejects_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"operator_histogram\": [[\"\xff\", 1]]}").unwrap();

        let err = load_sequence(file.path()).unwrap_err();
        assert!(matches!(err, InputError::Malformed { .. }));
    }

    #[test]
    fn test_load_sequence_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_sequence(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }
}
