//! Decision notes - which interpretive frame was chosen, and why.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{InputError, InputResult};

/// Declared value used when no decision is available.
pub const UNKNOWN_DECISION: &str = "UNKNOWN";

/// Declared value that routes the rationale into the seven-step frame.
pub const SEVEN_STEP_DECISION: &str = "7_STEPS_OPERATOR";

const DECISION_KEYWORD: &str = "decision:";

/// A decision read from a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Declared frame choice. Open-ended; only a few values carry meaning.
    pub value: String,

    /// Justification bullets in note order.
    pub rationale: Vec<String>,
}

impl Default for Decision {
    fn default() -> Self {
        Self::unknown()
    }
}

impl Decision {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            rationale: Vec::new(),
        }
    }

    /// The decision used when no note exists.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_DECISION)
    }

    pub fn with_rationale(mut self, item: impl Into<String>) -> Self {
        self.rationale.push(item.into());
        self
    }

    /// Parse note text.
    ///
    /// The first line optionally reads `decision: <value>` (keyword matched
    /// case-insensitively). Every later non-blank line is one rationale item,
    /// with bullet dashes and surrounding spaces removed.
    pub fn parse(note: &str) -> Self {
        let mut lines = note.lines();
        let mut decision = Self::unknown();

        let Some(head) = lines.next() else {
            return decision;
        };

        let head = head.trim();
        if head
            .get(..DECISION_KEYWORD.len())
            .is_some_and(|k| k.eq_ignore_ascii_case(DECISION_KEYWORD))
        {
            decision.value = head[DECISION_KEYWORD.len()..].trim().to_string();
        }

        decision.rationale = lines
            .map(|line| line.trim_matches(|c| c == '-' || c == ' ').trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        decision
    }

    /// Whether the note chose the seven-step operator frame.
    pub fn selects_seven_step(&self) -> bool {
        self.value == SEVEN_STEP_DECISION
    }

    pub fn is_unknown(&self) -> bool {
        self.value == UNKNOWN_DECISION
    }

    pub fn has_rationale(&self) -> bool {
        !self.rationale.is_empty()
    }
}

/// Load a decision note. A missing note is the unknown decision, not an error.
pub fn load_decision(path: &Path) -> InputResult<Decision> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no decision note, defaulting to {}", UNKNOWN_DECISION);
        return Ok(Decision::unknown());
    }

    let note = std::fs::read_to_string(path).map_err(|e| InputError::io(path, e))?;
    let decision = Decision::parse(&note);
    tracing::debug!(
        value = %decision.value,
        rationale = decision.rationale.len(),
        "loaded decision note"
    );
    Ok(decision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_and_bullets() {
        let note = "decision: 7_STEPS_OPERATOR\n- seven operator classes\n\n  - cycle closes on red buds\n";
        let decision = Decision::parse(note);

        assert_eq!(decision.value, "7_STEPS_OPERATOR");
        assert_eq!(
            decision.rationale,
            vec!["seven operator classes", "cycle closes on red buds"]
        );
        assert!(decision.selects_seven_step());
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let decision = Decision::parse("DECISION:   12_KEYS\n");
        assert_eq!(decision.value, "12_KEYS");
        assert!(!decision.selects_seven_step());
    }

    #[test]
    fn test_first_line_without_keyword_is_not_rationale() {
        let decision = Decision::parse("we went with the long frame\n- it reads better\n");
        assert!(decision.is_unknown());
        assert_eq!(decision.rationale, vec!["it reads better"]);
    }

    #[test]
    fn test_rationale_keeps_order_and_duplicates() {
        let decision = Decision::parse("decision: X\n- b\n- a\n- b\n");
        assert_eq!(decision.rationale, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_trailing_dashes_are_stripped() {
        let decision = Decision::parse("decision: X\n-- spaced out --\n---\n");
        assert_eq!(decision.rationale, vec!["spaced out"]);
    }

    #[test]
    fn test_empty_note_is_unknown() {
        assert_eq!(Decision::parse(""), Decision::unknown());
    }

    #[test]
    fn test_load_missing_note() {
        let dir = tempfile::tempdir().unwrap();
        let decision = load_decision(&dir.path().join("note.txt")).unwrap();

        assert!(decision.is_unknown());
        assert!(!decision.has_rationale());
    }

    #[test]
    fn test_load_note_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        std::fs::write(&path, "Decision: 7_STEPS_OPERATOR\n- one\n").unwrap();

        let decision = load_decision(&path).unwrap();
        assert!(decision.selects_seven_step());
        assert_eq!(decision.rationale, vec!["one"]);
    }
}
