//! Naive pattern scanner over raw text.
//!
//! Counts operator symbol mentions, first-person claim phrases and negation
//! words. The contradiction score is a toy heuristic: claims not offset by
//! half as many negations.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Operator symbols the scanner looks for, in report order.
pub const OPERATOR_SYMBOLS: [&str; 12] = [
    "Ĉ", "Ŝ", "B̂", "R̂", "E", "F", "T", "H", "D", "M", "X", "N",
];

static CLAIM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(we|i) (show|prove|demonstrate|find|claim)\b").expect("valid claim regex")
});
static NEGATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(no|not|never|cannot|can't|won't)\b").expect("valid negation regex")
});

/// Result of scanning one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub operators_detected: Vec<String>,
    pub claims: usize,
    pub neg_markers: usize,
    pub contradiction_score: usize,
}

/// Scan a text.
pub fn analyze(text: &str) -> Analysis {
    let operators_detected = OPERATOR_SYMBOLS
        .iter()
        .filter(|op| text.contains(*op))
        .map(|op| op.to_string())
        .collect();
    let claims = CLAIM_RE.find_iter(text).count();
    let neg_markers = NEGATION_RE.find_iter(text).count();

    Analysis {
        operators_detected,
        claims,
        neg_markers,
        contradiction_score: claims.saturating_sub(neg_markers / 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operators_in_list_order() {
        let analysis = analyze("N then Ĉ then D");
        assert_eq!(analysis.operators_detected, vec!["Ĉ", "D", "N"]);
    }

    #[test]
    fn test_claims_are_case_insensitive() {
        let analysis = analyze("We show this. I PROVE that. they find nothing.");
        assert_eq!(analysis.claims, 2);
    }

    #[test]
    fn test_negations_counted() {
        let analysis = analyze("no, not now, never; we can't and won't. Cannot.");
        assert_eq!(analysis.neg_markers, 6);
    }

    #[test]
    fn test_contradiction_score() {
        let analysis = analyze("we show it. i claim it. not so.");
        assert_eq!(analysis.claims, 2);
        assert_eq!(analysis.neg_markers, 1);
        assert_eq!(analysis.contradiction_score, 2);

        let analysis = analyze("we show it. not, never, no, cannot.");
        assert_eq!(analysis.contradiction_score, 0);
    }

    #[test]
    fn test_words_need_boundaries() {
        let analysis = analyze("nothing knotted; showing");
        assert_eq!(analysis.neg_markers, 0);
        assert_eq!(analysis.claims, 0);
    }
}
