//! Frame assembly - renders the inputs into a complete narrative.
//!
//! A frame is rendered in three parts:
//! 1. **Header**: title, separator, snapshot line, optional rationale line, blank line
//! 2. **Literal layer**: the operational steps of the work
//! 3. **Figurative layer**: the allegorical reading, introduced by the marker line
//!
//! The header and literal layer together form the head of the frame; the marker
//! line sits between head and figurative tail.

mod seven_step;
mod twelve_key;

use folio_inputs::{Decision, PictorialSummary, SequenceRecord};
use serde::{Deserialize, Serialize};

use crate::layers::{split_and_merge, LayerPair, MissingMarkerError};
use crate::summary::{extract_counts, snapshot_line, top_operators, DEFAULT_TOP_OPERATORS};

/// Separator line under every frame title.
pub const TITLE_SEPARATOR: &str = "—";

/// Prefix of the optional rationale line.
pub const RATIONALE_PREFIX: &str = "Decision rationale: ";

/// Suffix appended to the title of a frame rendered only for comparison.
pub const COMPARATIVE_LABEL: &str = " (comparative)";

/// The two competing narrative frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    /// Long frame: twelve keys.
    TwelveKey,
    /// Short frame: seven-step operator cycle.
    SevenStep,
}

impl FrameKind {
    /// Every frame, in render order.
    pub const ALL: [FrameKind; 2] = [FrameKind::TwelveKey, FrameKind::SevenStep];

    /// Title heading the frame, after the folio name.
    pub fn title(&self) -> &'static str {
        match self {
            FrameKind::TwelveKey => "Twelve Keys (Allegorical)",
            FrameKind::SevenStep => "Seven-Step Operator Cycle",
        }
    }

    /// The line separating the literal layer from the figurative one.
    pub fn marker(&self) -> &'static str {
        match self {
            FrameKind::TwelveKey => "Dual Reading:",
            FrameKind::SevenStep => "Spiritual Parallel:",
        }
    }

    /// Tag used in artifact file names.
    pub fn file_tag(&self) -> &'static str {
        match self {
            FrameKind::TwelveKey => "12key",
            FrameKind::SevenStep => "7step",
        }
    }

    /// Number of narrative units in the body.
    pub fn unit_count(&self) -> usize {
        self.steps().len()
    }

    fn steps(&self) -> &'static [FrameStep] {
        match self {
            FrameKind::TwelveKey => twelve_key::STEPS,
            FrameKind::SevenStep => seven_step::STEPS,
        }
    }

    fn body(&self) -> (Vec<String>, Vec<String>) {
        match self {
            FrameKind::TwelveKey => twelve_key::body(),
            FrameKind::SevenStep => seven_step::body(),
        }
    }

    /// Parse a frame name as accepted on the command line.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "long" | "12key" | "twelve_key" | "twelve-key" => Some(FrameKind::TwelveKey),
            "short" | "7step" | "seven_step" | "seven-step" => Some(FrameKind::SevenStep),
            _ => None,
        }
    }
}

impl std::fmt::Display for FrameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameKind::TwelveKey => write!(f, "twelve-key"),
            FrameKind::SevenStep => write!(f, "seven-step"),
        }
    }
}

/// One narrative unit with its literal and figurative readings.
#[derive(Debug, Clone, Copy)]
pub struct FrameStep {
    pub title: &'static str,
    pub literal: &'static str,
    pub figurative: &'static str,
}

/// How a frame is labeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rendering {
    /// The frame the decision asked for, or the always-rendered long frame.
    #[default]
    Decided,
    /// Rendered alongside for comparison; carries no rationale.
    Comparative,
}

/// A fully assembled narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeFrame {
    kind: FrameKind,
    rendering: Rendering,
    header: Vec<String>,
    literal: Vec<String>,
    figurative: Vec<String>,
}

impl NarrativeFrame {
    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    pub fn rendering(&self) -> Rendering {
        self.rendering
    }

    pub fn is_comparative(&self) -> bool {
        self.rendering == Rendering::Comparative
    }

    pub fn marker(&self) -> &'static str {
        self.kind.marker()
    }

    /// Title, separator, snapshot, optional rationale and the blank line after them.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Operational steps, before the marker.
    pub fn literal(&self) -> &[String] {
        &self.literal
    }

    /// Allegorical reading, after the marker.
    pub fn figurative(&self) -> &[String] {
        &self.figurative
    }

    /// The rationale line, if the frame carries one.
    pub fn rationale_line(&self) -> Option<&str> {
        self.header
            .iter()
            .map(String::as_str)
            .find(|line| line.starts_with(RATIONALE_PREFIX))
    }

    /// Every line of the frame in document order, marker included.
    pub fn lines(&self) -> Vec<&str> {
        self.header
            .iter()
            .chain(&self.literal)
            .map(String::as_str)
            .chain(std::iter::once(self.marker()))
            .chain(self.figurative.iter().map(String::as_str))
            .collect()
    }

    /// Full document text with a single trailing newline.
    pub fn to_text(&self) -> String {
        let mut text = self.lines().join("\n");
        text.push('\n');
        text
    }

    /// Split the rendered lines at the marker into head, tail and merged layers.
    pub fn split(&self) -> Result<LayerPair, MissingMarkerError> {
        split_and_merge(&self.lines(), self.marker())
    }
}

/// Tunables shared by both frame assemblers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameConfig {
    /// Name of the analyzed folio, shown in every title.
    #[serde(default = "default_folio")]
    pub folio: String,

    /// How many histogram entries the snapshot line lists.
    #[serde(default = "default_top_operators")]
    pub top_operators: usize,
}

fn default_folio() -> String {
    "f1r".into()
}

fn default_top_operators() -> usize {
    DEFAULT_TOP_OPERATORS
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            folio: default_folio(),
            top_operators: default_top_operators(),
        }
    }
}

/// Assembles narrative frames from the input records.
pub struct FrameAssembler {
    config: FrameConfig,
}

impl FrameAssembler {
    pub fn new(config: FrameConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(FrameConfig::default())
    }

    /// Assemble one frame.
    ///
    /// The rationale line is emitted only when the decision carries rationale.
    pub fn assemble(
        &self,
        kind: FrameKind,
        rendering: Rendering,
        seq: &SequenceRecord,
        pict: &PictorialSummary,
        decision: &Decision,
    ) -> NarrativeFrame {
        let counts = extract_counts(pict);
        let ops = top_operators(seq, self.config.top_operators);

        let mut title = format!("Translation of {} — {}", self.config.folio, kind.title());
        if rendering == Rendering::Comparative {
            title.push_str(COMPARATIVE_LABEL);
        }

        let mut header = vec![
            title,
            TITLE_SEPARATOR.to_string(),
            snapshot_line(&counts, &ops),
        ];
        if decision.has_rationale() {
            header.push(format!("{}{}", RATIONALE_PREFIX, decision.rationale.join("; ")));
        }
        header.push(String::new());

        let (literal, figurative) = kind.body();

        tracing::debug!(
            frame = %kind,
            ?rendering,
            header = header.len(),
            literal = literal.len(),
            figurative = figurative.len(),
            "assembled frame"
        );

        NarrativeFrame {
            kind,
            rendering,
            header,
            literal,
            figurative,
        }
    }

    /// The long frame.
    pub fn twelve_key(
        &self,
        seq: &SequenceRecord,
        pict: &PictorialSummary,
        decision: &Decision,
    ) -> NarrativeFrame {
        self.assemble(FrameKind::TwelveKey, Rendering::Decided, seq, pict, decision)
    }

    /// The short frame, labeled as asked.
    pub fn seven_step(
        &self,
        rendering: Rendering,
        seq: &SequenceRecord,
        pict: &PictorialSummary,
        decision: &Decision,
    ) -> NarrativeFrame {
        self.assemble(FrameKind::SevenStep, rendering, seq, pict, decision)
    }
}

/// Join step texts into a layer, with `gap` lines between consecutive steps.
fn layer_lines<F>(steps: &[FrameStep], gap: bool, render: F) -> Vec<String>
where
    F: Fn(usize, &FrameStep) -> Vec<String>,
{
    let mut lines = Vec::new();
    for (idx, step) in steps.iter().enumerate() {
        if gap && idx > 0 {
            lines.push(String::new());
        }
        lines.extend(render(idx + 1, step));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_inputs::HistogramEntry;

    fn inputs() -> (SequenceRecord, PictorialSummary) {
        let seq = SequenceRecord::new(vec![
            HistogramEntry::new("Ĉ", 14),
            HistogramEntry::new("D", 9),
            HistogramEntry::new("T", 3),
        ]);
        let pict = PictorialSummary::new()
            .with_field("roots_count", "1")
            .with_field("leaf_groups_count", "9")
            .with_field("bud_count", "2")
            .with_field("bud_state", "open")
            .with_field("bud_colour", "red");
        (seq, pict)
    }

    #[test]
    fn test_unit_counts() {
        assert_eq!(FrameKind::TwelveKey.unit_count(), 12);
        assert_eq!(FrameKind::SevenStep.unit_count(), 7);
    }

    #[test]
    fn test_header_without_rationale() {
        let (seq, pict) = inputs();
        let frame = FrameAssembler::with_defaults().twelve_key(&seq, &pict, &Decision::unknown());

        assert_eq!(
            frame.header(),
            &[
                "Translation of f1r — Twelve Keys (Allegorical)".to_string(),
                "—".to_string(),
                "Snapshot: roots=1, leaves≈9, buds=2 (open/red); frequent ops: Ĉ×14, D×9, T×3"
                    .to_string(),
                String::new(),
            ]
        );
        assert!(frame.rationale_line().is_none());
    }

    #[test]
    fn test_header_with_rationale() {
        let (seq, pict) = inputs();
        let decision = Decision::new("7_STEPS_OPERATOR")
            .with_rationale("seven classes")
            .with_rationale("red buds");
        let frame = FrameAssembler::with_defaults().seven_step(
            Rendering::Decided,
            &seq,
            &pict,
            &decision,
        );

        assert_eq!(frame.header().len(), 5);
        assert_eq!(
            frame.rationale_line(),
            Some("Decision rationale: seven classes; red buds")
        );
        assert_eq!(frame.header()[4], "");
    }

    #[test]
    fn test_comparative_label() {
        let (seq, pict) = inputs();
        let frame = FrameAssembler::with_defaults().seven_step(
            Rendering::Comparative,
            &seq,
            &pict,
            &Decision::unknown(),
        );

        assert!(frame.is_comparative());
        assert_eq!(
            frame.lines()[0],
            "Translation of f1r — Seven-Step Operator Cycle (comparative)"
        );
    }

    #[test]
    fn test_marker_appears_once_between_layers() {
        let (seq, pict) = inputs();
        let assembler = FrameAssembler::with_defaults();

        for kind in FrameKind::ALL {
            let frame = assembler.assemble(kind, Rendering::Decided, &seq, &pict, &Decision::unknown());
            let lines = frame.lines();
            let hits: Vec<_> = lines
                .iter()
                .enumerate()
                .filter(|(_, l)| **l == kind.marker())
                .map(|(i, _)| i)
                .collect();

            assert_eq!(hits, vec![frame.header().len() + frame.literal().len()]);
        }
    }

    #[test]
    fn test_split_accounts_for_marker_once() {
        let (seq, pict) = inputs();
        let assembler = FrameAssembler::with_defaults();
        let decision = Decision::new("X").with_rationale("because");

        for kind in FrameKind::ALL {
            let frame = assembler.assemble(kind, Rendering::Decided, &seq, &pict, &decision);
            let pair = frame.split().unwrap();

            assert_eq!(pair.head.len() + 1 + pair.tail.len(), frame.lines().len());
            assert_eq!(pair.tail, frame.figurative());
        }
    }

    #[test]
    fn test_custom_folio_and_top_operators() {
        let (seq, pict) = inputs();
        let assembler = FrameAssembler::new(FrameConfig {
            folio: "f2v".into(),
            top_operators: 1,
        });
        let frame = assembler.twelve_key(&seq, &pict, &Decision::unknown());

        assert!(frame.header()[0].starts_with("Translation of f2v"));
        assert!(frame.header()[2].ends_with("frequent ops: Ĉ×14"));
    }

    #[test]
    fn test_text_has_single_trailing_newline() {
        let (seq, pict) = inputs();
        let text = FrameAssembler::with_defaults()
            .twelve_key(&seq, &pict, &Decision::unknown())
            .to_text();

        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn test_frame_kind_parse() {
        assert_eq!(FrameKind::parse("long"), Some(FrameKind::TwelveKey));
        assert_eq!(FrameKind::parse("7STEP"), Some(FrameKind::SevenStep));
        assert_eq!(FrameKind::parse("medium"), None);
    }
}
