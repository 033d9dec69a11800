//! Translation pipeline - loads inputs, renders both frames, writes artifacts.
//!
//! The run proceeds as:
//! 1. **Load**: sequence, pictorial counts, decision note
//! 2. **Select**: decide how the short frame is rendered
//! 3. **Assemble**: long frame, then short frame
//! 4. **Split**: cut each frame into head, tail and merged layers
//! 5. **Persist**: overwrite the frame's four artifacts
//!
//! A frame's files are written only after its split succeeds. A failure in the
//! short frame therefore leaves the long frame's files in place.

use folio_inputs::{
    load_decision, load_pictorial, load_sequence, Decision, PictorialSummary, SequenceRecord,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::PipelineConfig;
use crate::error::{TranslationError, TranslationResult};
use crate::frame::{FrameAssembler, FrameKind, NarrativeFrame, Rendering};
use crate::layers::LayerPair;

/// The three loaded input records.
#[derive(Debug, Clone, Default)]
pub struct TranslationInputs {
    pub sequence: SequenceRecord,
    pub pictorial: PictorialSummary,
    pub decision: Decision,
}

/// How the short frame is rendered for a decision, and with which decision.
///
/// Only the exact seven-step value routes the real rationale into the short
/// frame. Any other value, `UNKNOWN` included, yields a comparative rendering
/// without rationale.
pub fn short_frame_selection(decision: &Decision) -> (Rendering, Decision) {
    if decision.selects_seven_step() {
        (Rendering::Decided, decision.clone())
    } else {
        (
            Rendering::Comparative,
            Decision::new(folio_inputs::SEVEN_STEP_DECISION),
        )
    }
}

/// A frame together with its layers.
#[derive(Debug, Clone)]
pub struct RenderedFrame {
    pub frame: NarrativeFrame,
    pub layers: LayerPair,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// Declared value read from the decision note.
    pub decision: String,

    /// Whether the short frame was rendered only for comparison.
    pub short_frame_comparative: bool,

    /// Every artifact written, in write order.
    pub written: Vec<PathBuf>,
}

/// Runs the whole translation for one configuration.
pub struct TranslationPipeline {
    config: PipelineConfig,
    assembler: FrameAssembler,
}

impl TranslationPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let assembler = FrameAssembler::new(config.frame.clone());
        Self { config, assembler }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Read the three inputs. Fails before anything is written.
    pub fn load_inputs(&self) -> TranslationResult<TranslationInputs> {
        let paths = &self.config.inputs;
        let sequence = load_sequence(&paths.sequence)?;
        let pictorial = load_pictorial(&paths.pictorial)?;
        let decision = load_decision(&paths.decision)?;

        tracing::info!(
            decision = %decision.value,
            rationale = decision.rationale.len(),
            histogram = sequence.histogram().len(),
            "loaded translation inputs"
        );

        Ok(TranslationInputs {
            sequence,
            pictorial,
            decision,
        })
    }

    /// Assemble a frame and split it into layers.
    pub fn render(
        &self,
        kind: FrameKind,
        inputs: &TranslationInputs,
    ) -> TranslationResult<RenderedFrame> {
        let frame = match kind {
            FrameKind::TwelveKey => {
                self.assembler
                    .twelve_key(&inputs.sequence, &inputs.pictorial, &inputs.decision)
            }
            FrameKind::SevenStep => {
                let (rendering, decision) = short_frame_selection(&inputs.decision);
                self.assembler
                    .seven_step(rendering, &inputs.sequence, &inputs.pictorial, &decision)
            }
        };

        let layers = frame
            .split()
            .map_err(|e| TranslationError::MissingMarker {
                frame: kind.to_string(),
                marker: e.marker,
            })?;

        Ok(RenderedFrame { frame, layers })
    }

    /// Overwrite the artifacts of one rendered frame. Returns the written paths.
    pub fn persist(&self, rendered: &RenderedFrame) -> TranslationResult<Vec<PathBuf>> {
        let paths = self.config.outputs.artifacts(rendered.frame.kind());
        let full_text = rendered.frame.to_text();

        let mut files = vec![
            (paths.full, full_text.clone()),
            (paths.head, rendered.layers.head_text()),
            (paths.tail, rendered.layers.tail_text()),
            (paths.merged, rendered.layers.merged_text()),
        ];
        if let Some(mirror) = paths.mirror {
            files.push((mirror, full_text));
        }

        let mut written = Vec::with_capacity(files.len());
        for (path, text) in files {
            write_artifact(&path, &text)?;
            written.push(path);
        }
        Ok(written)
    }

    /// Load, render and persist both frames, long frame first.
    pub fn run(&self) -> TranslationResult<RunReport> {
        let inputs = self.load_inputs()?;

        let out_dir = &self.config.outputs.dir;
        std::fs::create_dir_all(out_dir).map_err(|e| TranslationError::Write {
            path: out_dir.clone(),
            source: e,
        })?;

        let mut report = RunReport {
            decision: inputs.decision.value.clone(),
            short_frame_comparative: false,
            written: Vec::new(),
        };

        for kind in FrameKind::ALL {
            let rendered = self.render(kind, &inputs)?;
            if rendered.frame.rendering() == Rendering::Comparative {
                report.short_frame_comparative = true;
            }
            report.written.extend(self.persist(&rendered)?);
        }

        Ok(report)
    }
}

fn write_artifact(path: &Path, text: &str) -> TranslationResult<()> {
    std::fs::write(path, text).map_err(|e| TranslationError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), bytes = text.len(), "wrote artifact");
    Ok(())
}
