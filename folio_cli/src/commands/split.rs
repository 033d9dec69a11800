//! `folio split` — re-split a rendered frame document.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use translation_core::{split_text, FrameKind, LayerPair, TranslationError};

/// Paths for the layers of `file`: `<stem>_lab.txt`, `<stem>_spirit.txt`, `<stem>_merged.txt`.
fn layer_paths(file: &Path) -> [PathBuf; 3] {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".into());
    let sibling = |suffix: &str| file.with_file_name(format!("{}_{}.txt", stem, suffix));
    [sibling("lab"), sibling("spirit"), sibling("merged")]
}

pub fn split_file(file: &Path, kind: FrameKind) -> anyhow::Result<LayerPair> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;

    let pair = split_text(&text, kind.marker()).map_err(|e| TranslationError::MissingMarker {
        frame: kind.to_string(),
        marker: e.marker,
    })?;
    Ok(pair)
}

pub fn run(file: &Path, frame: &str, write: bool) -> anyhow::Result<ExitCode> {
    let kind = FrameKind::parse(frame)
        .ok_or_else(|| anyhow!("unknown frame {frame:?}, expected long or short"))?;
    let pair = split_file(file, kind)?;

    let texts = [pair.head_text(), pair.tail_text(), pair.merged_text()];
    if write {
        for (path, text) in layer_paths(file).iter().zip(&texts) {
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote: {}", path.display());
        }
    } else {
        for (title, text) in ["lab", "spirit", "merged"].iter().zip(&texts) {
            println!("== {} ==", title);
            print!("{}", text);
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_paths_sit_next_to_document() {
        let [lab, spirit, merged] = layer_paths(Path::new("out/f1r_translation_7step.txt"));

        assert_eq!(lab, PathBuf::from("out/f1r_translation_7step_lab.txt"));
        assert_eq!(spirit, PathBuf::from("out/f1r_translation_7step_spirit.txt"));
        assert_eq!(merged, PathBuf::from("out/f1r_translation_7step_merged.txt"));
    }

    #[test]
    fn test_split_file_without_marker_names_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.txt");
        std::fs::write(&path, "title\nno marker here\n").unwrap();

        let err = split_file(&path, FrameKind::TwelveKey).unwrap_err();
        assert!(err.to_string().contains("twelve-key"));
    }

    #[test]
    fn test_split_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.txt");
        std::fs::write(&path, "one\ntwo\nSpiritual Parallel:\n1) a\n").unwrap();

        let pair = split_file(&path, FrameKind::SevenStep).unwrap();
        assert_eq!(pair.merged, vec!["one / 1) a"]);
    }
}
