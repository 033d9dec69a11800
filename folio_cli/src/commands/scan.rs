//! `folio scan` — print the naive analysis of a text as indented JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use translation_core::analyze;

pub fn run(file: Option<PathBuf>, text: Option<String>) -> anyhow::Result<ExitCode> {
    let text = match (file, text) {
        (Some(path), _) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?,
        (None, Some(text)) => text,
        (None, None) => {
            eprintln!("Provide --file or --text");
            return Ok(ExitCode::from(2));
        }
    };

    let analysis = analyze(&text);
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(ExitCode::SUCCESS)
}
