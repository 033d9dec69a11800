//! `folio config` — print the effective configuration.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use translation_core::PipelineConfig;

pub fn run(path: &Path) -> anyhow::Result<ExitCode> {
    let config = PipelineConfig::load_from(path)
        .with_context(|| format!("loading {}", path.display()))?;
    let rendered = config.to_toml().context("rendering config")?;
    print!("{}", rendered);
    Ok(ExitCode::SUCCESS)
}
