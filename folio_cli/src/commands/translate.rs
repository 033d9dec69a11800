//! `folio translate` — render both frames and write every artifact.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;
use translation_core::{PipelineConfig, TranslationPipeline};

#[derive(Args, Debug, Default)]
pub struct TranslateArgs {
    /// Configuration file (defaults apply when absent)
    #[arg(short, long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// Operator sequence JSON
    #[arg(long)]
    pub sequence: Option<PathBuf>,

    /// Pictorial counts CSV
    #[arg(long)]
    pub pictorial: Option<PathBuf>,

    /// Decision note
    #[arg(long)]
    pub decision: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Output file name prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Also write `_translation` copies of the full frames
    #[arg(long)]
    pub mirror: bool,
}

/// Load the config file and apply command-line overrides.
pub fn resolve_config(args: TranslateArgs) -> anyhow::Result<PipelineConfig> {
    let mut config = PipelineConfig::load_from(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;

    if let Some(path) = args.sequence {
        config.inputs.sequence = path;
    }
    if let Some(path) = args.pictorial {
        config.inputs.pictorial = path;
    }
    if let Some(path) = args.decision {
        config.inputs.decision = path;
    }
    if let Some(dir) = args.out_dir {
        config.outputs.dir = dir;
    }
    if let Some(prefix) = args.prefix {
        config.outputs.prefix = prefix;
    }
    if args.mirror {
        config.outputs.mirror_full_text = true;
    }

    config.validate()?;
    Ok(config)
}

pub fn run(args: TranslateArgs) -> anyhow::Result<ExitCode> {
    let config = resolve_config(args)?;
    let pipeline = TranslationPipeline::new(config);
    tracing::debug!(
        out_dir = %pipeline.config().outputs.dir.display(),
        prefix = %pipeline.config().outputs.prefix,
        "starting translation"
    );
    let report = pipeline.run().context("translation failed")?;

    if report.short_frame_comparative {
        tracing::info!(
            decision = %report.decision,
            "seven-step frame rendered for comparison only"
        );
    }
    for path in &report.written {
        println!("Wrote: {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("folio.toml");
        std::fs::write(&config_path, "[outputs]\nprefix = \"f2v\"\ndir = \"from-file\"\n").unwrap();

        let config = resolve_config(TranslateArgs {
            config: config_path,
            out_dir: Some(PathBuf::from("from-flag")),
            mirror: true,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(config.outputs.prefix, "f2v");
        assert_eq!(config.outputs.dir, PathBuf::from("from-flag"));
        assert!(config.outputs.mirror_full_text);
    }

    #[test]
    fn test_empty_prefix_flag_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = resolve_config(TranslateArgs {
            config: dir.path().join("absent.toml"),
            prefix: Some(" ".into()),
            ..Default::default()
        });

        assert!(result.is_err());
    }
}
