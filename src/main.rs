use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use lector::cli::{Cli, Commands};
use lector::config::Config;
use lector::pipeline::{Pipeline, PipelineConfig};
use lector::synth::CommandSynthesizer;
use lector::text::extract_text;
use owo_colors::OwoColorize;
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                *shell,
                &mut Cli::command(),
                "lector",
                &mut std::io::stdout(),
            );
            return Ok(());
        }
        Some(Commands::Check) => {
            let config = apply_overrides(load_config(cli.config.as_deref())?, &cli);
            if !lector::diagnostics::check_setup(&config) {
                std::process::exit(1);
            }
            return Ok(());
        }
        None => {}
    }

    let Some(input) = cli.input.clone() else {
        bail!("no input document given (see `lector --help`)");
    };

    let config = apply_overrides(load_config(cli.config.as_deref())?, &cli);
    config.validate()?;

    let engine_command = config.synthesis.engine_command.clone().with_context(|| {
        "no synthesis engine configured; set synthesis.engine_command in the \
         config file, LECTOR_ENGINE, or pass --engine"
    })?;
    let engine =
        CommandSynthesizer::from_command_line(&engine_command, config.synthesis.sample_rate)?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| input.with_extension("wav"));

    let document = extract_text(&input)?;

    let pipeline_config = PipelineConfig {
        max_words_per_chunk: config.segmenter.max_words_per_chunk,
        sample_rate: config.synthesis.sample_rate,
        inter_chunk_silence_secs: cli
            .silence
            .map(|d| d.as_secs_f64())
            .unwrap_or(config.output.inter_chunk_silence_seconds),
        failure_policy: config.output.chunk_failure_policy,
        synthesis_timeout: cli
            .timeout
            .or_else(|| config.synthesis.timeout_secs.map(Duration::from_secs)),
        quiet: cli.quiet,
        verbosity: cli.verbose,
    };

    let pipeline = Pipeline::new(pipeline_config, Arc::new(engine));
    let summary = pipeline.run(&document, &output)?;

    if !cli.quiet {
        let skipped = if summary.skipped_chunks.is_empty() {
            String::new()
        } else {
            format!(
                " ({} chunk(s) replaced by silence)",
                summary.skipped_chunks.len()
            )
        };
        println!(
            "{} '{}' — {} chunk(s), {:.1}s{}",
            "Audio saved to".green(),
            output.display(),
            summary.chunk_count,
            summary.duration_secs,
            skipped
        );
    }

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// Priority order:
/// 1. Custom config path from CLI (--config)
/// 2. Default config path (~/.config/lector/config.toml)
/// 3. Built-in defaults with environment variable overrides
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config> {
    let config = if let Some(path) = custom_path {
        // Load from custom path
        Config::load(path)?
    } else {
        // Try default path, fall back to defaults
        let default_path = Config::default_path();
        Config::load_or_default(&default_path)
    };

    // Apply environment variable overrides
    Ok(config.with_env_overrides())
}

/// Apply CLI flag overrides on top of the loaded configuration.
fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(engine) = &cli.engine {
        config.synthesis.engine_command = Some(engine.clone());
    }
    if let Some(max_words) = cli.max_words {
        config.segmenter.max_words_per_chunk = max_words;
    }
    if let Some(rate) = cli.sample_rate {
        config.synthesis.sample_rate = rate;
    }
    if let Some(policy) = cli.on_chunk_failure {
        config.output.chunk_failure_policy = policy;
    }
    config
}
