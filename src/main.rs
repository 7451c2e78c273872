use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use glua_completions::completion::DEFAULT_SCOPE;
use glua_completions::config::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH};
use glua_completions::logging::init_logger;
use glua_completions::{GeneratorConfig, generate};

/// Generate an editor completion index from scraped Garry's Mod wiki data
#[derive(Debug, Parser)]
#[command(name = "glua-completions", version, about)]
struct Cli {
    /// Directory holding the scraper's JSON collections
    #[arg(long, value_name = "DIR", default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// File to write the completion index to
    #[arg(long, value_name = "FILE", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Scope selector the completions apply to
    #[arg(long, default_value = DEFAULT_SCOPE)]
    scope: String,

    /// Log filter, e.g. "debug" or "glua_completions=trace" (defaults to RUST_LOG, then "info")
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Disable ANSI colors in log output
    #[arg(long)]
    no_color: bool,
}

impl From<Cli> for GeneratorConfig {
    fn from(cli: Cli) -> Self {
        GeneratorConfig {
            input_dir: cli.input_dir,
            output: cli.output,
            scope: cli.scope,
        }
    }
}

fn run(config: &GeneratorConfig) -> Result<()> {
    generate(config).with_context(|| {
        format!(
            "Failed to generate completions from {:?} into {:?}",
            config.input_dir, config.output
        )
    })?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logger(cli.no_color, cli.log_level.as_deref()) {
        eprintln!("Error: Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&GeneratorConfig::from(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
