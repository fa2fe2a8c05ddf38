use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use statebus::config::Config;
use statebus::demo::app;
use statebus::logging::init_tracing;

/// Counter demo for the statebus store.
#[derive(Debug, Parser)]
#[command(name = "statebus", version, about)]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Delay before the EFFECT action's follow-up increment.
    #[arg(long, value_name = "MS")]
    effect_delay_ms: Option<u64>,

    /// Dog image endpoint.
    #[arg(long, value_name = "URL")]
    dog_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(delay) = cli.effect_delay_ms {
        config.demo.effect_delay_ms = delay;
    }
    if let Some(url) = cli.dog_url {
        config.demo.dog_api_url = url;
    }
    config.validate()?;

    init_tracing(&config.logging);

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let _enter = runtime.enter();
    app::run(&config.demo).context("terminal demo failed")?;

    Ok(())
}
