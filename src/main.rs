use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shopping_list::config::{Config, IdStrategy};
use shopping_list::logging::init_tracing;
use shopping_list::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "shopping-list", version, about = "Terminal shopping list")]
struct Cli {
    /// Config file path (default: <config dir>/shopping-list/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override how new items are numbered
    #[arg(long, value_enum)]
    id_strategy: Option<IdStrategy>,

    /// Write logs to this file (a timestamp and pid suffix is appended)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    apply_overrides(&mut config, &cli);

    if let Some(log_path) = init_tracing(&config.logging) {
        tracing::info!(log = %log_path.display(), config = %path.display(), "logging initialized");
    }

    runtime::run(&config).context("terminal UI failed")?;
    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(strategy) = cli.id_strategy {
        config.list.id_strategy = strategy;
    }
    if let Some(file) = &cli.log_file {
        config.logging.file = Some(file.clone());
    }
}
