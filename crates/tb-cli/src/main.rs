mod cli;
mod commands;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tb_catalog::{Catalog, ValidationMode};
use tb_config::Config;
use tb_engine::Advisor;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Command output goes to stdout, logs to stderr
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "trustbuilds",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        Commands::Score {
            failure_rate,
            warranty,
            reputation,
            rma,
            json,
        } => commands::score::handle(failure_rate, warranty, reputation, rma, json),
        Commands::Validate { json } => {
            // always lenient so every issue gets reported
            let config = commands::load_config(cli.config.as_deref())?;
            let root = commands::catalog_root(cli.catalog, &config);
            let catalog = commands::load_catalog(&root, ValidationMode::Lenient).await?;
            commands::validate::handle(&catalog, json)
        }
        Commands::Builds(cmd) => {
            let (_, catalog) = open(cli.config.as_deref(), cli.catalog, cli.strict).await?;
            commands::builds::handle(cmd, &Advisor::new(&catalog))
        }
        Commands::Budget { amount, json } => {
            let (config, catalog) = open(cli.config.as_deref(), cli.catalog, cli.strict).await?;
            commands::budget::handle(&Advisor::new(&catalog), &config.budget, amount, json)
        }
        Commands::Upgrade {
            budget,
            parts,
            json,
        } => {
            let (config, catalog) = open(cli.config.as_deref(), cli.catalog, cli.strict).await?;
            commands::upgrade::handle(&Advisor::new(&catalog), &config.budget, budget, parts, json)
        }
        Commands::Parts(cmd) => {
            let (_, catalog) = open(cli.config.as_deref(), cli.catalog, cli.strict).await?;
            commands::parts::handle(cmd, &catalog)
        }
    }
}

/// Load config, then the catalog it points at
async fn open(
    config_path: Option<&Path>,
    catalog_flag: Option<PathBuf>,
    strict: bool,
) -> Result<(Config, Catalog)> {
    let config = commands::load_config(config_path)?;
    let root = commands::catalog_root(catalog_flag, &config);
    let mode = commands::validation_mode(strict, &config);
    let catalog = commands::load_catalog(&root, mode).await?;
    Ok((config, catalog))
}
