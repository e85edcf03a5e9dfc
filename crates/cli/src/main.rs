//! Feature Settings Tool - Main Entry Point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fc_settings::FcVariant;
use fc_settings_cli::{columns, init_logging, parse_input, registry_listing, render, show, CliConfig};
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser)]
#[command(
    name = "fc-settings",
    version,
    about = "Inspect feature calculator settings and parse feature column names"
)]
struct Cli {
    /// Configuration file (defaults to ./fc-settings.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Print compact JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a settings variant as JSON
    Show {
        /// comprehensive, minimal, efficient, index-based or time-based
        #[arg(long)]
        variant: Option<FcVariant>,

        /// Calculators to leave out
        #[arg(long)]
        exclude: Vec<String>,
    },

    /// Print the column names a variant produces for one kind
    Columns {
        #[arg(long)]
        variant: Option<FcVariant>,

        #[arg(long)]
        kind: Option<String>,
    },

    /// Rebuild per-kind settings from column names (file or stdin)
    Parse {
        file: Option<PathBuf>,

        /// Non-feature columns to skip
        #[arg(long)]
        ignore: Vec<String>,
    },

    /// List the registered calculators
    Registry,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;

    let level = if cli.verbose { Level::DEBUG } else { config.level()? };
    init_logging(level)?;
    info!("fc-settings v{}", env!("CARGO_PKG_VERSION"));

    let pretty = config.pretty && !cli.compact;
    let output = match cli.command {
        Command::Show { variant, exclude } => {
            render(&show(variant.unwrap_or(config.variant), &exclude), pretty)?
        }
        Command::Columns { variant, kind } => {
            let kind = kind.unwrap_or(config.kind);
            columns(variant.unwrap_or(config.variant), &kind).join("\n")
        }
        Command::Parse { file, ignore } => {
            let input = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut input = String::new();
                    std::io::stdin()
                        .read_to_string(&mut input)
                        .context("Failed to read stdin")?;
                    input
                }
            };
            let mut ignore_columns = config.ignore_columns;
            ignore_columns.extend(ignore);
            render(&parse_input(&input, &ignore_columns)?, pretty)?
        }
        Command::Registry => render(&registry_listing(), pretty)?,
    };

    println!("{}", output);
    Ok(())
}
