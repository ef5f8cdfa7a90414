//! docfill command-line tool
//!
//! - `fill`: populate a template's placeholder lines from customer records
//! - `validate-memory`: check a memory form and print the per-field errors
//! - `fields`: list the field identifiers templates may use

use anyhow::Context;
use clap::{Parser, Subcommand};
use memory_validator::ValidatorConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "docfill")]
#[command(version, about = "Fill document templates from customer data")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill a template JSON with person and proposition data
    Fill {
        /// Template pages JSON
        #[arg(long)]
        template: PathBuf,

        /// Person record JSON
        #[arg(long)]
        person: PathBuf,

        /// Proposition record JSON
        #[arg(long)]
        proposition: PathBuf,

        /// Document revision key reported in errors
        #[arg(long, default_value = "unknown")]
        revision: String,

        /// Write the filled template here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a memory form JSON
    ValidateMemory {
        /// Memory form JSON ({"name", "fieldList"})
        #[arg(long)]
        form: PathBuf,

        /// Validator configuration TOML
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List supported field identifiers
    Fields,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout carries command output, logs go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.command {
        Command::Fill {
            template,
            person,
            proposition,
            revision,
            output,
        } => {
            let filled = commands::fill(
                &read(&template)?,
                &read(&person)?,
                &read(&proposition)?,
                &revision,
            )?;
            match output {
                Some(path) => {
                    fs::write(&path, filled)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Wrote filled template to {}", path.display());
                }
                None => println!("{}", filled),
            }
        }
        Command::ValidateMemory { form, config } => {
            let config = match config {
                Some(path) => ValidatorConfig::from_file(path)?,
                None => ValidatorConfig::default(),
            };
            let report = commands::validate_memory(&read(&form)?, config)?;
            println!("{}", commands::render_report(&report)?);
            if !report.is_valid() {
                tracing::warn!("Memory form has {} issue(s)", report.len());
                std::process::exit(1);
            }
        }
        Command::Fields => {
            let fields = commands::list_fields();
            println!("{}", serde_json::to_string_pretty(&fields)?);
        }
    }

    Ok(())
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
