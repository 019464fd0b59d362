//! Config command implementation.
//!
//! Shows the effective configuration and validates configuration files.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};

use pricefmt::FormatConfig;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_error, print_header, print_output, print_single, print_success, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show(ShowArgs),

    /// List configured countries
    Countries,

    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Arguments for show subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Serialization syntax
    #[arg(long, value_enum, default_value = "json")]
    pub syntax: Syntax,
}

/// Configuration file syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Syntax {
    /// JSON
    Json,
    /// TOML
    Toml,
}

/// Arguments for validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Configuration file (.json or .toml)
    pub path: PathBuf,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, context: &Context, format: OutputFormat) -> Result<()> {
    match args.command {
        ConfigCommand::Show(show) => {
            let config = context.config()?;
            match show.syntax {
                Syntax::Json => println!("{}", config.to_json_string()?),
                Syntax::Toml => println!("{}", config.to_toml_string()?),
            }
        }
        ConfigCommand::Countries => {
            let config = context.config()?;
            let rows: Vec<KeyValue> = config
                .currencies
                .iter()
                .map(|(key, country)| {
                    let languages: Vec<&str> = country.formats.keys().map(String::as_str).collect();
                    KeyValue::new(key.clone(), format!("{} [{}]", country.code, languages.join(", ")))
                })
                .collect();
            match format {
                OutputFormat::Json => print_single(&config.currencies)?,
                OutputFormat::Table => {
                    print_header("Configured countries");
                    print_output(&rows, format)?;
                }
                OutputFormat::Minimal => {
                    for row in rows {
                        println!("{}\t{}", row.key, row.value);
                    }
                }
            }
        }
        ConfigCommand::Validate(validate) => validate_file(&validate.path)?,
    }
    Ok(())
}

fn validate_file(path: &std::path::Path) -> Result<()> {
    match FormatConfig::from_path(path) {
        Ok(config) => {
            print_success(&format!(
                "{} is valid ({} countries)",
                path.display(),
                config.currencies.len()
            ));
            Ok(())
        }
        Err(e) => {
            print_error(&format!("{}: {e}", path.display()));
            Err(e.into())
        }
    }
}
