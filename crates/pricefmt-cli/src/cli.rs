//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{
    ConfigArgs, ConvertArgs, FormatArgs, LookupArgs, ParseArgs, PercentArgs,
};

/// Pricefmt - Locale-aware monetary formatting CLI
#[derive(Parser)]
#[command(name = "pricefmt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "minimal", global = true)]
    pub format: OutputFormat,

    /// Configuration file (.json or .toml); built-in defaults otherwise
    #[arg(short, long, global = true, env = "PRICEFMT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Format an amount for a country and language
    Format(FormatArgs),

    /// Format a ratio as a percentage
    Percent(PercentArgs),

    /// Convert between currencies and format the result
    Convert(ConvertArgs),

    /// Look up a country's currency code and symbol
    Lookup(LookupArgs),

    /// Extract the numeric amount from formatted text
    Parse(ParseArgs),

    /// Inspect and validate configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    Table,
    /// JSON format
    Json,
    /// Minimal output (just the value)
    #[default]
    Minimal,
}
