//! Pricefmt CLI - Command-line interface for monetary formatting.
//!
//! # Usage
//!
//! ```bash
//! # Format an amount for a country and language
//! pricefmt format 1234.56 --country EG --language ar
//!
//! # Accounting and compact notation
//! pricefmt format -- -2500000 --country US --accounting --compact
//!
//! # Format a ratio as a percentage
//! pricefmt percent 0.255 --decimals 1
//!
//! # Convert with an explicit rate
//! pricefmt convert 10 --from USD --to EGP --rate 50
//!
//! # Look up a country's currency
//! pricefmt lookup JP
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let format = cli.format;
    let context = commands::Context::new(cli.config);

    match cli.command {
        Commands::Format(args) => commands::format::execute(args, &context, format)?,
        Commands::Percent(args) => commands::percent::execute(args, &context, format)?,
        Commands::Convert(args) => commands::convert::execute(args, &context, format)?,
        Commands::Lookup(args) => commands::lookup::execute(args, &context, format)?,
        Commands::Parse(args) => commands::parse::execute(args, format)?,
        Commands::Config(args) => commands::config::execute(args, &context, format)?,
    }

    Ok(())
}

/// Logs go to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
