//! Convert command implementation.
//!
//! Rates come from the command line or a JSON rates file; no network source
//! is consulted.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use tracing::info;

use pricefmt::FormatOptions;
use pricefmt_ext_rates::StaticRateTable;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::error::{CliError, CliResult};
use crate::output::{print_output, KeyValue};

/// Arguments for the convert command.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Amount in the source currency
    #[arg(allow_negative_numbers = true)]
    pub amount: Decimal,

    /// Source currency code
    #[arg(long)]
    pub from: String,

    /// Target currency code
    #[arg(long)]
    pub to: String,

    /// Units of the target currency per unit of the source
    #[arg(long, conflicts_with = "rates")]
    pub rate: Option<Decimal>,

    /// JSON file of `{"from", "to", "rate"}` entries
    #[arg(long)]
    pub rates: Option<PathBuf>,

    /// Language code (en, ar, ...)
    #[arg(short, long)]
    pub language: Option<String>,
}

impl ConvertArgs {
    /// Rate table named by the flags.
    pub fn rate_table(&self) -> CliResult<StaticRateTable> {
        match (&self.rate, &self.rates) {
            (Some(rate), _) => Ok(StaticRateTable::new().with_rate(&self.from, &self.to, *rate)),
            (None, Some(path)) => StaticRateTable::from_json_file(path)
                .map_err(|e| CliError::Config(e.to_string())),
            (None, None) if self.from == self.to => Ok(StaticRateTable::new()),
            (None, None) => Err(CliError::MissingArgument("--rate or --rates".to_string())),
        }
    }
}

/// Execute the convert command.
pub fn execute(args: ConvertArgs, context: &Context, format: OutputFormat) -> Result<()> {
    let table = args.rate_table()?;
    info!(pairs = table.len(), "loaded exchange rates");
    let formatter = context.formatter_with_rates(Arc::new(table))?;

    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    let formatted = runtime.block_on(formatter.convert(
        args.amount,
        &args.from,
        &args.to,
        args.language.as_deref(),
        &FormatOptions::new(),
    ))?;

    let rows = vec![
        KeyValue::new("formatted", formatted),
        KeyValue::new("amount", args.amount.to_string()),
        KeyValue::new("from", args.from),
        KeyValue::new("to", args.to),
    ];
    print_output(&rows, format)
}
