//! Percent command implementation.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;

use pricefmt::FormatOptions;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_output, KeyValue};

/// Arguments for the percent command.
#[derive(Args, Debug)]
pub struct PercentArgs {
    /// Ratio to format (0.255 is 25.5%)
    #[arg(allow_negative_numbers = true)]
    pub value: Decimal,

    /// Fractional digits
    #[arg(short, long, default_value = "2")]
    pub decimals: u32,

    /// Language code (en, ar, ...)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Separator between number and percent sign
    #[arg(long)]
    pub separator: Option<String>,
}

/// Execute the percent command.
pub fn execute(args: PercentArgs, context: &Context, format: OutputFormat) -> Result<()> {
    let formatter = context.formatter()?;
    let mut options = FormatOptions::new();
    if let Some(separator) = args.separator {
        options = options.with_separator(separator);
    }

    let formatted =
        formatter.format_percentage(args.value, args.decimals, args.language.as_deref(), &options)?;

    let rows = vec![
        KeyValue::new("formatted", formatted),
        KeyValue::new("value", args.value.to_string()),
        KeyValue::new("decimals", args.decimals.to_string()),
    ];
    print_output(&rows, format)
}
