//! Format command implementation.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;

use pricefmt::{FormatOptions, Position, RoundingMode};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_output, KeyValue};

/// Arguments for the format command.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Amount to format
    #[arg(allow_negative_numbers = true)]
    pub amount: Decimal,

    /// Country key (EG, US, JP, ...). Defaults to the configured country.
    #[arg(short = 'C', long)]
    pub country: Option<String>,

    /// Language code (en, ar, ...)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Wrap negative amounts in parentheses
    #[arg(long)]
    pub accounting: bool,

    /// Abbreviate large amounts (1.5K, 1.5M, 1.5B)
    #[arg(long)]
    pub compact: bool,

    /// Fail when no settings exist for the country
    #[arg(long)]
    pub strict: bool,

    /// Fractional digits
    #[arg(short, long)]
    pub decimals: Option<u32>,

    /// Rounding mode (half_up, half_down, ceil, floor)
    #[arg(short, long)]
    pub rounding: Option<String>,

    /// Currency symbol override
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Symbol placement override (before, after)
    #[arg(short, long)]
    pub position: Option<String>,

    /// Force Eastern Arabic digits on or off
    #[arg(long)]
    pub eastern: Option<bool>,
}

impl FormatArgs {
    /// Per-call options named by the flags.
    pub fn options(&self) -> Result<FormatOptions> {
        let mut options = FormatOptions::new();
        if self.strict {
            options = options.strict();
        }
        if self.accounting {
            options = options.with_accounting(true);
        }
        if self.compact {
            options = options.with_compact(true);
        }
        if let Some(decimals) = self.decimals {
            options = options.with_decimals(decimals);
        }
        if let Some(rounding) = &self.rounding {
            options = options.with_rounding_mode(rounding.parse::<RoundingMode>()?);
        }
        if let Some(symbol) = &self.symbol {
            options = options.with_symbol(symbol.clone());
        }
        if let Some(position) = &self.position {
            options = options.with_position(position.parse::<Position>()?);
        }
        if let Some(eastern) = self.eastern {
            options = options.with_eastern_arabic_numerals(eastern);
        }
        Ok(options)
    }
}

/// Execute the format command.
pub fn execute(args: FormatArgs, context: &Context, format: OutputFormat) -> Result<()> {
    let formatter = context.formatter()?;
    let options = args.options()?;

    let resolution = formatter.resolve(args.country.as_deref(), args.language.as_deref(), &options)?;
    let formatted = formatter.render(args.amount, &resolution)?;

    let rows = vec![
        KeyValue::new("formatted", formatted),
        KeyValue::new("amount", args.amount.to_string()),
        KeyValue::optional("country", resolution.country.clone()),
        KeyValue::new("language", resolution.language.clone()),
        KeyValue::new("source", resolution.source.to_string()),
        KeyValue::new("symbol", resolution.settings.symbol.clone()),
        KeyValue::new("position", resolution.settings.position.to_string()),
        KeyValue::new("decimals", resolution.settings.decimals.to_string()),
        KeyValue::new("rounding_mode", resolution.settings.rounding_mode.to_string()),
    ];
    print_output(&rows, format)
}
