//! Lookup command implementation.

use anyhow::Result;
use clap::Args;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_output, KeyValue};

/// Arguments for the lookup command.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Country key (EG, JP, ...) or catalog country name
    pub country: String,

    /// Language for the symbol
    #[arg(short, long, default_value = "en")]
    pub language: String,
}

/// Execute the lookup command.
pub fn execute(args: LookupArgs, context: &Context, format: OutputFormat) -> Result<()> {
    let formatter = context.formatter()?;

    let code = formatter.currency_code(&args.country);
    let symbol = formatter.currency_symbol(&args.country, &args.language);
    let configured = formatter.config().country(&args.country).is_some();

    let rows = vec![
        KeyValue::optional("code", code),
        KeyValue::optional("symbol", symbol),
        KeyValue::new("country", args.country),
        KeyValue::new("language", args.language),
        KeyValue::new("configured", configured.to_string()),
    ];
    print_output(&rows, format)
}
