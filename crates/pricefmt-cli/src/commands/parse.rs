//! Parse command implementation.

use anyhow::Result;
use clap::Args;

use pricefmt::{extract_amount, is_monetary_value};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{print_output, KeyValue};

/// Arguments for the parse command.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Formatted text such as "$1,234.56" or "1.234,56 €"
    #[arg(allow_hyphen_values = true)]
    pub text: String,
}

/// Execute the parse command.
pub fn execute(args: ParseArgs, format: OutputFormat) -> Result<()> {
    let amount = extract_amount(&args.text).ok_or_else(|| CliError::NoAmount(args.text.clone()))?;

    let rows = vec![
        KeyValue::new("amount", amount.to_string()),
        KeyValue::new("monetary", is_monetary_value(&args.text).to_string()),
        KeyValue::new("text", args.text),
    ];
    print_output(&rows, format)
}
