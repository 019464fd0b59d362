//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Prints rows whose first entry is the headline result.
///
/// `minimal` prints only the headline value, unquoted, so the output can be
/// piped.
pub fn print_output(rows: &[KeyValue], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(rows),
        OutputFormat::Json => print_json(rows),
        OutputFormat::Minimal => {
            if let Some(first) = rows.first() {
                println!("{}", first.value);
            }
            Ok(())
        }
    }
}

/// Prints a single serializable value.
pub fn print_single<T: Serialize>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

fn print_json(rows: &[KeyValue]) -> anyhow::Result<()> {
    let object: serde_json::Map<String, serde_json::Value> = rows
        .iter()
        .map(|row| (row.key.clone(), serde_json::Value::String(row.value.clone())))
        .collect();
    println!("{}", serde_json::to_string_pretty(&object)?);
    Ok(())
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Field")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a pair whose value may be absent.
    pub fn optional(key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        Self::new(key, value.map(Into::into).unwrap_or_else(|| "-".to_string()))
    }
}
