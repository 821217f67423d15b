// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a single value: `text` verbatim, or `json` for JSON output.
pub fn render<T: Serialize>(format: OutputFormat, text: &str, json: &T) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(text.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(json)?),
    }
}

/// Print a single value in the requested format.
pub fn print_value<T: Serialize>(format: OutputFormat, text: &str, json: &T) -> anyhow::Result<()> {
    println!("{}", render(format, text, json)?);
    Ok(())
}
