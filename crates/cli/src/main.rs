// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pos - command-line front end for the pos desktop helpers

mod commands;
mod env;
mod exit_error;
mod output;

use output::OutputFormat;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{element, format, tokenize};

#[derive(Parser)]
#[command(
    name = "pos",
    version,
    about = "pos - tokenizer and formatting helpers for the pos desktop"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a command line into arguments
    Tokenize(tokenize::TokenizeArgs),
    /// Format seconds of uptime, e.g. "2d 3h"
    Uptime { seconds: u64 },
    /// Format a byte count, e.g. "1.5 KB"
    Size { bytes: u64 },
    /// Escape text for markup
    Escape {
        text: String,
        /// Also escape double quotes, for attribute values
        #[arg(long)]
        attr: bool,
    },
    /// Generate a unique ID
    Id {
        /// ID prefix (default: $POS_ID_PREFIX or "id")
        #[arg(conflicts_with = "uuid")]
        prefix: Option<String>,
        /// Print a random UUID instead of a prefixed ID
        #[arg(long)]
        uuid: bool,
    },
    /// Print the local time as HH:MM:SS
    Time,
    /// Build an element and print its markup
    Element(element::ElementArgs),
    /// Wait for a number of milliseconds
    Wait { ms: u64 },
}

fn cli_command() -> clap::Command {
    Cli::command()
}

#[tokio::main]
async fn main() {
    setup_logging();

    if let Err(e) = run().await {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Log to stderr, filtered by `POS_LOG` (default `warn`).
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(env::DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let fmt = cli.output;

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // No subcommand: print help and exit 0
            cli_command().print_help()?;
            println!();
            return Ok(());
        }
    };

    match command {
        Commands::Tokenize(args) => tokenize::handle(args, fmt)?,
        Commands::Uptime { seconds } => format::uptime(seconds, fmt)?,
        Commands::Size { bytes } => format::size(bytes, fmt)?,
        Commands::Escape { text, attr } => format::escape(&text, attr, fmt)?,
        Commands::Id { prefix, uuid } => format::id(prefix, uuid, fmt)?,
        Commands::Time => format::time(fmt)?,
        Commands::Element(args) => element::handle(args, fmt)?,
        Commands::Wait { ms } => pos_timing::delay(ms).await,
    }

    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
