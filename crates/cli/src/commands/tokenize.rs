// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pos tokenize` - split command lines into arguments

use anyhow::Result;
use clap::Args;
use pos_shell::Tokenizer;

use crate::exit_error::ExitError;
use crate::output::OutputFormat;

/// Exit code for a line rejected by `--strict`.
pub const EXIT_UNTERMINATED_QUOTE: i32 = 2;

#[derive(Args, Debug, Default)]
pub struct TokenizeArgs {
    /// Command line to split (reads stdin line by line when omitted)
    pub line: Option<String>,

    /// Fail on an unterminated quote instead of tolerating it
    #[arg(long)]
    pub strict: bool,

    /// Emit an empty quoted segment ("") as an empty argument
    ///
    /// In text output an empty argument prints as an empty line, the same
    /// as the separator between stdin lines. Use `-o json` to tell them
    /// apart.
    #[arg(long)]
    pub keep_empty: bool,

    /// Show the byte range each argument was read from
    #[arg(long)]
    pub spans: bool,
}

pub fn handle(args: TokenizeArgs, format: OutputFormat) -> Result<()> {
    match &args.line {
        Some(line) => {
            for out in render(&args, line, format)? {
                println!("{}", out);
            }
        }
        None => {
            for (i, line) in std::io::stdin().lines().enumerate() {
                let line = line?;
                if i > 0 && format == OutputFormat::Text {
                    println!();
                }
                for out in render(&args, &line, format)? {
                    println!("{}", out);
                }
            }
        }
    }
    Ok(())
}

/// Output lines for one input line.
///
/// Text output has one argument per line, so with `--keep-empty` an empty
/// argument is an empty line.
pub(crate) fn render(args: &TokenizeArgs, line: &str, format: OutputFormat) -> Result<Vec<String>> {
    let tokenizer = Tokenizer::new().keep_empty_quoted(args.keep_empty);
    tracing::debug!(line, strict = args.strict, "tokenizing");

    let tokens = if args.strict {
        tokenizer.tokenize_strict_spanned(line).map_err(|e| {
            ExitError::new(EXIT_UNTERMINATED_QUOTE, format!("{}\n{}", e, e.context(line)))
        })?
    } else {
        tokenizer.tokenize_spanned(line)
    };
    let out = match (format, args.spans) {
        (OutputFormat::Json, true) => vec![serde_json::to_string(&tokens)?],
        (OutputFormat::Json, false) => {
            let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
            vec![serde_json::to_string(&texts)?]
        }
        (OutputFormat::Text, true) => tokens
            .iter()
            .map(|t| format!("{}..{}\t{}", t.span.start, t.span.end, t.text))
            .collect(),
        (OutputFormat::Text, false) => tokens.into_iter().map(|t| t.text).collect(),
    };
    Ok(out)
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
