// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Command-line tokenizer for the pos shell.
//!
//! Splits a typed command line into arguments on unquoted spaces, with `"`
//! grouping words that contain spaces.
//!
//! # Quick Start
//!
//! ```ignore
//! use pos_shell::{tokenize, tokenize_strict, Tokenizer};
//!
//! assert_eq!(tokenize(r#"cat "read me.txt""#), ["cat", "read me.txt"]);
//! assert!(tokenize_strict(r#"cat "read me.txt"#).is_err());
//!
//! let tokens = Tokenizer::new().keep_empty_quoted(true).tokenize(r#"set title """#);
//! assert_eq!(tokens, ["set", "title", ""]);
//! ```
//!
//! # Entry points
//!
//! - [`tokenize`] - lenient and total; unbalanced quotes are tolerated
//! - [`tokenize_strict`] - fails with [`TokenizeError`] on an unbalanced quote
//! - [`Tokenizer::tokenize_spanned`] - tokens with their byte [`Span`]s
//! - [`join`] - quote tokens back into a line

mod error;
pub mod span;
mod tokenizer;

pub use error::TokenizeError;
pub use span::{context_snippet, Span};
pub use tokenizer::{join, tokenize, tokenize_strict, Token, Tokenizer};
