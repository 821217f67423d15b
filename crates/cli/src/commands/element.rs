// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pos element` - build an element and print its markup

use anyhow::Result;
use clap::Args;
use pos_dom::Element;

use crate::output::{print_value, OutputFormat};

#[derive(Args, Debug)]
pub struct ElementArgs {
    /// Tag name, e.g. `div`
    pub tag: String,

    /// Property assignment NAME=VALUE (repeatable; `id`, `className`,
    /// `textContent` and `innerHTML` are recognized)
    #[arg(long = "prop", value_name = "NAME=VALUE", value_parser = parse_prop)]
    pub props: Vec<(String, String)>,

    /// Inner markup, applied after the properties
    #[arg(long, default_value = "")]
    pub content: String,
}

pub fn handle(args: ElementArgs, format: OutputFormat) -> Result<()> {
    let element = Element::create(&args.tag, args.props, &args.content);
    print_value(format, &element.outer_html(), &element)
}

/// Parse `NAME=VALUE`; the value may itself contain `=`.
pub(crate) fn parse_prop(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some(("", _)) => Err(format!("missing property name in '{s}'")),
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected NAME=VALUE, got '{s}'")),
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
