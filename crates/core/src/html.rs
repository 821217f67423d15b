// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Escaping text for insertion into markup.

/// Escape text for use as element content.
///
/// Produces the same output a text node serializes to: `&`, `<`, `>` and
/// the no-break space are replaced by entities. Quotes are left alone, so
/// the result is not safe inside attribute values; use [`escape_attr`].
pub fn escape_html(text: &str) -> String {
    escape(text, false)
}

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attr(text: &str) -> String {
    escape(text, true)
}

/// Render a snippet of source for display.
///
/// No language currently gets token colouring, so this is the escaped text
/// for every `lang`.
pub fn highlight(text: &str, _lang: &str) -> String {
    escape_html(text)
}

fn escape(text: &str, attr: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' if attr => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
