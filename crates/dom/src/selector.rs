// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compound selectors: `*`, `tag`, `#id`, `.class` and combinations.
//!
//! Combinators (`div p`, `a > b`), attribute selectors, pseudo-classes and
//! selector lists are rejected as invalid.

use crate::element::Element;
use crate::error::DomError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, DomError> {
        let source = input.trim();
        let invalid = |reason: &str| DomError::InvalidSelector {
            selector: input.to_string(),
            reason: reason.to_string(),
        };
        if source.is_empty() {
            return Err(invalid("empty selector"));
        }

        let mut selector = Selector {
            tag: None,
            id: None,
            classes: Vec::new(),
        };
        let mut rest = source;

        if let Some(after) = rest.strip_prefix('*') {
            rest = after;
        } else {
            let (name, after) = split_ident(rest);
            if !name.is_empty() {
                selector.tag = Some(name.to_ascii_lowercase());
            }
            rest = after;
        }

        while let Some(c) = rest.chars().next() {
            let (name, after) = split_ident(&rest[c.len_utf8()..]);
            match c {
                '#' | '.' if name.is_empty() => {
                    return Err(invalid(&format!("expected a name after '{c}'")));
                }
                '#' if selector.id.is_some() => {
                    return Err(invalid("more than one id"));
                }
                '#' => selector.id = Some(name.to_string()),
                '.' => selector.classes.push(name.to_string()),
                c if c.is_whitespace() || c == '>' || c == '+' || c == '~' => {
                    return Err(invalid("combinators are not supported"));
                }
                _ => return Err(invalid(&format!("unexpected '{c}'"))),
            }
            rest = after;
        }

        Ok(selector)
    }

    /// Returns true if `element` satisfies every part of the selector.
    pub fn matches(&self, element: &Element) -> bool {
        self.tag.as_deref().is_none_or(|tag| element.tag() == tag)
            && self.id.as_deref().is_none_or(|id| element.id() == Some(id))
            && self.classes.iter().all(|class| element.has_class(class))
    }
}

impl FromStr for Selector {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{tag}")?,
            None if self.id.is_none() && self.classes.is_empty() => write!(f, "*")?,
            None => {}
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

/// Split off a leading run of name characters.
fn split_ident(s: &str) -> (&str, &str) {
    let end = s
        .char_indices()
        .find(|&(_, c)| !(c.is_alphanumeric() || c == '-' || c == '_'))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s.split_at(end)
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
