// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Document root and selector lookup.

use crate::element::Element;
use crate::error::DomError;
use crate::selector::Selector;

/// An element tree rooted at `<body>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    body: Element,
}

impl Document {
    pub fn new() -> Self {
        Self::with_body(Element::new("body"))
    }

    pub fn with_body(body: Element) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    /// First element in document order matching `selector`, the body included.
    pub fn query(&self, selector: &Selector) -> Option<&Element> {
        self.body.descendants().find(|el| selector.matches(el))
    }

    /// Every element matching `selector`, in document order.
    pub fn query_all(&self, selector: &Selector) -> Vec<&Element> {
        self.body
            .descendants()
            .filter(|el| selector.matches(el))
            .collect()
    }

    /// Look up the first element matching a selector string.
    ///
    /// Fails with [`DomError::NotFound`] carrying the selector when nothing
    /// matches, or [`DomError::InvalidSelector`] when it does not parse.
    pub fn get_element(&self, selector: &str) -> Result<&Element, DomError> {
        let parsed = Selector::parse(selector)?;
        self.query(&parsed).ok_or_else(|| {
            tracing::debug!(selector, "no element matches");
            DomError::NotFound(selector.to_string())
        })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
