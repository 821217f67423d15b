// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Element nodes.

use indexmap::IndexMap;
use pos_core::{escape_attr, escape_html};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// An element with properties, inner markup and child elements.
///
/// `inner_html` and `children` are independent: markup set through
/// `innerHTML` is not parsed into child elements, and rendering emits the
/// markup first, then the children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    tag: String,
    id: Option<String>,
    class_name: String,
    props: IndexMap<String, String>,
    inner_html: String,
    children: Vec<Element>,
}

impl Element {
    /// Empty element; the tag is lowercased like HTML tag names.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Create an element, assign properties in order, then set its content.
    ///
    /// Property names follow the DOM: `id` and `className` set the element's
    /// id and classes, `textContent` sets escaped text, `innerHTML` sets raw
    /// markup, and anything else becomes a plain property. Later assignments
    /// to the same name win. `content`, when non-empty, replaces the inner
    /// markup after the properties are applied.
    pub fn create<I, K, V>(tag: &str, props: I, content: &str) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut element = Self::new(tag);
        for (name, value) in props {
            element.set_prop(name.as_ref(), value);
        }
        if !content.is_empty() {
            element.inner_html = content.to_string();
        }
        element
    }

    /// Assign a single property, with the same name mapping as [`Element::create`].
    pub fn set_prop(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match name {
            "id" => self.id = Some(value).filter(|v| !v.is_empty()),
            "className" => self.class_name = value,
            "textContent" => {
                self.inner_html = escape_html(&value);
                self.children.clear();
            }
            "innerHTML" => {
                self.inner_html = value;
                self.children.clear();
            }
            _ => {
                self.props.insert(name.to_string(), value);
            }
        }
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Whitespace-separated entries of `className`.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class_name.split_ascii_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn prop(&self, name: &str) -> Option<&str> {
        self.props.get(name).map(String::as_str)
    }

    pub fn props(&self) -> &IndexMap<String, String> {
        &self.props
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        &mut self.children
    }

    pub fn append_child(&mut self, child: Element) -> &mut Self {
        self.children.push(child);
        self
    }

    /// This element and everything below it, in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Render as markup. Property values are attribute-escaped.
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        self.render(&mut out);
        out
    }

    fn render(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(id) = &self.id {
            let _ = write!(out, " id=\"{}\"", escape_attr(id));
        }
        if !self.class_name.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_attr(&self.class_name));
        }
        for (name, value) in &self.props {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        out.push('>');
        out.push_str(&self.inner_html);
        for child in &self.children {
            child.render(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Pre-order iterator over an element and its descendants.
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
