// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! In-memory element tree for the pos desktop.
//!
//! Windows, icons and panels are described as [`Element`]s, built with
//! [`Element::create`] and looked up from a [`Document`] with simple CSS
//! selectors (`tag`, `#id`, `.class` and compounds such as `div.window#main`).
//!
//! ```ignore
//! use pos_dom::{Document, Element};
//!
//! let mut doc = Document::new();
//! doc.body_mut().append_child(Element::create("div", [("id", "dock")], ""));
//! assert_eq!(doc.get_element("#dock")?.tag(), "div");
//! assert!(doc.get_element("#missing").is_err());
//! # Ok::<(), pos_dom::DomError>(())
//! ```

mod document;
mod element;
mod error;
mod selector;

pub use document::Document;
pub use element::{Descendants, Element};
pub use error::DomError;
pub use selector::Selector;
