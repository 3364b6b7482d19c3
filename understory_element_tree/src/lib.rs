// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Element Tree: a small, generational element tree.
//!
//! This crate models the part of a document tree that widget controllers touch:
//! tags, attributes, class lists, a laid-out width, and inline presentation state
//! (a [`kurbo::Affine`] transform and an opacity). It is a host for controllers
//! such as `understory_drawer` and a fixture for testing them, not a browser DOM.
//!
//! - [`Tree`]: arena of elements with parent/child links in document order.
//! - [`Element`]: per-element data with builder helpers.
//! - [`ElementId`]: generational handle; stale ids never alias live elements.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_element_tree::{Element, Tree};
//!
//! let mut tree = Tree::new();
//! let nav = tree.insert(None, Element::new("nav").with_width(256.0));
//! let link = tree.insert(Some(nav), Element::new("a").with_attr("href", "/inbox"));
//! let label = tree.insert(Some(nav), Element::new("span"));
//!
//! assert_eq!(tree.descendants(nav).collect::<Vec<_>>(), vec![link, label]);
//! assert_eq!(tree.attr(link, "href"), Some("/inbox"));
//! assert_eq!(tree.width(nav), 256.0);
//! ```
//!
//! No layout, styling, or event dispatch happens here. Hosts fill in widths from
//! their own layout pass and route events themselves.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::{Ancestors, Descendants, Tree};
pub use types::{Element, ElementId};
