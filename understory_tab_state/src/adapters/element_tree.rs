// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element-tree adapter: drive tab state over an `understory_element_tree::Tree`.
//!
//! The explicit tab order lives in the `tabindex` attribute and is parsed with
//! [`parse_tab_index`](crate::parse_tab_index). Saved state keeps the attribute
//! text itself, so restoring reproduces it byte for byte. [`HtmlFocusPolicy`]
//! supplies the HTML default focusability rules.
//!
//! ## Example
//!
//! ```
//! use understory_element_tree::{Element, Tree};
//! use understory_tab_state::adapters::element_tree::HtmlFocusPolicy;
//! use understory_tab_state::{TabStateManager, focusable_descendants};
//!
//! let mut tree = Tree::new();
//! let panel = tree.insert(None, Element::new("nav"));
//! let link = tree.insert(Some(panel), Element::new("a").with_attr("href", "/inbox"));
//! let _text = tree.insert(Some(panel), Element::new("span"));
//!
//! let found: Vec<_> = focusable_descendants(&tree, panel, &HtmlFocusPolicy).collect();
//! assert_eq!(found, vec![link]);
//!
//! let mut tabs = TabStateManager::new();
//! tabs.neutralize_within(&mut tree, panel, &HtmlFocusPolicy);
//! assert_eq!(tree.attr(link, "tabindex"), Some("-1"));
//! tabs.restore_within(&mut tree, panel);
//! assert_eq!(tree.attr(link, "tabindex"), None);
//! ```

use alloc::string::{String, ToString};

use understory_element_tree::{Element, ElementId, Tree};

use crate::host::{ChildrenLookup, NativeFocus, TabIndexHost, parse_tab_index};

/// Attribute holding the explicit tab order.
pub const TABINDEX: &str = "tabindex";

impl TabIndexHost<ElementId> for Tree {
    type Raw = String;

    fn tab_index(&self, id: ElementId) -> Option<i32> {
        self.attr(id, TABINDEX).and_then(parse_tab_index)
    }

    fn raw_tab_index(&self, id: ElementId) -> Option<String> {
        self.attr(id, TABINDEX).map(String::from)
    }

    fn set_tab_index(&mut self, id: ElementId, value: i32) {
        self.set_attr(id, TABINDEX, &value.to_string());
    }

    fn set_raw_tab_index(&mut self, id: ElementId, raw: &String) {
        self.set_attr(id, TABINDEX, raw);
    }

    fn remove_tab_index(&mut self, id: ElementId) {
        self.remove_attr(id, TABINDEX);
    }
}

impl ChildrenLookup<ElementId> for Tree {
    fn children_of(&self, id: ElementId) -> &[ElementId] {
        Self::children_of(self, id)
    }
}

/// HTML default focusability.
///
/// Focusable without a `tabindex`:
/// - `a` and `area` with an `href`.
/// - `button`, `select`, `textarea`, and `input` (except `type=hidden`) unless `disabled`.
/// - `iframe`, `object`, `embed`, and `summary`.
/// - `audio` and `video` with `controls`.
/// - Any element whose `contenteditable` is present and not `"false"`.
#[derive(Copy, Clone, Debug, Default)]
pub struct HtmlFocusPolicy;

impl HtmlFocusPolicy {
    /// Apply the rules to a single element.
    pub fn is_focusable(element: &Element) -> bool {
        if element
            .attr("contenteditable")
            .is_some_and(|v| !v.eq_ignore_ascii_case("false"))
        {
            return true;
        }
        match element.tag() {
            "a" | "area" => element.has_attr("href"),
            "button" | "select" | "textarea" => !element.has_attr("disabled"),
            "input" => {
                !element.has_attr("disabled")
                    && !element
                        .attr("type")
                        .is_some_and(|t| t.eq_ignore_ascii_case("hidden"))
            }
            "iframe" | "object" | "embed" | "summary" => true,
            "audio" | "video" => element.has_attr("controls"),
            _ => false,
        }
    }
}

impl NativeFocus<Tree, ElementId> for HtmlFocusPolicy {
    fn is_natively_focusable(&self, host: &Tree, id: ElementId) -> bool {
        host.get(id).is_some_and(Self::is_focusable)
    }
}
