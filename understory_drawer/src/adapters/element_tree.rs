// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element-tree adapter: run a drawer over an `understory_element_tree::Tree`.
//!
//! - Classes map onto the element class lists.
//! - The panel width is [`Tree::width`]; the drag transform and scrim opacity
//!   are the inline [`transform`](understory_element_tree::Element::transform)
//!   and [`opacity`](understory_element_tree::Element::opacity).
//! - Scroll blocking toggles [`SCROLL_LOCK_CLASS`] on the topmost ancestor of the
//!   drawer root (the document element).
//! - Direction comes from the nearest `dir` attribute on the root or its ancestors.
//!
//! Tab order goes through the `understory_tab_state` element-tree adapter, and
//! [`HtmlFocusPolicy`](understory_tab_state::adapters::element_tree::HtmlFocusPolicy)
//! is the natural focus policy.

use core::iter;

use kurbo::Affine;
use understory_element_tree::{ElementId, Tree};

use crate::host::DrawerHost;

/// Class added to the document element while an open drawer blocks scrolling.
pub const SCROLL_LOCK_CLASS: &str = "temporary-drawer-scroll-lock";

fn document_element(tree: &Tree, id: ElementId) -> ElementId {
    tree.ancestors(id).last().unwrap_or(id)
}

impl DrawerHost<ElementId> for Tree {
    fn has_class(&self, id: ElementId, class: &str) -> bool {
        Self::has_class(self, id, class)
    }

    fn add_class(&mut self, id: ElementId, class: &str) {
        Self::add_class(self, id, class);
    }

    fn remove_class(&mut self, id: ElementId, class: &str) {
        Self::remove_class(self, id, class);
    }

    fn drawer_width(&self, drawer: ElementId) -> f64 {
        self.width(drawer)
    }

    fn set_drawer_transform(&mut self, drawer: ElementId, transform: Option<Affine>) {
        self.set_transform(drawer, transform);
    }

    fn set_scrim_opacity(&mut self, root: ElementId, opacity: Option<f64>) {
        self.set_opacity(root, opacity);
    }

    fn block_scroll(&mut self, root: ElementId) {
        let doc = document_element(self, root);
        Self::add_class(self, doc, SCROLL_LOCK_CLASS);
    }

    fn unblock_scroll(&mut self, root: ElementId) {
        let doc = document_element(self, root);
        Self::remove_class(self, doc, SCROLL_LOCK_CLASS);
    }

    fn is_rtl(&self, root: ElementId) -> bool {
        iter::once(root)
            .chain(self.ancestors(root))
            .find_map(|id| self.attr(id, "dir"))
            .is_some_and(|dir| dir.eq_ignore_ascii_case("rtl"))
    }
}
