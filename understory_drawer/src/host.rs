// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Affine;
use understory_tab_state::{ChildrenLookup, TabIndexHost};

/// Everything the drawer controller needs from its host.
///
/// `root` is the element spanning the viewport (it carries the presentation
/// classes and the scrim), `drawer` is the sliding panel inside it. The host
/// also provides tab-order access for the panel's descendants through the
/// [`TabIndexHost`] and [`ChildrenLookup`] supertraits.
pub trait DrawerHost<K>: TabIndexHost<K> + ChildrenLookup<K> {
    /// Returns `true` if `id` carries `class`.
    fn has_class(&self, id: K, class: &str) -> bool;

    /// Add `class` to `id`.
    fn add_class(&mut self, id: K, class: &str);

    /// Remove `class` from `id`.
    fn remove_class(&mut self, id: K, class: &str);

    /// The drawer panel's laid-out width in pixels.
    fn drawer_width(&self, drawer: K) -> f64;

    /// Set or clear the panel's inline transform.
    fn set_drawer_transform(&mut self, drawer: K, transform: Option<Affine>);

    /// Set or clear the scrim's inline opacity.
    fn set_scrim_opacity(&mut self, root: K, opacity: Option<f64>);

    /// Stop the page behind the drawer from scrolling.
    fn block_scroll(&mut self, root: K);

    /// Undo [`block_scroll`](Self::block_scroll).
    fn unblock_scroll(&mut self, root: K);

    /// Returns `true` if the drawer is laid out right-to-left.
    fn is_rtl(&self, root: K) -> bool;

    /// Called after the drawer changed from closed to open.
    fn notify_open(&mut self, root: K) {
        let _ = root;
    }

    /// Called after the drawer changed from open to closed.
    fn notify_close(&mut self, root: K) {
        let _ = root;
    }
}
