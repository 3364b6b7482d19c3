// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Drawer: a headless temporary (modal) navigation drawer.
//!
//! A temporary drawer is a panel that slides in over the page from the leading
//! edge, with a scrim behind it. This crate holds the controller logic and
//! leaves everything platform-specific to a [`DrawerHost`]:
//!
//! - Open/close with presentation classes, page scroll blocking, and open/close
//!   notifications.
//! - Closing via Escape or a scrim click.
//! - Ending the animating phase on the panel's own transition end.
//! - Drag-to-close with an inline translate transform and a scrim opacity that
//!   follows the finger; release past [`DrawerConfig::close_threshold`] closes.
//! - Focus trapping: while closed, the panel's tabbable descendants are removed
//!   from the tab sequence with `understory_tab_state` and restored on open.
//!
//! ## Wiring
//!
//! The host registers its own event listeners and forwards them:
//!
//! | host event | controller call |
//! | --- | --- |
//! | menu button activated | [`TemporaryDrawer::open`] |
//! | click on the scrim | [`TemporaryDrawer::handle_scrim_click`] |
//! | key down | [`TemporaryDrawer::handle_key_down`] |
//! | transition end | [`TemporaryDrawer::handle_transition_end`] |
//! | touch start / move / end | [`TemporaryDrawer::handle_touch_start`] / [`TemporaryDrawer::handle_touch_move`] / [`TemporaryDrawer::handle_touch_end`] |
//! | animation frame while dragging | [`TemporaryDrawer::on_animation_frame`] |
//!
//! Clicks inside the panel should stop at the panel and never reach the scrim
//! handler.
//!
//! ## Example
//!
//! ```
//! # #[cfg(feature = "element_tree_adapter")]
//! # {
//! use understory_drawer::{DrawerConfig, TemporaryDrawer};
//! use understory_element_tree::{Element, Tree};
//! use understory_tab_state::adapters::element_tree::HtmlFocusPolicy;
//!
//! let mut tree = Tree::new();
//! let root = tree.insert(None, Element::new("aside").with_class("temporary-drawer"));
//! let panel = tree.insert(Some(root), Element::new("nav").with_width(256.0));
//! let link = tree.insert(Some(panel), Element::new("a").with_attr("href", "/inbox"));
//!
//! let mut drawer =
//!     TemporaryDrawer::new(&mut tree, root, panel, HtmlFocusPolicy, DrawerConfig::default())
//!         .unwrap();
//! // Closed: the link is out of the tab sequence.
//! assert_eq!(tree.attr(link, "tabindex"), Some("-1"));
//!
//! drawer.open(&mut tree);
//! assert_eq!(tree.attr(link, "tabindex"), None);
//!
//! assert!(drawer.handle_key_down(&mut tree, "Escape"));
//! assert!(!drawer.is_open());
//! # }
//! ```
//!
//! ## Adapters
//!
//! - **Element Tree Adapter** (`element_tree_adapter` feature): implements
//!   [`DrawerHost`] for `understory_element_tree::Tree`.
//!
//! The example above and the adapter's unit tests only build with that feature.
//! `cargo test --workspace` enables it through the demos crate; for this crate
//! alone run `cargo test -p understory_drawer --features element_tree_adapter`.
//!
//! This crate is `no_std`.

#![no_std]

pub mod adapters;

mod config;
mod drag;
mod drawer;
mod host;

pub use config::{DrawerClasses, DrawerConfig, DrawerError};
pub use drag::DrawerDrag;
pub use drawer::{DrawerFlags, TemporaryDrawer};
pub use host::DrawerHost;
