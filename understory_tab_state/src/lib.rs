// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Tab State: reversible tab-order bookkeeping for openable panels.
//!
//! When a slide-out panel (a drawer, a sheet, a collapsed sidebar) is closed, the
//! controls inside it must leave the keyboard tab sequence; when it opens again,
//! they must come back exactly as they were. This crate does that bookkeeping:
//!
//! - [`focusable_descendants`]: which descendants of a container are in the tab
//!   sequence, in document order.
//! - [`TabStateManager::save_state`]: remember an element's explicit tab order.
//! - [`make_untabbable`]: take an element out of the tab sequence.
//! - [`TabStateManager::restore_state`]: put it back and forget the record.
//!
//! It does **not** own the element tree. Hosts implement [`TabIndexHost`] and
//! [`ChildrenLookup`] for their tree and supply a [`NativeFocus`] policy that
//! says which elements are focusable without an explicit tab order.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_tab_state::{ChildrenLookup, TabIndexHost, TabStateManager, make_untabbable};
//!
//! // A flat host: element 0 is the panel, 1 and 2 are its children.
//! struct Host {
//!     tab_index: [Option<i32>; 3],
//!     children: [u32; 2],
//! }
//! impl TabIndexHost<u32> for Host {
//!     type Raw = i32;
//!     fn tab_index(&self, id: u32) -> Option<i32> { self.tab_index[id as usize] }
//!     fn raw_tab_index(&self, id: u32) -> Option<i32> { self.tab_index[id as usize] }
//!     fn set_tab_index(&mut self, id: u32, v: i32) { self.tab_index[id as usize] = Some(v) }
//!     fn set_raw_tab_index(&mut self, id: u32, v: &i32) { self.set_tab_index(id, *v) }
//!     fn remove_tab_index(&mut self, id: u32) { self.tab_index[id as usize] = None }
//! }
//! impl ChildrenLookup<u32> for Host {
//!     fn children_of(&self, id: u32) -> &[u32] {
//!         if id == 0 { &self.children[..] } else { &[] }
//!     }
//! }
//!
//! let mut host = Host { tab_index: [None, None, Some(42)], children: [1, 2] };
//! // Element 1 is focusable by default (say, a button).
//! let policy = |_: &Host, id: u32| id == 1;
//!
//! let mut tabs = TabStateManager::new();
//! assert_eq!(tabs.neutralize_within(&mut host, 0, &policy), 2);
//! assert_eq!(host.tab_index, [None, Some(-1), Some(-1)]);
//!
//! assert_eq!(tabs.restore_within(&mut host, 0), 2);
//! assert_eq!(host.tab_index, [None, None, Some(42)]);
//! ```
//!
//! ## Records
//!
//! Saved state is kept in a map owned by the manager, keyed by element id,
//! rather than written onto the elements. An element is *handled* exactly while
//! it has a record. Saving a handled element and restoring an unhandled one are
//! both no-ops, so out-of-order open/close requests are harmless.
//!
//! A record remembers whether the element had a tab order attribute at all,
//! and if so its stored form ([`TabIndexHost::Raw`]). Restoring an element that
//! had one (including `0`, or an unparseable value) writes it back verbatim;
//! restoring one that had none removes the attribute, returning it to default
//! focusability.
//!
//! ## Tracing
//!
//! The batch operations have `*_with_trace` variants that report every step to
//! a [`TabStateTrace`]. See [`trace`] and [`TabStateLog`].
//!
//! ## Adapters
//!
//! - **Element Tree Adapter** (`element_tree_adapter` feature): implements the
//!   host traits for `understory_element_tree::Tree` and provides HTML default
//!   focusability rules. Its tests need the feature too:
//!   `cargo test -p understory_tab_state --features element_tree_adapter`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod trace;

mod enumerate;
mod host;
mod manager;

#[cfg(test)]
mod testing;

pub use enumerate::{FocusableDescendants, collect_focusable, focusable_descendants, is_tabbable};
pub use host::{ChildrenLookup, NativeFocus, TabIndexHost, parse_tab_index};
pub use manager::{TabStateManager, TabStateRecord, UNTABBABLE, make_untabbable};
pub use trace::{TabStateEvent, TabStateLog, TabStateTrace};
