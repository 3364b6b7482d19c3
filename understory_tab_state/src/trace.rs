// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explainability hooks for batch tab-state operations.
//!
//! The manager only keeps the records it needs to undo its own changes. When an
//! embedder wants to know *what happened* during a close or open (for logging,
//! debugging focus traps, or assertions in tests), pass a [`TabStateTrace`] to
//! the `*_with_trace` variants:
//!
//! - [`TabStateManager::neutralize_within_with_trace`](crate::TabStateManager::neutralize_within_with_trace)
//! - [`TabStateManager::restore_within_with_trace`](crate::TabStateManager::restore_within_with_trace)
//!
//! [`TabStateLog`] is a small recorder that keeps every event in order.

use alloc::vec::Vec;

/// One observed step of a batch operation.
///
/// `R` is the host's stored tab order form, see [`TabIndexHost::Raw`](crate::TabIndexHost::Raw).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TabStateEvent<K, R = i32> {
    /// `save_state` ran on `id`.
    Saved {
        /// The element.
        id: K,
        /// The tab order attribute that was recorded, if any.
        saved_tab_index: Option<R>,
        /// `false` if the element was already handled and nothing was recorded.
        newly_saved: bool,
    },
    /// The element's tab order was set to [`UNTABBABLE`](crate::UNTABBABLE).
    Neutralized {
        /// The element.
        id: K,
    },
    /// A handled element was restored.
    Restored {
        /// The element.
        id: K,
        /// The tab order written back, or `None` if the attribute was removed.
        restored_tab_index: Option<R>,
    },
}

/// A callback sink for batch tab-state operations.
pub trait TabStateTrace<K, R = i32> {
    /// Called after `save_state` ran on `id`.
    fn saved(&mut self, id: K, saved_tab_index: Option<&R>, newly_saved: bool);

    /// Called after `id` was made untabbable.
    fn neutralized(&mut self, id: K);

    /// Called after a handled `id` was restored.
    fn restored(&mut self, id: K, restored_tab_index: Option<&R>);
}

impl<K, R> TabStateTrace<K, R> for () {
    #[inline]
    fn saved(&mut self, _id: K, _saved_tab_index: Option<&R>, _newly_saved: bool) {}

    #[inline]
    fn neutralized(&mut self, _id: K) {}

    #[inline]
    fn restored(&mut self, _id: K, _restored_tab_index: Option<&R>) {}
}

/// Records every traced event in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabStateLog<K, R = i32> {
    events: Vec<TabStateEvent<K, R>>,
}

impl<K, R> TabStateLog<K, R> {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[TabStateEvent<K, R>] {
        &self.events
    }

    /// Drops all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<K, R: Clone> TabStateTrace<K, R> for TabStateLog<K, R> {
    fn saved(&mut self, id: K, saved_tab_index: Option<&R>, newly_saved: bool) {
        self.events.push(TabStateEvent::Saved {
            id,
            saved_tab_index: saved_tab_index.cloned(),
            newly_saved,
        });
    }

    fn neutralized(&mut self, id: K) {
        self.events.push(TabStateEvent::Neutralized { id });
    }

    fn restored(&mut self, id: K, restored_tab_index: Option<&R>) {
        self.events.push(TabStateEvent::Restored {
            id,
            restored_tab_index: restored_tab_index.cloned(),
        });
    }
}
