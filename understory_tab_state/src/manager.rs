// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tab-state manager: reversible neutralization of tab order.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::enumerate::{collect_focusable, for_each_descendant};
use crate::host::{ChildrenLookup, NativeFocus, TabIndexHost};
use crate::trace::TabStateTrace;

/// The tab order that removes an element from the tab sequence while keeping it
/// programmatically focusable.
pub const UNTABBABLE: i32 = -1;

/// Set `id`'s explicit tab order to [`UNTABBABLE`].
///
/// This is independent of any [`TabStateManager`]: it can be called on any
/// element, saved or not. Call [`TabStateManager::save_state`] first if the
/// change must be undoable.
pub fn make_untabbable<H, K>(host: &mut H, id: K)
where
    H: TabIndexHost<K> + ?Sized,
{
    host.set_tab_index(id, UNTABBABLE);
}

/// Saved state for one handled element.
///
/// A record exists for an element exactly when it has been saved and not yet
/// restored. The record's presence is the "handled" marker. `R` is the host's
/// [`TabIndexHost::Raw`] form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TabStateRecord<R = i32> {
    /// The element's tab order attribute at save time, as stored by the host.
    ///
    /// `None` means the element had no tab order attribute (it was focusable,
    /// if at all, only by default), so restoring removes the attribute.
    pub saved_tab_index: Option<R>,
}

impl<R> Default for TabStateRecord<R> {
    fn default() -> Self {
        Self {
            saved_tab_index: None,
        }
    }
}

/// Owns the saved tab state of the elements it has neutralized.
///
/// Per element, the lifecycle is `Normal → Saved → Neutralized → Normal`:
/// [`save_state`](Self::save_state) records, [`make_untabbable`] neutralizes,
/// and [`restore_state`](Self::restore_state) puts things back and drops the
/// record. Both `save_state` and `restore_state` are idempotent, so open and
/// close requests arriving out of order cannot corrupt the records.
#[derive(Clone, Debug)]
pub struct TabStateManager<K, R = i32> {
    records: HashMap<K, TabStateRecord<R>>,
    scratch: Vec<K>,
}

impl<K, R> Default for TabStateManager<K, R> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            scratch: Vec::new(),
        }
    }
}

impl<K, R> TabStateManager<K, R>
where
    K: Copy + Eq + Hash,
{
    /// Creates a manager with no records.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handled elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no element is handled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` if `id` has been saved and not yet restored.
    #[must_use]
    pub fn is_handled(&self, id: K) -> bool {
        self.records.contains_key(&id)
    }

    /// The saved record for `id`, if it is handled.
    #[must_use]
    pub fn record(&self, id: K) -> Option<&TabStateRecord<R>> {
        self.records.get(&id)
    }

    /// Record `id`'s current tab order attribute and mark it handled.
    ///
    /// The attribute is kept in the host's stored form, so an unparseable or
    /// oddly formatted value comes back unchanged on restore.
    ///
    /// Returns `false` without doing anything if `id` is already handled.
    /// The element itself is not modified.
    pub fn save_state<H>(&mut self, host: &H, id: K) -> bool
    where
        H: TabIndexHost<K, Raw = R> + ?Sized,
    {
        if self.records.contains_key(&id) {
            return false;
        }
        self.records.insert(
            id,
            TabStateRecord {
                saved_tab_index: host.raw_tab_index(id),
            },
        );
        true
    }

    /// Undo [`save_state`](Self::save_state) and any neutralization since.
    ///
    /// - A saved tab order is written back.
    /// - A handled element without a saved tab order has its tab order removed.
    ///
    /// The record is dropped in both cases. Returns `false` without touching the
    /// host if `id` was never saved.
    pub fn restore_state<H>(&mut self, host: &mut H, id: K) -> bool
    where
        H: TabIndexHost<K, Raw = R> + ?Sized,
    {
        self.restore_one(host, id).is_some()
    }

    /// Drop `id`'s record without touching the host.
    ///
    /// Use this when the element is gone and there is nothing left to restore.
    pub fn forget(&mut self, id: K) -> Option<TabStateRecord<R>> {
        self.records.remove(&id)
    }

    /// Keep only the records whose element satisfies `keep`, without touching the host.
    pub fn retain(&mut self, mut keep: impl FnMut(K) -> bool) {
        self.records.retain(|&id, _| keep(id));
    }

    /// Drop every record without touching the host.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Save and neutralize every tabbable descendant of `container`.
    ///
    /// Elements are processed in document order. Returns the number of elements
    /// made untabbable.
    pub fn neutralize_within<H, P>(&mut self, host: &mut H, container: K, policy: &P) -> usize
    where
        H: TabIndexHost<K, Raw = R> + ChildrenLookup<K> + ?Sized,
        P: NativeFocus<H, K> + ?Sized,
    {
        self.neutralize_within_with_trace(host, container, policy, &mut ())
    }

    /// Like [`neutralize_within`](Self::neutralize_within), reporting each step to `trace`.
    pub fn neutralize_within_with_trace<H, P, T>(
        &mut self,
        host: &mut H,
        container: K,
        policy: &P,
        trace: &mut T,
    ) -> usize
    where
        H: TabIndexHost<K, Raw = R> + ChildrenLookup<K> + ?Sized,
        P: NativeFocus<H, K> + ?Sized,
        T: TabStateTrace<K, R> + ?Sized,
    {
        let mut targets = core::mem::take(&mut self.scratch);
        collect_focusable(&*host, container, policy, &mut targets);
        for &id in &targets {
            let newly_saved = self.save_state(&*host, id);
            let saved_tab_index = self
                .records
                .get(&id)
                .and_then(|r| r.saved_tab_index.as_ref());
            trace.saved(id, saved_tab_index, newly_saved);
            make_untabbable(host, id);
            trace.neutralized(id);
        }
        let count = targets.len();
        targets.clear();
        self.scratch = targets;
        count
    }

    /// Restore every handled descendant of `container`.
    ///
    /// All descendants are visited in document order, not only tabbable ones:
    /// neutralized elements are no longer in the tab sequence. Handled elements
    /// outside `container` are left alone. Returns the number restored.
    pub fn restore_within<H>(&mut self, host: &mut H, container: K) -> usize
    where
        H: TabIndexHost<K, Raw = R> + ChildrenLookup<K> + ?Sized,
    {
        self.restore_within_with_trace(host, container, &mut ())
    }

    /// Like [`restore_within`](Self::restore_within), reporting each step to `trace`.
    pub fn restore_within_with_trace<H, T>(
        &mut self,
        host: &mut H,
        container: K,
        trace: &mut T,
    ) -> usize
    where
        H: TabIndexHost<K, Raw = R> + ChildrenLookup<K> + ?Sized,
        T: TabStateTrace<K, R> + ?Sized,
    {
        if self.records.is_empty() {
            return 0;
        }
        let mut targets = core::mem::take(&mut self.scratch);
        targets.clear();
        for_each_descendant(&*host, container, |id| {
            if self.records.contains_key(&id) {
                targets.push(id);
            }
        });
        let mut count = 0;
        for &id in &targets {
            if let Some(restored) = self.restore_one(host, id) {
                trace.restored(id, restored.as_ref());
                count += 1;
            }
        }
        targets.clear();
        self.scratch = targets;
        count
    }

    /// Returns `None` if `id` was not handled, else the tab order written back.
    fn restore_one<H>(&mut self, host: &mut H, id: K) -> Option<Option<R>>
    where
        H: TabIndexHost<K, Raw = R> + ?Sized,
    {
        let record = self.records.remove(&id)?;
        match &record.saved_tab_index {
            Some(raw) => host.set_raw_tab_index(id, raw),
            None => host.remove_tab_index(id),
        }
        Some(record.saved_tab_index)
    }
}
