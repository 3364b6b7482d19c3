// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enumerating the keyboard-reachable descendants of a container.

use alloc::vec::Vec;

use crate::host::{ChildrenLookup, NativeFocus, TabIndexHost};

/// Returns `true` if `id` is in the normal tab sequence.
///
/// An explicit tab order decides on its own: non-negative values are tabbable,
/// negative ones are not. Without one, the host policy decides.
pub fn is_tabbable<H, P, K>(host: &H, policy: &P, id: K) -> bool
where
    H: TabIndexHost<K> + ?Sized,
    P: NativeFocus<H, K> + ?Sized,
    K: Copy,
{
    match host.tab_index(id) {
        Some(order) => order >= 0,
        None => policy.is_natively_focusable(host, id),
    }
}

/// Iterate the tabbable descendants of `container` in document order.
///
/// `container` itself is never yielded. Each call performs a fresh traversal,
/// so the result reflects the tree as it is when iterated.
///
/// Mutating the host invalidates the borrow; collect first (see
/// [`collect_focusable`]) when the elements are about to be changed.
pub fn focusable_descendants<'a, H, P, K>(
    host: &'a H,
    container: K,
    policy: &'a P,
) -> FocusableDescendants<'a, H, P, K>
where
    H: TabIndexHost<K> + ChildrenLookup<K> + ?Sized,
    P: NativeFocus<H, K> + ?Sized,
    K: Copy,
{
    let mut stack = Vec::new();
    stack.extend(host.children_of(container).iter().rev().copied());
    FocusableDescendants {
        host,
        policy,
        stack,
    }
}

/// Collect the tabbable descendants of `container` into `out`.
///
/// `out` is cleared first and can be reused across calls to avoid allocations.
pub fn collect_focusable<H, P, K>(host: &H, container: K, policy: &P, out: &mut Vec<K>)
where
    H: TabIndexHost<K> + ChildrenLookup<K> + ?Sized,
    P: NativeFocus<H, K> + ?Sized,
    K: Copy,
{
    out.clear();
    out.extend(focusable_descendants(host, container, policy));
}

/// Iterator returned by [`focusable_descendants`].
pub struct FocusableDescendants<'a, H: ?Sized, P: ?Sized, K> {
    host: &'a H,
    policy: &'a P,
    stack: Vec<K>,
}

impl<H: ?Sized, P: ?Sized, K: core::fmt::Debug> core::fmt::Debug
    for FocusableDescendants<'_, H, P, K>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FocusableDescendants")
            .field("pending", &self.stack)
            .finish_non_exhaustive()
    }
}

impl<H, P, K> Iterator for FocusableDescendants<'_, H, P, K>
where
    H: TabIndexHost<K> + ChildrenLookup<K> + ?Sized,
    P: NativeFocus<H, K> + ?Sized,
    K: Copy,
{
    type Item = K;

    fn next(&mut self) -> Option<K> {
        while let Some(id) = self.stack.pop() {
            // Push children in reverse order so the stack pops them left-to-right.
            self.stack
                .extend(self.host.children_of(id).iter().rev().copied());
            if is_tabbable(self.host, self.policy, id) {
                return Some(id);
            }
        }
        None
    }
}

/// Walk every descendant of `container` in document order, tabbable or not.
pub(crate) fn for_each_descendant<H, K>(host: &H, container: K, mut f: impl FnMut(K))
where
    H: ChildrenLookup<K> + ?Sized,
    K: Copy,
{
    let mut stack: Vec<K> = host.children_of(container).iter().rev().copied().collect();
    while let Some(id) = stack.pop() {
        stack.extend(host.children_of(id).iter().rev().copied());
        f(id);
    }
}
