// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host seams: how the manager reads the element tree it works on.
//!
//! The manager never owns elements. Hosts expose tab order, child lists, and a
//! default-focusability rule through the traits in this module. See
//! [`adapters`](crate::adapters) for ready-made implementations.

/// Read and write access to an element's explicit tab order.
///
/// Two views of the same attribute are exposed. [`tab_index`](Self::tab_index)
/// is the parsed value that decides tabbability. [`raw_tab_index`](Self::raw_tab_index)
/// is the host's stored form, which is what gets saved and written back, so a
/// restore reproduces the attribute exactly (`"05"` stays `"05"`, `"auto"`
/// stays `"auto"`). Hosts that store a plain integer use `Raw = i32`.
pub trait TabIndexHost<K> {
    /// The stored form of an explicit tab order.
    type Raw;

    /// The element's explicit tab order, if it has one.
    ///
    /// Return `None` when the attribute is absent or cannot be parsed as an
    /// integer; such elements fall back to their default focusability.
    fn tab_index(&self, id: K) -> Option<i32>;

    /// The element's tab order attribute as stored, parseable or not.
    ///
    /// `None` only when the attribute is absent.
    fn raw_tab_index(&self, id: K) -> Option<Self::Raw>;

    /// Set the element's explicit tab order.
    fn set_tab_index(&mut self, id: K, value: i32);

    /// Write back a value previously read with [`raw_tab_index`](Self::raw_tab_index).
    fn set_raw_tab_index(&mut self, id: K, raw: &Self::Raw);

    /// Remove the element's explicit tab order, restoring default behavior.
    fn remove_tab_index(&mut self, id: K);
}

/// Lookup for an element's children in document order.
pub trait ChildrenLookup<K> {
    /// Children of `id`, in document order. Unknown ids have no children.
    fn children_of(&self, id: K) -> &[K];
}

/// Whether an element is keyboard-focusable without an explicit tab order.
///
/// This is host policy (it depends on the element kind and its attributes),
/// so it is injected rather than built in. Any `Fn(&H, K) -> bool` closure
/// works as a policy.
pub trait NativeFocus<H: ?Sized, K> {
    /// Returns `true` if `id` takes keyboard focus by default.
    fn is_natively_focusable(&self, host: &H, id: K) -> bool;
}

impl<H: ?Sized, K, F> NativeFocus<H, K> for F
where
    F: Fn(&H, K) -> bool,
{
    fn is_natively_focusable(&self, host: &H, id: K) -> bool {
        self(host, id)
    }
}

/// Parse a tab order attribute value with the HTML rules for parsing integers.
///
/// Leading ASCII whitespace is skipped, an optional `+` or `-` is accepted, and
/// at least one ASCII digit must follow. Trailing characters after the digits
/// are ignored. Returns `None` for empty input, missing digits, or values
/// outside the `i32` range.
///
/// ```
/// use understory_tab_state::parse_tab_index;
///
/// assert_eq!(parse_tab_index("42"), Some(42));
/// assert_eq!(parse_tab_index("  -1"), Some(-1));
/// assert_eq!(parse_tab_index("3px"), Some(3));
/// assert_eq!(parse_tab_index("auto"), None);
/// ```
pub fn parse_tab_index(value: &str) -> Option<i32> {
    let s = value.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let mut acc: i64 = 0;
    for b in digits[..end].bytes() {
        acc = acc.checked_mul(10)?.checked_add(i64::from(b - b'0'))?;
        if acc > i64::from(i32::MAX) + 1 {
            return None;
        }
    }
    i32::try_from(if negative { -acc } else { acc }).ok()
}
