// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the element tree: element identifiers and element data.

use alloc::string::String;

use kurbo::Affine;
use smallvec::SmallVec;

/// Identifier for an element in the tree.
///
/// A small, copyable handle made of a slot index and a generation counter.
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed and every `ElementId` pointing at it becomes stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct id.
///
/// Stale ids never alias a different live element because the generation must match.
/// Use [`Tree::is_alive`](crate::Tree::is_alive) to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A single element: tag, attributes, classes, and inline presentation state.
///
/// Attribute names and the tag are stored ASCII-lowercased. Attribute values and
/// class names are stored verbatim. The class list is independent of any `class`
/// attribute; use the class methods to manipulate it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub(crate) tag: String,
    pub(crate) attrs: SmallVec<[(String, String); 4]>,
    pub(crate) classes: SmallVec<[String; 2]>,
    /// Laid-out width in pixels, as reported by the host's layout pass.
    pub width: f64,
    /// Inline transform applied on top of the element's laid-out position.
    pub transform: Option<Affine>,
    /// Inline opacity override.
    pub opacity: Option<f64>,
}

impl Element {
    /// Create an element with the given tag and nothing else.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    /// Builder: set an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder: add a class.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Builder: set the laid-out width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// The lowercased tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns `true` if the element's tag matches `tag`, ignoring ASCII case.
    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    /// Value of the attribute `name`, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the attribute `name` is present (with any value).
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Set the attribute `name` to `value`, replacing any previous value.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some((_, v)) = self
            .attrs
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            v.clear();
            v.push_str(value);
        } else {
            self.attrs.push((name.to_ascii_lowercase(), value.into()));
        }
    }

    /// Remove the attribute `name`, returning its previous value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self
            .attrs
            .iter()
            .position(|(n, _)| n.eq_ignore_ascii_case(name))?;
        Some(self.attrs.remove(pos).1)
    }

    /// Iterate attributes in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Returns `true` if the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add `class` to the class list. Returns `false` if it was already present.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.into());
        true
    }

    /// Remove `class` from the class list. Returns `false` if it was absent.
    pub fn remove_class(&mut self, class: &str) -> bool {
        match self.classes.iter().position(|c| c == class) {
            Some(pos) => {
                self.classes.remove(pos);
                true
            }
            None => false,
        }
    }

    /// The class list in insertion order.
    pub fn classes(&self) -> impl Iterator<Item = &str> + '_ {
        self.classes.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_are_case_insensitive_by_name() {
        let mut el = Element::new("A").with_attr("HREF", "#top");
        assert_eq!(el.tag(), "a");
        assert!(el.is("a"));
        assert_eq!(el.attr("href"), Some("#top"));

        el.set_attr("Href", "#bottom");
        assert_eq!(el.attrs().count(), 1);
        assert_eq!(el.attr("href"), Some("#bottom"));

        assert_eq!(el.remove_attr("href").as_deref(), Some("#bottom"));
        assert!(!el.has_attr("href"));
        assert_eq!(el.remove_attr("href"), None);
    }

    #[test]
    fn class_list_has_set_semantics() {
        let mut el = Element::new("aside").with_class("drawer");
        assert!(!el.add_class("drawer"));
        assert!(el.add_class("drawer--open"));
        assert_eq!(el.classes().count(), 2);
        assert!(el.remove_class("drawer"));
        assert!(!el.remove_class("drawer"));
        assert!(el.has_class("drawer--open"));
    }
}
