// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Affine;

use crate::types::{Element, ElementId};

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

#[derive(Clone, Debug)]
struct Node {
    element: Element,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

/// An arena of elements arranged in one or more rooted trees.
///
/// Children keep insertion order, which is also document order.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if the tree holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Insert `element` as the last child of `parent`, or as a new root when `parent` is `None`.
    ///
    /// A stale `parent` is treated like `None`: the element becomes a detached root.
    pub fn insert(&mut self, parent: Option<ElementId>, element: Element) -> ElementId {
        let parent = parent.filter(|&p| self.is_alive(p));
        let node = Node {
            element,
            parent,
            children: Vec::new(),
        };
        let id = if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.node = Some(node);
            ElementId::new(idx, slot.generation)
        } else {
            let idx = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
            self.slots.push(Slot {
                generation: 1,
                node: Some(node),
            });
            ElementId::new(idx, 1)
        };
        if let Some(p) = parent.and_then(|p| self.node_mut(p)) {
            p.children.push(id);
        }
        self.live += 1;
        id
    }

    /// Remove `id` and its whole subtree. Returns `false` if `id` was stale.
    pub fn remove(&mut self, id: ElementId) -> bool {
        let Some(parent) = self.node(id).map(|n| n.parent) else {
            return false;
        };
        if let Some(p) = parent.and_then(|p| self.node_mut(p)) {
            p.children.retain(|&c| c != id);
        }
        let mut stack = Vec::from([id]);
        while let Some(cur) = stack.pop() {
            if let Some(node) = self.slots[cur.idx()].node.take() {
                stack.extend(node.children);
                self.free.push(cur.0);
                self.live -= 1;
            }
        }
        true
    }

    /// Returns `true` if `id` refers to a live element.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.node(id).is_some()
    }

    /// Borrow the element for `id`.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.node(id).map(|n| &n.element)
    }

    /// Mutably borrow the element for `id`.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.node_mut(id).map(|n| &mut n.element)
    }

    /// Parent of `id`, if any.
    pub fn parent_of(&self, id: ElementId) -> Option<ElementId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Children of `id` in document order. Empty for stale ids.
    pub fn children_of(&self, id: ElementId) -> &[ElementId] {
        self.node(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Ancestors of `id`, nearest first. `id` itself is not included.
    pub fn ancestors(&self, id: ElementId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent_of(id),
        }
    }

    /// All descendants of `root` in document (pre-order) order. `root` itself is not included.
    pub fn descendants(&self, root: ElementId) -> Descendants<'_> {
        let mut stack = Vec::new();
        stack.extend(self.children_of(root).iter().rev().copied());
        Descendants { tree: self, stack }
    }

    /// Value of attribute `name` on `id`.
    pub fn attr(&self, id: ElementId, name: &str) -> Option<&str> {
        self.get(id).and_then(|e| e.attr(name))
    }

    /// Set attribute `name` on `id`. No-op for stale ids.
    pub fn set_attr(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(e) = self.get_mut(id) {
            e.set_attr(name, value);
        }
    }

    /// Remove attribute `name` from `id`, returning the previous value.
    pub fn remove_attr(&mut self, id: ElementId, name: &str) -> Option<String> {
        self.get_mut(id).and_then(|e| e.remove_attr(name))
    }

    /// Returns `true` if `id` is live and carries `class`.
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id).is_some_and(|e| e.has_class(class))
    }

    /// Add `class` to `id`. Returns `true` if the class list changed.
    pub fn add_class(&mut self, id: ElementId, class: &str) -> bool {
        self.get_mut(id).is_some_and(|e| e.add_class(class))
    }

    /// Remove `class` from `id`. Returns `true` if the class list changed.
    pub fn remove_class(&mut self, id: ElementId, class: &str) -> bool {
        self.get_mut(id).is_some_and(|e| e.remove_class(class))
    }

    /// Laid-out width of `id`, or `0.0` for stale ids.
    pub fn width(&self, id: ElementId) -> f64 {
        self.get(id).map_or(0.0, |e| e.width)
    }

    /// Inline transform of `id`.
    pub fn transform(&self, id: ElementId) -> Option<Affine> {
        self.get(id).and_then(|e| e.transform)
    }

    /// Set or clear the inline transform of `id`.
    pub fn set_transform(&mut self, id: ElementId, transform: Option<Affine>) {
        if let Some(e) = self.get_mut(id) {
            e.transform = transform;
        }
    }

    /// Inline opacity of `id`.
    pub fn opacity(&self, id: ElementId) -> Option<f64> {
        self.get(id).and_then(|e| e.opacity)
    }

    /// Set or clear the inline opacity of `id`.
    pub fn set_opacity(&mut self, id: ElementId, opacity: Option<f64>) {
        if let Some(e) = self.get_mut(id) {
            e.opacity = opacity;
        }
    }

    fn node(&self, id: ElementId) -> Option<&Node> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.node.as_ref()
    }

    fn node_mut(&mut self, id: ElementId) -> Option<&mut Node> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.node.as_mut()
    }
}

/// Iterator over the ancestors of an element. See [`Tree::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<ElementId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<ElementId> {
        let cur = self.next?;
        self.next = self.tree.parent_of(cur);
        Some(cur)
    }
}

/// Pre-order iterator over the descendants of an element. See [`Tree::descendants`].
#[derive(Clone, Debug)]
pub struct Descendants<'a> {
    tree: &'a Tree,
    stack: Vec<ElementId>,
}

impl Iterator for Descendants<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<ElementId> {
        let cur = self.stack.pop()?;
        // Reverse so the stack pops children left-to-right.
        self.stack
            .extend(self.tree.children_of(cur).iter().rev().copied());
        Some(cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> (Tree, [ElementId; 5]) {
        // body
        // ├── nav
        // │   ├── a
        // │   └── button
        // └── main
        let mut tree = Tree::new();
        let body = tree.insert(None, Element::new("body"));
        let nav = tree.insert(Some(body), Element::new("nav"));
        let a = tree.insert(Some(nav), Element::new("a"));
        let button = tree.insert(Some(nav), Element::new("button"));
        let main = tree.insert(Some(body), Element::new("main"));
        (tree, [body, nav, a, button, main])
    }

    #[test]
    fn descendants_are_in_document_order() {
        let (tree, [body, nav, a, button, main]) = sample();
        let order: Vec<_> = tree.descendants(body).collect();
        assert_eq!(order, vec![nav, a, button, main]);
        let order: Vec<_> = tree.descendants(nav).collect();
        assert_eq!(order, vec![a, button]);
        assert_eq!(tree.descendants(main).count(), 0);
    }

    #[test]
    fn ancestors_walk_to_the_root() {
        let (tree, [body, nav, a, _, _]) = sample();
        let chain: Vec<_> = tree.ancestors(a).collect();
        assert_eq!(chain, vec![nav, body]);
        assert_eq!(tree.ancestors(body).count(), 0);
    }

    #[test]
    fn remove_drops_subtree_and_stales_ids() {
        let (mut tree, [body, nav, a, button, main]) = sample();
        assert_eq!(tree.len(), 5);
        assert!(tree.remove(nav));
        assert_eq!(tree.len(), 2);
        assert!(!tree.is_alive(nav));
        assert!(!tree.is_alive(a));
        assert!(!tree.is_alive(button));
        assert_eq!(tree.children_of(body), &[main]);
        assert!(!tree.remove(nav));

        // Reused slots get a new generation; old ids stay dead.
        let fresh = tree.insert(Some(body), Element::new("footer"));
        assert!(tree.is_alive(fresh));
        assert!(!tree.is_alive(nav));
        assert!(!tree.is_alive(a));
        assert_ne!(fresh, nav);
    }

    #[test]
    fn stale_parent_inserts_detached_root() {
        let (mut tree, [_, nav, _, _, _]) = sample();
        tree.remove(nav);
        let orphan = tree.insert(Some(nav), Element::new("div"));
        assert_eq!(tree.parent_of(orphan), None);
    }

    #[test]
    fn accessors_ignore_stale_ids() {
        let (mut tree, [_, nav, _, _, _]) = sample();
        tree.remove(nav);
        tree.set_attr(nav, "tabindex", "0");
        assert_eq!(tree.attr(nav, "tabindex"), None);
        assert!(!tree.add_class(nav, "open"));
        assert_eq!(tree.width(nav), 0.0);
        tree.set_transform(nav, Some(Affine::translate((1.0, 0.0))));
        assert_eq!(tree.transform(nav), None);
    }
}
