// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_tab_state` crate.
//!
//! These drive the public API through a small string-attribute host, the way a
//! DOM-backed embedder would: tab order is stored as text and parsed on read.

use std::collections::HashMap;

use understory_tab_state::{
    ChildrenLookup, TabIndexHost, TabStateManager, TabStateRecord, UNTABBABLE, collect_focusable,
    focusable_descendants, make_untabbable, parse_tab_index,
};

#[derive(Default)]
struct Doc {
    tags: Vec<&'static str>,
    attrs: Vec<HashMap<&'static str, String>>,
    children: Vec<Vec<usize>>,
}

impl Doc {
    fn add(&mut self, parent: Option<usize>, tag: &'static str) -> usize {
        let id = self.tags.len();
        self.tags.push(tag);
        self.attrs.push(HashMap::new());
        self.children.push(Vec::new());
        if let Some(p) = parent {
            self.children[p].push(id);
        }
        id
    }

    fn with(&mut self, id: usize, name: &'static str, value: &str) -> usize {
        self.attrs[id].insert(name, value.to_owned());
        id
    }

    fn attr(&self, id: usize, name: &str) -> Option<&str> {
        self.attrs[id].get(name).map(String::as_str)
    }

    fn snapshot(&self, id: usize) -> HashMap<&'static str, String> {
        self.attrs[id].clone()
    }
}

impl TabIndexHost<usize> for Doc {
    type Raw = String;

    fn tab_index(&self, id: usize) -> Option<i32> {
        self.attr(id, "tabindex").and_then(parse_tab_index)
    }

    fn raw_tab_index(&self, id: usize) -> Option<String> {
        self.attr(id, "tabindex").map(str::to_owned)
    }

    fn set_tab_index(&mut self, id: usize, value: i32) {
        self.attrs[id].insert("tabindex", value.to_string());
    }

    fn set_raw_tab_index(&mut self, id: usize, raw: &String) {
        self.attrs[id].insert("tabindex", raw.clone());
    }

    fn remove_tab_index(&mut self, id: usize) {
        self.attrs[id].remove("tabindex");
    }
}

impl ChildrenLookup<usize> for Doc {
    fn children_of(&self, id: usize) -> &[usize] {
        &self.children[id]
    }
}

fn native(doc: &Doc, id: usize) -> bool {
    match doc.tags[id] {
        "a" => doc.attr(id, "href").is_some(),
        "button" | "input" | "select" | "textarea" => doc.attr(id, "disabled").is_none(),
        _ => false,
    }
}

#[test]
fn enumerates_button_link_and_ordered_div() {
    let mut doc = Doc::default();
    let root = doc.add(None, "div");
    let button = doc.add(Some(root), "button");
    let link = doc.add(Some(root), "a");
    doc.with(link, "href", "/home");
    let _bare = doc.add(Some(root), "div");
    let ordered = doc.add(Some(root), "div");
    doc.with(ordered, "tabindex", "0");

    let found: Vec<_> = focusable_descendants(&doc, root, &native).collect();
    assert_eq!(found, vec![button, link, ordered]);
}

#[test]
fn empty_container_enumerates_nothing() {
    let mut doc = Doc::default();
    let root = doc.add(None, "div");
    let mut out = vec![99];
    collect_focusable(&doc, root, &native, &mut out);
    assert!(out.is_empty());
}

#[test]
fn explicit_42_scenario() {
    let mut doc = Doc::default();
    let el = doc.add(None, "div");
    doc.with(el, "tabindex", "42");
    let mut tabs = TabStateManager::new();

    tabs.save_state(&doc, el);
    assert!(tabs.is_handled(el));
    assert_eq!(
        tabs.record(el),
        Some(&TabStateRecord {
            saved_tab_index: Some("42".to_owned())
        })
    );

    tabs.restore_state(&mut doc, el);
    assert_eq!(doc.attr(el, "tabindex"), Some("42"));
    assert!(!tabs.is_handled(el));
    assert_eq!(tabs.record(el), None);
}

#[test]
fn anchor_without_tabindex_scenario() {
    let mut doc = Doc::default();
    let a = doc.add(None, "a");
    doc.with(a, "href", "https://example.com");
    let mut tabs = TabStateManager::new();

    tabs.save_state(&doc, a);
    assert!(tabs.is_handled(a));
    assert_eq!(tabs.record(a).and_then(|r| r.saved_tab_index.as_ref()), None);

    make_untabbable(&mut doc, a);
    tabs.restore_state(&mut doc, a);
    assert_eq!(doc.attr(a, "tabindex"), None);
    assert!(!tabs.is_handled(a));
}

#[test]
fn save_is_idempotent() {
    let mut doc = Doc::default();
    let el = doc.add(None, "button");
    doc.with(el, "tabindex", "7");

    let mut once = TabStateManager::new();
    once.save_state(&doc, el);

    let mut twice = TabStateManager::new();
    assert!(twice.save_state(&doc, el));
    assert!(!twice.save_state(&doc, el));

    assert_eq!(once.record(el), twice.record(el));
    assert_eq!(once.len(), twice.len());
    assert_eq!(doc.attr(el, "tabindex"), Some("7"));
}

#[test]
fn restore_of_unsaved_element_changes_nothing() {
    let mut doc = Doc::default();
    let el = doc.add(None, "div");
    doc.with(el, "tabindex", "3");
    doc.with(el, "role", "menuitem");
    let before = doc.snapshot(el);

    let mut tabs = TabStateManager::new();
    assert!(!tabs.restore_state(&mut doc, el));
    assert_eq!(doc.snapshot(el), before);
}

#[test]
fn make_untabbable_overwrites_any_value() {
    let mut doc = Doc::default();
    for value in ["0", "5", "-3", "junk"] {
        let el = doc.add(None, "div");
        doc.with(el, "tabindex", value);
        make_untabbable(&mut doc, el);
        assert_eq!(doc.attr(el, "tabindex"), Some("-1"));
        assert_eq!(doc.tab_index(el), Some(UNTABBABLE));
    }
}

#[test]
fn explicit_round_trip_for_many_values() {
    let mut doc = Doc::default();
    let mut tabs = TabStateManager::new();
    for value in 0..20 {
        let el = doc.add(None, "span");
        doc.with(el, "tabindex", &value.to_string());
        tabs.save_state(&doc, el);
        make_untabbable(&mut doc, el);
        tabs.restore_state(&mut doc, el);
        assert_eq!(doc.tab_index(el), Some(value));
    }
    assert!(tabs.is_empty());
}

#[test]
fn explicit_negative_value_is_kept_on_direct_save() {
    let mut doc = Doc::default();
    let el = doc.add(None, "button");
    doc.with(el, "tabindex", "-1");
    let mut tabs = TabStateManager::new();

    tabs.save_state(&doc, el);
    tabs.restore_state(&mut doc, el);
    assert_eq!(doc.attr(el, "tabindex"), Some("-1"));
}

#[test]
fn close_reopen_close_keeps_original_values() {
    let mut doc = Doc::default();
    let panel = doc.add(None, "nav");
    let a = doc.add(Some(panel), "a");
    doc.with(a, "href", "#");
    let b = doc.add(Some(panel), "div");
    doc.with(b, "tabindex", "1");
    let mut tabs = TabStateManager::new();

    // Close, then a reopen and another close arrive before any transition ends.
    tabs.neutralize_within(&mut doc, panel, &native);
    tabs.restore_within(&mut doc, panel);
    tabs.neutralize_within(&mut doc, panel, &native);
    tabs.neutralize_within(&mut doc, panel, &native);
    assert_eq!(doc.attr(a, "tabindex"), Some("-1"));
    assert_eq!(doc.attr(b, "tabindex"), Some("-1"));

    tabs.restore_within(&mut doc, panel);
    assert_eq!(doc.attr(a, "tabindex"), None);
    assert_eq!(doc.attr(b, "tabindex"), Some("1"));
    assert!(tabs.is_empty());
}

#[test]
fn unparseable_and_padded_values_come_back_verbatim() {
    let mut doc = Doc::default();
    let panel = doc.add(None, "nav");
    let junk = doc.add(Some(panel), "button");
    doc.with(junk, "tabindex", "auto");
    let padded = doc.add(Some(panel), "div");
    doc.with(padded, "tabindex", "05");
    let before = (doc.snapshot(junk), doc.snapshot(padded));
    let mut tabs = TabStateManager::new();

    // "auto" parses to nothing, so the button is tabbable by default.
    assert_eq!(doc.tab_index(junk), None);
    assert_eq!(tabs.neutralize_within(&mut doc, panel, &native), 2);
    tabs.restore_within(&mut doc, panel);
    assert_eq!((doc.snapshot(junk), doc.snapshot(padded)), before);
}
