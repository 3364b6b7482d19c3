// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Temporary drawer basics.
//!
//! Walk a navigation drawer through open, Escape, and drag-to-close over a
//! small element tree, printing the tab order of the panel's contents as
//! the drawer traps and releases it.
//!
//! Run:
//! - `cargo run -p understory_demos --example drawer_basics`

use understory_drawer::adapters::element_tree::SCROLL_LOCK_CLASS;
use understory_drawer::{DrawerConfig, TemporaryDrawer};
use understory_element_tree::{Element, ElementId, Tree};
use understory_tab_state::adapters::element_tree::HtmlFocusPolicy;

fn dump(label: &str, tree: &Tree, html: ElementId, items: &[(&str, ElementId)]) {
    println!("== {label}");
    println!(
        "  scroll locked: {}",
        tree.has_class(html, SCROLL_LOCK_CLASS)
    );
    for (name, id) in items {
        println!(
            "  {name:<10} tabindex={}",
            tree.attr(*id, "tabindex").unwrap_or("(none)")
        );
    }
}

fn main() {
    let mut tree = Tree::new();
    let html = tree.insert(None, Element::new("html"));
    let body = tree.insert(Some(html), Element::new("body"));
    let root = tree.insert(
        Some(body),
        Element::new("aside").with_class("temporary-drawer"),
    );
    let panel = tree.insert(Some(root), Element::new("nav").with_width(256.0));
    let inbox = tree.insert(Some(panel), Element::new("a").with_attr("href", "/inbox"));
    let search = tree.insert(Some(panel), Element::new("input"));
    let starred = tree.insert(
        Some(panel),
        Element::new("li").with_attr("tabindex", "3"),
    );
    let label = tree.insert(Some(panel), Element::new("span"));
    let items = [
        ("inbox", inbox),
        ("search", search),
        ("starred", starred),
        ("label", label),
    ];

    let mut drawer =
        match TemporaryDrawer::new(&mut tree, root, panel, HtmlFocusPolicy, DrawerConfig::default())
        {
            Ok(drawer) => drawer,
            Err(err) => {
                eprintln!("cannot attach drawer: {err}");
                return;
            }
        };
    dump("attached (closed)", &tree, html, &items);

    drawer.open(&mut tree);
    drawer.handle_transition_end(&mut tree, panel);
    dump("opened", &tree, html, &items);

    drawer.handle_key_down(&mut tree, "Escape");
    dump("escape", &tree, html, &items);

    drawer.open(&mut tree);
    drawer.handle_touch_start(&tree, 240.0);
    for x in [220.0, 180.0, 140.0, 90.0] {
        drawer.handle_touch_move(x);
        if drawer.on_animation_frame(&mut tree) {
            println!(
                "  drag x={x:>5}: transform={:?} scrim opacity={:?}",
                tree.transform(panel).map(|t| t.translation()),
                tree.opacity(root),
            );
        }
    }
    drawer.handle_touch_end(&mut tree);
    dump("dragged closed", &tree, html, &items);

    drawer.destroy(&mut tree);
    dump("destroyed", &tree, html, &items);
}
