// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny in-memory host for unit tests.

use alloc::vec::Vec;

use crate::host::{ChildrenLookup, TabIndexHost};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Kind {
    Div,
    Button,
    Link,
}

#[derive(Clone, Debug)]
struct Node {
    kind: Kind,
    tab_index: Option<i32>,
    children: Vec<u32>,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct MockHost {
    nodes: Vec<Node>,
}

impl MockHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, parent: Option<u32>, kind: Kind) -> u32 {
        let id = u32::try_from(self.nodes.len()).unwrap();
        self.nodes.push(Node {
            kind,
            tab_index: None,
            children: Vec::new(),
        });
        if let Some(p) = parent {
            self.nodes[p as usize].children.push(id);
        }
        id
    }

    pub(crate) fn policy(host: &Self, id: u32) -> bool {
        matches!(host.nodes[id as usize].kind, Kind::Button | Kind::Link)
    }
}

impl TabIndexHost<u32> for MockHost {
    type Raw = i32;

    fn tab_index(&self, id: u32) -> Option<i32> {
        self.nodes[id as usize].tab_index
    }

    fn raw_tab_index(&self, id: u32) -> Option<i32> {
        self.tab_index(id)
    }

    fn set_tab_index(&mut self, id: u32, value: i32) {
        self.nodes[id as usize].tab_index = Some(value);
    }

    fn set_raw_tab_index(&mut self, id: u32, raw: &i32) {
        self.set_tab_index(id, *raw);
    }

    fn remove_tab_index(&mut self, id: u32) {
        self.nodes[id as usize].tab_index = None;
    }
}

impl ChildrenLookup<u32> for MockHost {
    fn children_of(&self, id: u32) -> &[u32] {
        self.nodes
            .get(id as usize)
            .map_or(&[], |n| n.children.as_slice())
    }
}
