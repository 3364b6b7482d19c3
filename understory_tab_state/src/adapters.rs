// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration helpers for other Understory crates.
//!
//! Modules in this file are behind feature flags so `understory_tab_state` can
//! remain usable in contexts that do not depend on those crates.
//!
//! - [`element_tree`] (`element_tree_adapter` feature): host traits and HTML
//!   default focusability for an [`understory_element_tree::Tree`].

#[cfg(feature = "element_tree_adapter")]
pub mod element_tree;
