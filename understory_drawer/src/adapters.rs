// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration helpers for other Understory crates.
//!
//! - [`element_tree`] (`element_tree_adapter` feature): [`crate::DrawerHost`]
//!   for an [`understory_element_tree::Tree`].

#[cfg(feature = "element_tree_adapter")]
pub mod element_tree;
