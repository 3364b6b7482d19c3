// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer configuration and its validation error.

use core::fmt;

/// Presentation classes toggled on the drawer's root element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DrawerClasses {
    /// Required on the root; construction fails without it.
    pub root: &'static str,
    /// Present while the drawer is open.
    pub open: &'static str,
    /// Present while an open/close transition is running.
    pub animating: &'static str,
}

impl Default for DrawerClasses {
    fn default() -> Self {
        Self {
            root: "temporary-drawer",
            open: "temporary-drawer--open",
            animating: "temporary-drawer--animating",
        }
    }
}

/// Tunables for a [`TemporaryDrawer`](crate::TemporaryDrawer).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawerConfig {
    /// Class names the controller reads and toggles.
    pub classes: DrawerClasses,
    /// Fraction of the drawer width a drag must cover for release to close it.
    ///
    /// Must be in `(0, 1]`. Defaults to `0.5`.
    pub close_threshold: f64,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            classes: DrawerClasses::default(),
            close_threshold: 0.5,
        }
    }
}

impl DrawerConfig {
    /// Check the configuration for values the controller cannot work with.
    pub fn validate(&self) -> Result<(), DrawerError> {
        let t = self.close_threshold;
        if t.is_nan() || t <= 0.0 || t > 1.0 {
            return Err(DrawerError::InvalidCloseThreshold(t));
        }
        Ok(())
    }
}

/// Error returned when a drawer controller cannot be constructed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawerError {
    /// The root element does not carry the configured root class.
    MissingRootClass {
        /// The class that was expected.
        class: &'static str,
    },
    /// [`DrawerConfig::close_threshold`] is outside `(0, 1]` (or NaN).
    InvalidCloseThreshold(f64),
}

impl fmt::Display for DrawerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRootClass { class } => {
                write!(f, "`{class}` class required on the drawer root element")
            }
            Self::InvalidCloseThreshold(t) => {
                write!(f, "close threshold must be in (0, 1], got {t}")
            }
        }
    }
}

impl core::error::Error for DrawerError {}
