// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-close tracking: turn horizontal touch positions into a panel offset.
//!
//! The panel can only be dragged toward its closed edge: left in LTR layouts,
//! right in RTL layouts. Movement the other way is clamped to zero.
//!
//! ```
//! use understory_drawer::DrawerDrag;
//!
//! let mut drag = DrawerDrag::start(200.0, 300.0, false);
//! drag.update(80.0);
//! assert_eq!(drag.offset(), -120.0);
//! assert_eq!(drag.closed_fraction(), 0.4);
//!
//! // Dragging past the start point does not pull the panel open further.
//! drag.update(260.0);
//! assert_eq!(drag.offset(), 0.0);
//! ```

/// One in-progress horizontal drag of the drawer panel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawerDrag {
    /// Touch x when the drag started.
    pub start_x: f64,
    /// Most recent touch x.
    pub current_x: f64,
    /// Panel width measured when the drag started.
    pub width: f64,
    /// Whether the layout is right-to-left.
    pub rtl: bool,
}

impl DrawerDrag {
    /// Start tracking a drag at `x` over a panel of the given width.
    pub fn start(x: f64, width: f64, rtl: bool) -> Self {
        Self {
            start_x: x,
            current_x: x,
            width,
            rtl,
        }
    }

    /// Record a new touch position. Non-finite positions are ignored.
    pub fn update(&mut self, x: f64) {
        if x.is_finite() {
            self.current_x = x;
        }
    }

    /// Horizontal panel offset, clamped toward the closed edge.
    pub fn offset(&self) -> f64 {
        let delta = self.current_x - self.start_x;
        if self.rtl {
            delta.max(0.0)
        } else {
            delta.min(0.0)
        }
    }

    /// How far toward closed the panel has been dragged, as a fraction of its width.
    ///
    /// A panel with no measurable width never counts as dragged.
    pub fn closed_fraction(&self) -> f64 {
        if self.width > 0.0 {
            self.offset().abs() / self.width
        } else {
            0.0
        }
    }

    /// Scrim opacity matching the current offset: `1` fully open, `0` fully closed.
    pub fn openness(&self) -> f64 {
        (1.0 - self.closed_fraction()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_has_no_offset() {
        let drag = DrawerDrag::start(120.0, 240.0, false);
        assert_eq!(drag.offset(), 0.0);
        assert_eq!(drag.openness(), 1.0);
    }

    #[test]
    fn ltr_clamps_rightward_motion() {
        let mut drag = DrawerDrag::start(100.0, 200.0, false);
        drag.update(150.0);
        assert_eq!(drag.offset(), 0.0);
        drag.update(50.0);
        assert_eq!(drag.offset(), -50.0);
        assert_eq!(drag.closed_fraction(), 0.25);
        assert_eq!(drag.openness(), 0.75);
    }

    #[test]
    fn rtl_clamps_leftward_motion() {
        let mut drag = DrawerDrag::start(100.0, 200.0, true);
        drag.update(20.0);
        assert_eq!(drag.offset(), 0.0);
        drag.update(200.0);
        assert_eq!(drag.offset(), 100.0);
        assert_eq!(drag.closed_fraction(), 0.5);
    }

    #[test]
    fn overshoot_saturates_openness() {
        let mut drag = DrawerDrag::start(300.0, 100.0, false);
        drag.update(0.0);
        assert_eq!(drag.closed_fraction(), 3.0);
        assert_eq!(drag.openness(), 0.0);
    }

    #[test]
    fn zero_width_never_counts_as_dragged() {
        let mut drag = DrawerDrag::start(100.0, 0.0, false);
        drag.update(0.0);
        assert_eq!(drag.closed_fraction(), 0.0);
        assert_eq!(drag.openness(), 1.0);
    }

    #[test]
    fn non_finite_updates_are_ignored() {
        let mut drag = DrawerDrag::start(100.0, 200.0, false);
        drag.update(40.0);
        drag.update(f64::NAN);
        drag.update(f64::NEG_INFINITY);
        assert_eq!(drag.current_x, 40.0);
    }
}
