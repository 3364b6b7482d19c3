// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::hash::Hash;

use kurbo::Affine;
use understory_tab_state::{NativeFocus, TabStateManager};

use crate::config::{DrawerConfig, DrawerError};
use crate::drag::DrawerDrag;
use crate::host::DrawerHost;

bitflags::bitflags! {
    /// Controller-side drawer state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct DrawerFlags: u8 {
        /// The drawer is open (or opening).
        const OPEN      = 0b0000_0001;
        /// An open/close transition has started and not yet ended.
        const ANIMATING = 0b0000_0010;
    }
}

/// Headless controller for a temporary (modal) navigation drawer.
///
/// The host owns event wiring and rendering; it forwards events to the
/// `handle_*` methods and the controller answers with host calls. While the
/// drawer is closed, every tabbable element inside the panel is taken out of
/// the tab sequence; opening puts them back exactly as they were.
///
/// All methods are synchronous and tolerate events arriving in any order.
///
/// `R` is the host's stored tab order form ([`TabIndexHost::Raw`]); it is
/// inferred from the host passed to [`new`](Self::new).
///
/// [`TabIndexHost::Raw`]: understory_tab_state::TabIndexHost::Raw
#[derive(Debug)]
pub struct TemporaryDrawer<K, P, R = i32> {
    root: K,
    drawer: K,
    policy: P,
    config: DrawerConfig,
    flags: DrawerFlags,
    drag: Option<DrawerDrag>,
    tabs: TabStateManager<K, R>,
}

impl<K, P, R> TemporaryDrawer<K, P, R>
where
    K: Copy + Eq + Hash,
{
    /// Attach a controller to `root` (the viewport-spanning element) and
    /// `drawer` (the sliding panel inside it).
    ///
    /// The initial state is read from the open class on `root`. If the drawer
    /// starts closed, its tabbable descendants are neutralized right away.
    ///
    /// # Errors
    ///
    /// - [`DrawerError::InvalidCloseThreshold`] if `config` does not validate.
    /// - [`DrawerError::MissingRootClass`] if `root` lacks the root class.
    pub fn new<H>(
        host: &mut H,
        root: K,
        drawer: K,
        policy: P,
        config: DrawerConfig,
    ) -> Result<Self, DrawerError>
    where
        H: DrawerHost<K, Raw = R> + ?Sized,
        P: NativeFocus<H, K>,
    {
        config.validate()?;
        if !host.has_class(root, config.classes.root) {
            return Err(DrawerError::MissingRootClass {
                class: config.classes.root,
            });
        }
        let mut this = Self {
            root,
            drawer,
            policy,
            config,
            flags: DrawerFlags::empty(),
            drag: None,
            tabs: TabStateManager::new(),
        };
        if host.has_class(root, config.classes.open) {
            this.flags.insert(DrawerFlags::OPEN);
        } else {
            this.tabs.neutralize_within(host, drawer, &this.policy);
        }
        Ok(this)
    }

    /// The root element.
    pub fn root(&self) -> K {
        self.root
    }

    /// The sliding panel element.
    pub fn drawer(&self) -> K {
        self.drawer
    }

    /// The configuration in use.
    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// Current controller flags.
    pub fn flags(&self) -> DrawerFlags {
        self.flags
    }

    /// Returns `true` if the drawer is open or opening.
    pub fn is_open(&self) -> bool {
        self.flags.contains(DrawerFlags::OPEN)
    }

    /// Returns `true` between an open/close request and the panel's transition end.
    pub fn is_animating(&self) -> bool {
        self.flags.contains(DrawerFlags::ANIMATING)
    }

    /// The drag in progress, if any.
    pub fn drag(&self) -> Option<&DrawerDrag> {
        self.drag.as_ref()
    }

    /// Tab state saved for the panel's neutralized descendants.
    pub fn tab_state(&self) -> &TabStateManager<K, R> {
        &self.tabs
    }

    /// Open the drawer.
    ///
    /// Starts the transition, blocks page scroll, and restores the panel's tab
    /// order. Records for elements the host removed while the drawer was
    /// closed are dropped. Also used to settle the panel back open after a
    /// short drag, in which case no open notification is sent.
    pub fn open<H>(&mut self, host: &mut H)
    where
        H: DrawerHost<K, Raw = R> + ?Sized,
    {
        let was_open = self.is_open();
        let classes = self.config.classes;
        host.add_class(self.root, classes.animating);
        host.add_class(self.root, classes.open);
        self.flags.insert(DrawerFlags::OPEN | DrawerFlags::ANIMATING);
        host.block_scroll(self.root);
        self.tabs.restore_within(host, self.drawer);
        // Whatever is left belongs to elements that are no longer in the panel.
        self.tabs.clear();
        if !was_open {
            host.notify_open(self.root);
        }
    }

    /// Close the drawer.
    ///
    /// Starts the transition, releases page scroll, and takes the panel's
    /// tabbable descendants out of the tab sequence. A drag in progress is
    /// abandoned.
    pub fn close<H>(&mut self, host: &mut H)
    where
        H: DrawerHost<K, Raw = R> + ?Sized,
        P: NativeFocus<H, K>,
    {
        let was_open = self.is_open();
        if self.drag.take().is_some() {
            self.clear_inline_styles(host);
        }
        let classes = self.config.classes;
        host.add_class(self.root, classes.animating);
        host.remove_class(self.root, classes.open);
        self.flags.remove(DrawerFlags::OPEN);
        self.flags.insert(DrawerFlags::ANIMATING);
        host.unblock_scroll(self.root);
        self.tabs.neutralize_within(host, self.drawer, &self.policy);
        if was_open {
            host.notify_close(self.root);
        }
    }

    /// A click landed on the scrim (the root outside the panel).
    ///
    /// Clicks inside the panel must not be forwarded here.
    pub fn handle_scrim_click<H>(&mut self, host: &mut H)
    where
        H: DrawerHost<K, Raw = R> + ?Sized,
        P: NativeFocus<H, K>,
    {
        if self.is_open() {
            self.close(host);
        }
    }

    /// A key was pressed while the drawer had focus.
    ///
    /// `key` is the key name (`"Escape"`; legacy `"Esc"` is accepted too).
    /// Returns `true` if the key was consumed.
    pub fn handle_key_down<H>(&mut self, host: &mut H, key: &str) -> bool
    where
        H: DrawerHost<K, Raw = R> + ?Sized,
        P: NativeFocus<H, K>,
    {
        if self.is_open() && matches!(key, "Escape" | "Esc") {
            self.close(host);
            return true;
        }
        false
    }

    /// A transition ended on `target`.
    ///
    /// Only the panel's own transition ends the animating phase; transitions
    /// bubbling up from its descendants are ignored. Returns `true` if handled.
    pub fn handle_transition_end<H>(&mut self, host: &mut H, target: K) -> bool
    where
        H: DrawerHost<K> + ?Sized,
    {
        if target != self.drawer {
            return false;
        }
        host.remove_class(self.root, self.config.classes.animating);
        self.flags.remove(DrawerFlags::ANIMATING);
        true
    }

    /// A touch started at horizontal position `x`.
    ///
    /// Dragging is only possible while open. Returns `true` if a drag started;
    /// the host should then call [`on_animation_frame`](Self::on_animation_frame)
    /// once per frame until it returns `false`.
    pub fn handle_touch_start<H>(&mut self, host: &H, x: f64) -> bool
    where
        H: DrawerHost<K> + ?Sized,
    {
        if !self.is_open() || !x.is_finite() {
            return false;
        }
        let width = host.drawer_width(self.drawer);
        let rtl = host.is_rtl(self.root);
        self.drag = Some(DrawerDrag::start(x, width, rtl));
        true
    }

    /// The touch moved to horizontal position `x`.
    pub fn handle_touch_move(&mut self, x: f64) {
        if let Some(drag) = &mut self.drag {
            drag.update(x);
        }
    }

    /// Apply the current drag to the panel and scrim.
    ///
    /// Returns `true` while a drag is in progress and more frames are wanted.
    pub fn on_animation_frame<H>(&mut self, host: &mut H) -> bool
    where
        H: DrawerHost<K> + ?Sized,
    {
        let Some(drag) = self.drag else {
            return false;
        };
        host.set_drawer_transform(self.drawer, Some(Affine::translate((drag.offset(), 0.0))));
        host.set_scrim_opacity(self.root, Some(drag.openness()));
        true
    }

    /// The touch ended.
    ///
    /// Inline drag styles are cleared. The drawer closes if the panel was
    /// dragged at least [`DrawerConfig::close_threshold`] of its width, and
    /// settles back open otherwise.
    pub fn handle_touch_end<H>(&mut self, host: &mut H)
    where
        H: DrawerHost<K, Raw = R> + ?Sized,
        P: NativeFocus<H, K>,
    {
        let Some(drag) = self.drag.take() else {
            return;
        };
        self.clear_inline_styles(host);
        if drag.closed_fraction() >= self.config.close_threshold {
            self.close(host);
        } else {
            self.open(host);
        }
    }

    /// Detach the controller and put the tree back the way it found it.
    ///
    /// Drag styles are cleared, page scroll is released if the drawer was open,
    /// and every neutralized element gets its tab order back. Presentation
    /// classes are left as they are.
    pub fn destroy<H>(mut self, host: &mut H)
    where
        H: DrawerHost<K, Raw = R> + ?Sized,
    {
        if self.drag.take().is_some() {
            self.clear_inline_styles(host);
        }
        if self.is_open() {
            host.unblock_scroll(self.root);
        }
        self.tabs.restore_within(host, self.drawer);
    }

    fn clear_inline_styles<H>(&self, host: &mut H)
    where
        H: DrawerHost<K> + ?Sized,
    {
        host.set_drawer_transform(self.drawer, None);
        host.set_scrim_opacity(self.root, None);
    }
}
