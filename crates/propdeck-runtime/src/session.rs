#![forbid(unsafe_code)]

//! Page-root registry and session state.
//!
//! Page roots are created once at session start and never destroyed;
//! clearing a page removes the root's children and keeps the root. Two
//! overlay ids sit outside the ordinary page array: `254` (the top layer,
//! drawn over every page) and `255` (the system layer, reserved for
//! built-in chrome and never cleared).

use propdeck_style::FontTable;
use tracing::{info, warn};

use crate::sleep::SleepStateMachine;

/// Number of ordinary pages.
pub const PAGE_COUNT: usize = 12;
/// Address of the top overlay layer.
pub const PAGE_TOP: u8 = 254;
/// Address of the system overlay layer.
pub const PAGE_SYS: u8 = 255;

/// Session state for one display, generic over the toolkit's root handle.
#[derive(Debug)]
pub struct DisplaySession<H> {
    pages: [H; PAGE_COUNT],
    top_layer: H,
    sys_layer: H,
    current: u8,
    fonts: FontTable,
    sleep: SleepStateMachine,
}

impl<H> DisplaySession<H> {
    /// Create a session from pre-created page roots and overlay handles.
    /// Page 0 starts active.
    #[must_use]
    pub fn new(pages: [H; PAGE_COUNT], top_layer: H, sys_layer: H) -> Self {
        Self {
            pages,
            top_layer,
            sys_layer,
            current: 0,
            fonts: FontTable::new(),
            sleep: SleepStateMachine::default(),
        }
    }

    /// The root handle a page id addresses. Overlays resolve before the
    /// page array; ids past the array resolve to nothing.
    #[must_use]
    pub fn page_root(&self, id: u8) -> Option<&H> {
        match id {
            PAGE_TOP => Some(&self.top_layer),
            PAGE_SYS => Some(&self.sys_layer),
            _ => self.pages.get(usize::from(id)),
        }
    }

    /// The active page id.
    #[must_use]
    pub const fn current_page(&self) -> u8 {
        self.current
    }

    /// Switch the active page. Overlay and undefined ids are refused. On
    /// success the announcer runs against the new root so the host can walk
    /// the tree and publish object state.
    pub fn set_page(&mut self, id: u8, announce: impl FnOnce(&H)) -> bool {
        if id == PAGE_TOP || id == PAGE_SYS {
            warn!(page = id, "cannot change to a layer");
            return false;
        }
        let Some(root) = self.pages.get(usize::from(id)) else {
            warn!(page = id, "page not defined");
            return false;
        };
        info!(page = id, "changing page");
        self.current = id;
        announce(root);
        true
    }

    /// Remove a page root's children through the toolkit callback. The root
    /// itself persists. The system layer is never cleared; the top layer
    /// may be.
    pub fn clear_page(&mut self, id: u8, clean: impl FnOnce(&H)) -> bool {
        if id == PAGE_SYS {
            warn!(page = id, "cannot clear the system layer");
            return false;
        }
        let Some(root) = self.page_root(id) else {
            warn!(page = id, "page not defined");
            return false;
        };
        info!(page = id, "clearing page");
        clean(root);
        true
    }

    /// Font id table for this session.
    #[must_use]
    pub const fn fonts(&self) -> &FontTable {
        &self.fonts
    }

    /// Mutable font table, for registering theme slots.
    pub const fn fonts_mut(&mut self) -> &mut FontTable {
        &mut self.fonts
    }

    /// The session's sleep machine.
    #[must_use]
    pub const fn sleep(&self) -> &SleepStateMachine {
        &self.sleep
    }

    /// Mutable sleep machine, for ticking and threshold configuration.
    pub const fn sleep_mut(&mut self) -> &mut SleepStateMachine {
        &mut self.sleep
    }
}

impl<H: PartialEq> DisplaySession<H> {
    /// Reverse lookup: the page id whose root is `root`. Overlays match
    /// first, then the first matching array slot.
    #[must_use]
    pub fn page_id(&self, root: &H) -> Option<u8> {
        if *root == self.top_layer {
            return Some(PAGE_TOP);
        }
        if *root == self.sys_layer {
            return Some(PAGE_SYS);
        }
        self.pages.iter().position(|p| p == root).map(|i| i as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> DisplaySession<u32> {
        // Handles 100..111 for pages, 900/901 for the overlays.
        let pages = std::array::from_fn(|i| 100 + i as u32);
        DisplaySession::new(pages, 900, 901)
    }

    #[test]
    fn page_roots_resolve_in_order() {
        let s = session();
        assert_eq!(s.page_root(0), Some(&100));
        assert_eq!(s.page_root(11), Some(&111));
        assert_eq!(s.page_root(12), None);
        assert_eq!(s.page_root(200), None);
        assert_eq!(s.page_root(PAGE_TOP), Some(&900));
        assert_eq!(s.page_root(PAGE_SYS), Some(&901));
    }

    #[test]
    fn reverse_lookup() {
        let s = session();
        assert_eq!(s.page_id(&100), Some(0));
        assert_eq!(s.page_id(&111), Some(11));
        assert_eq!(s.page_id(&900), Some(PAGE_TOP));
        assert_eq!(s.page_id(&901), Some(PAGE_SYS));
        assert_eq!(s.page_id(&42), None);
    }

    #[test]
    fn set_page_announces_the_new_root() {
        let mut s = session();
        let mut announced = None;
        assert!(s.set_page(3, |root| announced = Some(*root)));
        assert_eq!(s.current_page(), 3);
        assert_eq!(announced, Some(103));
    }

    #[test]
    fn set_page_refuses_layers_and_undefined_pages() {
        let mut s = session();
        for id in [PAGE_TOP, PAGE_SYS, 12, 99] {
            assert!(!s.set_page(id, |_| panic!("announcer must not run")));
            assert_eq!(s.current_page(), 0, "id {id}");
        }
    }

    #[test]
    fn clear_page_spares_the_system_layer() {
        let mut s = session();
        let mut cleaned = None;
        assert!(s.clear_page(5, |root| cleaned = Some(*root)));
        assert_eq!(cleaned, Some(105));

        assert!(s.clear_page(PAGE_TOP, |root| cleaned = Some(*root)));
        assert_eq!(cleaned, Some(900));

        assert!(!s.clear_page(PAGE_SYS, |_| panic!("system layer is protected")));
        assert!(!s.clear_page(30, |_| panic!("undefined page")));
    }

    #[test]
    fn fonts_and_sleep_are_session_scoped() {
        let mut s = session();
        assert!(s.fonts().lookup(0).is_none());
        s.fonts_mut().register_theme(0);
        assert!(s.fonts().lookup(0).is_some());
        assert!(!s.sleep().is_idle());
        s.sleep_mut().tick(std::time::Duration::from_secs(600));
        assert!(s.sleep().is_idle());
    }
}
