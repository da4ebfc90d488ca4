//! Arrow visibility derived from scroll bounds

use tracing::trace;

use super::animation::ScrollSignals;
use super::host::ViewportHost;

/// Tracks whether further scrolling is possible in each direction
///
/// Flags only follow native scroll events while arrows are enabled, the
/// pointer is mouse-capable and no animator-driven scroll is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryTracker {
    show_arrows: bool,
    has_mouse: bool,
    custom_scrolling: bool,
    can_scroll_left: bool,
    can_scroll_right: bool,
}

impl BoundaryTracker {
    pub fn new(show_arrows: bool, has_mouse: bool) -> Self {
        Self {
            show_arrows,
            has_mouse,
            ..Default::default()
        }
    }

    pub fn set_show_arrows(&mut self, show_arrows: bool) {
        self.show_arrows = show_arrows;
    }

    pub fn set_has_mouse(&mut self, has_mouse: bool) {
        self.has_mouse = has_mouse;
    }

    pub fn show_arrows(&self) -> bool {
        self.show_arrows
    }

    pub fn has_mouse(&self) -> bool {
        self.has_mouse
    }

    pub fn can_scroll_left(&self) -> bool {
        self.can_scroll_left
    }

    pub fn can_scroll_right(&self) -> bool {
        self.can_scroll_right
    }

    fn arrows_enabled(&self) -> bool {
        self.show_arrows && self.has_mouse
    }

    pub fn show_left_arrow(&self) -> bool {
        self.arrows_enabled() && self.can_scroll_left
    }

    pub fn show_right_arrow(&self) -> bool {
        self.arrows_enabled() && self.can_scroll_right
    }

    /// Recompute the flags from the host's live metrics
    ///
    /// Returns `true` when a flag changed.
    pub fn on_native_scroll(&mut self, host: &dyn ViewportHost) -> bool {
        if !self.arrows_enabled() || self.custom_scrolling {
            return false;
        }

        let offset = host.scroll_offset();
        let left = offset > 0;
        let right = offset + host.visible_width() < host.content_width();
        let changed = left != self.can_scroll_left || right != self.can_scroll_right;

        self.can_scroll_left = left;
        self.can_scroll_right = right;
        if changed {
            trace!(left, right, offset, "scroll bounds changed");
        }
        changed
    }
}

impl ScrollSignals for BoundaryTracker {
    fn scroll_started(&mut self) {
        self.custom_scrolling = true;
    }

    fn scroll_ended(&mut self) {
        self.custom_scrolling = false;
    }

    fn reached_right_border(&mut self) {
        self.can_scroll_right = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::host::MemoryViewport;

    #[test]
    fn test_flags_follow_offset() {
        let mut tracker = BoundaryTracker::new(true, true);
        let mut viewport = MemoryViewport::new(100, 300);

        assert!(tracker.on_native_scroll(&viewport));
        assert!(!tracker.can_scroll_left());
        assert!(tracker.can_scroll_right());

        viewport.set_scroll_offset(50);
        tracker.on_native_scroll(&viewport);
        assert!(tracker.can_scroll_left());
        assert!(tracker.can_scroll_right());

        viewport.set_scroll_offset(200);
        tracker.on_native_scroll(&viewport);
        assert!(tracker.can_scroll_left());
        assert!(!tracker.can_scroll_right());
    }

    #[test]
    fn test_repeated_evaluation_is_idempotent() {
        let mut tracker = BoundaryTracker::new(true, true);
        let viewport = MemoryViewport::new(100, 300);

        tracker.on_native_scroll(&viewport);
        let snapshot = tracker.clone();
        for _ in 0..5 {
            assert!(!tracker.on_native_scroll(&viewport));
            assert_eq!(tracker, snapshot);
        }
    }

    #[test]
    fn test_disabled_without_arrows_or_mouse() {
        let viewport = MemoryViewport::new(100, 300);

        let mut no_arrows = BoundaryTracker::new(false, true);
        no_arrows.on_native_scroll(&viewport);
        assert!(!no_arrows.can_scroll_right());

        let mut touch_only = BoundaryTracker::new(true, false);
        touch_only.on_native_scroll(&viewport);
        assert!(!touch_only.can_scroll_right());
        assert!(!touch_only.show_right_arrow());
    }

    #[test]
    fn test_suppressed_while_custom_scrolling() {
        let mut tracker = BoundaryTracker::new(true, true);
        let mut viewport = MemoryViewport::new(100, 300);
        tracker.on_native_scroll(&viewport);

        tracker.scroll_started();
        viewport.set_scroll_offset(120);
        for _ in 0..3 {
            assert!(!tracker.on_native_scroll(&viewport));
        }
        assert!(!tracker.can_scroll_left());

        tracker.scroll_ended();
        assert!(tracker.on_native_scroll(&viewport));
        assert!(tracker.can_scroll_left());
    }

    #[test]
    fn test_right_border_signal_wins_during_suppression() {
        let mut tracker = BoundaryTracker::new(true, true);
        let viewport = MemoryViewport::new(100, 300);
        tracker.on_native_scroll(&viewport);
        assert!(tracker.show_right_arrow());

        tracker.reached_right_border();
        tracker.scroll_started();
        assert!(!tracker.can_scroll_right());
        assert!(!tracker.show_right_arrow());
    }
}
