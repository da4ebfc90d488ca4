use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::animation::{FrameContext, ScrollAnimator, StepOutcome, TargetFn};
use super::boundary::BoundaryTracker;
use super::frames::FrameScheduler;
use super::host::ViewportHost;
use super::timing::{Clock, SystemClock};
use crate::config::ScrollConfig;
use crate::platform::{class_name, Platform};

/// Horizontally scrollable strip with animated arrow navigation
///
/// Owns the attached viewport, the animation queue and the arrow flags.
/// One instance per scrollable viewport.
pub struct HorizontalScroll<H, C = SystemClock> {
    host: Option<H>,
    clock: C,
    animator: ScrollAnimator,
    tracker: BoundaryTracker,
    /// Content width captured on attach, upper bound for animation targets
    initial_scroll_width: i32,
    duration: Duration,
    scroll_to_left: Option<TargetFn>,
    scroll_to_right: Option<TargetFn>,
    platform: Platform,
}

fn frame_context<'a, H: ViewportHost + 'a>(
    host: &'a mut Option<H>,
    initial_scroll_width: i32,
    now_ms: f64,
    tracker: &'a mut BoundaryTracker,
) -> FrameContext<'a> {
    FrameContext {
        host: host.as_mut().map(|h| h as &mut dyn ViewportHost),
        initial_scroll_width,
        now_ms,
        signals: tracker,
    }
}

impl<H: ViewportHost, C: Clock> HorizontalScroll<H, C> {
    /// `has_mouse` is the host's pointer capability; `config.has_mouse` wins when set
    pub fn new(config: &ScrollConfig, has_mouse: bool, clock: C) -> Self {
        Self {
            host: None,
            clock,
            animator: ScrollAnimator::new(),
            tracker: BoundaryTracker::new(config.show_arrows, config.has_mouse.unwrap_or(has_mouse)),
            initial_scroll_width: 0,
            duration: config.animation_duration(),
            scroll_to_left: None,
            scroll_to_right: None,
            platform: Platform::default(),
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Target used by the left arrow
    pub fn with_scroll_to_left<F>(mut self, target: F) -> Self
    where
        F: Fn(i32) -> i32 + Send + Sync + 'static,
    {
        self.scroll_to_left = Some(Arc::new(target));
        self
    }

    /// Target used by the right arrow
    pub fn with_scroll_to_right<F>(mut self, target: F) -> Self
    where
        F: Fn(i32) -> i32 + Send + Sync + 'static,
    {
        self.scroll_to_right = Some(Arc::new(target));
        self
    }

    pub fn set_show_arrows(&mut self, show_arrows: bool) {
        self.tracker.set_show_arrows(show_arrows);
        self.on_native_scroll();
    }

    pub fn set_has_mouse(&mut self, has_mouse: bool) {
        self.tracker.set_has_mouse(has_mouse);
        self.on_native_scroll();
    }

    /// Bind a viewport, snapshot its content width and evaluate the arrows
    pub fn attach(&mut self, host: H) {
        if self.host.is_some() {
            self.detach();
        }
        self.initial_scroll_width = host.content_width();
        debug!(
            initial_scroll_width = self.initial_scroll_width,
            visible_width = host.visible_width(),
            "viewport attached"
        );
        self.host = Some(host);
        self.on_native_scroll();
    }

    /// Unbind the viewport; a running animation ends and the queue drains
    pub fn detach(&mut self) -> Option<H> {
        let host = self.host.take();
        if self.animator.is_animating() {
            let now = self.clock.now_ms();
            let mut ctx = frame_context(&mut self.host, self.initial_scroll_width, now, &mut self.tracker);
            self.animator.step(&mut ctx);
        }
        if host.is_some() {
            debug!("viewport detached");
        }
        host
    }

    /// Queue a scroll whose target is computed from the offset at job start
    ///
    /// Returns the job id, or `None` when no viewport is attached.
    pub fn request_scroll<F>(&mut self, target: F, duration: Option<Duration>) -> Option<u64>
    where
        F: Fn(i32) -> i32 + Send + Sync + 'static,
    {
        self.request_scroll_fn(Some(Arc::new(target)), duration)
    }

    /// Like [`request_scroll`](Self::request_scroll) for an optional shared target
    pub fn request_scroll_fn(&mut self, target: Option<TargetFn>, duration: Option<Duration>) -> Option<u64> {
        let Some(target) = target else {
            debug!("scroll requested without a target, ignoring");
            return None;
        };
        if self.host.is_none() {
            debug!("scroll requested without a viewport, ignoring");
            return None;
        }

        let duration = duration.unwrap_or(self.duration);
        let now = self.clock.now_ms();
        let mut ctx = frame_context(&mut self.host, self.initial_scroll_width, now, &mut self.tracker);
        let id = self.animator.request(target, duration, &mut ctx);
        Some(id)
    }

    /// Left-arrow action
    pub fn scroll_left(&mut self) -> Option<u64> {
        self.request_scroll_fn(self.scroll_to_left.clone(), None)
    }

    /// Right-arrow action
    pub fn scroll_right(&mut self) -> Option<u64> {
        self.request_scroll_fn(self.scroll_to_right.clone(), None)
    }

    /// Native scroll event from the host; returns `true` if a flag changed
    pub fn on_native_scroll(&mut self) -> bool {
        match self.host.as_ref() {
            Some(host) => self.tracker.on_native_scroll(host),
            None => false,
        }
    }

    /// Step the running animation and deliver pending host scroll events
    pub fn on_frame(&mut self) -> StepOutcome {
        let now = self.clock.now_ms();
        let mut ctx = frame_context(&mut self.host, self.initial_scroll_width, now, &mut self.tracker);
        let outcome = self.animator.step(&mut ctx);
        self.dispatch_scroll_events();
        outcome
    }

    /// Forward a queued host scroll event to the arrow tracker
    pub fn dispatch_scroll_events(&mut self) -> bool {
        let pending = self
            .host
            .as_mut()
            .is_some_and(|host| host.take_scroll_event());
        pending && self.on_native_scroll()
    }

    /// Drive queued animations to completion, one step per frame
    ///
    /// Returns the number of frames consumed.
    pub async fn run_animations<F>(&mut self, frames: &mut F) -> usize
    where
        F: FrameScheduler + ?Sized,
    {
        let mut count = 0;
        while self.animator.is_animating() {
            frames.next_frame().await;
            self.on_frame();
            count += 1;
        }
        count
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Jobs queued, including the running one
    pub fn queued(&self) -> usize {
        self.animator.len()
    }

    pub fn animator(&self) -> &ScrollAnimator {
        &self.animator
    }

    pub fn show_arrows(&self) -> bool {
        self.tracker.show_arrows()
    }

    pub fn has_mouse(&self) -> bool {
        self.tracker.has_mouse()
    }

    pub fn can_scroll_left(&self) -> bool {
        self.tracker.can_scroll_left()
    }

    pub fn can_scroll_right(&self) -> bool {
        self.tracker.can_scroll_right()
    }

    pub fn show_left_arrow(&self) -> bool {
        self.tracker.show_left_arrow()
    }

    pub fn show_right_arrow(&self) -> bool {
        self.tracker.show_right_arrow()
    }

    pub fn initial_scroll_width(&self) -> i32 {
        self.initial_scroll_width
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    /// Mutable host access, e.g. for user-driven scrolling
    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn class_name(&self) -> String {
        class_name("HorizontalScroll", self.platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::host::MemoryViewport;
    use crate::scroll::timing::ManualClock;

    fn arrows_config() -> ScrollConfig {
        ScrollConfig {
            show_arrows: true,
            ..Default::default()
        }
    }

    fn scroller(visible: i32, content: i32) -> HorizontalScroll<MemoryViewport, ManualClock> {
        let mut scroll = HorizontalScroll::new(&arrows_config(), true, ManualClock::new())
            .with_scroll_to_left(|offset| offset - 100)
            .with_scroll_to_right(|offset| offset + 100);
        scroll.attach(MemoryViewport::new(visible, content));
        scroll
    }

    fn settle(scroll: &mut HorizontalScroll<MemoryViewport, ManualClock>) {
        for _ in 0..1000 {
            if !scroll.is_animating() {
                return;
            }
            scroll.clock().advance(16.0);
            scroll.on_frame();
        }
        panic!("animation did not settle");
    }

    fn offset(scroll: &HorizontalScroll<MemoryViewport, ManualClock>) -> i32 {
        scroll.host().map(|h| h.scroll_offset()).unwrap_or(-1)
    }

    #[test]
    fn test_attach_evaluates_overflow() {
        let scroll = scroller(100, 400);
        assert_eq!(scroll.initial_scroll_width(), 400);
        assert!(!scroll.show_left_arrow());
        assert!(scroll.show_right_arrow());

        let fits = scroller(400, 300);
        assert!(!fits.show_right_arrow());
    }

    #[test]
    fn test_request_without_viewport_is_noop() {
        let mut scroll: HorizontalScroll<MemoryViewport, ManualClock> =
            HorizontalScroll::new(&arrows_config(), true, ManualClock::new());
        assert_eq!(scroll.request_scroll(|o| o + 10, None), None);
        assert_eq!(scroll.queued(), 0);
    }

    #[test]
    fn test_arrow_without_target_is_noop() {
        let mut scroll: HorizontalScroll<MemoryViewport, ManualClock> =
            HorizontalScroll::new(&arrows_config(), true, ManualClock::new());
        scroll.attach(MemoryViewport::new(100, 400));
        assert_eq!(scroll.scroll_right(), None);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_right_arrow_walks_to_border() {
        let mut scroll = scroller(100, 400);
        scroll.scroll_right();
        scroll.scroll_right();
        scroll.scroll_right();
        assert_eq!(scroll.queued(), 3);

        settle(&mut scroll);
        assert_eq!(offset(&scroll), 300);
        assert!(scroll.can_scroll_left());
        assert!(!scroll.can_scroll_right());
        assert!(!scroll.show_right_arrow());
    }

    #[test]
    fn test_overshoot_clears_right_flag_immediately() {
        let mut scroll = scroller(100, 400);
        scroll.request_scroll(|_| 5_000, None);
        assert!(!scroll.can_scroll_right());

        settle(&mut scroll);
        assert_eq!(offset(&scroll), 300);
        assert!(!scroll.can_scroll_right());
    }

    #[test]
    fn test_below_border_lands_on_request() {
        let mut scroll = scroller(100, 400);
        scroll.request_scroll(|_| 137, None);
        settle(&mut scroll);
        assert_eq!(offset(&scroll), 137);
        assert!(scroll.can_scroll_left());
        assert!(scroll.can_scroll_right());
    }

    #[test]
    fn test_native_scroll_suppressed_while_running() {
        let mut scroll = scroller(100, 400);
        scroll.request_scroll(|_| 200, None);

        scroll.clock().advance(100.0);
        scroll.on_frame();
        assert!(offset(&scroll) > 0);
        for _ in 0..3 {
            assert!(!scroll.on_native_scroll());
        }
        assert!(!scroll.can_scroll_left());

        settle(&mut scroll);
        assert!(scroll.can_scroll_left());
    }

    #[test]
    fn test_clamp_uses_initial_width() {
        let mut scroll = scroller(100, 400);
        if let Some(host) = scroll.host_mut() {
            host.set_content_width(600);
        }
        scroll.request_scroll(|_| 1_000, None);
        assert_eq!(scroll.animator().active_target(), Some(300));
        settle(&mut scroll);
        assert_eq!(offset(&scroll), 300);
    }

    #[test]
    fn test_detach_mid_animation() {
        let mut scroll = scroller(100, 1000);
        scroll.scroll_right();
        scroll.scroll_right();
        scroll.clock().advance(50.0);
        scroll.on_frame();

        let host = scroll.detach();
        assert!(host.is_some());
        assert!(!scroll.is_animating());
        assert_eq!(scroll.queued(), 0);
        assert_eq!(scroll.on_frame(), StepOutcome::Idle);
        assert_eq!(scroll.scroll_left(), None);
    }

    #[test]
    fn test_user_scroll_updates_arrows() {
        let mut scroll = scroller(100, 400);
        if let Some(host) = scroll.host_mut() {
            host.user_scroll_by(40);
        }
        assert!(scroll.dispatch_scroll_events());
        assert!(scroll.show_left_arrow());
    }

    #[test]
    fn test_mouse_override_from_config() {
        let config = ScrollConfig {
            show_arrows: true,
            has_mouse: Some(false),
            ..Default::default()
        };
        let mut scroll: HorizontalScroll<MemoryViewport, ManualClock> =
            HorizontalScroll::new(&config, true, ManualClock::new());
        scroll.attach(MemoryViewport::new(100, 400));
        assert!(!scroll.show_right_arrow());

        scroll.set_has_mouse(true);
        assert!(scroll.show_right_arrow());
    }

    #[test]
    fn test_class_name() {
        let scroll = scroller(100, 400).with_platform(Platform::Vkcom);
        assert_eq!(scroll.class_name(), "HorizontalScroll HorizontalScroll--vkcom");
    }
}
