//! Slide-down contextual header panel
//!
//! Closing is animated by the host. The panel keeps rendering its content
//! until the host reports the close animation finished, or until a fallback
//! timer expires on hosts that cannot report it.

use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::config::PanelConfig;
use crate::platform::{class_name, class_names, Platform};

/// Fallback close-animation time, in milliseconds
pub const ANIMATION_FALLBACK_MS: u64 = 200;

/// Source of the "close animation finished" notification
pub trait CompletionSignal: fmt::Debug + Send {
    /// Start waiting; any earlier wait is replaced
    fn arm(&mut self, now_ms: f64);

    /// Host reported an animation-finished event; `true` if it completes the wait
    fn animation_end(&mut self) -> bool;

    /// Time passed; `true` if the wait completed
    fn poll(&mut self, now_ms: f64) -> bool;

    fn is_armed(&self) -> bool;
}

/// Completion driven by the host's animation-finished events
#[derive(Debug, Default)]
pub struct AnimationEndSignal {
    armed: bool,
}

impl CompletionSignal for AnimationEndSignal {
    fn arm(&mut self, _now_ms: f64) {
        self.armed = true;
    }

    fn animation_end(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }

    fn poll(&mut self, _now_ms: f64) -> bool {
        false
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}

/// Completion after a fixed delay
#[derive(Debug)]
pub struct TimerSignal {
    delay_ms: f64,
    deadline: Option<f64>,
}

impl TimerSignal {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay_ms: delay.as_secs_f64() * 1000.0,
            deadline: None,
        }
    }
}

impl CompletionSignal for TimerSignal {
    fn arm(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.delay_ms);
    }

    fn animation_end(&mut self) -> bool {
        false
    }

    fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

/// Pick the completion source the host can support
pub fn completion_signal(config: &PanelConfig) -> Box<dyn CompletionSignal> {
    if config.animation_events {
        Box::new(AnimationEndSignal::default())
    } else {
        Box::new(TimerSignal::new(config.fallback()))
    }
}

/// Contextual panel that slides down under a header
#[derive(Debug)]
pub struct PanelHeaderContext {
    opened: bool,
    closing: bool,
    platform: Platform,
    completion: Box<dyn CompletionSignal>,
}

impl PanelHeaderContext {
    pub fn new(platform: Platform, config: &PanelConfig) -> Self {
        Self::with_signal(platform, completion_signal(config))
    }

    pub fn with_signal(platform: Platform, completion: Box<dyn CompletionSignal>) -> Self {
        Self {
            opened: false,
            closing: false,
            platform,
            completion,
        }
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// Open or close; closing keeps the content up until completion
    pub fn set_opened(&mut self, opened: bool, now_ms: f64) {
        if opened == self.opened {
            return;
        }
        self.opened = opened;
        if !opened {
            debug!("panel closing");
            self.closing = true;
            self.completion.arm(now_ms);
        }
    }

    pub fn toggle(&mut self, now_ms: f64) {
        self.set_opened(!self.opened, now_ms);
    }

    /// Host animation-finished event
    pub fn on_animation_end(&mut self) {
        if self.completion.animation_end() {
            self.finish();
        }
    }

    /// Advance the fallback timer; returns `true` when closing just finished
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.completion.poll(now_ms) {
            self.finish();
            return true;
        }
        false
    }

    fn finish(&mut self) {
        if self.closing {
            debug!("panel closed");
        }
        self.closing = false;
    }

    /// Children are rendered while open or animating closed
    pub fn content_visible(&self) -> bool {
        self.opened || self.closing
    }

    /// The dimming overlay follows the content
    pub fn fade_visible(&self) -> bool {
        self.content_visible()
    }

    /// Click on the overlay; `true` means the caller should close the panel
    pub fn fade_clicked(&self) -> bool {
        self.fade_visible()
    }

    pub fn class_names(&self, extra: Option<&str>) -> String {
        let base = class_name("PanelHeaderContext", self.platform);
        class_names([
            base.as_str(),
            if self.opened { "PanelHeaderContext--opened" } else { "" },
            if self.closing { "PanelHeaderContext--closing" } else { "" },
            extra.unwrap_or_default(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer_config() -> PanelConfig {
        PanelConfig {
            animation_events: false,
            fallback_ms: ANIMATION_FALLBACK_MS,
        }
    }

    #[test]
    fn test_open_close_with_animation_events() {
        let mut panel = PanelHeaderContext::new(Platform::Ios, &PanelConfig::default());
        assert!(!panel.content_visible());

        panel.set_opened(true, 0.0);
        assert!(panel.content_visible());
        assert!(!panel.is_closing());

        panel.set_opened(false, 10.0);
        assert!(panel.is_closing());
        assert!(panel.content_visible());
        assert!(!panel.tick(10_000.0));
        assert!(panel.is_closing());

        panel.on_animation_end();
        assert!(!panel.is_closing());
        assert!(!panel.content_visible());
    }

    #[test]
    fn test_timer_fallback() {
        let mut panel = PanelHeaderContext::new(Platform::Android, &timer_config());
        panel.set_opened(true, 0.0);
        panel.set_opened(false, 100.0);

        panel.on_animation_end();
        assert!(panel.is_closing());
        assert!(!panel.tick(299.0));
        assert!(panel.tick(300.0));
        assert!(!panel.is_closing());
        assert!(!panel.tick(400.0));
    }

    #[test]
    fn test_rearming_timer_fires_once() {
        let mut panel = PanelHeaderContext::new(Platform::Android, &timer_config());
        panel.set_opened(true, 0.0);
        panel.set_opened(false, 0.0);
        panel.set_opened(true, 50.0);
        panel.set_opened(false, 150.0);

        assert!(!panel.tick(200.0));
        assert!(panel.is_closing());
        assert!(panel.tick(350.0));
        assert!(!panel.tick(351.0));
    }

    #[test]
    fn test_same_state_does_not_rearm() {
        let mut panel = PanelHeaderContext::new(Platform::Android, &timer_config());
        panel.set_opened(false, 0.0);
        assert!(!panel.is_closing());
        assert!(!panel.tick(1000.0));
    }

    #[test]
    fn test_fade_click_requests_close() {
        let mut panel = PanelHeaderContext::new(Platform::Android, &PanelConfig::default());
        assert!(!panel.fade_clicked());
        panel.toggle(0.0);
        assert!(panel.fade_clicked());
    }

    #[test]
    fn test_class_names() {
        let mut panel = PanelHeaderContext::new(Platform::Ios, &PanelConfig::default());
        assert_eq!(
            panel.class_names(None),
            "PanelHeaderContext PanelHeaderContext--ios"
        );

        panel.set_opened(true, 0.0);
        assert_eq!(
            panel.class_names(Some("custom")),
            "PanelHeaderContext PanelHeaderContext--ios PanelHeaderContext--opened custom"
        );

        panel.set_opened(false, 0.0);
        assert_eq!(
            panel.class_names(None),
            "PanelHeaderContext PanelHeaderContext--ios PanelHeaderContext--closing"
        );
    }
}
