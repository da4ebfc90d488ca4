//! Frame scheduling for the animation step loop

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{Instant, Interval, MissedTickBehavior};

use super::timing::Clock;

/// Suspends the caller until the next display frame
#[async_trait]
pub trait FrameScheduler: Send {
    async fn next_frame(&mut self);
}

/// Fixed-rate frames on a tokio interval
///
/// Late frames are skipped rather than bunched up.
#[derive(Debug)]
pub struct IntervalFrames {
    interval: Interval,
}

impl IntervalFrames {
    /// Must be called from within a tokio runtime
    pub fn new(period: Duration) -> Self {
        let mut interval = tokio::time::interval(period.max(Duration::from_millis(1)));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { interval }
    }
}

#[async_trait]
impl FrameScheduler for IntervalFrames {
    async fn next_frame(&mut self) {
        self.interval.tick().await;
    }
}

/// Monotonic clock on tokio's time source, so paused test time applies
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: Instant,
}

impl TokioClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}
