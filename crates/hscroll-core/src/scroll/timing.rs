//! Clocks and progress math for scroll animations

use std::cell::Cell;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Source of elapsed milliseconds
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Process clock: monotonic when available, wall-clock otherwise
#[derive(Debug, Clone, Copy)]
pub enum SystemClock {
    Monotonic(Instant),
    Wall,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock::Monotonic(Instant::now())
    }

    /// Clock backed by the wall-clock; not immune to clock adjustments
    pub fn wall() -> Self {
        SystemClock::Wall
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        match self {
            SystemClock::Monotonic(origin) => origin.elapsed().as_secs_f64() * 1000.0,
            SystemClock::Wall => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs_f64() * 1000.0)
                .unwrap_or(0.0),
        }
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, now_ms: f64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> f64 {
        (**self).now_ms()
    }
}

/// Fraction of `duration_ms` elapsed since `start_ms`, clamped to [0, 1]
///
/// A non-positive duration counts as already finished.
#[inline]
pub fn progress(start_ms: f64, now_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    ((now_ms - start_ms) / duration_ms).clamp(0.0, 1.0)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps() {
        assert_eq!(progress(100.0, 50.0, 250.0), 0.0);
        assert_eq!(progress(100.0, 225.0, 250.0), 0.5);
        assert_eq!(progress(100.0, 1000.0, 250.0), 1.0);
    }

    #[test]
    fn test_progress_zero_duration() {
        assert_eq!(progress(0.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(40.0, 0.0, 0.25) - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new();
        assert_eq!(clock.now_ms(), 0.0);
        clock.advance(16.0);
        clock.advance(16.0);
        assert_eq!(clock.now_ms(), 32.0);
        clock.set(5.0);
        assert_eq!((&clock).now_ms(), 5.0);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
        assert!(SystemClock::wall().now_ms() > 0.0);
    }
}
