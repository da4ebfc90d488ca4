//! Scroll animation queue
//!
//! Requests are serialized into a FIFO queue. Only the head job drives the
//! viewport; when it converges it is popped and the next job starts within
//! the same call, so two jobs never write the offset in one frame.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace, warn};

use super::easing::ease_in_out_sine;
use super::host::ViewportHost;
use super::timing::{lerp, progress};

/// Maps the offset at job start to the desired offset
pub type TargetFn = Arc<dyn Fn(i32) -> i32 + Send + Sync>;

/// Notifications emitted while jobs run
pub trait ScrollSignals {
    /// A job took control of the offset
    fn scroll_started(&mut self);
    /// The running job let go of the offset
    fn scroll_ended(&mut self);
    /// A job's target was clamped to the rightmost legal offset
    fn reached_right_border(&mut self);
}

/// One requested scroll transition
pub struct AnimationJob {
    id: u64,
    target: TargetFn,
    duration: Duration,
}

impl fmt::Debug for AnimationJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationJob")
            .field("id", &self.id)
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

/// How a running job's target was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Normal,
    RightBorderClamped,
}

/// Result of one frame step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing queued
    Idle,
    /// The head job moved the viewport and needs more frames
    Animating,
    /// The head job finished; its successor (if any) has already started
    Completed { id: u64, landing: Landing },
}

/// Everything a job needs from the outside world for one step
pub struct FrameContext<'a> {
    pub host: Option<&'a mut dyn ViewportHost>,
    /// Content width captured when the host was attached
    pub initial_scroll_width: i32,
    pub now_ms: f64,
    pub signals: &'a mut dyn ScrollSignals,
}

#[derive(Debug, Clone, Copy)]
struct ActiveJob {
    id: u64,
    start_offset: i32,
    target_offset: i32,
    start_ms: f64,
    duration_ms: f64,
    landing: Landing,
}

enum FrameResult {
    Continue,
    Converged,
    Stalled,
}

/// FIFO scroll animation engine
#[derive(Debug, Default)]
pub struct ScrollAnimator {
    /// Head is the running job once `active` is set
    queue: VecDeque<AnimationJob>,
    active: Option<ActiveJob>,
    next_id: u64,
    completed: u64,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a job currently drives the viewport
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Jobs in the queue, including the running one
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Jobs waiting behind the running one
    pub fn pending(&self) -> usize {
        self.queue.len().saturating_sub(usize::from(self.active.is_some()))
    }

    /// Number of jobs that have run to completion
    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Resolved target of the running job
    pub fn active_target(&self) -> Option<i32> {
        self.active.map(|job| job.target_offset)
    }

    /// Append a job; it starts right away when the queue was empty
    pub fn request(&mut self, target: TargetFn, duration: Duration, ctx: &mut FrameContext<'_>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.queue.push_back(AnimationJob {
            id,
            target,
            duration,
        });
        debug!(job = id, queued = self.queue.len(), "scroll requested");

        if self.queue.len() == 1 {
            self.advance(ctx);
        }
        id
    }

    /// Advance the running job by one frame
    pub fn step(&mut self, ctx: &mut FrameContext<'_>) -> StepOutcome {
        let Some(active) = self.active else {
            return StepOutcome::Idle;
        };

        let result = match ctx.host.as_deref_mut() {
            Some(host) => apply_frame(&active, host, ctx.now_ms),
            None => {
                debug!(job = active.id, "viewport detached mid-animation");
                FrameResult::Stalled
            }
        };

        match result {
            FrameResult::Continue => StepOutcome::Animating,
            FrameResult::Converged | FrameResult::Stalled => {
                self.finish(ctx.signals);
                self.advance(ctx);
                StepOutcome::Completed {
                    id: active.id,
                    landing: active.landing,
                }
            }
        }
    }

    /// Start queued jobs until one needs more than its first frame
    fn advance(&mut self, ctx: &mut FrameContext<'_>) {
        while self.active.is_none() {
            let Some(job) = self.queue.front() else {
                return;
            };
            let Some(host) = ctx.host.as_deref_mut() else {
                debug!(job = job.id, "no viewport attached, dropping scroll");
                self.queue.pop_front();
                continue;
            };

            let active = start_job(job, host, ctx.initial_scroll_width, ctx.now_ms, ctx.signals);
            self.active = Some(active);

            match apply_frame(&active, host, ctx.now_ms) {
                FrameResult::Continue => return,
                FrameResult::Converged | FrameResult::Stalled => self.finish(ctx.signals),
            }
        }
    }

    fn finish(&mut self, signals: &mut dyn ScrollSignals) {
        signals.scroll_ended();
        if let Some(job) = self.active.take() {
            debug!(job = job.id, target = job.target_offset, "scroll finished");
        }
        self.queue.pop_front();
        self.completed += 1;
    }
}

fn start_job(
    job: &AnimationJob,
    host: &mut dyn ViewportHost,
    initial_scroll_width: i32,
    now_ms: f64,
    signals: &mut dyn ScrollSignals,
) -> ActiveJob {
    let start_offset = host.scroll_offset();
    let raw_target = (job.target)(start_offset);
    let max_offset = initial_scroll_width - host.visible_width();

    let (target_offset, landing) = if raw_target >= max_offset {
        signals.reached_right_border();
        (max_offset, Landing::RightBorderClamped)
    } else {
        (raw_target, Landing::Normal)
    };

    signals.scroll_started();
    debug!(
        job = job.id,
        from = start_offset,
        to = target_offset,
        clamped = landing == Landing::RightBorderClamped,
        "scroll started"
    );

    ActiveJob {
        id: job.id,
        start_offset,
        target_offset,
        start_ms: now_ms,
        duration_ms: job.duration.as_secs_f64() * 1000.0,
        landing,
    }
}

/// Write the eased offset and check convergence against what the host kept
fn apply_frame(job: &ActiveJob, host: &mut dyn ViewportHost, now_ms: f64) -> FrameResult {
    let elapsed = progress(job.start_ms, now_ms, job.duration_ms);
    let value = ease_in_out_sine(elapsed);
    let current = lerp(job.start_offset as f64, job.target_offset as f64, value);
    host.set_scroll_offset(current.ceil() as i32);

    let actual = host.scroll_offset();
    trace!(job = job.id, elapsed, actual, "scroll frame");

    if actual == job.target_offset.max(0) {
        FrameResult::Converged
    } else if elapsed >= 1.0 {
        // The final value was written and the host kept something else.
        warn!(
            job = job.id,
            target = job.target_offset,
            actual,
            "viewport refused scroll target, finishing early"
        );
        FrameResult::Stalled
    } else {
        FrameResult::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::host::MemoryViewport;
    use crate::scroll::timing::{Clock, ManualClock};

    #[derive(Default)]
    struct Recorder {
        events: Vec<&'static str>,
    }

    impl ScrollSignals for Recorder {
        fn scroll_started(&mut self) {
            self.events.push("start");
        }
        fn scroll_ended(&mut self) {
            self.events.push("end");
        }
        fn reached_right_border(&mut self) {
            self.events.push("right-border");
        }
    }

    const DURATION: Duration = Duration::from_millis(250);

    fn by(delta: i32) -> TargetFn {
        Arc::new(move |offset| offset + delta)
    }

    fn to(target: i32) -> TargetFn {
        Arc::new(move |_| target)
    }

    struct Rig {
        animator: ScrollAnimator,
        viewport: MemoryViewport,
        clock: ManualClock,
        signals: Recorder,
        initial_scroll_width: i32,
    }

    impl Rig {
        fn new(visible: i32, content: i32) -> Self {
            Self {
                animator: ScrollAnimator::new(),
                viewport: MemoryViewport::new(visible, content),
                clock: ManualClock::new(),
                signals: Recorder::default(),
                initial_scroll_width: content,
            }
        }

        fn request(&mut self, target: TargetFn) -> u64 {
            let mut ctx = FrameContext {
                host: Some(&mut self.viewport),
                initial_scroll_width: self.initial_scroll_width,
                now_ms: self.clock.now_ms(),
                signals: &mut self.signals,
            };
            self.animator.request(target, DURATION, &mut ctx)
        }

        fn step(&mut self, ms: f64) -> StepOutcome {
            self.clock.advance(ms);
            let mut ctx = FrameContext {
                host: Some(&mut self.viewport),
                initial_scroll_width: self.initial_scroll_width,
                now_ms: self.clock.now_ms(),
                signals: &mut self.signals,
            };
            self.animator.step(&mut ctx)
        }

        fn run_to_idle(&mut self) -> Vec<i32> {
            let mut offsets = Vec::new();
            for _ in 0..1000 {
                if self.step(16.0) == StepOutcome::Idle {
                    return offsets;
                }
                offsets.push(self.viewport.scroll_offset());
            }
            panic!("animation did not settle");
        }
    }

    #[test]
    fn test_eased_offsets_at_quarter_points() {
        let mut rig = Rig::new(100, 1000);
        rig.request(to(100));
        assert!(rig.animator.is_animating());
        assert_eq!(rig.viewport.scroll_offset(), 0);

        assert_eq!(rig.step(125.0), StepOutcome::Animating);
        assert_eq!(rig.viewport.scroll_offset(), 50);

        assert_eq!(
            rig.step(125.0),
            StepOutcome::Completed {
                id: 0,
                landing: Landing::Normal
            }
        );
        assert_eq!(rig.viewport.scroll_offset(), 100);
        assert!(!rig.animator.is_animating());
        assert_eq!(rig.signals.events, ["start", "end"]);
    }

    #[test]
    fn test_queued_jobs_run_in_order() {
        let mut rig = Rig::new(100, 1000);
        rig.request(by(100));
        rig.request(by(100));
        rig.request(by(100));
        assert_eq!(rig.animator.len(), 3);
        assert_eq!(rig.animator.pending(), 2);
        assert_eq!(rig.animator.active_target(), Some(100));

        let offsets = rig.run_to_idle();

        assert_eq!(rig.viewport.scroll_offset(), 300);
        assert_eq!(rig.animator.completed(), 3);
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(
            rig.signals.events,
            ["start", "end", "start", "end", "start", "end"]
        );
    }

    #[test]
    fn test_target_past_right_border_is_clamped() {
        let mut rig = Rig::new(100, 400);
        rig.request(to(10_000));
        assert_eq!(rig.animator.active_target(), Some(300));
        assert_eq!(rig.signals.events, ["right-border", "start"]);

        rig.run_to_idle();
        assert_eq!(rig.viewport.scroll_offset(), 300);
    }

    #[test]
    fn test_target_exactly_at_border_counts_as_border() {
        let mut rig = Rig::new(100, 400);
        rig.request(to(300));
        assert_eq!(rig.signals.events, ["right-border", "start"]);
    }

    #[test]
    fn test_negative_target_converges_at_zero() {
        let mut rig = Rig::new(100, 400);
        rig.viewport.set_scroll_offset(120);
        rig.request(by(-500));
        rig.run_to_idle();
        assert_eq!(rig.viewport.scroll_offset(), 0);
        assert_eq!(rig.animator.completed(), 1);
    }

    #[test]
    fn test_noop_target_completes_synchronously() {
        let mut rig = Rig::new(100, 400);
        rig.request(by(0));
        assert!(!rig.animator.is_animating());
        assert!(rig.animator.is_empty());
        assert_eq!(rig.signals.events, ["start", "end"]);
    }

    #[test]
    fn test_successor_starts_from_predecessor_end() {
        let mut rig = Rig::new(100, 1000);
        let starts = Arc::new(std::sync::Mutex::new(Vec::new()));
        for _ in 0..2 {
            let starts = starts.clone();
            rig.request(Arc::new(move |offset| {
                starts.lock().unwrap().push(offset);
                offset + 75
            }));
        }
        rig.run_to_idle();
        assert_eq!(*starts.lock().unwrap(), vec![0, 75]);
    }

    #[test]
    fn test_shrunk_host_does_not_spin() {
        let mut rig = Rig::new(100, 400);
        rig.request(to(250));
        rig.viewport.set_content_width(200);
        rig.run_to_idle();
        assert_eq!(rig.viewport.scroll_offset(), 100);
        assert_eq!(rig.animator.completed(), 1);
    }

    #[test]
    fn test_detached_host_finishes_and_drains() {
        let mut rig = Rig::new(100, 1000);
        rig.request(by(100));
        rig.request(by(100));

        let mut ctx = FrameContext {
            host: None,
            initial_scroll_width: rig.initial_scroll_width,
            now_ms: 16.0,
            signals: &mut rig.signals,
        };
        let outcome = rig.animator.step(&mut ctx);

        assert_eq!(
            outcome,
            StepOutcome::Completed {
                id: 0,
                landing: Landing::Normal
            }
        );
        assert!(rig.animator.is_empty());
        assert!(!rig.animator.is_animating());
        assert_eq!(rig.signals.events, ["start", "end"]);
    }

    #[test]
    fn test_idle_step() {
        let mut rig = Rig::new(100, 1000);
        assert_eq!(rig.step(16.0), StepOutcome::Idle);
    }
}
