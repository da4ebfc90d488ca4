//! Animated horizontal scrolling
//!
//! The host surface is abstracted behind [`ViewportHost`]; everything here is
//! headless and driven one frame at a time.
//!
//! ## Building blocks
//! - `easing` - cosine ease-in-out curve
//! - `timing` - clocks and progress math
//! - `host` - viewport trait and an in-memory viewport
//!
//! ## Engine
//! - `animation` - FIFO job queue and per-frame stepping
//! - `boundary` - left/right arrow visibility flags
//! - `horizontal` - owner tying host, animator and flags together
//! - `frames` - async frame scheduling for the step loop
//!
//! # Usage
//!
//! ```ignore
//! use hscroll_core::scroll::{HorizontalScroll, IntervalFrames, MemoryViewport};
//!
//! let mut scroll = HorizontalScroll::new(&config.ui.scroll, true, TokioClock::new());
//! scroll.attach(MemoryViewport::new(320, 1200));
//! scroll.request_scroll(|offset| offset + 200, None);
//!
//! let mut frames = IntervalFrames::new(config.ui.scroll.animation_tick_duration());
//! scroll.run_animations(&mut frames).await;
//! ```

pub mod easing;
pub mod timing;
pub mod host;

pub mod animation;
pub mod boundary;
pub mod frames;
pub mod horizontal;

pub use animation::{AnimationJob, ScrollAnimator, ScrollSignals, StepOutcome, TargetFn};
pub use boundary::BoundaryTracker;
pub use frames::{FrameScheduler, IntervalFrames, TokioClock};
pub use horizontal::HorizontalScroll;
pub use host::{MemoryViewport, ViewportHost};
pub use timing::{Clock, ManualClock, SystemClock};

/// Default duration of one programmatic scroll, in milliseconds
pub const SCROLL_ONE_FRAME_TIME_MS: u64 = 250;
