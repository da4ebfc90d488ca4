//! Adaptive layout: breakpoint classification and the provider that
//! broadcasts the current classification to every dependent.
//!
//! - `breakpoints` - size category enums, thresholds and `classify`
//! - `provider` - owns the shared snapshot, recomputes it on resize

pub mod breakpoints;
pub mod provider;

pub use breakpoints::{
    classify, Adaptivity, AdaptivityOverrides, SizeType, ViewHeight, ViewWidth, DESKTOP_SIZE,
    MEDIUM_HEIGHT, MOBILE_SIZE, SMALL_TABLET_SIZE, TABLET_SIZE,
};
pub use provider::{AdaptivityProvider, SIZE_X_REGULAR_CLASS};
