pub mod adaptivity;
pub mod config;
pub mod error;
pub mod icon_button;
pub mod panel;
pub mod platform;
pub mod scroll;

pub use adaptivity::{Adaptivity, AdaptivityOverrides, AdaptivityProvider, SizeType, ViewHeight, ViewWidth};
pub use config::{AppConfig, ScrollConfig};
pub use error::{Error, Result};
pub use platform::Platform;
pub use scroll::{HorizontalScroll, ViewportHost};
