use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::adaptivity::AdaptivityOverrides;
use crate::platform::Platform;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Platform flavour for class names
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub adaptivity: AdaptivityConfig,
    #[serde(default)]
    pub panel: PanelConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            platform: Platform::default(),
            scroll: ScrollConfig::default(),
            adaptivity: AdaptivityConfig::default(),
            panel: PanelConfig::default(),
        }
    }
}

/// Horizontal scroll behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Duration of one programmatic scroll animation
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Frame rate used while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Render left/right arrow affordances on pointer-capable hosts
    #[serde(default)]
    pub show_arrows: bool,
    /// Force the pointer capability instead of asking the host
    #[serde(default)]
    pub has_mouse: Option<bool>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: default_animation_duration(),
            animation_fps: default_animation_fps(),
            show_arrows: false,
            has_mouse: None,
        }
    }
}

impl ScrollConfig {
    #[inline]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Time between frames while animating
    #[inline]
    pub fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }
}

/// Adaptivity provider inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptivityConfig {
    /// Pointer capability of the host; detected when unset
    #[serde(default)]
    pub has_mouse: Option<bool>,
    /// Pinned size categories
    #[serde(flatten)]
    pub overrides: AdaptivityOverrides,
}

/// Contextual header panel behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Host delivers animation-finished events
    #[serde(default = "default_true")]
    pub animation_events: bool,
    /// Close-animation timeout used when the host has no such events
    #[serde(default = "default_panel_fallback")]
    pub fallback_ms: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            animation_events: default_true(),
            fallback_ms: default_panel_fallback(),
        }
    }
}

impl PanelConfig {
    pub fn fallback(&self) -> Duration {
        Duration::from_millis(self.fallback_ms)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_duration() -> u64 {
    crate::scroll::SCROLL_ONE_FRAME_TIME_MS
}

fn default_animation_fps() -> u32 {
    60
}

fn default_true() -> bool {
    true
}

fn default_panel_fallback() -> u64 {
    crate::panel::ANIMATION_FALLBACK_MS
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, defaults if it is missing
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Get the configuration file path
    /// Always uses ~/.config/hscroll/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("hscroll")
            .join("config.toml")
    }
}
