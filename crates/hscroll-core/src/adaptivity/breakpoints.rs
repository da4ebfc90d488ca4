use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the desktop width band
pub const DESKTOP_SIZE: u32 = 1280;
/// Lower bound (inclusive) of the tablet width band
pub const TABLET_SIZE: u32 = 1024;
/// Lower bound (inclusive) of the small-tablet width band
pub const SMALL_TABLET_SIZE: u32 = 768;
/// Lower bound (inclusive) of the mobile width band, also the small height band
pub const MOBILE_SIZE: u32 = 320;
/// Lower bound (inclusive) of the medium height band
pub const MEDIUM_HEIGHT: u32 = 720;

/// Horizontal size category of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewWidth {
    SmallMobile,
    Mobile,
    SmallTablet,
    Tablet,
    Desktop,
}

/// Vertical size category of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewHeight {
    ExtraSmall,
    Small,
    Medium,
}

/// Density of controls along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeType {
    Compact,
    Regular,
}

impl ViewWidth {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewWidth::SmallMobile => "small-mobile",
            ViewWidth::Mobile => "mobile",
            ViewWidth::SmallTablet => "small-tablet",
            ViewWidth::Tablet => "tablet",
            ViewWidth::Desktop => "desktop",
        }
    }
}

impl ViewHeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewHeight::ExtraSmall => "extra-small",
            ViewHeight::Small => "small",
            ViewHeight::Medium => "medium",
        }
    }
}

impl SizeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeType::Compact => "compact",
            SizeType::Regular => "regular",
        }
    }
}

impl fmt::Display for ViewWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ViewHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SizeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewWidth {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match normalize(s).as_str() {
            "small-mobile" => Ok(ViewWidth::SmallMobile),
            "mobile" => Ok(ViewWidth::Mobile),
            "small-tablet" => Ok(ViewWidth::SmallTablet),
            "tablet" => Ok(ViewWidth::Tablet),
            "desktop" => Ok(ViewWidth::Desktop),
            _ => Err(unknown("view width", s)),
        }
    }
}

impl FromStr for ViewHeight {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match normalize(s).as_str() {
            "extra-small" => Ok(ViewHeight::ExtraSmall),
            "small" => Ok(ViewHeight::Small),
            "medium" => Ok(ViewHeight::Medium),
            _ => Err(unknown("view height", s)),
        }
    }
}

impl FromStr for SizeType {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match normalize(s).as_str() {
            "compact" => Ok(SizeType::Compact),
            "regular" => Ok(SizeType::Regular),
            _ => Err(unknown("size type", s)),
        }
    }
}

/// Accept `small_mobile`, `SMALL-MOBILE` and `small-mobile` alike
fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace('_', "-")
}

fn unknown(kind: &'static str, value: &str) -> crate::Error {
    crate::Error::UnknownVariant {
        kind,
        value: value.to_string(),
    }
}

/// Classification of the current viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adaptivity {
    pub view_width: ViewWidth,
    pub view_height: ViewHeight,
    pub size_x: SizeType,
    pub size_y: SizeType,
}

/// Caller-pinned values that win over the computed classification
///
/// Every `Some` field replaces the computed one, including the lowest
/// category of each enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdaptivityOverrides {
    #[serde(default)]
    pub view_width: Option<ViewWidth>,
    #[serde(default)]
    pub view_height: Option<ViewHeight>,
    #[serde(default)]
    pub size_x: Option<SizeType>,
    #[serde(default)]
    pub size_y: Option<SizeType>,
}

impl AdaptivityOverrides {
    pub fn is_empty(&self) -> bool {
        self.view_width.is_none()
            && self.view_height.is_none()
            && self.size_x.is_none()
            && self.size_y.is_none()
    }
}

impl Adaptivity {
    /// Apply caller overrides on top of a computed classification
    pub fn merge(self, overrides: &AdaptivityOverrides) -> Self {
        Self {
            view_width: overrides.view_width.unwrap_or(self.view_width),
            view_height: overrides.view_height.unwrap_or(self.view_height),
            size_x: overrides.size_x.unwrap_or(self.size_x),
            size_y: overrides.size_y.unwrap_or(self.size_y),
        }
    }
}

/// Classify a viewport into size categories
///
/// Width bands decide `view_width` and horizontal density, height bands
/// decide `view_height`. Vertical density turns compact on narrow portrait
/// screens, on very short landscape screens, and on any mouse-driven
/// viewport from the small-tablet band up. Overrides are applied last.
pub fn classify(
    width: u32,
    height: u32,
    is_landscape: bool,
    has_mouse: bool,
    overrides: &AdaptivityOverrides,
) -> Adaptivity {
    let mut size_x = SizeType::Regular;
    let mut size_y = SizeType::Regular;

    let view_width = if width >= DESKTOP_SIZE {
        ViewWidth::Desktop
    } else if width >= TABLET_SIZE {
        ViewWidth::Tablet
    } else if width >= SMALL_TABLET_SIZE {
        ViewWidth::SmallTablet
    } else if width >= MOBILE_SIZE {
        size_x = SizeType::Compact;
        ViewWidth::Mobile
    } else {
        size_x = SizeType::Compact;
        if !is_landscape {
            size_y = SizeType::Compact;
        }
        ViewWidth::SmallMobile
    };

    let view_height = if height >= MEDIUM_HEIGHT {
        ViewHeight::Medium
    } else if height >= MOBILE_SIZE {
        ViewHeight::Small
    } else {
        if is_landscape {
            size_y = SizeType::Compact;
        }
        ViewHeight::ExtraSmall
    };

    if width >= SMALL_TABLET_SIZE && has_mouse {
        size_y = SizeType::Compact;
    }

    Adaptivity {
        view_width,
        view_height,
        size_x,
        size_y,
    }
    .merge(overrides)
}
