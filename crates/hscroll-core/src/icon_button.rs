//! Icon-only button control

use std::time::Duration;

use crate::adaptivity::{Adaptivity, SizeType};
use crate::platform::{class_name, class_names, Platform};

/// Delay before the pressed state is shown
pub const ACTIVE_EFFECT_DELAY: Duration = Duration::from_millis(200);

/// Element the button renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonElement {
    Button,
    Link,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconButton {
    /// Deprecated in favour of `children`, still preferred when set
    pub icon: Option<String>,
    pub children: Option<String>,
    pub href: Option<String>,
    /// Pinned vertical density; the adaptivity value applies otherwise
    pub size_y: Option<SizeType>,
    pub class_name: Option<String>,
    pub platform: Platform,
}

impl IconButton {
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            ..Default::default()
        }
    }

    pub fn with_children(children: impl Into<String>) -> Self {
        Self {
            children: Some(children.into()),
            ..Default::default()
        }
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn size_y(mut self, size_y: SizeType) -> Self {
        self.size_y = Some(size_y);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn element(&self) -> ButtonElement {
        if self.href.is_some() {
            ButtonElement::Link
        } else {
            ButtonElement::Button
        }
    }

    /// Icon when set, children otherwise
    pub fn content(&self) -> Option<&str> {
        self.icon
            .as_deref()
            .filter(|icon| !icon.is_empty())
            .or(self.children.as_deref())
    }

    pub fn resolved_size_y(&self, adaptivity: &Adaptivity) -> SizeType {
        self.size_y.unwrap_or(adaptivity.size_y)
    }

    pub fn class_names(&self, adaptivity: &Adaptivity) -> String {
        let size_y = format!("IconButton--sizeY-{}", self.resolved_size_y(adaptivity));
        class_names([
            class_name("IconButton", self.platform).as_str(),
            self.class_name.as_deref().unwrap_or_default(),
            size_y.as_str(),
        ])
    }

    pub fn active_effect_delay(&self) -> Duration {
        ACTIVE_EFFECT_DELAY
    }
}
