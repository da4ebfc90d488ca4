use hscroll_core::Platform;
use ratatui::style::{Color, Modifier, Style};

/// Runtime theme, one palette per platform flavour
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey: Color,

    // Semantic colors
    pub accent: Color,
    pub arrow: Color,
    pub fade: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_platform(Platform::default())
    }
}

impl Theme {
    pub fn for_platform(platform: Platform) -> Self {
        let accent = match platform {
            Platform::Android => Color::Rgb(0x3f, 0x8a, 0xe0),
            Platform::Ios => Color::Rgb(0x0a, 0x84, 0xff),
            Platform::Vkcom => Color::Rgb(0x5c, 0x9c, 0xe6),
        };
        Self {
            bg0: Color::Rgb(0x19, 0x19, 0x1a),
            bg1: Color::Rgb(0x23, 0x23, 0x24),
            bg2: Color::Rgb(0x2c, 0x2d, 0x2e),
            fg0: Color::Rgb(0xe1, 0xe3, 0xe6),
            fg1: Color::Rgb(0xb2, 0xb6, 0xbb),
            grey: Color::Rgb(0x76, 0x78, 0x7a),
            accent,
            arrow: Color::Rgb(0xff, 0xff, 0xff),
            fade: Color::Rgb(0x0a, 0x0a, 0x0a),
        }
    }

    pub fn chip(&self) -> Style {
        Style::default().fg(self.fg0).bg(self.bg2)
    }

    pub fn arrow(&self) -> Style {
        Style::default()
            .fg(self.arrow)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header(&self) -> Style {
        Style::default().fg(self.fg0).bg(self.bg1)
    }

    pub fn status(&self) -> Style {
        Style::default().fg(self.fg1).bg(self.bg1)
    }
}
