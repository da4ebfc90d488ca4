use anyhow::Result;
use serde::Serialize;

use hscroll_core::{Adaptivity, AdaptivityOverrides, AdaptivityProvider, AppConfig};

pub struct ClassifyOptions {
    pub width: u32,
    pub height: u32,
    pub is_landscape: bool,
    /// Falls back to the config, then to no mouse
    pub has_mouse: Option<bool>,
    pub overrides: AdaptivityOverrides,
}

#[derive(Debug, Serialize)]
struct ClassifyOutput {
    width: u32,
    height: u32,
    is_landscape: bool,
    has_mouse: bool,
    #[serde(flatten)]
    adaptivity: Adaptivity,
    root_class: Option<&'static str>,
}

fn classify(config: &AppConfig, options: ClassifyOptions) -> ClassifyOutput {
    let configured = config.ui.adaptivity.overrides;
    // Command-line values win over the config file
    let overrides = AdaptivityOverrides {
        view_width: options.overrides.view_width.or(configured.view_width),
        view_height: options.overrides.view_height.or(configured.view_height),
        size_x: options.overrides.size_x.or(configured.size_x),
        size_y: options.overrides.size_y.or(configured.size_y),
    };
    let has_mouse = options
        .has_mouse
        .or(config.ui.adaptivity.has_mouse)
        .unwrap_or(false);

    let provider = AdaptivityProvider::new(
        options.width,
        options.height,
        options.is_landscape,
        has_mouse,
        overrides,
    );

    ClassifyOutput {
        width: options.width,
        height: options.height,
        is_landscape: options.is_landscape,
        has_mouse,
        adaptivity: *provider.current(),
        root_class: provider.root_class(),
    }
}

pub fn run(config: &AppConfig, options: ClassifyOptions) -> Result<()> {
    let output = classify(config, options);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hscroll_core::{SizeType, ViewWidth};

    fn options(width: u32, height: u32, is_landscape: bool, has_mouse: Option<bool>) -> ClassifyOptions {
        ClassifyOptions {
            width,
            height,
            is_landscape,
            has_mouse,
            overrides: AdaptivityOverrides::default(),
        }
    }

    #[test]
    fn test_json_shape() {
        let output = classify(&AppConfig::default(), options(800, 600, true, Some(true)));
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["view_width"], "small-tablet");
        assert_eq!(json["view_height"], "small");
        assert_eq!(json["size_x"], "regular");
        assert_eq!(json["size_y"], "compact");
        assert_eq!(json["root_class"], "vkui-sizeX-regular");
    }

    #[test]
    fn test_command_line_override_wins() {
        let mut config = AppConfig::default();
        config.ui.adaptivity.overrides.size_x = Some(SizeType::Regular);
        config.ui.adaptivity.overrides.view_width = Some(ViewWidth::Desktop);

        let mut opts = options(300, 400, false, None);
        opts.overrides.size_x = Some(SizeType::Compact);
        let output = classify(&config, opts);

        assert_eq!(output.adaptivity.size_x, SizeType::Compact);
        assert_eq!(output.adaptivity.view_width, ViewWidth::Desktop);
        assert_eq!(output.root_class, None);
    }

    #[test]
    fn test_mouse_flag_overrides_config_both_ways() {
        let mut config = AppConfig::default();
        config.ui.adaptivity.has_mouse = Some(true);

        let from_config = classify(&config, options(1920, 1080, true, None));
        assert!(from_config.has_mouse);
        assert_eq!(from_config.adaptivity.size_y, SizeType::Compact);

        let touch = classify(&config, options(1920, 1080, true, Some(false)));
        assert!(!touch.has_mouse);
        assert_eq!(touch.adaptivity.size_y, SizeType::Regular);
    }
}
