//! Platform flavour and class-name helpers shared by every component.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visual platform a component is styled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Android,
    Ios,
    Vkcom,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Vkcom => "vkcom",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            "vkcom" => Ok(Platform::Vkcom),
            _ => Err(crate::Error::UnknownVariant {
                kind: "platform",
                value: s.to_string(),
            }),
        }
    }
}

/// Base class plus its platform modifier, e.g. `"IconButton IconButton--ios"`
pub fn class_name(base: &str, platform: Platform) -> String {
    format!("{base} {base}--{platform}")
}

/// Join class fragments, skipping empty ones
pub fn class_names<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .filter_map(|part| {
            let part = part.as_ref().trim();
            (!part.is_empty()).then(|| part.to_string())
        })
        .collect::<Vec<_>>()
        .join(" ")
}
