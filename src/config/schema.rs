use serde::{Deserialize, Serialize};

pub const DEFAULT_WEATHER_URL: &str = "https://wttr.in/";
pub const DEFAULT_WEATHER_TIMEOUT_MS: u64 = 1500;

/// User-configurable statusline settings.
/// Every field has a default, so a partial or missing file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatuslineConfig {
    /// Render the partial gauge segment with the blink attribute.
    pub blink: bool,

    /// Always show the branch line, plus the weather and directory lines.
    pub show_extra: bool,

    /// Base URL of the weather-by-IP service.
    /// Default: "https://wttr.in/"
    pub weather_url: String,

    /// Give up on the weather request after this many milliseconds.
    /// Default: 1500
    pub weather_timeout_ms: u64,
}

impl Default for StatuslineConfig {
    fn default() -> Self {
        Self {
            blink: false,
            show_extra: false,
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            weather_timeout_ms: DEFAULT_WEATHER_TIMEOUT_MS,
        }
    }
}
