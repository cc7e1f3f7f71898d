use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;

use crate::error::{GlintError, GlintResult};

use super::WeatherProvider;

/// Placeholder for every weather field when the fetch fails.
pub const UNAVAILABLE: &str = "N/A";

/// wttr.in one-line format: location, icon, temperature, condition.
const WTTR_FORMAT: &str = "%l|%c|%t|%C";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherInfo {
    pub location: String,
    pub icon: String,
    /// As reported, e.g. "+12°C" or "-3°F".
    pub temperature: String,
    pub condition: String,
}

impl WeatherInfo {
    pub fn unavailable() -> Self {
        Self {
            location: UNAVAILABLE.to_string(),
            icon: UNAVAILABLE.to_string(),
            temperature: UNAVAILABLE.to_string(),
            condition: UNAVAILABLE.to_string(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        *self == Self::unavailable()
    }

    /// Parse a `location|icon|temperature|condition` record.
    pub fn parse(body: &str) -> GlintResult<Self> {
        let fields: Vec<&str> = body.trim().splitn(4, '|').map(str::trim).collect();
        match fields.as_slice() {
            [location, icon, temperature, condition] => Ok(Self {
                location: location.to_string(),
                icon: icon.to_string(),
                temperature: temperature.to_string(),
                condition: condition.to_string(),
            }),
            _ => Err(GlintError::Weather(format!(
                "expected 4 fields, got {}",
                fields.len()
            ))),
        }
    }

    /// Leading signed integer of the temperature ("+12°C" -> 12).
    pub fn temperature_degrees(&self) -> Option<i64> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid regex"));
        re.captures(&self.temperature)?.get(1)?.as_str().parse().ok()
    }
}

/// Blocking client for the wttr.in weather-by-IP service.
pub struct WttrClient {
    client: reqwest::blocking::Client,
    url: String,
}

impl WttrClient {
    pub fn new(url: &str, timeout: Duration) -> GlintResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(concat!("glint/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

impl WeatherProvider for WttrClient {
    fn fetch(&self) -> GlintResult<WeatherInfo> {
        let body = self
            .client
            .get(&self.url)
            .query(&[("format", WTTR_FORMAT)])
            .send()?
            .error_for_status()?
            .text()?;
        WeatherInfo::parse(&body)
    }
}

/// Stand-in used when no weather client could be built or none is wanted.
pub struct Offline;

impl WeatherProvider for Offline {
    fn fetch(&self) -> GlintResult<WeatherInfo> {
        Err(GlintError::Weather("offline".to_string()))
    }
}
