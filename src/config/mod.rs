pub mod schema;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use schema::StatuslineConfig;

/// Env var pointing at an alternate config file (also used by tests).
pub const CONFIG_ENV: &str = "GLINT_CONFIG";

const BLINK_MARKER: &str = ".glint-blink";

/// Resolve the config file path.
/// Checks `GLINT_CONFIG` first, then falls back to
/// `~/.config/glint/config.toml` (platform-appropriate).
pub fn config_path() -> Option<PathBuf> {
    std::env::var(CONFIG_ENV)
        .ok()
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|d| d.join("glint").join("config.toml")))
}

/// Path of the dotfile that switches blink mode on.
pub fn blink_marker_path() -> Option<PathBuf> {
    dirs::home_dir().map(|d| d.join(BLINK_MARKER))
}

/// Parse a TOML config file. A missing file yields the defaults.
pub fn load_file(path: &Path) -> Result<StatuslineConfig> {
    if !path.exists() {
        return Ok(StatuslineConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: StatuslineConfig = toml::from_str(&contents)
        .with_context(|| format!("invalid config in {}", path.display()))?;
    Ok(config)
}

/// Build the effective config: file, then blink marker, then environment.
/// CLI flags are layered on top by the caller.
pub fn load() -> Result<StatuslineConfig> {
    let mut config = match config_path() {
        Some(path) => load_file(&path)?,
        None => StatuslineConfig::default(),
    };
    apply_overrides(&mut config);
    Ok(config)
}

/// Like [`load`], but an unreadable file degrades to defaults with a warning.
pub fn load_lenient() -> StatuslineConfig {
    let mut config = match config_path().map(|p| load_file(&p)) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            tracing::warn!("ignoring config: {:#}", e);
            StatuslineConfig::default()
        }
        None => StatuslineConfig::default(),
    };
    apply_overrides(&mut config);
    config
}

fn apply_overrides(config: &mut StatuslineConfig) {
    if let Some(marker) = blink_marker_path() {
        apply_blink_marker(config, &marker);
    }
    apply_env(config, |key| std::env::var(key).ok());
}

/// Enable blink when the marker file exists, unless its content turns it off.
pub fn apply_blink_marker(config: &mut StatuslineConfig, marker: &Path) {
    let Ok(contents) = std::fs::read_to_string(marker) else {
        return;
    };
    if parse_bool(&contents) != Some(false) {
        config.blink = true;
    }
}

/// Apply `GLINT_*` overrides. `lookup` is injected so tests never touch the
/// real process environment.
pub fn apply_env<F>(config: &mut StatuslineConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("GLINT_BLINK").as_deref().and_then(parse_bool) {
        config.blink = v;
    }
    if let Some(v) = lookup("GLINT_SHOW_EXTRA").as_deref().and_then(parse_bool) {
        config.show_extra = v;
    }
    if let Some(url) = lookup("GLINT_WEATHER_URL").filter(|u| !u.trim().is_empty()) {
        config.weather_url = url;
    }
    if let Some(ms) = lookup("GLINT_WEATHER_TIMEOUT_MS").and_then(|v| v.trim().parse().ok()) {
        config.weather_timeout_ms = ms;
    }
}

/// Loose boolean parsing for env vars and the marker file.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
