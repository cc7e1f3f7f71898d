//! Composes the statusline from a session payload and its collaborators.

pub mod gauge;
pub mod palette;
pub mod tokens;

use std::fmt::Write as FmtWrite;
use std::path::Path;

use colored::Colorize;

use crate::config::StatuslineConfig;
use crate::session::SessionInput;
use crate::sources::clock::format_time;
use crate::sources::{Clock, VcsProvider, VcsStatus, WeatherInfo, WeatherProvider};

/// Characters used to draw the gauge.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub gauge_full: &'static str,
    pub gauge_low: &'static str,
    pub gauge_high: &'static str,
    pub gauge_empty: &'static str,
}

impl Glyphs {
    pub fn unicode() -> Self {
        Self {
            gauge_full: "\u{2588}", // full block
            gauge_low: "\u{2591}",  // light shade
            gauge_high: "\u{2592}", // medium shade
            gauge_empty: "_",
        }
    }

    pub fn ascii() -> Self {
        Self {
            gauge_full: "#",
            gauge_low: ".",
            gauge_high: ":",
            gauge_empty: "_",
        }
    }
}

/// Rendering switches, resolved once from config and CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub blink: bool,
    pub show_extra: bool,
    pub use_unicode: bool,
}

impl RenderOptions {
    pub fn from_config(config: &StatuslineConfig, use_unicode: bool) -> Self {
        Self {
            blink: config.blink,
            show_extra: config.show_extra,
            use_unicode,
        }
    }

    fn glyphs(&self) -> Glyphs {
        if self.use_unicode {
            Glyphs::unicode()
        } else {
            Glyphs::ascii()
        }
    }
}

pub struct Renderer<'a> {
    options: RenderOptions,
    vcs: &'a dyn VcsProvider,
    weather: &'a dyn WeatherProvider,
    clock: &'a dyn Clock,
}

impl<'a> Renderer<'a> {
    pub fn new(
        options: RenderOptions,
        vcs: &'a dyn VcsProvider,
        weather: &'a dyn WeatherProvider,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            options,
            vcs,
            weather,
            clock,
        }
    }

    /// Produce the 1-4 output lines.
    ///
    /// 1. session and working-tree line counts, usage gauge, tokens, time
    /// 2. branch and last commit, when off trunk or in extra mode
    /// 3. weather (extra mode only)
    /// 4. workspace directory (extra mode only)
    pub fn render(&self, session: &SessionInput) -> Vec<String> {
        let vcs = self.vcs.status(Path::new(&session.current_dir));
        let mut lines = Vec::with_capacity(4);

        lines.push(self.usage_line(session, &vcs));

        if self.options.show_extra || !vcs.is_trunk() {
            lines.push(render_branch_line(&vcs));
        }

        if self.options.show_extra {
            let weather = self.weather.fetch().unwrap_or_else(|e| {
                tracing::debug!("weather unavailable: {}", e);
                WeatherInfo::unavailable()
            });
            lines.push(render_weather(&weather, self.options.use_unicode));
            lines.push(session.current_dir.clone());
        }

        lines
    }

    fn usage_line(&self, session: &SessionInput, vcs: &VcsStatus) -> String {
        let tokens = session.total_tokens();
        let percent = gauge::usage_percent(tokens, session.context_window_size);
        let sep = "|".dimmed();

        let mut out = String::with_capacity(160);
        let _ = write!(
            out,
            "{} {} {} {}% [{}] ({}) {} {}",
            render_diff(session.lines_added, session.lines_removed),
            render_diff(vcs.added, vcs.removed),
            sep,
            percent,
            gauge::render_gauge(percent, &self.options.glyphs(), self.options.blink),
            tokens::render_tokens(tokens, percent),
            sep,
            format_time(&self.clock.now()).cyan(),
        );
        out
    }
}

/// "+added/-removed" with the two counts in green and red.
fn render_diff(added: u64, removed: u64) -> String {
    format!(
        "{}/{}",
        format!("+{}", added).green(),
        format!("-{}", removed).red()
    )
}

fn render_branch_line(vcs: &VcsStatus) -> String {
    format!(
        "{} {} {}",
        vcs.branch.magenta(),
        "|".dimmed(),
        vcs.last_commit
    )
}

/// Weather summary. A failed fetch renders as a bare "N/A".
fn render_weather(weather: &WeatherInfo, use_unicode: bool) -> String {
    if weather.is_unavailable() {
        return crate::sources::weather::UNAVAILABLE.to_string();
    }

    let temperature = match weather.temperature_degrees() {
        Some(degrees) => weather
            .temperature
            .color(palette::temperature_color(degrees))
            .to_string(),
        None => weather.temperature.clone(),
    };

    if use_unicode && !weather.icon.is_empty() {
        format!(
            "{} {} {} {}",
            weather.icon, weather.location, temperature, weather.condition
        )
    } else {
        format!("{} {} {}", weather.location, temperature, weather.condition)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
