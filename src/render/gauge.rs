use std::fmt::Write as FmtWrite;

use colored::Colorize;

use super::palette;
use super::Glyphs;

/// Number of segments in a gauge that is not overflowing.
pub const SEGMENTS: u64 = 10;

/// Most filled glyphs ever drawn. The percentage text stays exact.
pub const MAX_DRAWN: u64 = 100;

/// Context usage as a whole percentage, rounded half away from zero.
/// Not clamped: usage past the window reports more than 100.
pub fn usage_percent(tokens: u64, window: u64) -> u64 {
    if window == 0 {
        return 0;
    }
    (tokens as f64 * 100.0 / window as f64).round() as u64
}

/// How a percentage splits into gauge segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugeLayout {
    pub filled: u64,
    /// Index into the partial shade tables, absent once the gauge is full.
    pub partial: Option<usize>,
    pub empty: u64,
}

impl GaugeLayout {
    pub fn for_percent(percent: u64) -> Self {
        let filled = percent / 10;
        if filled >= SEGMENTS {
            return Self {
                filled,
                partial: None,
                empty: 0,
            };
        }
        Self {
            filled,
            partial: Some((percent % 10) as usize),
            empty: SEGMENTS - filled - 1,
        }
    }
}

/// Render the gauge body (without brackets).
pub fn render_gauge(percent: u64, glyphs: &Glyphs, blink: bool) -> String {
    let layout = GaugeLayout::for_percent(percent);
    let mut out = String::with_capacity(64);

    if layout.filled > 0 {
        let body = glyphs
            .gauge_full
            .repeat(layout.filled.min(MAX_DRAWN) as usize);
        let _ = write!(out, "{}", body.dimmed());
    }

    if let Some(index) = layout.partial {
        let glyph = if index < 5 {
            glyphs.gauge_low
        } else {
            glyphs.gauge_high
        };
        let shade = palette::partial_table(blink)[index];
        let _ = write!(out, "{}", shade.paint(glyph));
    }

    if layout.empty > 0 {
        let rest = glyphs.gauge_empty.repeat(layout.empty as usize);
        let _ = write!(out, "{}", rest.dimmed());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_percent_rounds() {
        assert_eq!(usage_percent(0, 200_000), 0);
        assert_eq!(usage_percent(1000, 200_000), 1); // 0.5 rounds up
        assert_eq!(usage_percent(900, 200_000), 0); // 0.45
        assert_eq!(usage_percent(110_000, 200_000), 55);
        assert_eq!(usage_percent(200_000, 200_000), 100);
    }

    #[test]
    fn test_usage_percent_not_clamped() {
        assert_eq!(usage_percent(300_000, 200_000), 150);
    }

    #[test]
    fn test_usage_percent_zero_window() {
        assert_eq!(usage_percent(5, 0), 0);
    }

    #[test]
    fn test_layout_zero() {
        let layout = GaugeLayout::for_percent(0);
        assert_eq!(layout.filled, 0);
        assert_eq!(layout.partial, Some(0));
        assert_eq!(layout.empty, 9);
    }

    #[test]
    fn test_layout_fifty_five() {
        let layout = GaugeLayout::for_percent(55);
        assert_eq!(layout.filled, 5);
        assert_eq!(layout.partial, Some(5));
        assert_eq!(layout.empty, 4);
    }

    #[test]
    fn test_layout_full() {
        let layout = GaugeLayout::for_percent(100);
        assert_eq!(layout.filled, 10);
        assert_eq!(layout.partial, None);
        assert_eq!(layout.empty, 0);
    }

    #[test]
    fn test_layout_overflow_keeps_growing() {
        let layout = GaugeLayout::for_percent(137);
        assert_eq!(layout.filled, 13);
        assert_eq!(layout.partial, None);
        assert_eq!(layout.empty, 0);
    }

    #[test]
    fn test_render_gauge_glyphs() {
        colored::control::set_override(false);
        let g = Glyphs::unicode();
        assert_eq!(render_gauge(0, &g, false), "░_________");
        assert_eq!(render_gauge(55, &g, false), "█████▒____");
        assert_eq!(render_gauge(94, &g, false), "█████████░");
        assert_eq!(render_gauge(100, &g, false), "██████████");
    }

    #[test]
    fn test_render_gauge_ascii() {
        colored::control::set_override(false);
        let g = Glyphs::ascii();
        assert_eq!(render_gauge(27, &g, true), "##:_______");
        assert_eq!(render_gauge(31, &g, false), "###.______");
        assert_eq!(render_gauge(150, &g, false).len(), 15);
    }

    #[test]
    fn test_render_gauge_caps_runaway_overflow() {
        colored::control::set_override(false);
        let g = Glyphs::ascii();
        assert_eq!(render_gauge(1000, &g, false).len(), 100);
        assert_eq!(render_gauge(u64::MAX, &g, false).len(), MAX_DRAWN as usize);
        assert_eq!(GaugeLayout::for_percent(u64::MAX).filled, u64::MAX / 10);
    }
}
