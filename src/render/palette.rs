//! Color tables for the gauge, the token counter and the temperature.

use colored::{Color, ColoredString, Colorize};

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::TrueColor { r, g, b }
}

/// A color plus whether it blinks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shade {
    pub color: Color,
    pub blink: bool,
}

impl Shade {
    const fn plain(color: Color) -> Self {
        Self { color, blink: false }
    }

    const fn blinking(color: Color) -> Self {
        Self { color, blink: true }
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        let painted = text.color(self.color);
        if self.blink {
            painted.blink()
        } else {
            painted
        }
    }
}

// Five steps from gray to red, walked twice: once for the low glyph
// (remainder 0-4) and once for the high glyph (remainder 5-9).
const GRAY: Color = rgb(108, 108, 108);
const ROSE_GRAY: Color = rgb(138, 108, 108);
const DUSTY_RED: Color = rgb(168, 95, 95);
const BRICK: Color = rgb(200, 75, 75);
const RED: Color = rgb(235, 50, 50);

/// Partial gauge segment colors, indexed by `percent % 10`.
pub const PARTIAL_PLAIN: [Shade; 10] = [
    Shade::plain(GRAY),
    Shade::plain(ROSE_GRAY),
    Shade::plain(DUSTY_RED),
    Shade::plain(BRICK),
    Shade::plain(RED),
    Shade::plain(GRAY),
    Shade::plain(ROSE_GRAY),
    Shade::plain(DUSTY_RED),
    Shade::plain(BRICK),
    Shade::plain(RED),
];

/// Same colors as [`PARTIAL_PLAIN`] with the blink attribute.
pub const PARTIAL_BLINK: [Shade; 10] = [
    Shade::blinking(GRAY),
    Shade::blinking(ROSE_GRAY),
    Shade::blinking(DUSTY_RED),
    Shade::blinking(BRICK),
    Shade::blinking(RED),
    Shade::blinking(GRAY),
    Shade::blinking(ROSE_GRAY),
    Shade::blinking(DUSTY_RED),
    Shade::blinking(BRICK),
    Shade::blinking(RED),
];

/// Token counter colors, one per 10% band of context usage.
pub const TOKEN_GRADIENT: [Color; 10] = [
    rgb(120, 120, 120),
    rgb(135, 125, 120),
    rgb(150, 125, 115),
    rgb(165, 120, 105),
    rgb(180, 115, 95),
    rgb(195, 105, 85),
    rgb(210, 95, 75),
    rgb(222, 80, 65),
    rgb(235, 65, 55),
    rgb(250, 45, 45),
];

pub fn partial_table(blink: bool) -> &'static [Shade; 10] {
    if blink {
        &PARTIAL_BLINK
    } else {
        &PARTIAL_PLAIN
    }
}

/// Pick the token counter color for a usage percentage.
pub fn token_color(percent: u64) -> Color {
    let index = (percent / 10).min(9) as usize;
    TOKEN_GRADIENT[index]
}

/// Pick the temperature color. Bounds are inclusive, coldest first.
pub fn temperature_color(degrees: i64) -> Color {
    match degrees {
        d if d <= -10 => Color::Blue,
        d if d <= 0 => Color::Cyan,
        d if d <= 10 => Color::Cyan,
        d if d <= 20 => Color::Green,
        d if d <= 30 => Color::Yellow,
        _ => Color::Red,
    }
}
