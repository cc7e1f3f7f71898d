use colored::Colorize;

use super::palette;

/// Format a token count (e.g. 12345 -> "12K", 1500 -> "1.5K", 500 -> "500").
pub fn format_tokens(tokens: u64) -> String {
    if tokens >= 10_000 {
        return format!("{}K", tokens / 1000);
    }
    if tokens >= 1000 {
        return format!("{:.1}K", tokens as f64 / 1000.0);
    }
    tokens.to_string()
}

/// Token count colored by how full the context window is.
pub fn render_tokens(tokens: u64, percent: u64) -> String {
    format_tokens(tokens)
        .color(palette::token_color(percent))
        .to_string()
}
