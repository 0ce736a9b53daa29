pub mod legend;
pub mod popup;
pub mod radar;
pub mod tables;

use ratatui::style::Color;

/// Terminal colour for a trace colour, either `#rrggbb` or a CSS colour name.
///
/// CSS names resolve to their CSS values, not the terminal's ANSI palette.
pub fn trace_color(color: &str) -> Color {
    match color.trim().to_lowercase().as_str() {
        "red" => Color::Rgb(255, 0, 0),
        "blue" => Color::Rgb(0, 0, 255),
        "green" => Color::Rgb(0, 128, 0),
        "purple" => Color::Rgb(128, 0, 128),
        "orange" => Color::Rgb(255, 165, 0),
        "cyan" => Color::Rgb(0, 255, 255),
        hex if hex.starts_with('#') => hex.parse().unwrap_or(Color::Gray),
        _ => Color::Gray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_color_parses_hex() {
        assert_eq!(trace_color("#1f77b4"), Color::Rgb(0x1f, 0x77, 0xb4));
        assert_eq!(trace_color("not a colour"), Color::Gray);
    }

    #[test]
    fn test_trace_color_resolves_css_names() {
        assert_eq!(trace_color("red"), Color::Rgb(255, 0, 0));
        assert_eq!(trace_color("Orange"), Color::Rgb(255, 165, 0));
        assert_eq!(trace_color("purple"), Color::Rgb(128, 0, 128));
        assert_eq!(trace_color("cyan"), Color::Rgb(0, 255, 255));
    }
}
