use indexmap::IndexMap;
use ratatui::style::Color;

/// Colours used by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    /// Headers, prompt and priority tasks
    pub highlight: Color,
    /// Done tasks and the side panel
    pub dim: Color,
    /// Error feedback
    pub red: Color,
    pub green: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            green: Color::Rgb(0x44, 0xFF, 0x88),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Default theme with `[ui] colors` overrides applied. Unknown names
    /// and malformed values are ignored.
    pub fn from_colors(colors: &IndexMap<String, String>) -> Self {
        let mut theme = Theme::default();
        for (key, value) in colors {
            let Some(color) = parse_hex_color(value) else {
                log::warn!("ignoring colour {} = {:?}: expected #RRGGBB", key, value);
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "green" => theme.green = color,
                other => log::warn!("ignoring unknown colour {}", other),
            }
        }
        theme
    }
}
