use crate::toast::Variant;
use ratatui::style::Color;

/// Convert a CSS colour string to a terminal colour.
///
/// `#rrggbb` and the basic colour names go through ratatui's own parser. On
/// top of that this understands `#rgb`, `rgb(r, g, b)`, `transparent` and the
/// Tailwind accent names used by the variants. Returns `None` for anything
/// else.
#[must_use]
pub fn parse_css_color(value: &str) -> Option<Color> {
    let value = value.trim().to_lowercase();

    if let Some(hex) = value.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        if hex.len() == 3 {
            let mut channels = hex.chars().map(|c| u8::from_str_radix(&format!("{c}{c}"), 16).ok());
            return Some(Color::Rgb(channels.next()??, channels.next()??, channels.next()??));
        }
    }

    if let Some(args) = value.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
        let channels: Vec<u8> = args
            .split(',')
            .map(|c| c.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .ok()?;
        return match channels.as_slice() {
            [r, g, b] => Some(Color::Rgb(*r, *g, *b)),
            _ => None,
        };
    }

    match value.as_str() {
        "emerald" => Some(Color::Rgb(16, 185, 129)),
        "amber" => Some(Color::Rgb(245, 158, 11)),
        "transparent" => Some(Color::Reset),
        // Bare numbers are palette indexes to ratatui, not CSS colours
        _ if value.chars().all(|c| c.is_ascii_digit()) => None,
        _ => value.parse::<Color>().ok(),
    }
}

/// Accent colour used for the border and icon of each variant
#[must_use]
pub fn variant_accent(variant: Variant) -> Color {
    match variant {
        Variant::Default => Color::Gray,
        Variant::Success => Color::Rgb(16, 185, 129), // emerald-500
        Variant::Error => Color::Rgb(239, 68, 68),    // red-500
        Variant::Warning => Color::Rgb(245, 158, 11), // amber-500
        Variant::Info => Color::Rgb(59, 130, 246),    // blue-500
    }
}
