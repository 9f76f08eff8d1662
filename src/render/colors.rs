// Colour names and palettes.
//
// Accepts the common CSS/matplotlib names used in styling options plus
// `#rgb` / `#rrggbb` hex codes.

use plotters::style::RGBColor;

use crate::error::ConfigError;

const NAMED: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("lightgray", (211, 211, 211)),
    ("lightgrey", (211, 211, 211)),
    ("darkgray", (169, 169, 169)),
    ("darkgrey", (169, 169, 169)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("lightblue", (173, 216, 230)),
    ("skyblue", (135, 206, 235)),
    ("navy", (0, 0, 128)),
    ("teal", (0, 128, 128)),
    ("orange", (255, 165, 0)),
    ("gold", (255, 215, 0)),
    ("yellow", (255, 255, 0)),
    ("purple", (128, 0, 128)),
    ("pink", (255, 192, 203)),
    ("brown", (165, 42, 42)),
    ("ivory", (255, 255, 240)),
];

/// Word colours, darkest first (a viridis sample).
pub const WORD_PALETTE: &[RGBColor] = &[
    RGBColor(68, 1, 84),
    RGBColor(59, 82, 139),
    RGBColor(33, 145, 140),
    RGBColor(94, 201, 98),
    RGBColor(253, 231, 37),
];

/// Resolve a colour name or hex code.
pub fn parse_color(raw: &str) -> Result<RGBColor, ConfigError> {
    let name = raw.trim().to_lowercase();

    if let Some(hex) = name.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ConfigError::UnknownColor(raw.to_string()));
    }

    NAMED
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, (r, g, b))| RGBColor(r, g, b))
        .ok_or_else(|| ConfigError::UnknownColor(raw.to_string()))
}

fn parse_hex(hex: &str) -> Option<RGBColor> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(RGBColor(channel(0)?, channel(2)?, channel(4)?))
        }
        3 => {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some(RGBColor(channel(0)?, channel(1)?, channel(2)?))
        }
        _ => None,
    }
}
