//! RGBA colors and the named palette used by the object model

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// RGBA color, components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Factor used by `brighter` and `darker`
const SHADE_FACTOR: f32 = 0.7;

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const DARK_GRAY: Color = Color::rgb(0.250_980_4, 0.250_980_4, 0.250_980_4);
    pub const GRAY: Color = Color::rgb(0.501_960_8, 0.501_960_8, 0.501_960_8);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const LIGHT_GRAY: Color = Color::rgb(0.752_941_2, 0.752_941_2, 0.752_941_2);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const ORANGE: Color = Color::rgb(1.0, 0.784_313_7, 0.0);
    pub const PINK: Color = Color::rgb(1.0, 0.686_274_5, 0.686_274_5);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Named colors accepted by [`Color::parse`]
    pub const NAMED: &'static [(&'static str, Color)] = &[
        ("black", Color::BLACK),
        ("blue", Color::BLUE),
        ("cyan", Color::CYAN),
        ("dark_gray", Color::DARK_GRAY),
        ("gray", Color::GRAY),
        ("green", Color::GREEN),
        ("light_gray", Color::LIGHT_GRAY),
        ("magenta", Color::MAGENTA),
        ("orange", Color::ORANGE),
        ("pink", Color::PINK),
        ("red", Color::RED),
        ("white", Color::WHITE),
        ("yellow", Color::YELLOW),
        ("transparent", Color::TRANSPARENT),
    ];

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_rgb8(r, g, b).with_alpha(a as f32 / 255.0)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as u8;
        let g = ((hex >> 8) & 0xFF) as u8;
        let b = (hex & 0xFF) as u8;
        Self::from_rgb8(r, g, b)
    }

    /// Parse `#rrggbb`, `#rrggbbaa` or a color name such as `"light_gray"`.
    ///
    /// Names are case-insensitive and accept spaces or dashes in place of
    /// underscores.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            let value =
                u32::from_str_radix(hex, 16).map_err(|_| Error::InvalidColor(s.to_string()))?;
            return match hex.len() {
                6 => Ok(Self::from_hex(value)),
                8 => Ok(Self::from_hex(value >> 8).with_alpha((value & 0xFF) as f32 / 255.0)),
                _ => Err(Error::InvalidColor(s.to_string())),
            };
        }

        let key = trimmed.to_ascii_lowercase().replace([' ', '-'], "_");
        let key = match key.as_str() {
            "grey" => "gray",
            "dark_grey" | "darkgray" => "dark_gray",
            "light_grey" | "lightgray" => "light_gray",
            other => other,
        };
        Self::NAMED
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, color)| *color)
            .ok_or_else(|| Error::InvalidColor(s.to_string()))
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// A darker shade: each channel scaled by 0.7, alpha kept
    pub fn darker(&self) -> Color {
        Color::rgba(
            self.r * SHADE_FACTOR,
            self.g * SHADE_FACTOR,
            self.b * SHADE_FACTOR,
            self.a,
        )
    }

    /// A brighter shade. Black turns into a dark gray rather than staying
    /// black, and channels that are nearly off get lifted first so that
    /// hue is kept.
    pub fn brighter(&self) -> Color {
        let floor = (1.0 / (1.0 - SHADE_FACTOR)).floor() / 255.0;
        let [r, g, b] = [self.r, self.g, self.b];
        if r == 0.0 && g == 0.0 && b == 0.0 {
            return Color::rgba(floor, floor, floor, self.a);
        }
        let lift = |v: f32| {
            let v = if v > 0.0 && v < floor { floor } else { v };
            (v / SHADE_FACTOR).min(1.0)
        };
        Color::rgba(lift(r), lift(g), lift(b), self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_hex() {
        assert_eq!(Color::parse("Red").unwrap(), Color::RED);
        assert_eq!(Color::parse("light gray").unwrap(), Color::LIGHT_GRAY);
        assert_eq!(Color::parse("dark-grey").unwrap(), Color::DARK_GRAY);
        assert_eq!(Color::parse("#00ff00").unwrap(), Color::GREEN);

        let translucent = Color::parse("#ff000080").unwrap();
        assert_eq!(translucent.to_rgba8(), [255, 0, 0, 128]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Color::parse("chartreuse-ish").is_err());
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#zzzzzz").is_err());
    }

    #[test]
    fn test_palette_matches_rgb8() {
        assert_eq!(Color::ORANGE.to_rgba8(), [255, 200, 0, 255]);
        assert_eq!(Color::PINK.to_rgba8(), [255, 175, 175, 255]);
        assert_eq!(Color::DARK_GRAY.to_rgba8(), [64, 64, 64, 255]);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let c = Color::from_rgb8(18, 52, 86);
        assert_eq!(c.to_string(), "#123456");
        assert_eq!(Color::parse(&c.to_string()).unwrap().to_rgba8(), c.to_rgba8());
    }

    #[test]
    fn test_darker_and_brighter() {
        let gray = Color::GRAY;
        assert!(gray.darker().r < gray.r);
        assert!(gray.brighter().r > gray.r);
        assert!(Color::BLACK.brighter().r > 0.0);
        assert_eq!(Color::WHITE.brighter(), Color::WHITE);
    }
}
