//! RGBA colors and the named palette scripts can refer to.

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

/// An 8-bit-per-channel RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

/// Named colors, matched case-insensitively by [`Color::parse`].
const PALETTE: &[(&str, Color)] = &[
    ("white", Color::WHITE),
    ("black", Color::BLACK),
    ("blank", Color::BLANK),
    ("raywhite", Color::RAYWHITE),
    ("lightgray", Color::LIGHTGRAY),
    ("gray", Color::GRAY),
    ("darkgray", Color::DARKGRAY),
    ("red", Color::RED),
    ("maroon", Color::MAROON),
    ("orange", Color::ORANGE),
    ("gold", Color::GOLD),
    ("yellow", Color::YELLOW),
    ("green", Color::GREEN),
    ("lime", Color::LIME),
    ("darkgreen", Color::DARKGREEN),
    ("skyblue", Color::SKYBLUE),
    ("blue", Color::BLUE),
    ("darkblue", Color::DARKBLUE),
    ("purple", Color::PURPLE),
    ("violet", Color::VIOLET),
    ("magenta", Color::MAGENTA),
    ("pink", Color::PINK),
    ("beige", Color::BEIGE),
    ("brown", Color::BROWN),
];

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Fully transparent.
    pub const BLANK: Self = Self::rgba(0, 0, 0, 0);
    /// Off-white background.
    pub const RAYWHITE: Self = Self::rgb(245, 245, 245);
    /// Light gray.
    pub const LIGHTGRAY: Self = Self::rgb(200, 200, 200);
    /// Gray.
    pub const GRAY: Self = Self::rgb(130, 130, 130);
    /// Dark gray.
    pub const DARKGRAY: Self = Self::rgb(80, 80, 80);
    /// Red.
    pub const RED: Self = Self::rgb(230, 41, 55);
    /// Maroon.
    pub const MAROON: Self = Self::rgb(190, 33, 55);
    /// Orange.
    pub const ORANGE: Self = Self::rgb(255, 161, 0);
    /// Gold.
    pub const GOLD: Self = Self::rgb(255, 203, 0);
    /// Yellow.
    pub const YELLOW: Self = Self::rgb(253, 249, 0);
    /// Green.
    pub const GREEN: Self = Self::rgb(0, 228, 48);
    /// Lime.
    pub const LIME: Self = Self::rgb(0, 158, 47);
    /// Dark green.
    pub const DARKGREEN: Self = Self::rgb(0, 117, 44);
    /// Sky blue.
    pub const SKYBLUE: Self = Self::rgb(102, 191, 255);
    /// Blue.
    pub const BLUE: Self = Self::rgb(0, 121, 241);
    /// Dark blue.
    pub const DARKBLUE: Self = Self::rgb(0, 82, 172);
    /// Purple.
    pub const PURPLE: Self = Self::rgb(200, 122, 255);
    /// Violet.
    pub const VIOLET: Self = Self::rgb(135, 60, 190);
    /// Magenta.
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    /// Pink.
    pub const PINK: Self = Self::rgb(255, 109, 194);
    /// Beige.
    pub const BEIGE: Self = Self::rgb(211, 176, 131);
    /// Brown.
    pub const BROWN: Self = Self::rgb(127, 106, 79);

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// A color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB`, `#RRGGBBAA` or a palette name.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::from_hex(hex);
        }
        PALETTE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, c)| *c)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown color {s:?}")))
    }

    /// Parse 6 or 8 hex digits.
    fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || Error::InvalidArgument(format!("invalid hex color #{hex}"));
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, a))
    }

    /// Return this color with alpha reduced by a transparency percentage.
    ///
    /// `0` leaves the color untouched and `100` makes it invisible.
    pub fn faded(self, transparency: i32) -> Self {
        let keep = 100 - transparency.clamp(0, 100);
        let a = (u32::from(self.a) * keep as u32 + 50) / 100;
        Self {
            a: a as u8,
            ..self
        }
    }

    /// Return true if the color has no visible coverage.
    pub fn is_invisible(&self) -> bool {
        self.a == 0
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_and_names() -> Result<()> {
        assert_eq!(Color::parse("#ff8000")?, Color::rgb(255, 128, 0));
        assert_eq!(Color::parse("#ff800080")?, Color::rgba(255, 128, 0, 128));
        assert_eq!(Color::parse("WHITE")?, Color::WHITE);
        assert_eq!("skyBlue".parse::<Color>()?, Color::SKYBLUE);
        assert!(matches!(
            Color::parse("#12345"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(Color::parse("#gg0000").is_err());
        assert!(Color::parse("chartreuse").is_err());
        Ok(())
    }

    #[test]
    fn display_round_trips() -> Result<()> {
        let c = Color::rgba(1, 2, 3, 4);
        assert_eq!(c.to_string(), "#01020304");
        assert_eq!(Color::parse(&c.to_string())?, c);
        Ok(())
    }

    #[test]
    fn fading() {
        assert_eq!(Color::WHITE.faded(0), Color::WHITE);
        assert!(Color::WHITE.faded(100).is_invisible());
        assert_eq!(Color::WHITE.faded(50).a, 128);
        assert_eq!(Color::WHITE.faded(-20), Color::WHITE);
        assert!(Color::WHITE.faded(400).is_invisible());
    }
}
