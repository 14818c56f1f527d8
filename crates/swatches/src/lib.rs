// Copyright 2026 The Matrix.org Foundation C.I.C.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Color palette utilities for editor inline tools.
//!
//! Provides the fixed palette offered by the text color tool, plus parsing
//! and CSS formatting helpers for `#RRGGBB` color values.

use once_cell::sync::Lazy;
use regex::Regex;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, IntoStaticStr};

/// The named colors offered by the text color picker.
///
/// Variant order is the display order of the picker swatches; the first
/// entry is the default color.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr, IntoStaticStr,
    EnumIter,
)]
pub enum PaletteColor {
    Black,
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
    Gray,
}

impl PaletteColor {
    /// The `#RRGGBB` value written into inline styles.
    pub fn hex(self) -> &'static str {
        match self {
            PaletteColor::Black => "#000000",
            PaletteColor::Red => "#FF0000",
            PaletteColor::Green => "#008000",
            PaletteColor::Blue => "#0000FF",
            PaletteColor::Yellow => "#FFFF00",
            PaletteColor::Purple => "#800080",
            PaletteColor::Orange => "#FFA500",
            PaletteColor::Gray => "#808080",
        }
    }

    /// Human-readable swatch label (used for tooltips).
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Decompose into RGB channels.
    pub fn rgb(self) -> Rgb {
        match self {
            PaletteColor::Black => Rgb::new(0x00, 0x00, 0x00),
            PaletteColor::Red => Rgb::new(0xFF, 0x00, 0x00),
            PaletteColor::Green => Rgb::new(0x00, 0x80, 0x00),
            PaletteColor::Blue => Rgb::new(0x00, 0x00, 0xFF),
            PaletteColor::Yellow => Rgb::new(0xFF, 0xFF, 0x00),
            PaletteColor::Purple => Rgb::new(0x80, 0x00, 0x80),
            PaletteColor::Orange => Rgb::new(0xFF, 0xA5, 0x00),
            PaletteColor::Gray => Rgb::new(0x80, 0x80, 0x80),
        }
    }
}

/// An ordered set of palette colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<PaletteColor>,
}

impl Palette {
    pub fn new(colors: Vec<PaletteColor>) -> Self {
        Self { colors }
    }

    /// The default color, the first palette entry.
    pub fn default_color(&self) -> Option<PaletteColor> {
        self.colors.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = PaletteColor> + '_ {
        self.colors.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn contains(&self, color: PaletteColor) -> bool {
        self.colors.contains(&color)
    }
}

impl Default for Palette {
    /// All eight named colors, in declaration order.
    fn default() -> Self {
        Self {
            colors: PaletteColor::iter().collect(),
        }
    }
}

/// An RGB triple with CSS formatting helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a CSS `rgb()` string.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Format as a CSS `rgba()` string with a custom alpha value.
    ///
    /// Useful for semi-transparent derivatives of a palette color, e.g.
    /// selection highlights.
    pub fn css_with_alpha(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    /// Format as an uppercase `#RRGGBB` string.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color regex is valid")
});

/// Whether `value` is a well-formed `#RRGGBB` color.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Parse a `#RRGGBB` string into its channels.
pub fn parse_hex(value: &str) -> Option<Rgb> {
    if !is_hex_color(value) {
        return None;
    }
    let r = u8::from_str_radix(&value[1..3], 16).ok()?;
    let g = u8::from_str_radix(&value[3..5], 16).ok()?;
    let b = u8::from_str_radix(&value[5..7], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_has_eight_colors() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 8);
    }

    #[test]
    fn default_color_is_black() {
        let palette = Palette::default();
        assert_eq!(palette.default_color(), Some(PaletteColor::Black));
        assert_eq!(palette.default_color().map(PaletteColor::hex), Some("#000000"));
    }

    #[test]
    fn palette_order_matches_declaration_order() {
        let palette = Palette::default();
        let hexes: Vec<&str> = palette.iter().map(PaletteColor::hex).collect();
        assert_eq!(
            hexes,
            vec![
                "#000000", "#FF0000", "#008000", "#0000FF", "#FFFF00",
                "#800080", "#FFA500", "#808080",
            ]
        );
    }

    #[test]
    fn names_are_human_readable() {
        assert_eq!(PaletteColor::Red.name(), "Red");
        assert_eq!(PaletteColor::Gray.name(), "Gray");
        assert_eq!(PaletteColor::Orange.to_string(), "Orange");
    }

    #[test]
    fn hex_round_trips_through_rgb() {
        for color in PaletteColor::iter() {
            assert_eq!(color.rgb().hex(), color.hex());
        }
    }

    #[test]
    fn parse_hex_accepts_valid_colors() {
        assert_eq!(parse_hex("#FF0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(parse_hex("#008000"), Some(Rgb::new(0, 128, 0)));
        assert_eq!(parse_hex("#abcdef"), Some(Rgb::new(0xAB, 0xCD, 0xEF)));
    }

    #[test]
    fn parse_hex_rejects_malformed_input() {
        assert_eq!(parse_hex("FF0000"), None);
        assert_eq!(parse_hex("#FF00"), None);
        assert_eq!(parse_hex("#GG0000"), None);
        assert_eq!(parse_hex("#FF000000"), None);
        assert_eq!(parse_hex(""), None);
    }

    #[test]
    fn css_formatting() {
        // Fully opaque red
        assert_eq!(Rgb::new(255, 0, 0).css(), "rgb(255, 0, 0)");
        // Red with 25% alpha override
        assert_eq!(
            Rgb::new(255, 0, 0).css_with_alpha(0.25),
            "rgba(255, 0, 0, 0.25)"
        );
    }
}
