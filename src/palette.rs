//! Colour ramp for the heatmap cells and legend.

use plotters::style::RGBColor;
use std::fmt;

/// Opaque sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb` as used in SVG/CSS attributes.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl From<Rgb> for RGBColor {
    fn from(c: Rgb) -> Self {
        RGBColor(c.0, c.1, c.2)
    }
}

/// Diverging blue → yellow → red ramp (ColorBrewer RdYlBu, reversed), 11 classes.
pub const TEMPERATURE_COLORS: [Rgb; 11] = [
    Rgb(0x31, 0x36, 0x95), // #313695
    Rgb(0x45, 0x75, 0xb4), // #4575b4
    Rgb(0x74, 0xad, 0xd1), // #74add1
    Rgb(0xab, 0xd9, 0xe9), // #abd9e9
    Rgb(0xe0, 0xf3, 0xf8), // #e0f3f8
    Rgb(0xff, 0xff, 0xbf), // #ffffbf
    Rgb(0xfe, 0xe0, 0x90), // #fee090
    Rgb(0xfd, 0xae, 0x61), // #fdae61
    Rgb(0xf4, 0x6d, 0x43), // #f46d43
    Rgb(0xd7, 0x30, 0x27), // #d73027
    Rgb(0xa5, 0x00, 0x26), // #a50026
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(TEMPERATURE_COLORS[0].hex(), "#313695");
        assert_eq!(TEMPERATURE_COLORS[10].to_string(), "#a50026");
    }
}
