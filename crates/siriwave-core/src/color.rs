//! Colors as plain RGB triples plus an alpha channel for drawing.
//!
//! Parsing accepts the hex forms used by the `color` option (`#fff`,
//! `#336699`, with or without `#`) and the comma separated triples used by
//! organic wave definitions (`"15, 82, 169"`).

use crate::error::ColorError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` / `#rrggbb`, case-insensitive, leading `#` optional.
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::Invalid(input.to_string());
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return Err(invalid()),
        };
        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Parse `"r, g, b"` with decimal channels.
    pub fn from_triple(input: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::Invalid(input.to_string());
        let mut parts = input.split(',').map(|p| p.trim().parse::<u8>());
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) => Ok(Self::new(r, g, b)),
            _ => Err(invalid()),
        }
    }

    #[inline]
    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba { rgb: self, alpha }
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(',') {
            Self::from_triple(s)
        } else {
            Self::from_hex(s)
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// Color handed to a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        rgb: Rgb::new(0, 0, 0),
        alpha: 0.0,
    };

    /// CSS `rgba(...)` form, as understood by the canvas fill/stroke styles.
    pub fn to_css(&self) -> String {
        format!("rgba({},{})", self.rgb, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_shorthand_expands() {
        assert_eq!(Rgb::from_hex("#fff"), Ok(Rgb::WHITE));
        assert_eq!(Rgb::from_hex("F00"), Ok(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn hex_long_form() {
        assert_eq!(Rgb::from_hex("#336699"), Ok(Rgb::new(0x33, 0x66, 0x99)));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        for bad in ["", "#ff", "#ggg", "#12345", "#1234567", "white"] {
            assert!(Rgb::from_hex(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn triples_parse_with_spaces() {
        assert_eq!("15, 82, 169".parse::<Rgb>(), Ok(Rgb::new(15, 82, 169)));
        assert!("1,2".parse::<Rgb>().is_err());
        assert!("1,2,3,4".parse::<Rgb>().is_err());
        assert!("1,2,300".parse::<Rgb>().is_err());
    }

    #[test]
    fn css_output() {
        assert_eq!(Rgb::new(1, 2, 3).with_alpha(0.4).to_css(), "rgba(1,2,3,0.4)");
        assert_eq!(Rgba::TRANSPARENT.to_css(), "rgba(0,0,0,0)");
    }
}
