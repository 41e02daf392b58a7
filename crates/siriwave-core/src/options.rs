//! Construction options and their resolution against the host.
//!
//! Every field is optional when deserialized; missing ones take the
//! documented defaults. Sizes and the pixel ratio fall back to what the host
//! reports through [`HostMetrics`]. Numeric options are not validated: a
//! non-positive `pixel_depth` simply yields no samples.

use crate::constants::*;
use crate::error::StyleError;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Five stroked sine bands sharing one frequency.
    #[default]
    #[serde(alias = "ios")]
    Banded,
    /// Filled, randomly breathing blobs over a gradient support line.
    #[serde(alias = "ios9")]
    Organic,
}

impl FromStr for Style {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "banded" | "ios" => Ok(Style::Banded),
            "organic" | "ios9" => Ok(Style::Organic),
            other => Err(StyleError::Unknown(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaveOptions {
    pub style: Style,
    /// Device pixel ratio; `None` uses the host's.
    pub ratio: Option<f64>,
    pub speed: f64,
    pub amplitude: f64,
    /// Banded style only.
    pub frequency: f64,
    /// Hex color, banded style only.
    pub color: String,
    /// Stretch the canvas to fill its container instead of a fixed CSS size.
    pub cover: bool,
    /// CSS pixels; `None` uses the container's computed size.
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub autostart: bool,
    /// Sampling step along the curve's domain.
    pub pixel_depth: f64,
    /// Fraction of the remaining distance covered per frame.
    pub lerp_speed: f64,
    /// Organic style only: positional overrides for the colored layers.
    pub wave_colors: Vec<String>,
}

impl Default for WaveOptions {
    fn default() -> Self {
        Self {
            style: Style::Banded,
            ratio: None,
            speed: DEFAULT_SPEED,
            amplitude: DEFAULT_AMPLITUDE,
            frequency: DEFAULT_FREQUENCY,
            color: DEFAULT_COLOR.to_string(),
            cover: false,
            width: None,
            height: None,
            autostart: false,
            pixel_depth: DEFAULT_PIXEL_DEPTH,
            lerp_speed: DEFAULT_LERP_SPEED,
            wave_colors: Vec::new(),
        }
    }
}

impl WaveOptions {
    pub fn ratio_for(&self, host: &HostMetrics) -> f64 {
        self.ratio.unwrap_or(host.pixel_ratio)
    }
}

/// What the host environment reports: device pixel ratio and container size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HostMetrics {
    pub pixel_ratio: f64,
    pub width: f64,
    pub height: f64,
}

impl HostMetrics {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            pixel_ratio: 1.0,
            width,
            height,
        }
    }

    pub fn with_pixel_ratio(mut self, ratio: f64) -> Self {
        self.pixel_ratio = ratio;
        self
    }
}

/// Drawing area in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub width: f64,
    pub height: f64,
    /// Tallest excursion a single wave may take from the center line.
    pub height_max: f64,
}

impl Geometry {
    pub fn resolve(options: &WaveOptions, host: &HostMetrics) -> Self {
        let ratio = options.ratio_for(host);
        let width = ratio * options.width.unwrap_or(host.width);
        let height = ratio * options.height.unwrap_or(host.height);
        Self {
            width,
            height,
            height_max: height / 2.0 - HEIGHT_MARGIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_aliases() {
        assert_eq!("ios".parse::<Style>(), Ok(Style::Banded));
        assert_eq!("ios9".parse::<Style>(), Ok(Style::Organic));
        assert!("wavy".parse::<Style>().is_err());
    }

    #[test]
    fn geometry_scales_by_ratio() {
        let opts = WaveOptions {
            width: Some(320.0),
            ..Default::default()
        };
        let host = HostMetrics::new(999.0, 100.0).with_pixel_ratio(2.0);
        let g = Geometry::resolve(&opts, &host);
        assert_eq!(g.width, 640.0);
        assert_eq!(g.height, 200.0);
        assert_eq!(g.height_max, 94.0);
    }
}
