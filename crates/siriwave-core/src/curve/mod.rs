//! Curve models: one visual layer of the wave each.
//!
//! A controller owns a fixed, ordered list of [`CurveModel`]s picked by its
//! [`Style`]. Every frame each model receives the same read-only
//! [`FrameView`] and draws itself; later models paint over earlier ones.

mod banded;
mod organic;

pub use banded::*;
pub use organic::*;

use crate::color::Rgb;
use crate::options::{Geometry, Style};
use crate::surface::DrawingSurface;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Snapshot of the controller state a curve may read while drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameView {
    pub geometry: Geometry,
    pub phase: f64,
    pub amplitude: f64,
    pub speed: f64,
    pub frequency: f64,
    pub pixel_depth: f64,
    pub color: Option<Rgb>,
    /// Monotonic time supplied by the host.
    pub now: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveDefinition {
    Banded(BandedLayer),
    Organic(OrganicLayer),
}

impl CurveDefinition {
    /// Static layer list for `style`. `wave_colors` only applies to the organic style.
    pub fn for_style(style: Style, wave_colors: &[Option<Rgb>]) -> Vec<CurveDefinition> {
        match style {
            Style::Banded => BandedCurve::definitions()
                .iter()
                .copied()
                .map(CurveDefinition::Banded)
                .collect(),
            Style::Organic => OrganicCurve::definitions(wave_colors)
                .into_iter()
                .map(CurveDefinition::Organic)
                .collect(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum CurveModel {
    Banded(BandedCurve),
    Organic(OrganicCurve),
}

impl CurveModel {
    pub fn new(definition: CurveDefinition, rng: StdRng, now: Duration) -> Self {
        match definition {
            CurveDefinition::Banded(layer) => CurveModel::Banded(BandedCurve::new(layer)),
            CurveDefinition::Organic(layer) => {
                CurveModel::Organic(OrganicCurve::new(layer, rng, now))
            }
        }
    }

    /// Build every layer of `style`, deriving one RNG per layer from `seed`.
    pub fn build_all(style: Style, wave_colors: &[Option<Rgb>], seed: u64) -> Vec<CurveModel> {
        CurveDefinition::for_style(style, wave_colors)
            .into_iter()
            .enumerate()
            .map(|(i, def)| {
                let mix = seed ^ (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
                CurveModel::new(def, StdRng::seed_from_u64(mix), Duration::ZERO)
            })
            .collect()
    }

    pub fn definition(&self) -> CurveDefinition {
        match self {
            CurveModel::Banded(c) => CurveDefinition::Banded(c.layer),
            CurveModel::Organic(c) => CurveDefinition::Organic(c.layer),
        }
    }

    pub fn draw<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S, view: &FrameView) {
        match self {
            CurveModel::Banded(c) => c.draw(surface, view),
            CurveModel::Organic(c) => c.draw(surface, view),
        }
    }
}

/// Sample positions over `[-half_width, half_width]` spaced by `step`.
///
/// Positions are computed from the sample index so both ends are reached
/// exactly when `step` divides the domain. A non-positive or non-finite
/// step yields nothing.
pub fn sample_domain(half_width: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = if step > 0.0 && step.is_finite() {
        ((2.0 * half_width) / step + 1e-9).floor() as usize + 1
    } else {
        0
    };
    (0..count).map(move |k| -half_width + k as f64 * step)
}

/// `(4 / (4 + x^4))^4`: flat top, falls to 0.0016 of its peak at `|x| = 2`.
#[inline]
pub fn attenuation_quartic(x: f64) -> f64 {
    (crate::constants::ATT_FACTOR / (crate::constants::ATT_FACTOR + x.powi(4))).powi(4)
}

/// `(4 / (4 + x^2))^4`: wider-tailed envelope used by the organic sub-bands.
#[inline]
pub fn attenuation_quadratic(x: f64) -> f64 {
    (crate::constants::ATT_FACTOR / (crate::constants::ATT_FACTOR + x.powi(2))).powi(4)
}
