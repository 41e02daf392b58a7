use super::{attenuation_quartic, sample_domain, FrameView};
use crate::constants::{BANDED_AMPLITUDE_FACTOR, BANDED_GRAPH_X};
use crate::surface::DrawingSurface;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandedLayer {
    /// Divides the wave height; negative values flip the band.
    pub attenuation: f64,
    pub line_width: f64,
    pub opacity: f64,
}

const fn layer(attenuation: f64, line_width: f64, opacity: f64) -> BandedLayer {
    BandedLayer {
        attenuation,
        line_width,
        opacity,
    }
}

// Faint outer bands first, the solid main band last so it ends up on top.
const BANDED_LAYERS: [BandedLayer; 5] = [
    layer(-2.0, 1.0, 0.1),
    layer(-6.0, 1.0, 0.2),
    layer(4.0, 1.0, 0.4),
    layer(2.0, 1.0, 0.6),
    layer(1.0, 1.5, 1.0),
];

/// A single stroked sine band under the quartic envelope.
#[derive(Clone, Debug)]
pub struct BandedCurve {
    pub layer: BandedLayer,
}

impl BandedCurve {
    pub fn new(layer: BandedLayer) -> Self {
        Self { layer }
    }

    pub fn definitions() -> &'static [BandedLayer; 5] {
        &BANDED_LAYERS
    }

    #[inline]
    pub fn x_pos(i: f64, view: &FrameView) -> f64 {
        view.geometry.width * ((i + BANDED_GRAPH_X) / (BANDED_GRAPH_X * 2.0))
    }

    /// Vertical displacement from the center line at sample `i`.
    #[inline]
    pub fn y_offset(&self, i: f64, view: &FrameView) -> f64 {
        BANDED_AMPLITUDE_FACTOR
            * (attenuation_quartic(i)
                * (view.geometry.height_max * view.amplitude)
                * (1.0 / self.layer.attenuation)
                * (view.frequency * i - view.phase).sin())
    }

    pub fn points(&self, view: &FrameView) -> Vec<DVec2> {
        sample_domain(BANDED_GRAPH_X, view.pixel_depth)
            .map(|i| {
                DVec2::new(
                    Self::x_pos(i, view),
                    view.geometry.height_max + self.y_offset(i, view),
                )
            })
            .collect()
    }

    pub fn draw<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S, view: &FrameView) {
        let points = self.points(view);
        surface.trace(&points);
        // An unresolved color leaves the surface's stroke style as it was.
        if let Some(color) = view.color {
            surface.set_stroke_style(color.with_alpha(self.layer.opacity));
        }
        surface.set_line_width(self.layer.line_width);
        surface.stroke();
    }
}
