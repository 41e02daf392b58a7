//! The organic style: a few colored blobs that grow, fade and reappear.
//!
//! Each colored layer owns a [`SubBandSet`] of 2 to 4 randomized
//! oscillators. Their absolute values are averaged into one silhouette,
//! mirrored around the center line and filled additively. Every sub-band
//! grows until its own despawn deadline passes and then shrinks; once the
//! layer's peak drops under [`DEAD_PX`] while falling, the whole set is
//! thrown away and drawn again.

use super::{attenuation_quadratic, sample_domain, FrameView};
use crate::color::{Rgb, Rgba};
use crate::constants::*;
use crate::surface::{ColorStop, Composite, DrawingSurface, LinearGradient, Paint, Rect};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::Rng;
use smallvec::{smallvec, SmallVec};
use std::f64::consts::TAU;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrganicLayer {
    pub color: Rgb,
    /// Draw the static gradient line instead of a blob.
    pub support_line: bool,
}

const ORGANIC_LAYERS: [OrganicLayer; 4] = [
    OrganicLayer {
        color: Rgb::WHITE,
        support_line: true,
    },
    OrganicLayer {
        color: Rgb::new(15, 82, 169), // blue
        support_line: false,
    },
    OrganicLayer {
        color: Rgb::new(173, 57, 76), // red
        support_line: false,
    },
    OrganicLayer {
        color: Rgb::new(48, 220, 155), // green
        support_line: false,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubBand {
    pub phase: f64,
    pub amplitude: f64,
    /// Ceiling the amplitude grows toward.
    pub final_amplitude: f64,
    pub offset: f64,
    /// Multiplies the controller speed when advancing `phase`.
    pub speed: f64,
    /// Horizontal stretch; larger is wider.
    pub width: f64,
    /// +1 or -1.
    pub direction: f64,
    /// Counted from the set's `spawned_at`.
    pub despawn_after: Duration,
}

impl SubBand {
    fn random(rng: &mut StdRng) -> Self {
        let (ms_lo, ms_hi) = DESPAWN_TIMEOUT_MS_RANGE;
        Self {
            phase: 0.0,
            amplitude: 0.0,
            final_amplitude: rng.gen_range(AMPLITUDE_RANGE.0..AMPLITUDE_RANGE.1),
            offset: rng.gen_range(OFFSET_RANGE.0..OFFSET_RANGE.1),
            speed: rng.gen_range(SPEED_RANGE.0..SPEED_RANGE.1),
            width: rng.gen_range(WIDTH_RANGE.0..WIDTH_RANGE.1),
            direction: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
            despawn_after: Duration::from_millis(rng.gen_range(ms_lo..ms_hi)),
        }
    }

    /// Grow before the deadline, shrink after it, clamped to `[0, final_amplitude]`.
    fn breathe(&mut self, spawned_at: Duration, now: Duration) {
        if spawned_at + self.despawn_after <= now {
            self.amplitude -= DESPAWN_FACTOR;
        } else {
            self.amplitude += DESPAWN_FACTOR;
        }
        self.amplitude = self.amplitude.max(0.0).min(self.final_amplitude);
    }
}

#[derive(Clone, Debug)]
pub struct SubBandSet {
    pub bands: SmallVec<[SubBand; 4]>,
    pub spawned_at: Duration,
}

impl SubBandSet {
    pub fn spawn(rng: &mut StdRng, now: Duration) -> Self {
        let (lo, hi) = SUB_BAND_COUNT_RANGE;
        let count = rng.gen_range(lo..hi);
        let mut bands: SmallVec<[SubBand; 4]> = smallvec![];
        for _ in 0..count {
            bands.push(SubBand::random(rng));
        }
        Self {
            bands,
            spawned_at: now,
        }
    }

    /// Averaged magnitude of all sub-bands at sample `i`, roughly in `[0, 1]`.
    pub fn relative_y(&self, i: f64) -> f64 {
        let n = self.bands.len();
        if n == 0 {
            return 0.0;
        }
        let mut y = 0.0;
        for (ci, band) in self.bands.iter().enumerate() {
            // Spread the bands across the width, then shift each by its own offset.
            let spread = if n > 1 {
                4.0 * (-1.0 + (ci as f64 / (n - 1) as f64) * 2.0)
            } else {
                0.0
            };
            let t = spread + band.offset;
            let x = i * (1.0 / band.width) - t;
            y += (band.amplitude
                * (band.direction * x - band.phase).sin()
                * attenuation_quadratic(x))
            .abs();
        }
        y / n as f64
    }
}

/// Where the layer is in its spawn cycle, judged from consecutive frame peaks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// Peak holding or rising (and the first frame after a spawn).
    #[default]
    Active,
    /// Peak lower than on the previous frame.
    Decaying,
}

impl Lifecycle {
    pub fn observe(prev_peak: Option<f64>, peak: f64) -> Self {
        match prev_peak {
            Some(prev) if prev > peak => Lifecycle::Decaying,
            _ => Lifecycle::Active,
        }
    }

    /// A set is replaced once it is decaying and has dropped under `DEAD_PX`.
    #[inline]
    pub fn should_respawn(self, peak: f64) -> bool {
        self == Lifecycle::Decaying && peak < DEAD_PX
    }
}

#[derive(Clone, Debug)]
pub struct OrganicCurve {
    pub layer: OrganicLayer,
    rng: StdRng,
    set: SubBandSet,
    lifecycle: Lifecycle,
    prev_peak: Option<f64>,
    respawns: u64,
}

impl OrganicCurve {
    pub fn new(layer: OrganicLayer, mut rng: StdRng, now: Duration) -> Self {
        let set = SubBandSet::spawn(&mut rng, now);
        Self {
            layer,
            rng,
            set,
            lifecycle: Lifecycle::Active,
            prev_peak: None,
            respawns: 0,
        }
    }

    /// Default layers with `overrides[k]` replacing the color of colored layer `k`.
    pub fn definitions(overrides: &[Option<Rgb>]) -> Vec<OrganicLayer> {
        let mut layers = ORGANIC_LAYERS.to_vec();
        let colored = layers.iter_mut().filter(|l| !l.support_line);
        for (layer, color) in colored.zip(overrides) {
            if let Some(color) = color {
                layer.color = *color;
            }
        }
        layers
    }

    pub fn sub_bands(&self) -> &[SubBand] {
        &self.set.bands
    }

    pub fn spawned_at(&self) -> Duration {
        self.set.spawned_at
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn prev_peak(&self) -> Option<f64> {
        self.prev_peak
    }

    pub fn respawn_count(&self) -> u64 {
        self.respawns
    }

    /// Throw away every sub-band and draw a fresh set.
    pub fn respawn(&mut self, now: Duration) {
        self.set = SubBandSet::spawn(&mut self.rng, now);
        self.lifecycle = Lifecycle::Active;
        self.respawns += 1;
        log::debug!(
            "organic layer {} respawned with {} sub-bands",
            self.layer.color,
            self.set.bands.len()
        );
    }

    #[inline]
    pub fn x_pos(i: f64, view: &FrameView) -> f64 {
        view.geometry.width * ((i + ORGANIC_GRAPH_X) / (ORGANIC_GRAPH_X * 2.0))
    }

    /// Unsigned height of the silhouette at sample `i`.
    pub fn y_pos(&self, i: f64, view: &FrameView) -> f64 {
        ORGANIC_AMPLITUDE_FACTOR
            * view.geometry.height_max
            * view.amplitude
            * self.set.relative_y(i)
            * attenuation_quadratic((i / ORGANIC_GRAPH_X) * 2.0)
    }

    /// Step amplitudes and phases of every sub-band by one frame.
    pub fn advance(&mut self, view: &FrameView) {
        let spawned_at = self.set.spawned_at;
        for band in self.set.bands.iter_mut() {
            band.breathe(spawned_at, view.now);
            band.phase =
                (band.phase + view.speed * band.speed * ORGANIC_SPEED_FACTOR).rem_euclid(TAU);
        }
    }

    /// Silhouette samples as `(x, height)` plus the frame peak (`-inf` when empty).
    pub fn sample(&self, view: &FrameView) -> (Vec<DVec2>, f64) {
        let mut peak = f64::NEG_INFINITY;
        let samples = sample_domain(ORGANIC_GRAPH_X, view.pixel_depth)
            .map(|i| {
                let y = self.y_pos(i, view);
                peak = peak.max(y);
                DVec2::new(Self::x_pos(i, view), y)
            })
            .collect();
        (samples, peak)
    }

    /// Feed this frame's peak into the lifecycle. Returns true when the set was respawned.
    pub fn observe_peak(&mut self, peak: f64, now: Duration) -> bool {
        self.lifecycle = Lifecycle::observe(self.prev_peak, peak);
        let respawned = self.lifecycle.should_respawn(peak);
        if respawned {
            self.respawn(now);
        }
        self.prev_peak = Some(peak);
        respawned
    }

    pub fn draw<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S, view: &FrameView) {
        surface.set_global_alpha(ORGANIC_GLOBAL_ALPHA);
        surface.set_composite(Composite::Lighter);

        if self.layer.support_line {
            draw_support_line(surface, view);
            return;
        }

        self.advance(view);
        let (samples, peak) = self.sample(view);
        let center = view.geometry.height_max;
        let paint = Paint::Solid(self.layer.color.with_alpha(1.0));

        for sign in [1.0, -1.0] {
            let points: Vec<DVec2> = samples
                .iter()
                .map(|s| DVec2::new(s.x, center - sign * s.y))
                .collect();
            surface.trace(&points);
            surface.close_path();
            surface.set_fill_style(&paint);
            surface.fill();
        }

        self.observe_peak(peak, view.now);
    }
}

/// Thin horizontal band that fades in from the left edge and out at the right.
pub fn support_line_gradient(view: &FrameView) -> (Rect, LinearGradient) {
    let g = view.geometry;
    let rect = Rect {
        x: 0.0,
        y: g.height_max,
        width: g.width,
        height: 1.0,
    };
    let glow = Rgb::WHITE.with_alpha(SUPPORT_LINE_ALPHA);
    let stop = |offset: f64, color: Rgba| ColorStop { offset, color };
    let gradient = LinearGradient {
        start: DVec2::new(0.0, g.height_max),
        end: DVec2::new(g.width, 1.0),
        stops: smallvec![
            stop(0.0, Rgba::TRANSPARENT),
            stop(SUPPORT_LINE_FADE, glow),
            stop(1.0 - SUPPORT_LINE_FADE - SUPPORT_LINE_FADE, glow),
            stop(1.0, Rgba::TRANSPARENT),
        ],
    };
    (rect, gradient)
}

fn draw_support_line<S: DrawingSurface + ?Sized>(surface: &mut S, view: &FrameView) {
    let (rect, gradient) = support_line_gradient(view);
    surface.set_fill_style(&Paint::Linear(gradient));
    surface.fill_rect(rect);
}
