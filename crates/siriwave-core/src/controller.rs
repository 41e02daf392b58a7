//! The wave controller: animation state plus the per-frame cycle.
//!
//! The controller never schedules anything itself. The host calls
//! [`WaveController::frame`] whenever its frame primitive fires and keeps
//! requesting frames for as long as the result is [`FrameOutcome::Continue`].
//! `start`, `stop` and `set` only write whole fields, so they are safe to call
//! between any two frames.

use crate::color::Rgb;
use crate::constants::PHASE_STEP;
use crate::curve::{CurveModel, FrameView};
use crate::error::ParamError;
use crate::interpolate::Smoothed;
use crate::options::{Geometry, HostMetrics, Style, WaveOptions};
use crate::surface::DrawingSurface;
use rand::Rng;
use std::f64::consts::TAU;
use std::str::FromStr;
use std::time::Duration;

/// Parameters that are approached gradually instead of being set directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Param {
    Speed,
    Amplitude,
}

impl FromStr for Param {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "speed" => Ok(Param::Speed),
            "amplitude" => Ok(Param::Amplitude),
            other => Err(ParamError::Unknown(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Drew a frame; the host should request another.
    Continue,
    /// Stopped; nothing was drawn and the loop should end.
    Halt,
}

pub struct WaveController {
    options: WaveOptions,
    geometry: Geometry,
    color: Option<Rgb>,
    phase: f64,
    amplitude: Smoothed,
    speed: Smoothed,
    running: bool,
    curves: Vec<CurveModel>,
    frames_drawn: u64,
}

impl WaveController {
    pub fn new(options: WaveOptions, host: HostMetrics) -> Self {
        Self::with_seed(options, host, rand::thread_rng().gen())
    }

    /// Like [`WaveController::new`] but with reproducible organic respawns.
    pub fn with_seed(options: WaveOptions, host: HostMetrics, seed: u64) -> Self {
        let geometry = Geometry::resolve(&options, &host);
        let color = match Rgb::from_hex(&options.color) {
            Ok(c) => Some(c),
            Err(e) => {
                log::warn!("{e}; drawing without a wave color");
                None
            }
        };
        let wave_colors: Vec<Option<Rgb>> = options
            .wave_colors
            .iter()
            .map(|s| match s.parse::<Rgb>() {
                Ok(c) => Some(c),
                Err(e) => {
                    log::warn!("{e}; keeping the default layer color");
                    None
                }
            })
            .collect();
        let curves = CurveModel::build_all(options.style, &wave_colors, seed);
        log::info!(
            "[wave] style={:?} size={}x{} curves={}",
            options.style,
            geometry.width,
            geometry.height,
            curves.len()
        );

        let mut controller = Self {
            geometry,
            color,
            phase: 0.0,
            amplitude: Smoothed::new(options.amplitude),
            speed: Smoothed::new(options.speed),
            running: false,
            curves,
            frames_drawn: 0,
            options,
        };
        if controller.options.autostart {
            controller.start();
        }
        controller
    }

    pub fn start(&mut self) {
        self.phase = 0.0;
        self.running = true;
        log::info!("[wave] start");
    }

    pub fn stop(&mut self) {
        self.phase = 0.0;
        self.running = false;
        log::info!("[wave] stop");
    }

    /// Record `value` as the new target; the live value follows over the next frames.
    pub fn set(&mut self, param: Param, value: f64) {
        match param {
            Param::Speed => self.speed.set_target(value),
            Param::Amplitude => self.amplitude.set_target(value),
        }
    }

    pub fn set_named(&mut self, name: &str, value: f64) -> Result<(), ParamError> {
        self.set(name.parse()?, value);
        Ok(())
    }

    pub fn set_speed(&mut self, value: f64) {
        self.set(Param::Speed, value);
    }

    pub fn set_amplitude(&mut self, value: f64) {
        self.set(Param::Amplitude, value);
    }

    /// Run one frame. `now` is the host's monotonic time since the controller was built.
    pub fn frame<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        now: Duration,
    ) -> FrameOutcome {
        if !self.running {
            return FrameOutcome::Halt;
        }
        surface.clear(self.geometry.width, self.geometry.height);

        let lerp = self.options.lerp_speed;
        self.amplitude.step(lerp);
        self.speed.step(lerp);

        let view = self.view(now);
        for curve in self.curves.iter_mut() {
            curve.draw(surface, &view);
        }

        self.phase = (self.phase + PHASE_STEP * self.speed.value()).rem_euclid(TAU);
        self.frames_drawn += 1;
        log::trace!(
            "[wave] frame={} phase={:.4} amplitude={:.4} speed={:.4}",
            self.frames_drawn,
            self.phase,
            self.amplitude.value(),
            self.speed.value()
        );
        FrameOutcome::Continue
    }

    /// The read-only snapshot curves draw from.
    pub fn view(&self, now: Duration) -> FrameView {
        FrameView {
            geometry: self.geometry,
            phase: self.phase,
            amplitude: self.amplitude.value(),
            speed: self.speed.value(),
            frequency: self.options.frequency,
            pixel_depth: self.options.pixel_depth,
            color: self.color,
            now,
        }
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude.value()
    }

    pub fn amplitude_target(&self) -> Option<f64> {
        self.amplitude.target()
    }

    pub fn speed(&self) -> f64 {
        self.speed.value()
    }

    pub fn speed_target(&self) -> Option<f64> {
        self.speed.target()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn color(&self) -> Option<Rgb> {
        self.color
    }

    pub fn style(&self) -> Style {
        self.options.style
    }

    pub fn options(&self) -> &WaveOptions {
        &self.options
    }

    pub fn curves(&self) -> &[CurveModel] {
        &self.curves
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}
