#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use instant::Instant;
use siriwave_core::{Geometry, WaveController, WaveOptions};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod css;
mod dom;
mod frame;
mod pending;

use canvas::CanvasSurface;
use frame::{FrameLoop, WaveState};
use pending::PendingFrame;

#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("siriwave-web loaded");
    Ok(())
}

// `into_serde` goes through the `serde-serialize` feature of wasm-bindgen.
#[allow(deprecated)]
fn parse_options(options: &JsValue) -> anyhow::Result<WaveOptions> {
    if options.is_undefined() || options.is_null() {
        return Ok(WaveOptions::default());
    }
    options
        .into_serde::<WaveOptions>()
        .map_err(|e| anyhow!("invalid options: {e}"))
}

/// Animated wave drawn into a canvas appended to `container` (default `document.body`).
#[wasm_bindgen]
pub struct SiriWave {
    frames: FrameLoop,
    canvas: web::HtmlCanvasElement,
}

impl SiriWave {
    fn build(options: JsValue, container: Option<web::HtmlElement>) -> anyhow::Result<Self> {
        let options = parse_options(&options)?;
        let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
        let container = match container {
            Some(c) => c,
            None => document.body().ok_or_else(|| anyhow!("no document body"))?,
        };

        let host = dom::host_metrics(&container, &options)?;
        let ratio = options.ratio_for(&host);
        let geometry = Geometry::resolve(&options, &host);
        let canvas = dom::attach_canvas(&document, &container, &geometry, ratio, options.cover)?;
        let surface = CanvasSurface::new(dom::context_2d(&canvas)?);

        let frames = FrameLoop::new(WaveState {
            controller: WaveController::new(options, host),
            surface,
            clock: Instant::now(),
            loop_active: false,
            pending: PendingFrame::Idle,
        });
        // autostart already flipped the controller to running
        frames.kick();
        Ok(Self { frames, canvas })
    }
}

#[wasm_bindgen]
impl SiriWave {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue, container: Option<web::HtmlElement>) -> Result<SiriWave, JsValue> {
        Self::build(options, container).map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    pub fn start(&self) {
        self.frames.state.borrow_mut().controller.start();
        self.frames.kick();
    }

    pub fn stop(&self) {
        self.frames.state.borrow_mut().controller.stop();
    }

    /// Interpolate `name` (`"speed"` or `"amplitude"`) toward `value`.
    pub fn set(&self, name: &str, value: f64) {
        if let Err(e) = self.frames.state.borrow_mut().controller.set_named(name, value) {
            log::warn!("{e}");
        }
    }

    #[wasm_bindgen(js_name = setSpeed)]
    pub fn set_speed(&self, value: f64) {
        self.frames.state.borrow_mut().controller.set_speed(value);
    }

    #[wasm_bindgen(js_name = setAmplitude)]
    pub fn set_amplitude(&self, value: f64) {
        self.frames.state.borrow_mut().controller.set_amplitude(value);
    }

    /// Stop animating, cancel the queued frame and remove the canvas from its container.
    pub fn dispose(&self) {
        self.stop();
        self.frames.cancel();
        self.canvas.remove();
    }

    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> f64 {
        self.frames.state.borrow().controller.phase()
    }

    #[wasm_bindgen(getter)]
    pub fn amplitude(&self) -> f64 {
        self.frames.state.borrow().controller.amplitude()
    }

    #[wasm_bindgen(getter)]
    pub fn speed(&self) -> f64 {
        self.frames.state.borrow().controller.speed()
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.frames.state.borrow().controller.is_running()
    }
}
