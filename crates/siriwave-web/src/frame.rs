use crate::canvas::CanvasSurface;
use crate::pending::PendingFrame;
use anyhow::anyhow;
use instant::Instant;
use siriwave_core::constants::FALLBACK_FRAME_DELAY_MS;
use siriwave_core::{FrameOutcome, WaveController};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct WaveState {
    pub controller: WaveController,
    pub surface: CanvasSurface,
    pub clock: Instant,
    /// A frame is pending or running; `start` must not open a second loop.
    pub loop_active: bool,
    /// Request the browser still holds against the frame callback.
    pub pending: PendingFrame,
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// The frame callback, built once and re-requested every frame while running.
pub struct FrameLoop {
    pub state: Rc<RefCell<WaveState>>,
    tick: TickSlot,
}

impl FrameLoop {
    pub fn new(state: WaveState) -> Self {
        let state = Rc::new(RefCell::new(state));
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let state_tick = state.clone();
        let tick_weak: Weak<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::downgrade(&tick);
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(tick) = tick_weak.upgrade() {
                run_frame(&state_tick, &tick);
            }
        }) as Box<dyn FnMut()>));
        Self { state, tick }
    }

    /// Enter the loop unless one is already in flight; the first frame runs immediately.
    pub fn kick(&self) {
        {
            let mut s = self.state.borrow_mut();
            if s.loop_active || !s.controller.is_running() {
                return;
            }
            s.loop_active = true;
        }
        run_frame(&self.state, &self.tick);
    }

    /// Withdraw any queued frame so the browser never calls back into a dropped closure.
    pub fn cancel(&self) {
        let Ok(mut s) = self.state.try_borrow_mut() else {
            log::warn!("frame loop busy, cannot cancel");
            return;
        };
        cancel_request(s.pending.take());
        s.loop_active = false;
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn cancel_request(pending: PendingFrame) {
    let Some(window) = web::window() else {
        return;
    };
    match pending {
        PendingFrame::Idle => {}
        PendingFrame::Animation(handle) => {
            if let Err(e) = window.cancel_animation_frame(handle) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
        PendingFrame::Timeout(handle) => window.clear_timeout_with_handle(handle),
    }
}

fn run_frame(state: &Rc<RefCell<WaveState>>, tick: &TickSlot) {
    let outcome = {
        let mut s = state.borrow_mut();
        // the request that brought us here has fired
        s.pending = PendingFrame::Idle;
        let now = s.clock.elapsed();
        let WaveState {
            controller,
            surface,
            ..
        } = &mut *s;
        controller.frame(surface, now)
    };
    let next = match outcome {
        FrameOutcome::Continue => match request_next(tick) {
            Ok(pending) => Some(pending),
            Err(e) => {
                log::error!("frame scheduling failed: {:?}", e);
                None
            }
        },
        FrameOutcome::Halt => None,
    };
    let mut s = state.borrow_mut();
    match next {
        Some(pending) => s.pending = pending,
        None => s.loop_active = false,
    }
}

fn request_next(tick: &TickSlot) -> anyhow::Result<PendingFrame> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let slot = tick.borrow();
    let callback: &js_sys::Function = slot
        .as_ref()
        .ok_or_else(|| anyhow!("frame callback dropped"))?
        .as_ref()
        .unchecked_ref();
    if let Ok(handle) = window.request_animation_frame(callback) {
        return Ok(PendingFrame::Animation(handle));
    }
    let handle = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback, FALLBACK_FRAME_DELAY_MS)
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(PendingFrame::Timeout(handle))
}
