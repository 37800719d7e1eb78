//! Tone loop player on top of WebAudio.
//!
//! One oscillator at a time feeds a master gain. A periodic scheduler
//! advances the melody and replaces the oscillator each tick; start/stop
//! ramp the gain instead of jumping it. Playback never begins on load —
//! only the toggle handler calls `start`, which keeps autoplay policies
//! happy.

use card_core::{
    effective_ms, PlayerState, ToneSequencer, GAIN_ATTACK_SEC, GAIN_RELEASE_SEC, LOOP_GAIN,
    TONE_TICK_MS,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct TonePlayer {
    ctx: web::AudioContext,
    gain: web::GainNode,
    osc: Rc<RefCell<Option<web::OscillatorNode>>>,
    seq: Rc<RefCell<ToneSequencer>>,
    state: Cell<PlayerState>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl TonePlayer {
    /// Build the audio graph. `None` means the audio subsystem is
    /// unavailable and the music control should be hidden entirely.
    pub fn new() -> Option<Rc<Self>> {
        let ctx = web::AudioContext::new().ok()?;
        let gain = web::GainNode::new(&ctx).ok()?;
        gain.gain().set_value(0.0);
        gain.connect_with_audio_node(&ctx.destination()).ok()?;
        Some(Rc::new(Self {
            ctx,
            gain,
            osc: Rc::new(RefCell::new(None)),
            seq: Rc::new(RefCell::new(ToneSequencer::new())),
            state: Cell::new(PlayerState::default()),
            tick: RefCell::new(None),
        }))
    }

    pub fn is_playing(&self) -> bool {
        self.state.get().is_playing()
    }

    /// Begin the loop. Calling while already playing is a no-op; each
    /// fresh start replays the melody from the top.
    pub fn start(&self) {
        if self.state.get().is_playing() {
            return;
        }
        self.seq.borrow_mut().reset();
        if self.ctx.state() == web::AudioContextState::Suspended {
            let _ = self.ctx.resume();
        }
        let _ = self
            .gain
            .gain()
            .set_target_at_time(LOOP_GAIN, self.ctx.current_time(), GAIN_ATTACK_SEC);

        let ctx = self.ctx.clone();
        let gain = self.gain.clone();
        let osc = self.osc.clone();
        let seq = self.seq.clone();
        let closure = Closure::wrap(Box::new(move || {
            let step = seq.borrow_mut().advance();
            // Stopping an already-finished oscillator raises; ignore it.
            if let Some(prev) = osc.borrow_mut().take() {
                let _ = prev.stop();
            }
            let Ok(src) = web::OscillatorNode::new(&ctx) else {
                return;
            };
            src.set_type(web::OscillatorType::Sine);
            src.frequency().set_value(step.frequency_hz);
            if src.connect_with_audio_node(&gain).is_err() {
                return;
            }
            let stop_at = ctx.current_time() + f64::from(effective_ms(step)) / 1000.0;
            let _ = src.start();
            let _ = src.stop_with_when(stop_at);
            *osc.borrow_mut() = Some(src);
        }) as Box<dyn FnMut()>);

        if let Some(w) = web::window() {
            match w.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                TONE_TICK_MS,
            ) {
                Ok(handle) => {
                    let mut st = self.state.get();
                    st.begin(handle);
                    self.state.set(st);
                    *self.tick.borrow_mut() = Some(closure);
                }
                Err(e) => log::warn!("tone scheduler failed to start: {e:?}"),
            }
        }
    }

    /// Stop the loop. Calling while already stopped is a no-op.
    pub fn stop(&self) {
        let mut st = self.state.get();
        let Some(handle) = st.end() else {
            return;
        };
        self.state.set(st);
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(handle);
        }
        self.tick.borrow_mut().take();
        let _ = self
            .gain
            .gain()
            .set_target_at_time(0.0, self.ctx.current_time(), GAIN_RELEASE_SEC);
        if let Some(prev) = self.osc.borrow_mut().take() {
            let _ = prev.stop();
        }
    }
}
