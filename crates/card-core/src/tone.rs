//! Tone-loop sequencing.
//!
//! The audio side is just a fixed melody cycled forever while playing. The
//! web player asks the sequencer for the next step on every scheduler tick;
//! oscillator lifecycle and gain ramps live in the frontend.

use crate::constants::TONE_MIN_MS;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneStep {
    pub frequency_hz: f32,
    pub duration_ms: u32,
}

const fn step(frequency_hz: f32, duration_ms: u32) -> ToneStep {
    ToneStep {
        frequency_hz,
        duration_ms,
    }
}

/// C5 E5 G5 E5 D5 E5, a tiny built-in loop so no audio file is needed.
pub const MELODY: &[ToneStep] = &[
    step(523.25, 180),
    step(659.25, 180),
    step(783.99, 240),
    step(659.25, 180),
    step(587.33, 180),
    step(659.25, 240),
];

/// Audible length a tone is scheduled for, floored so very short steps
/// still speak.
#[inline]
pub fn effective_ms(step: ToneStep) -> u32 {
    step.duration_ms.max(TONE_MIN_MS)
}

/// Cycles through `MELODY`, wrapping indefinitely.
#[derive(Clone, Debug, Default)]
pub struct ToneSequencer {
    position: usize,
}

impl ToneSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the current step and move to the next one.
    pub fn advance(&mut self) -> ToneStep {
        let step = MELODY[self.position % MELODY.len()];
        self.position = (self.position + 1) % MELODY.len();
        step
    }

    /// Rewind to the first step. Each start of the loop replays the melody
    /// from the top rather than resuming mid-phrase.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

/// Stopped/Playing guard for the tone player. Holds the scheduler handle
/// while playing so a second start cannot stack a second scheduler and a
/// second stop has nothing left to cancel.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlayerState {
    handle: Option<i32>,
}

impl PlayerState {
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.handle.is_some()
    }

    /// Record a started scheduler. Returns false without touching the
    /// stored handle when one is already active.
    pub fn begin(&mut self, handle: i32) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(handle);
        true
    }

    /// Take the active handle for cancellation; `None` when already
    /// stopped.
    pub fn end(&mut self) -> Option<i32> {
        self.handle.take()
    }
}
