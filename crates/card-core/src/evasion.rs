//! Decline-button evasion.
//!
//! While the invitation is unaccepted, the decline control dodges the
//! pointer: every pointer-enter bumps the evasion count, relocates the
//! control to a uniform random spot inside its container, and cycles its
//! label through a fixed phrase list. A direct click only relocates.

use crate::constants::HINT_ESCALATION_AT;
use crate::state::InteractionState;
use glam::Vec2;
use rand::Rng;

pub const DECLINE_PHRASES: &[&str] = &[
    "Not yet 🙈",
    "Stoppp 😳",
    "You can’t catch me 😇",
    "Try again 😚",
    "Hehe nope 🤭",
    "Okay okay… maybe? 😏",
];

/// Phrase shown after `evasions` dodges. Plain modulo over the list; the
/// wrap itself keeps the index in range.
#[inline]
pub fn decline_phrase(evasions: u32) -> &'static str {
    DECLINE_PHRASES[evasions as usize % DECLINE_PHRASES.len()]
}

/// Container and control extents, in CSS pixels. The control may land
/// anywhere that keeps it fully inside the container.
#[derive(Clone, Copy, Debug, Default)]
pub struct DodgeBounds {
    pub container: Vec2,
    pub control: Vec2,
}

impl DodgeBounds {
    #[inline]
    pub fn max_offset(&self) -> Vec2 {
        (self.container - self.control).max(Vec2::ZERO)
    }
}

/// What the view applies after one evasion event.
#[derive(Clone, Copy, Debug)]
pub struct Dodge {
    pub position: Vec2,
    pub phrase: &'static str,
    pub escalate_hint: bool,
}

pub struct EvasionController<R: Rng> {
    rng: R,
}

impl<R: Rng> EvasionController<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pointer entered the decline control. No-op once accepted.
    pub fn pointer_enter(
        &mut self,
        state: &mut InteractionState,
        bounds: DodgeBounds,
    ) -> Option<Dodge> {
        if state.accepted {
            return None;
        }
        let count = state.record_evasion();
        Some(Dodge {
            position: self.sample_position(bounds),
            phrase: decline_phrase(count),
            escalate_hint: count >= HINT_ESCALATION_AT,
        })
    }

    /// Direct click on the decline control: relocate only, no count change.
    pub fn press(&mut self, state: &InteractionState, bounds: DodgeBounds) -> Option<Vec2> {
        if state.accepted {
            return None;
        }
        Some(self.sample_position(bounds))
    }

    fn sample_position(&mut self, bounds: DodgeBounds) -> Vec2 {
        let max = bounds.max_offset();
        Vec2::new(
            self.rng.gen::<f32>() * max.x,
            self.rng.gen::<f32>() * max.y,
        )
    }
}
