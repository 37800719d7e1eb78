//! Persisted interaction state.
//!
//! One small record survives reloads: whether the invitation was accepted,
//! how many times the decline button dodged, and the audio preference. The
//! JSON field names are the storage wire format and must stay stable.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionState {
    pub accepted: bool,
    #[serde(rename = "noClicks")]
    pub decline_evasions: u32,
    #[serde(rename = "musicOn")]
    pub audio_enabled: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            accepted: false,
            decline_evasions: 0,
            audio_enabled: false,
        }
    }
}

impl InteractionState {
    /// Parse a stored snapshot. Malformed or missing data yields defaults.
    pub fn decode(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(state) => state,
            Err(e) => {
                log::debug!("stored state unreadable, using defaults: {e}");
                Self::default()
            }
        }
    }

    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Count one dodge of the decline button. Returns the new count.
    pub fn record_evasion(&mut self) -> u32 {
        self.decline_evasions += 1;
        self.decline_evasions
    }

    /// Acceptance is terminal; only a full reset reverts it.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    pub fn set_audio(&mut self, on: bool) {
        self.audio_enabled = on;
    }
}
