//! localStorage persistence for the interaction state.
//!
//! All storage failures are silent: a missing or unreadable snapshot loads
//! as defaults, and a failed write leaves the in-memory state authoritative
//! for the session.

use card_core::InteractionState;
use web_sys as web;

pub const STORAGE_KEY: &str = "valentine_site_v1";

fn local_storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load() -> InteractionState {
    local_storage()
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        .map(|raw| InteractionState::decode(&raw))
        .unwrap_or_default()
}

pub fn save(state: &InteractionState) {
    if let Some(s) = local_storage() {
        let _ = s.set_item(STORAGE_KEY, &state.encode());
    }
}

pub fn clear() {
    if let Some(s) = local_storage() {
        let _ = s.remove_item(STORAGE_KEY);
    }
}
