#![cfg(target_arch = "wasm32")]
//! WASM entry point for the valentine card.
//!
//! Loads the persisted interaction state, binds the static configuration to
//! the page, and wires every affordance. The shared state record is passed
//! explicitly to each wiring function.

use card_core::{CardConfig, EvasionController};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod confetti;
mod dom;
mod events;
mod overlay;
mod storage;
mod view;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("card-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = CardConfig::default();
    let state = Rc::new(RefCell::new(storage::load()));
    log::info!(
        "loaded state: accepted={} evasions={} music={}",
        state.borrow().accepted,
        state.borrow().decline_evasions,
        state.borrow().audio_enabled
    );

    view::apply_config(&document, &config);
    view::start_countdown(&document, &config);
    overlay::wire(&document);
    events::wire_copy_link(&document);
    events::wire_reset(&document, state.clone());

    let controller = Rc::new(RefCell::new(EvasionController::new(StdRng::from_entropy())));
    events::wire_buttons(&document, state.clone(), controller);
    view::restore_accepted(&document, &state.borrow());

    events::wire_music(&document, state, &config);
    Ok(())
}
