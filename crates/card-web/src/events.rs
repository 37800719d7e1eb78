//! User affordances: accept, decline (with evasion), copy-link, reset, and
//! the music toggle. All handlers share one explicitly passed interaction
//! state; there are no ambient singletons.

use crate::audio::TonePlayer;
use crate::{confetti, dom, overlay, storage};
use card_core::{
    CardConfig, DodgeBounds, EvasionController, InteractionState, ACCEPT_LABEL_FINAL,
    HINT_ACCEPTED, HINT_ESCALATED,
};
use glam::Vec2;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

type SharedState = Rc<RefCell<InteractionState>>;
type SharedController = Rc<RefCell<EvasionController<StdRng>>>;

pub fn wire_buttons(document: &web::Document, state: SharedState, controller: SharedController) {
    wire_accept(document, state.clone());
    wire_decline(document, state, controller);
}

fn wire_accept(document: &web::Document, state: SharedState) {
    let doc = document.clone();
    dom::add_click_listener(document, "yesBtn", move || {
        {
            let mut s = state.borrow_mut();
            s.accept();
            storage::save(&s);
        }
        if let Some(canvas) = doc
            .get_element_by_id("confetti")
            .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        {
            confetti::burst(&canvas);
        }
        overlay::show(&doc);
        dom::set_text(&doc, "yesBtn", ACCEPT_LABEL_FINAL);
        dom::hide(&doc, "noBtn");
        dom::set_text(&doc, "tinyHint", HINT_ACCEPTED);
    });
}

fn wire_decline(document: &web::Document, state: SharedState, controller: SharedController) {
    {
        let state = state.clone();
        let controller = controller.clone();
        let doc = document.clone();
        dom::add_listener(document, "noBtn", "mouseenter", move || {
            let bounds = dodge_bounds(&doc);
            let dodge = controller
                .borrow_mut()
                .pointer_enter(&mut state.borrow_mut(), bounds);
            let Some(dodge) = dodge else {
                return;
            };
            storage::save(&state.borrow());
            if let Some(btn) = dom::by_id(&doc, "noBtn") {
                place(&btn, dodge.position);
                btn.set_text_content(Some(dodge.phrase));
            }
            if dodge.escalate_hint {
                dom::set_text(&doc, "tinyHint", HINT_ESCALATED);
            }
        });
    }
    {
        let doc = document.clone();
        dom::add_click_listener(document, "noBtn", move || {
            let bounds = dodge_bounds(&doc);
            let pos = controller.borrow_mut().press(&state.borrow(), bounds);
            if let Some(pos) = pos {
                if let Some(btn) = dom::by_id(&doc, "noBtn") {
                    place(&btn, pos);
                }
            }
        });
    }
}

/// Measure the decline control and its container in CSS pixels.
fn dodge_bounds(document: &web::Document) -> DodgeBounds {
    let rect_of = |id: &str| {
        document
            .get_element_by_id(id)
            .map(|el| el.get_bounding_client_rect())
    };
    match (rect_of("actions"), rect_of("noBtn")) {
        (Some(container), Some(control)) => DodgeBounds {
            container: Vec2::new(container.width() as f32, container.height() as f32),
            control: Vec2::new(control.width() as f32, control.height() as f32),
        },
        _ => DodgeBounds::default(),
    }
}

fn place(btn: &web::HtmlElement, pos: Vec2) {
    let style = btn.style();
    let _ = style.set_property("position", "relative");
    let _ = style.set_property("left", &format!("{:.0}px", pos.x));
    let _ = style.set_property("top", &format!("{:.0}px", pos.y));
}

pub fn wire_copy_link(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, "copyBtn", move || {
        let Some(window) = web::window() else {
            return;
        };
        let href = window.location().href().unwrap_or_default();
        let clipboard = window.navigator().clipboard();
        let doc = doc.clone();
        spawn_local(async move {
            let ok = JsFuture::from(clipboard.write_text(&href)).await.is_ok();
            dom::set_text(&doc, "copyBtn", if ok { "Copied! ✅" } else { "Copy failed 😅" });
            schedule_copy_label_revert(&doc);
        });
    });
}

fn schedule_copy_label_revert(document: &web::Document) {
    let doc = document.clone();
    let cb = Closure::once_into_js(move || {
        dom::set_text(&doc, "copyBtn", "Copy link");
    });
    if let Some(w) = web::window() {
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), 1200);
    }
}

pub fn wire_reset(document: &web::Document, state: SharedState) {
    dom::add_click_listener(document, "resetBtn", move || {
        storage::clear();
        *state.borrow_mut() = InteractionState::default();
        storage::save(&state.borrow());
        if let Some(w) = web::window() {
            let _ = w.location().reload();
        }
    });
}

/// Wire the mute/unmute toggle. Hidden entirely when music is disabled in
/// config or the audio subsystem is unavailable. Playback is never started
/// here on load; only the click handler starts it.
pub fn wire_music(document: &web::Document, state: SharedState, config: &CardConfig) {
    if !config.music.enabled {
        dom::hide(document, "musicBtn");
        return;
    }
    let Some(player) = TonePlayer::new() else {
        log::info!("audio unavailable; hiding music toggle");
        dom::hide(document, "musicBtn");
        return;
    };

    set_music_icon(document, state.borrow().audio_enabled);
    let doc = document.clone();
    dom::add_click_listener(document, "musicBtn", move || {
        let on = {
            let mut s = state.borrow_mut();
            let on = !s.audio_enabled;
            s.set_audio(on);
            storage::save(&s);
            on
        };
        if on {
            player.start();
        } else {
            player.stop();
        }
        set_music_icon(&doc, on);
    });
}

fn set_music_icon(document: &web::Document, on: bool) {
    if let Some(btn) = dom::by_id(document, "musicBtn") {
        btn.set_text_content(Some(if on { "🔊" } else { "🔈" }));
        let _ = btn.set_attribute("title", if on { "Mute" } else { "Play" });
    }
}
