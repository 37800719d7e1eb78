//! Static view binding: configuration text, photo, countdown, and the
//! accepted-state restoration applied on load.

use crate::dom;
use card_core::{
    format_countdown, CardConfig, InteractionState, ACCEPT_LABEL_FINAL, COUNTDOWN_TICK_MS,
    HINT_ACCEPTED,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn apply_config(document: &web::Document, config: &CardConfig) {
    dom::set_text(document, "titlePrefix", config.title_prefix);
    dom::set_text(document, "bfName", config.recipient_name);
    dom::set_text(document, "fromName", config.from_name);
    dom::set_text(document, "subtitle", config.subtitle);
    dom::set_text(document, "message", config.message);
    dom::set_text(document, "modalText", config.accepted_message);
    wire_photo(document, config);
}

fn wire_photo(document: &web::Document, config: &CardConfig) {
    let Some(url) = config.photo_url else {
        show_photo_fallback(document);
        return;
    };
    let photo = document
        .get_element_by_id("photo")
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok());
    let Some(photo) = photo else {
        show_photo_fallback(document);
        return;
    };

    {
        let doc = document.clone();
        dom::add_listener(document, "photo", "load", move || {
            if let Some(el) = doc.get_element_by_id("photo") {
                let _ = el.class_list().add_1("ready");
            }
            dom::hide(&doc, "photoFallback");
        });
    }
    {
        let doc = document.clone();
        dom::add_listener(document, "photo", "error", move || {
            show_photo_fallback(&doc);
        });
    }
    photo.set_src(url);
}

fn show_photo_fallback(document: &web::Document) {
    if let Some(el) = dom::by_id(document, "photoFallback") {
        let _ = el.style().set_property("display", "grid");
    }
}

/// Render the countdown once, then refresh it on a coarse interval. The
/// interval runs for the page's lifetime, so the closure is leaked.
pub fn start_countdown(document: &web::Document, config: &CardConfig) {
    let target = js_sys::Date::new(&JsValue::from_str(config.target_date_local)).get_time();
    let doc = document.clone();
    let mut render = move || {
        let remaining = target - js_sys::Date::now();
        dom::set_text(&doc, "countdownText", &format_countdown(remaining));
    };
    render();

    let closure = Closure::wrap(Box::new(render) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let _ = w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            COUNTDOWN_TICK_MS,
        );
    }
    closure.forget();
}

/// Reapply the post-acceptance surface after a reload.
pub fn restore_accepted(document: &web::Document, state: &InteractionState) {
    if !state.accepted {
        return;
    }
    dom::set_text(document, "yesBtn", ACCEPT_LABEL_FINAL);
    dom::hide(document, "noBtn");
    dom::set_text(document, "tinyHint", HINT_ACCEPTED);
}
