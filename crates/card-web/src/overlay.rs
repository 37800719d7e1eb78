//! Confirmation modal shown after acceptance.

use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("modal") {
        let _ = el.class_list().add_1("show");
        let _ = el.set_attribute("aria-hidden", "false");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("modal") {
        let _ = el.class_list().remove_1("show");
        let _ = el.set_attribute("aria-hidden", "true");
    }
}

/// Close button, backdrop click, and Escape all dismiss the modal.
pub fn wire(document: &web::Document) {
    dom::add_click_listener(document, "modalClose", || {
        if let Some(doc) = dom::window_document() {
            hide(&doc);
        }
    });
    dom::add_click_listener(document, "modalBackdrop", || {
        if let Some(doc) = dom::window_document() {
            hide(&doc);
        }
    });

    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" {
            if let Some(doc) = dom::window_document() {
                hide(&doc);
            }
        }
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
