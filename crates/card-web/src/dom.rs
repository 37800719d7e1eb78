use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn by_id(document: &web::Document, element_id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn hide(document: &web::Document, element_id: &str) {
    if let Some(el) = by_id(document, element_id) {
        let _ = el.style().set_property("display", "none");
    }
}

/// Attach a zero-argument listener to an element by id. The closure is
/// leaked intentionally; listeners live as long as the page.
pub fn add_listener(
    document: &web::Document,
    element_id: &str,
    event: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    add_listener(document, element_id, "click", handler);
}

/// Size the canvas backing store to CSS size * devicePixelRatio and return
/// the ratio used. Called once per burst; mid-burst resizes are not tracked.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> f64 {
    let Some(w) = web::window() else {
        return 1.0;
    };
    let dpr = w.device_pixel_ratio().max(1.0).floor();
    let (vw, vh) = viewport_size(&w);
    canvas.set_width(((vw * dpr) as u32).max(1));
    canvas.set_height(((vh * dpr) as u32).max(1));
    let _ = canvas
        .style()
        .set_property("width", &format!("{vw}px"));
    let _ = canvas
        .style()
        .set_property("height", &format!("{vh}px"));
    dpr
}

#[inline]
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let vw = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let vh = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (vw, vh)
}
