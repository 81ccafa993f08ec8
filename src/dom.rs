use crate::core::Attachment;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up `#id` and cast it to the expected element type. A present element
/// of the wrong type counts as not found.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &'static str) -> Attachment<T> {
    let el = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok());
    Attachment::from_option(el, id)
}

/// All elements matching `selector` that are `HtmlElement`s, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    query_all_in(document.query_selector_all(selector).ok())
}

pub fn query_all_within(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    query_all_in(root.query_selector_all(selector).ok())
}

fn query_all_in(list: Option<web::NodeList>) -> Vec<web::HtmlElement> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Non-empty match list, or `TargetNotFound(selector)`.
pub fn require_all(
    document: &web::Document,
    selector: &'static str,
) -> Attachment<Vec<web::HtmlElement>> {
    let found = query_all(document, selector);
    Attachment::from_option((!found.is_empty()).then_some(found), selector)
}

#[inline]
pub fn add_click_listener(element: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Register a listener that lives as long as the page.
pub fn add_listener<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(window: &web::Window, ms: i32, f: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(f);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
}

/// Run `f` every `ms` milliseconds; returns the interval id for clearing.
pub fn set_interval(window: &web::Window, ms: i32, f: impl FnMut() + 'static) -> Option<i32> {
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )
        .ok();
    closure.forget();
    id
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Window inner size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Match the canvas backing store to its CSS size times the device pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
