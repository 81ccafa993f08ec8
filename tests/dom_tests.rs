// Host-side checks for the DOM helpers. The bindings only run in a browser,
// so these tests pin down what the helpers accept at compile time.

#![allow(dead_code)]
mod core {
    pub mod attach {
        include!("../src/core/attach.rs");
    }
    pub use attach::Attachment;
}
mod dom {
    include!("../src/dom.rs");
}

use web_sys as web;

fn wire_typed_listeners(target: &web::EventTarget) {
    dom::add_listener(target, "pointermove", |_ev: web::PointerEvent| {});
    dom::add_listener(target, "mousemove", |_ev: web::MouseEvent| {});
    dom::add_listener(target, "scroll", |_ev: web::Event| {});
    dom::add_listener(target, "pagehide", |_ev: web::PageTransitionEvent| {});
}

#[test]
fn listener_helper_accepts_dom_event_types() {
    let wire: fn(&web::EventTarget) = wire_typed_listeners;
    let _ = wire;
}

#[test]
fn missing_element_reports_its_id() {
    let missing: crate::core::Attachment<web::HtmlCanvasElement> =
        crate::core::Attachment::from_option(None, "particles-canvas");
    assert_eq!(missing.missing_selector(), Some("particles-canvas"));
}
