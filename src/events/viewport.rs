use crate::core::AmbientInput;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_ambient_scroll(window: &web::Window, ambient: Rc<RefCell<AmbientInput>>) {
    let win = window.clone();
    dom::add_listener(window, "scroll", move |_ev: web::Event| {
        let y = win.scroll_y().unwrap_or(0.0) as f32;
        ambient.borrow_mut().set_scroll(y);
    });
}

/// Call `on_resize(width, height)` with the new inner size whenever the
/// window is resized.
pub fn wire_resize(window: &web::Window, mut on_resize: impl FnMut(f32, f32) + 'static) {
    let win = window.clone();
    dom::add_listener(window, "resize", move |_ev: web::Event| {
        let (w, h) = dom::viewport_size(&win);
        on_resize(w, h);
    });
}
