use crate::core::AmbientInput;
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Feed window pointer movement into the ambient smoother.
pub fn wire_ambient_pointer(window: &web::Window, ambient: Rc<RefCell<AmbientInput>>) {
    let ambient_move = ambient.clone();
    dom::add_listener(window, "pointermove", move |ev: web::PointerEvent| {
        let p = input::pointer_client(&ev);
        ambient_move.borrow_mut().set_pointer(p.x, p.y);
    });

    // The pointer leaving the document should not keep pushing particles.
    if let Some(document) = window.document() {
        dom::add_listener(&document, "pointerout", move |ev: web::PointerEvent| {
            if ev.related_target().is_none() {
                ambient.borrow_mut().clear_pointer();
            }
        });
    }
}
