use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Pointer position relative to `el`'s top-left corner, plus the element size.
#[inline]
pub fn pointer_in_element(ev: &web::MouseEvent, el: &web::Element) -> (Vec2, Vec2) {
    let rect = el.get_bounding_client_rect();
    let local = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    (local, Vec2::new(rect.width() as f32, rect.height() as f32))
}
