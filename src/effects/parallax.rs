use crate::constants::ORB_SELECTOR;
use crate::context::GreetingContext;
use crate::core::motion::orb_offsets;
use crate::core::Attachment;
use crate::dom;
use crate::input;
use glam::Vec2;
use web_sys as web;

/// Shift the hero gradient orbs with the pointer, deeper orbs further.
pub fn attach(ctx: &GreetingContext) -> Attachment<usize> {
    dom::require_all(&ctx.document, ORB_SELECTOR).map(|orbs| {
        let count = orbs.len();
        let win = ctx.window.clone();
        dom::add_listener(&ctx.window, "pointermove", move |ev: web::PointerEvent| {
            let (w, h) = dom::viewport_size(&win);
            let offsets = orb_offsets(input::pointer_client(&ev), Vec2::new(w, h), orbs.len());
            for (orb, off) in orbs.iter().zip(offsets) {
                dom::set_style(
                    orb,
                    "transform",
                    &format!("translate({:.1}px, {:.1}px)", off.x, off.y),
                );
            }
        });
        count
    })
}
