use crate::constants::TILT_CARD_SELECTOR;
use crate::context::GreetingContext;
use crate::core::motion::{tilt_angles, tilt_reset, tilt_transform};
use crate::core::Attachment;
use crate::dom;
use crate::input;
use web_sys as web;

/// 3D tilt towards the pointer on memory and reason cards.
pub fn attach(ctx: &GreetingContext) -> Attachment<usize> {
    dom::require_all(&ctx.document, TILT_CARD_SELECTOR).map(|cards| {
        for card in &cards {
            let card_move = card.clone();
            dom::add_listener(card, "mousemove", move |ev: web::MouseEvent| {
                let (local, size) = input::pointer_in_element(&ev, &card_move);
                let (rx, ry) = tilt_angles(local, size);
                dom::set_style(&card_move, "transform", &tilt_transform(rx, ry));
            });
            let card_leave = card.clone();
            dom::add_listener(card, "mouseleave", move |_ev: web::MouseEvent| {
                dom::set_style(&card_leave, "transform", &tilt_reset());
            });
        }
        cards.len()
    })
}
