use crate::constants::HEARTS_CONTAINER_ID;
use crate::context::GreetingContext;
use crate::core::effects::{
    FloatingHeart, HEART_INITIAL_BATCH, HEART_INITIAL_STAGGER_MS, HEART_INTERVAL_MS,
    HEART_LIFETIME_MS,
};
use crate::core::Attachment;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Start the floating emoji stream inside `#floating-hearts`.
pub fn attach(ctx: &GreetingContext) -> Attachment<()> {
    dom::element_by_id::<web::HtmlElement>(&ctx.document, HEARTS_CONTAINER_ID).map(|container| {
        for i in 0..HEART_INITIAL_BATCH {
            let ctx_once = ctx.clone();
            let container_once = container.clone();
            dom::set_timeout(&ctx.window, i as i32 * HEART_INITIAL_STAGGER_MS, move || {
                spawn(&ctx_once, &container_once);
            });
        }
        let ctx_tick = ctx.clone();
        _ = dom::set_interval(&ctx.window, HEART_INTERVAL_MS, move || {
            spawn(&ctx_tick, &container);
        });
    })
}

fn spawn(ctx: &GreetingContext, container: &web::HtmlElement) {
    let heart = FloatingHeart::roll(&mut *ctx.rng.borrow_mut());
    let Some(el) = ctx
        .document
        .create_element("span")
        .ok()
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    el.set_class_name("floating-heart");
    el.set_text_content(Some(heart.glyph));
    dom::set_style(&el, "left", &format!("{:.2}%", heart.left_pct));
    dom::set_style(&el, "font-size", &format!("{:.2}rem", heart.font_rem));
    dom::set_style(&el, "animation-duration", &format!("{:.2}s", heart.duration_s));
    dom::set_style(&el, "animation-delay", &format!("{:.2}s", heart.delay_s));
    _ = container.append_child(&el);
    dom::set_timeout(&ctx.window, HEART_LIFETIME_MS, move || el.remove());
}
