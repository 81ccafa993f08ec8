use crate::context::GreetingContext;
use crate::core::effects::{Sparkle, SPARKLE_LIFETIME_MS};
use crate::dom;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Leave a short-lived sparkle glyph behind the pointer.
pub fn attach(ctx: &GreetingContext) {
    let ctx_move = ctx.clone();
    dom::add_listener(&ctx.window, "pointermove", move |ev: web::PointerEvent| {
        let p = input::pointer_client(&ev);
        let sparkle = Sparkle::roll(&mut *ctx_move.rng.borrow_mut(), p.x, p.y);
        if let Some(s) = sparkle {
            spawn(&ctx_move, &s);
        }
    });
}

fn spawn(ctx: &GreetingContext, s: &Sparkle) {
    let Some(body) = ctx.document.body() else {
        return;
    };
    let Some(el) = ctx
        .document
        .create_element("div")
        .ok()
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    _ = el.style().set_css_text(&format!(
        "position: fixed; pointer-events: none; z-index: 9999; left: {:.0}px; top: {:.0}px; \
         font-size: {:.1}px; transition: all 1s ease; opacity: 1; color: hsl({:.0}, 80%, 70%);",
        s.x, s.y, s.font_px, s.hue
    ));
    el.set_text_content(Some(s.glyph));
    _ = body.append_child(&el);

    // Apply the end state on the next frame so the transition runs.
    let el_anim = el.clone();
    let transform = format!(
        "translate({:.1}px, {:.1}px) scale(0)",
        s.drift_x, s.drift_y
    );
    let cb = Closure::once_into_js(move || {
        dom::set_style(&el_anim, "transform", &transform);
        dom::set_style(&el_anim, "opacity", "0");
    });
    _ = ctx.window.request_animation_frame(cb.unchecked_ref());

    dom::set_timeout(&ctx.window, SPARKLE_LIFETIME_MS, move || el.remove());
}
