use crate::constants::*;
use crate::context::GreetingContext;
use crate::core::effects::{
    ConfettiPiece, CONFETTI_COUNT, CONFETTI_LIFETIME_MS, CONFETTI_STAGGER_MS, FLAME_STAGGER_MS,
    WISH_DELAY_MS,
};
use crate::core::Attachment;
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct Cake {
    flames: Vec<web::HtmlElement>,
    confetti: Option<web::HtmlElement>,
    wish: Option<web::HtmlElement>,
    blown: Rc<Cell<bool>>,
}

/// Make `#birthday-cake` blow out its candles on the first click.
pub fn attach(ctx: &GreetingContext) -> Attachment<()> {
    dom::element_by_id::<web::HtmlElement>(&ctx.document, CAKE_ID).map(|el| {
        let cake = Cake {
            flames: dom::query_all(&ctx.document, FLAME_SELECTOR),
            confetti: dom::element_by_id(&ctx.document, CONFETTI_CONTAINER_ID).ok(),
            wish: dom::element_by_id(&ctx.document, FINAL_WISH_ID).ok(),
            blown: Rc::new(Cell::new(false)),
        };
        let ctx_click = ctx.clone();
        dom::add_click_listener(&el, move || blow_candles(&ctx_click, &cake));
    })
}

fn blow_candles(ctx: &GreetingContext, cake: &Cake) {
    if cake.blown.replace(true) {
        return;
    }
    log::info!("[cake] blowing out {} candles", cake.flames.len());

    for (i, flame) in cake.flames.iter().enumerate() {
        let flame = flame.clone();
        dom::set_timeout(&ctx.window, i as i32 * FLAME_STAGGER_MS, move || {
            _ = flame.class_list().add_1("blown-out");
        });
    }

    let ctx_wish = ctx.clone();
    let cake = cake.clone();
    dom::set_timeout(&ctx.window, WISH_DELAY_MS, move || {
        if let Some(container) = &cake.confetti {
            launch_confetti(&ctx_wish, container);
        }
        if let Some(wish) = &cake.wish {
            dom::set_style(wish, "display", "block");
            _ = wish.class_list().add_1("visible");
        }
        if let Ok(Some(hint)) = ctx_wish.document.query_selector(CAKE_INSTRUCTION_SELECTOR) {
            if let Some(hint) = hint.dyn_ref::<web::HtmlElement>() {
                dom::set_style(hint, "display", "none");
            }
        }
    });
}

fn launch_confetti(ctx: &GreetingContext, container: &web::HtmlElement) {
    for i in 0..CONFETTI_COUNT {
        let ctx_piece = ctx.clone();
        let container = container.clone();
        dom::set_timeout(&ctx.window, i as i32 * CONFETTI_STAGGER_MS, move || {
            let piece = ConfettiPiece::roll(&mut *ctx_piece.rng.borrow_mut());
            spawn_piece(&ctx_piece, &container, &piece);
        });
    }
}

fn spawn_piece(ctx: &GreetingContext, container: &web::HtmlElement, piece: &ConfettiPiece) {
    let Some(el) = ctx
        .document
        .create_element("div")
        .ok()
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    el.set_class_name("confetti-piece");
    el.set_text_content(Some(piece.shape));
    let styles = [
        ("left", format!("{:.2}%", piece.left_pct)),
        ("background-color", piece.background.to_string()),
        ("width", format!("{:.1}px", piece.width_px)),
        ("height", format!("{:.1}px", piece.height_px)),
        ("border-radius", piece.border_radius().to_string()),
        ("animation-duration", format!("{:.2}s", piece.duration_s)),
        ("animation-delay", format!("{:.2}s", piece.delay_s)),
        ("color", piece.color.to_string()),
        ("font-size", format!("{:.1}px", piece.font_px)),
        ("display", "flex".to_string()),
        ("align-items", "center".to_string()),
        ("justify-content", "center".to_string()),
    ];
    for (property, value) in &styles {
        dom::set_style(&el, property, value);
    }
    _ = container.append_child(&el);
    dom::set_timeout(&ctx.window, CONFETTI_LIFETIME_MS, move || el.remove());
}
