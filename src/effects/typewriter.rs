use crate::constants::{TYPEWRITER_ID, TYPEWRITER_VISIBLE_THRESHOLD};
use crate::context::GreetingContext;
use crate::core::typewriter::{paragraph_delay_ms, TypewriterLine, CHAR_INTERVAL_MS};
use crate::core::Attachment;
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Type out the paragraphs of `#typewriter-text` the first time it scrolls
/// into view. Returns the number of paragraphs.
pub fn attach(ctx: &GreetingContext) -> Attachment<usize> {
    let wrapper = match dom::element_by_id::<web::HtmlElement>(&ctx.document, TYPEWRITER_ID) {
        Attachment::Attached(w) => w,
        Attachment::TargetNotFound(s) => return Attachment::TargetNotFound(s),
    };
    let paragraphs = dom::query_all_within(&wrapper, "p");
    let count = paragraphs.len();
    let started = Rc::new(Cell::new(false));

    let ctx_obs = ctx.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() && !started.replace(true) {
                    observer.unobserve(&entry.target());
                    start(&ctx_obs, &paragraphs);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(TYPEWRITER_VISIBLE_THRESHOLD));
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        Ok(observer) => observer.observe(&wrapper),
        Err(e) => log::warn!("[typewriter] observer unavailable: {:?}", e),
    }
    callback.forget();
    Attachment::Attached(count)
}

fn start(ctx: &GreetingContext, paragraphs: &[web::HtmlElement]) {
    log::info!("[typewriter] revealing {} paragraphs", paragraphs.len());
    for (i, p) in paragraphs.iter().enumerate() {
        let line = TypewriterLine::new(&p.text_content().unwrap_or_default());
        p.set_text_content(Some(""));
        dom::set_style(p, "opacity", "1");
        let ctx_line = ctx.clone();
        let p = p.clone();
        dom::set_timeout(&ctx.window, paragraph_delay_ms(i), move || {
            type_next(ctx_line, p, line);
        });
    }
}

// One character per timeout; the chain ends with the line.
fn type_next(ctx: GreetingContext, el: web::HtmlElement, mut line: TypewriterLine) {
    let more = line.step();
    el.set_text_content(Some(line.visible()));
    if more {
        let window = ctx.window.clone();
        dom::set_timeout(&window, CHAR_INTERVAL_MS, move || type_next(ctx, el, line));
    }
}
