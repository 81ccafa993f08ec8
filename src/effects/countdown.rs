use crate::constants::*;
use crate::context::GreetingContext;
use crate::core::countdown::{
    countdown, Countdown, ARRIVED_GLYPHS, ARRIVED_MESSAGE, DEFAULT_TARGET_ISO,
};
use crate::core::Attachment;
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

struct CountdownView {
    cells: [web::HtmlElement; 4],
    message: web::HtmlElement,
}

/// Tick the countdown cells once per second until the target is reached.
pub fn attach(ctx: &GreetingContext) -> Attachment<f64> {
    let view = lookup(&ctx.document);
    let view = match view {
        Attachment::Attached(v) => v,
        Attachment::TargetNotFound(s) => return Attachment::TargetNotFound(s),
    };
    let target_ms = target_ms(&ctx.document);

    if !update(ctx, &view, target_ms) {
        return Attachment::Attached(target_ms);
    }

    let ctx_tick = ctx.clone();
    let interval: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let interval_tick = interval.clone();
    let refresh = move || {
        if !update(&ctx_tick, &view, target_ms) {
            if let Some(id) = interval_tick.take() {
                ctx_tick.window.clear_interval_with_handle(id);
                log::info!("[countdown] target reached");
            }
        }
    };
    interval.set(dom::set_interval(&ctx.window, COUNTDOWN_INTERVAL_MS, refresh));
    Attachment::Attached(target_ms)
}

fn lookup(document: &web::Document) -> Attachment<CountdownView> {
    let cell = |id: &'static str| dom::element_by_id::<web::HtmlElement>(document, id);
    cell(COUNTDOWN_CELL_IDS[0]).and_then(|days| {
        cell(COUNTDOWN_CELL_IDS[1]).and_then(|hours| {
            cell(COUNTDOWN_CELL_IDS[2]).and_then(|minutes| {
                cell(COUNTDOWN_CELL_IDS[3]).and_then(|seconds| {
                    cell(COUNTDOWN_MSG_ID).map(|message| CountdownView {
                        cells: [days, hours, minutes, seconds],
                        message,
                    })
                })
            })
        })
    })
}

/// `data-target` on `#countdown` when it parses, else the built-in date.
fn target_ms(document: &web::Document) -> f64 {
    let custom = document
        .get_element_by_id(COUNTDOWN_ID)
        .and_then(|el| el.get_attribute(COUNTDOWN_TARGET_ATTRIBUTE))
        .map(|s| js_sys::Date::parse(&s))
        .filter(|ms| ms.is_finite());
    match custom {
        Some(ms) => ms,
        None => js_sys::Date::parse(DEFAULT_TARGET_ISO),
    }
}

/// Refresh the view; `false` once the countdown has finished.
fn update(ctx: &GreetingContext, view: &CountdownView, target_ms: f64) -> bool {
    match countdown(target_ms, js_sys::Date::now()) {
        Countdown::Arrived => {
            for (el, glyph) in view.cells.iter().zip(ARRIVED_GLYPHS) {
                el.set_text_content(Some(glyph));
            }
            view.message.set_text_content(Some(ARRIVED_MESSAGE));
            dom::set_style(&view.message, "font-size", "1.6rem");
            dom::set_style(&view.message, "color", "#ff6b9d");
            false
        }
        Countdown::Running(remaining) => {
            for (el, text) in view.cells.iter().zip(remaining.cells()) {
                flip_to(ctx, el, text);
            }
            true
        }
    }
}

/// Nudge the cell up and fade it, then swap in the new text.
fn flip_to(ctx: &GreetingContext, el: &web::HtmlElement, text: String) {
    if el.text_content().as_deref() == Some(text.as_str()) {
        return;
    }
    dom::set_style(el, "transform", "translateY(-4px)");
    dom::set_style(el, "opacity", "0.5");
    let el = el.clone();
    dom::set_timeout(&ctx.window, COUNTDOWN_FLIP_MS, move || {
        el.set_text_content(Some(&text));
        dom::set_style(&el, "transform", "translateY(0)");
        dom::set_style(&el, "opacity", "1");
    });
}
