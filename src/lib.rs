#![cfg(target_arch = "wasm32")]
use crate::core::Attachment;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod background;
mod constants;
mod context;
mod core;
mod dom;
mod effects;
mod events;
mod frame;
mod input;
mod render;

use context::GreetingContext;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("birthday-greeting starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let ctx = GreetingContext::new()?;
    ctx.wire_teardown();

    // Decorations first: they do not depend on the background.
    report("floating hearts", effects::hearts::attach(&ctx));
    report("parallax orbs", effects::parallax::attach(&ctx));
    effects::sparkle::attach(&ctx);
    report("countdown", effects::countdown::attach(&ctx));
    report("cake", effects::cake::attach(&ctx));
    report("typewriter", effects::typewriter::attach(&ctx));
    report("card tilt", effects::tilt::attach(&ctx));

    // The background canvas is the one required target.
    let token = background::attach(&ctx).await?.required()?;
    log::info!("[background] running as loop {:?}", token);
    Ok(())
}

/// Optional components: absence is logged, not fatal.
fn report<T>(name: &str, attachment: Attachment<T>) {
    match attachment.missing_selector() {
        None => log::info!("[{}] attached", name),
        Some(selector) => log::warn!("[{}] target not found: {}", name, selector),
    }
}
