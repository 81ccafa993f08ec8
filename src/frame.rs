use crate::core::{FrameLoops, LoopToken, PageHide};
use fnv::FnvHashMap;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drives per-frame callbacks with `requestAnimationFrame`.
///
/// `start` hands back a token; `stop` cancels the pending frame and releases
/// the callback so it never runs again.
#[derive(Clone)]
pub struct FrameScheduler {
    loops: Rc<RefCell<FrameLoops>>,
    slots: Rc<RefCell<FnvHashMap<LoopToken, TickSlot>>>,
    epoch: Instant,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            loops: Rc::new(RefCell::new(FrameLoops::new())),
            slots: Rc::new(RefCell::new(FnvHashMap::default())),
            epoch: Instant::now(),
        }
    }

    /// Call `on_frame(dt_sec)` once per display refresh until stopped.
    pub fn start(&self, mut on_frame: impl FnMut(f32) + 'static) -> LoopToken {
        let token = self.loops.borrow_mut().start();
        let slot: TickSlot = Rc::new(RefCell::new(None));
        let slot_tick = slot.clone();
        let loops = self.loops.clone();
        let slots = self.slots.clone();
        let epoch = self.epoch;
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let now_ms = epoch.elapsed().as_secs_f64() * 1000.0;
            let Some(dt) = loops.borrow_mut().begin_tick(token, now_ms) else {
                return;
            };
            on_frame(dt);
            // The callback may have stopped this loop.
            if !loops.borrow().is_running(token) {
                return;
            }
            if let Some(handle) = request_frame(&slot_tick) {
                loops.borrow_mut().set_pending(token, handle);
            }
        }) as Box<dyn FnMut()>));
        if let Some(handle) = request_frame(&slot) {
            self.loops.borrow_mut().set_pending(token, handle);
        }
        slots.borrow_mut().insert(token, slot);
        log::info!("[frame] loop {:?} started", token);
        token
    }

    pub fn stop(&self, token: LoopToken) {
        let pending = self.loops.borrow_mut().stop(token);
        if let (Some(handle), Some(w)) = (pending, web::window()) {
            _ = w.cancel_animation_frame(handle);
        }
        self.release(token);
        log::info!("[frame] loop {:?} stopped", token);
    }

    /// React to `pagehide`: keep loops for a cached page, stop them on unload.
    pub fn page_hidden(&self, hide: PageHide) {
        let count = self.loops.borrow().running();
        let pending = self.loops.borrow_mut().page_hidden(hide);
        if hide == PageHide::Cached {
            log::info!("[frame] page cached, keeping {} loop(s)", count);
            return;
        }
        if let Some(w) = web::window() {
            for handle in pending {
                _ = w.cancel_animation_frame(handle);
            }
        }
        let tokens: Vec<LoopToken> = self.slots.borrow().keys().copied().collect();
        for token in tokens {
            self.release(token);
        }
        log::info!("[frame] stopped {} loop(s)", count);
    }

    fn release(&self, token: LoopToken) {
        // Take the closure out before dropping so no RefCell borrow is held.
        let slot = self.slots.borrow_mut().remove(&token);
        if let Some(slot) = slot {
            let closure = slot.borrow_mut().take();
            drop(closure);
        }
    }
}

fn request_frame(slot: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let guard = slot.borrow();
    let closure = guard.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}
