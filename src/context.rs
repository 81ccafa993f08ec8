use crate::core::PageHide;
use crate::frame::FrameScheduler;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything the page components share, built once at start-up and handed
/// to each component's `attach`.
#[derive(Clone)]
pub struct GreetingContext {
    pub window: web::Window,
    pub document: web::Document,
    pub rng: Rc<RefCell<StdRng>>,
    pub frames: FrameScheduler,
}

impl GreetingContext {
    pub fn new() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        Ok(Self {
            window,
            document,
            rng: Rc::new(RefCell::new(StdRng::from_entropy())),
            frames: FrameScheduler::new(),
        })
    }

    /// Stop every frame loop when the page is unloaded. A page going into
    /// the back/forward cache keeps its loops for the restore.
    pub fn wire_teardown(&self) {
        let frames = self.frames.clone();
        crate::dom::add_listener(
            &self.window,
            "pagehide",
            move |ev: web::PageTransitionEvent| {
                frames.page_hidden(PageHide::from_persisted(ev.persisted()));
            },
        );
    }
}
