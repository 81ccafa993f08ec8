// Bookkeeping for self-rescheduling frame loops.
//
// The browser side owns the actual `requestAnimationFrame` callbacks; this
// module decides whether a loop may still tick, how much time passed, and
// which pending frame must be cancelled when a loop is stopped.

use fnv::FnvHashMap;

/// Longest step handed to a loop; longer gaps (background tabs) are clamped.
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoopToken(u32);

/// How the page went away, from `PageTransitionEvent.persisted` on `pagehide`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageHide {
    /// Frozen in the back/forward cache and may be shown again.
    Cached,
    Unload,
}

impl PageHide {
    pub fn from_persisted(persisted: bool) -> Self {
        if persisted {
            PageHide::Cached
        } else {
            PageHide::Unload
        }
    }
}

#[derive(Debug, Default)]
struct LoopState {
    last_ms: Option<f64>,
    pending: Option<i32>,
}

#[derive(Debug, Default)]
pub struct FrameLoops {
    next: u32,
    loops: FnvHashMap<LoopToken, LoopState>,
}

impl FrameLoops {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) -> LoopToken {
        let token = LoopToken(self.next);
        self.next = self.next.wrapping_add(1);
        self.loops.insert(token, LoopState::default());
        token
    }

    /// Deregister a loop. Returns the frame request that must be cancelled so
    /// the loop does not tick again.
    pub fn stop(&mut self, token: LoopToken) -> Option<i32> {
        self.loops.remove(&token).and_then(|s| s.pending)
    }

    pub fn stop_all(&mut self) -> Vec<i32> {
        self.loops.drain().filter_map(|(_, s)| s.pending).collect()
    }

    /// Loops survive a cached page so they resume on restore; an unload
    /// stops them all. Returns the frame requests to cancel.
    pub fn page_hidden(&mut self, hide: PageHide) -> Vec<i32> {
        match hide {
            PageHide::Cached => Vec::new(),
            PageHide::Unload => self.stop_all(),
        }
    }

    pub fn is_running(&self, token: LoopToken) -> bool {
        self.loops.contains_key(&token)
    }

    pub fn running(&self) -> usize {
        self.loops.len()
    }

    /// Remember the outstanding frame request for `token`.
    pub fn set_pending(&mut self, token: LoopToken, handle: i32) {
        if let Some(s) = self.loops.get_mut(&token) {
            s.pending = Some(handle);
        }
    }

    /// Called when a frame fires. `None` means the loop was stopped and must
    /// neither run nor reschedule; otherwise the clamped step in seconds.
    pub fn begin_tick(&mut self, token: LoopToken, now_ms: f64) -> Option<f32> {
        let s = self.loops.get_mut(&token)?;
        s.pending = None;
        let dt = match s.last_ms.replace(now_ms) {
            Some(prev) => (((now_ms - prev) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT_SEC),
            None => 0.0,
        };
        Some(dt)
    }
}
