// Exponential smoothing of ambient input (pointer and scroll).
//
// Every tracked value moves a fixed fraction of the remaining distance to its
// target on each tick, which gives the background a little inertia.

use glam::Vec2;

/// Smallest factor accepted; a zero factor would freeze the value forever.
pub const MIN_FACTOR: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothed {
    pub current: f32,
    pub target: f32,
    factor: f32,
}

impl Smoothed {
    /// Factor is clamped into (0, 1]; NaN falls back to 1 (direct assignment).
    pub fn new(value: f32, factor: f32) -> Self {
        let factor = if factor.is_nan() {
            1.0
        } else {
            factor.clamp(MIN_FACTOR, 1.0)
        };
        Self {
            current: value,
            target: value,
            factor,
        }
    }

    #[inline]
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump straight to `value` with no inertia.
    pub fn snap(&mut self, value: f32) {
        self.current = value;
        self.target = value;
    }

    #[inline]
    pub fn step(&mut self) -> f32 {
        self.current += (self.target - self.current) * self.factor;
        self.current
    }
}

/// Pointer and scroll state shared between event handlers and the field.
#[derive(Clone, Debug)]
pub struct AmbientInput {
    pub pointer_x: Smoothed,
    pub pointer_y: Smoothed,
    pub scroll: Smoothed,
    pointer_seen: bool,
    viewport: Vec2,
}

impl AmbientInput {
    pub fn new(pointer_factor: f32, scroll_factor: f32) -> Self {
        Self {
            pointer_x: Smoothed::new(0.0, pointer_factor),
            pointer_y: Smoothed::new(0.0, pointer_factor),
            scroll: Smoothed::new(0.0, scroll_factor),
            pointer_seen: false,
            viewport: Vec2::ONE,
        }
    }

    /// Record a pointer position. The first one snaps so the smoothed pointer
    /// does not sweep in from the origin.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        if self.pointer_seen {
            self.pointer_x.set_target(x);
            self.pointer_y.set_target(y);
        } else {
            self.pointer_x.snap(x);
            self.pointer_y.snap(y);
            self.pointer_seen = true;
        }
    }

    /// Forget the pointer, e.g. when it leaves the page.
    pub fn clear_pointer(&mut self) {
        self.pointer_seen = false;
    }

    pub fn set_scroll(&mut self, offset: f32) {
        self.scroll.set_target(offset);
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(1.0), height.max(1.0));
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Advance all smoothed values by one tick.
    pub fn step(&mut self) {
        self.pointer_x.step();
        self.pointer_y.step();
        self.scroll.step();
    }

    /// Smoothed pointer position, `None` until a pointer has been seen.
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer_seen
            .then(|| Vec2::new(self.pointer_x.current, self.pointer_y.current))
    }

    /// Smoothed pointer mapped to [-1, 1] on both axes; centre when unknown.
    pub fn pointer_normalized(&self) -> Vec2 {
        match self.pointer() {
            Some(p) => ((p / self.viewport) * 2.0 - Vec2::ONE).clamp(Vec2::NEG_ONE, Vec2::ONE),
            None => Vec2::ZERO,
        }
    }

    #[inline]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll.current
    }
}
