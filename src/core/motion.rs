// Pointer-driven transforms for hero orbs and cards.

use glam::Vec2;
use smallvec::SmallVec;

pub const PARALLAX_STEP_PX: f32 = 15.0;
pub const TILT_MAX_DEG: f32 = 5.0;
pub const TILT_LIFT_PX: f32 = 4.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;

/// Pointer mapped to [-1, 1] across the viewport.
#[inline]
pub fn normalized_pointer(pointer: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    (pointer / viewport - Vec2::splat(0.5)) * 2.0
}

/// Translation for each of `count` orbs; deeper orbs move further.
pub fn orb_offsets(pointer: Vec2, viewport: Vec2, count: usize) -> SmallVec<[Vec2; 4]> {
    let n = normalized_pointer(pointer, viewport);
    (0..count)
        .map(|i| n * ((i + 1) as f32 * PARALLAX_STEP_PX))
        .collect()
}

/// Card tilt in degrees `(rotate_x, rotate_y)` for a pointer at `local`
/// inside a card of `size`.
pub fn tilt_angles(local: Vec2, size: Vec2) -> (f32, f32) {
    let center = size * 0.5;
    if center.x <= 0.0 || center.y <= 0.0 {
        return (0.0, 0.0);
    }
    let rotate_x = ((local.y - center.y) / center.y) * -TILT_MAX_DEG;
    let rotate_y = ((local.x - center.x) / center.x) * TILT_MAX_DEG;
    (rotate_x, rotate_y)
}

pub fn tilt_transform(rotate_x: f32, rotate_y: f32) -> String {
    format!(
        "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) translateY(-{}px)",
        TILT_PERSPECTIVE_PX, rotate_x, rotate_y, TILT_LIFT_PX
    )
}

pub fn tilt_reset() -> String {
    format!(
        "perspective({}px) rotateX(0) rotateY(0) translateY(0)",
        TILT_PERSPECTIVE_PX
    )
}
