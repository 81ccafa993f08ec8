// Host-side tests for pointer-driven transforms.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod motion {
    include!("../src/core/motion.rs");
}

use glam::Vec2;
use motion::*;

#[test]
fn centred_pointer_leaves_orbs_in_place() {
    let offsets = orb_offsets(Vec2::new(400.0, 300.0), Vec2::new(800.0, 600.0), 3);
    assert_eq!(offsets.len(), 3);
    assert!(offsets.iter().all(|o| *o == Vec2::ZERO));
}

#[test]
fn deeper_orbs_move_further() {
    let offsets = orb_offsets(Vec2::new(800.0, 300.0), Vec2::new(800.0, 600.0), 3);
    assert_eq!(offsets[0], Vec2::new(15.0, 0.0));
    assert_eq!(offsets[1], Vec2::new(30.0, 0.0));
    assert_eq!(offsets[2], Vec2::new(45.0, 0.0));
    assert!(!offsets.spilled());
}

#[test]
fn empty_viewport_gives_no_offset() {
    assert_eq!(normalized_pointer(Vec2::new(5.0, 5.0), Vec2::ZERO), Vec2::ZERO);
}

#[test]
fn tilt_is_flat_at_the_card_centre() {
    assert_eq!(tilt_angles(Vec2::new(100.0, 50.0), Vec2::new(200.0, 100.0)), (0.0, 0.0));
}

#[test]
fn tilt_leans_toward_the_corner() {
    let (rx, ry) = tilt_angles(Vec2::ZERO, Vec2::new(200.0, 100.0));
    assert_eq!(rx, TILT_MAX_DEG);
    assert_eq!(ry, -TILT_MAX_DEG);

    let (rx, ry) = tilt_angles(Vec2::new(200.0, 100.0), Vec2::new(200.0, 100.0));
    assert_eq!(rx, -TILT_MAX_DEG);
    assert_eq!(ry, TILT_MAX_DEG);
}

#[test]
fn zero_sized_card_does_not_tilt() {
    assert_eq!(tilt_angles(Vec2::new(3.0, 3.0), Vec2::ZERO), (0.0, 0.0));
}

#[test]
fn transforms_format_as_css() {
    assert_eq!(
        tilt_transform(5.0, -2.5),
        "perspective(1000px) rotateX(5.00deg) rotateY(-2.50deg) translateY(-4px)"
    );
    assert_eq!(
        tilt_reset(),
        "perspective(1000px) rotateX(0) rotateY(0) translateY(0)"
    );
}
