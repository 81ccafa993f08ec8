// Host-side tests for ambient input smoothing.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod smoothing {
    include!("../src/core/smoothing.rs");
}

use glam::Vec2;
use smoothing::*;

#[test]
fn converges_monotonically_without_overshoot() {
    let mut s = Smoothed::new(0.0, 0.1);
    s.set_target(10.0);
    let mut prev = s.current;
    for _ in 0..200 {
        let v = s.step();
        assert!(v >= prev);
        assert!(v <= 10.0);
        prev = v;
    }
    assert!((s.current - 10.0).abs() < 1e-3);
}

#[test]
fn first_step_moves_by_factor() {
    let mut s = Smoothed::new(0.0, 0.1);
    s.set_target(100.0);
    assert!((s.step() - 10.0).abs() < 1e-5);
    assert!((s.step() - 19.0).abs() < 1e-4);
}

#[test]
fn factor_is_clamped() {
    let step_once = |factor: f32| {
        let mut s = Smoothed::new(0.0, factor);
        s.set_target(100.0);
        s.step()
    };
    assert_eq!(step_once(5.0), 100.0);
    assert_eq!(step_once(1.0), 100.0);
    assert_eq!(step_once(f32::NAN), 100.0);
    assert!((step_once(0.0) - 100.0 * MIN_FACTOR).abs() < 1e-6);
    assert!((step_once(-3.0) - 100.0 * MIN_FACTOR).abs() < 1e-6);
}

#[test]
fn snap_skips_inertia() {
    let mut s = Smoothed::new(0.0, 0.1);
    s.snap(5.0);
    assert_eq!(s.current, 5.0);
    assert_eq!(s.step(), 5.0);
}

#[test]
fn pointer_is_unknown_until_seen() {
    let mut input = AmbientInput::new(0.1, 0.05);
    assert_eq!(input.pointer(), None);
    assert_eq!(input.pointer_normalized(), Vec2::ZERO);

    input.set_pointer(300.0, 200.0);
    assert_eq!(input.pointer(), Some(Vec2::new(300.0, 200.0)));
}

#[test]
fn later_pointer_moves_are_smoothed() {
    let mut input = AmbientInput::new(0.1, 0.05);
    input.set_pointer(0.0, 0.0);
    input.set_pointer(100.0, 50.0);
    input.step();
    let p = input.pointer().unwrap();
    assert!((p.x - 10.0).abs() < 1e-5);
    assert!((p.y - 5.0).abs() < 1e-5);
}

#[test]
fn clearing_pointer_resnaps_on_return() {
    let mut input = AmbientInput::new(0.1, 0.05);
    input.set_pointer(10.0, 10.0);
    input.clear_pointer();
    assert_eq!(input.pointer(), None);

    input.set_pointer(500.0, 400.0);
    assert_eq!(input.pointer(), Some(Vec2::new(500.0, 400.0)));
}

#[test]
fn normalized_pointer_spans_viewport() {
    let mut input = AmbientInput::new(1.0, 1.0);
    input.set_viewport(800.0, 600.0);
    input.set_pointer(400.0, 300.0);
    assert_eq!(input.pointer_normalized(), Vec2::ZERO);

    input.set_pointer(2000.0, -50.0);
    input.step();
    assert_eq!(input.pointer_normalized(), Vec2::new(1.0, -1.0));
}

#[test]
fn scroll_trails_its_target() {
    let mut input = AmbientInput::new(0.1, 0.05);
    input.set_scroll(200.0);
    input.step();
    assert!((input.scroll_offset() - 10.0).abs() < 1e-4);
    for _ in 0..500 {
        input.step();
    }
    assert!((input.scroll_offset() - 200.0).abs() < 1e-2);
}

#[test]
fn degenerate_viewport_is_clamped() {
    let mut input = AmbientInput::new(0.1, 0.05);
    input.set_viewport(0.0, -10.0);
    assert_eq!(input.viewport(), Vec2::ONE);
}
