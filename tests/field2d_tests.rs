// Host-side tests for the flat particle field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod field2d {
        include!("../src/core/field2d.rs");
    }
    pub mod smoothing {
        include!("../src/core/smoothing.rs");
    }
}

use crate::core::config::{CountFormula, FieldConfig, Interaction};
use crate::core::field2d::*;
use crate::core::smoothing::AmbientInput;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn ambient() -> AmbientInput {
    let cfg = FieldConfig::particles_2d();
    AmbientInput::new(cfg.pointer_smoothing, cfg.scroll_smoothing)
}

fn assert_inside(field: &ParticleField) {
    let size = field.size();
    for p in field.particles() {
        assert!(
            p.pos.x >= 0.0 && p.pos.x < size.x,
            "x {} outside [0, {})",
            p.pos.x,
            size.x
        );
        assert!(
            p.pos.y >= 0.0 && p.pos.y < size.y,
            "y {} outside [0, {})",
            p.pos.y,
            size.y
        );
    }
}

#[test]
fn count_follows_viewport_width() {
    let mut rng = seeded();
    let field = ParticleField::new(FieldConfig::particles_2d(), 1200.0, 800.0, &mut rng);
    assert_eq!(field.len(), 100);

    let wide = ParticleField::new(FieldConfig::particles_2d(), 4000.0, 800.0, &mut rng);
    assert_eq!(wide.len(), 120);

    let empty = ParticleField::new(FieldConfig::particles_2d(), 0.0, 800.0, &mut rng);
    assert!(empty.is_empty());
}

#[test]
fn spawned_particles_respect_ranges() {
    let mut rng = seeded();
    let field = ParticleField::new(FieldConfig::particles_2d(), 1200.0, 800.0, &mut rng);
    assert_inside(&field);
    for p in field.particles() {
        assert!(p.radius >= 0.5 && p.radius <= 2.5);
        assert!(p.alpha >= 0.1 && p.alpha <= 0.6);
        assert!(p.vel.x.abs() <= 0.15 && p.vel.y.abs() <= 0.15);
        assert!(p.pulse_speed >= 0.01 && p.pulse_speed <= 0.03);
        assert!(p.color < field.config().palette.len());
        assert_eq!(p.origin, p.pos);
    }
}

#[test]
fn drift_stays_inside_the_viewport() {
    let mut rng = seeded();
    let mut field = ParticleField::new(FieldConfig::particles_2d(), 640.0, 480.0, &mut rng);
    let input = ambient();
    for _ in 0..5000 {
        field.tick(&input);
    }
    assert_inside(&field);
}

#[test]
fn velocity_is_untouched_without_a_pointer() {
    let mut rng = seeded();
    let mut field = ParticleField::new(FieldConfig::particles_2d(), 640.0, 480.0, &mut rng);
    let before: Vec<Vec2> = field.particles().iter().map(|p| p.vel).collect();
    let input = ambient();
    for _ in 0..100 {
        field.tick(&input);
    }
    let after: Vec<Vec2> = field.particles().iter().map(|p| p.vel).collect();
    assert_eq!(before, after);
}

#[test]
fn resize_replaces_the_batch_inside_new_bounds() {
    let mut rng = seeded();
    let mut field = ParticleField::new(FieldConfig::particles_2d(), 1200.0, 800.0, &mut rng);
    field.resize(600.0, 300.0, &mut rng);
    assert_eq!(field.len(), 50);
    assert_eq!(field.size(), Vec2::new(600.0, 300.0));
    assert_inside(&field);
}

#[test]
fn wrap_maps_into_half_open_range() {
    assert_eq!(wrap(10.0, 100.0), 10.0);
    assert_eq!(wrap(100.0, 100.0), 0.0);
    assert_eq!(wrap(101.0, 100.0), 1.0);
    assert!((wrap(-1.0, 100.0) - 99.0).abs() < 1e-4);
    assert!(wrap(-1e-9, 100.0) < 100.0);
    assert_eq!(wrap(5.0, 0.0), 0.0);
}

#[test]
fn repulsion_pushes_away_from_pointer() {
    let ia = Interaction {
        radius: 150.0,
        strength: 0.02,
    };
    let pos = Vec2::new(100.0, 100.0);
    let pointer = Vec2::new(150.0, 100.0);
    let delta = repulsion(pos, pointer, &ia);

    assert!(delta.dot(pos - pointer) > 0.0);
    let expected = (150.0 - 50.0) / 150.0 * 0.02;
    assert!((delta.length() - expected).abs() < 1e-6);
    assert!((delta.x + 0.013_333).abs() < 1e-5);
    assert_eq!(delta.y, 0.0);
}

#[test]
fn repulsion_is_zero_outside_radius_and_at_the_pointer() {
    let ia = Interaction {
        radius: 150.0,
        strength: 0.02,
    };
    let p = Vec2::new(10.0, 10.0);
    assert_eq!(repulsion(p, p, &ia), Vec2::ZERO);
    assert_eq!(repulsion(p, p + Vec2::new(150.0, 0.0), &ia), Vec2::ZERO);
    assert_eq!(repulsion(p, p + Vec2::new(0.0, 400.0), &ia), Vec2::ZERO);
}

#[test]
fn pointer_nudges_nearby_particles() {
    let mut rng = seeded();
    let config = FieldConfig {
        count: CountFormula::Fixed(200),
        ..FieldConfig::particles_2d()
    };
    let mut field = ParticleField::new(config, 400.0, 400.0, &mut rng);
    let before: Vec<Vec2> = field.particles().iter().map(|p| p.vel).collect();

    let mut input = ambient();
    input.set_pointer(200.0, 200.0);
    field.tick(&input);

    let mut pushed = 0;
    for (old, p) in before.iter().zip(field.particles()) {
        let delta = p.vel - *old;
        if delta != Vec2::ZERO {
            pushed += 1;
        }
    }
    assert!(pushed > 0);
}

#[test]
fn links_join_only_close_pairs() {
    let mut rng = seeded();
    let mut field = ParticleField::new(FieldConfig::particles_2d(), 800.0, 600.0, &mut rng);
    field.tick(&ambient());
    let mut links = Vec::new();
    field.links(&mut links);
    assert!(!links.is_empty());

    let ps = field.particles();
    for l in &links {
        assert!(l.a < l.b);
        let d = ps[l.a].pos.distance(ps[l.b].pos);
        assert!(d < 120.0);
        let expected = (1.0 - d / 120.0) * 0.15;
        assert!((l.alpha - expected).abs() < 1e-6);
    }

    let linked = links.len();
    let close = (0..ps.len())
        .flat_map(|i| (i + 1..ps.len()).map(move |j| (i, j)))
        .filter(|&(i, j)| ps[i].pos.distance(ps[j].pos) < 120.0)
        .count();
    assert_eq!(linked, close);
}

#[test]
fn links_are_empty_when_disabled() {
    let mut rng = seeded();
    let config = FieldConfig {
        link_distance: None,
        ..FieldConfig::particles_2d()
    };
    let field = ParticleField::new(config, 800.0, 600.0, &mut rng);
    let mut links = vec![Link {
        a: 0,
        b: 1,
        alpha: 1.0,
    }];
    field.links(&mut links);
    assert!(links.is_empty());
}

#[test]
fn appearance_applies_pulse_and_floors() {
    let p = Particle {
        pos: Vec2::ZERO,
        vel: Vec2::ZERO,
        origin: Vec2::ZERO,
        radius: 1.0,
        alpha: 0.1,
        pulse: -std::f32::consts::FRAC_PI_2,
        pulse_speed: 0.01,
        color: 0,
    };
    let look = p.appearance();
    assert!((look.radius - 0.7).abs() < 1e-6);
    assert_eq!(look.alpha, 0.05);
    assert!((look.glow_radius - 2.1).abs() < 1e-5);
    assert_eq!(look.glow_alpha, 0.01);
}

#[test]
fn one_tick_moves_by_velocity_unless_wrapped() {
    let mut rng = seeded();
    let mut field = ParticleField::new(FieldConfig::particles_2d(), 900.0, 700.0, &mut rng);
    let input = ambient();
    let before: Vec<(Vec2, Vec2)> = field.particles().iter().map(|p| (p.pos, p.vel)).collect();
    field.tick(&input);
    let size = field.size();
    for ((old, vel), p) in before.iter().zip(field.particles()) {
        let moved = p.pos - *old;
        let wrapped = moved.x.abs() > size.x * 0.5 || moved.y.abs() > size.y * 0.5;
        assert!(wrapped || (moved - *vel).length() < 1e-3);
    }
}

#[test]
fn drift_over_many_ticks_is_bounded_by_velocity() {
    let mut rng = seeded();
    let mut field = ParticleField::new(FieldConfig::particles_2d(), 900.0, 700.0, &mut rng);
    let input = ambient();
    let size = field.size();
    let ticks = 1000;
    let vels: Vec<Vec2> = field.particles().iter().map(|p| p.vel).collect();
    let mut prev: Vec<Vec2> = field.particles().iter().map(|p| p.pos).collect();
    let mut travelled = vec![Vec2::ZERO; prev.len()];

    for _ in 0..ticks {
        field.tick(&input);
        for ((p, last), total) in field.particles().iter().zip(&mut prev).zip(&mut travelled) {
            let mut step = p.pos - *last;
            // undo edge wraps
            if step.x > size.x * 0.5 {
                step.x -= size.x;
            } else if step.x < -size.x * 0.5 {
                step.x += size.x;
            }
            if step.y > size.y * 0.5 {
                step.y -= size.y;
            } else if step.y < -size.y * 0.5 {
                step.y += size.y;
            }
            *total += step;
            *last = p.pos;
        }
    }

    for (total, vel) in travelled.iter().zip(&vels) {
        assert!(total.length() <= vel.length() * ticks as f32 + 0.5);
    }
}
