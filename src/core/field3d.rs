// Volumetric sprite field for the WebGPU background.
//
// Sprites are scattered across a volume much larger than the visible
// frustum. Their position is re-derived each tick from the base position,
// so nothing accumulates and nothing needs wrapping.

use super::config::FieldConfig;
use super::constants::*;
use super::smoothing::AmbientInput;
use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct Orbiter {
    pub base: Vec3,
    pub pos: Vec3,
    /// Rotation about the view axis, radians.
    pub angle: f32,
    pub spin: f32,
    pub phase: f32,
    pub phase_speed: f32,
    pub amplitude: f32,
    pub scale: f32,
    pub color: usize,
}

impl Orbiter {
    fn spawn<R: Rng + ?Sized>(rng: &mut R, palette_len: usize) -> Self {
        let [hx, hy, hz] = SCENE_HALF_EXTENT;
        let base = Vec3::new(
            rng.gen_range(-hx..hx),
            rng.gen_range(-hy..hy),
            rng.gen_range(-hz..hz),
        );
        Self {
            base,
            pos: base,
            angle: rng.gen::<f32>() * TAU,
            spin: rng.gen_range(-SCENE_SPIN_MAX..SCENE_SPIN_MAX),
            phase: rng.gen::<f32>() * TAU,
            phase_speed: rng.gen::<f32>() * PARTICLE_PULSE_SPEED_SPAN + PARTICLE_PULSE_SPEED_MIN,
            amplitude: rng.gen::<f32>() * SCENE_FLOAT_AMPLITUDE_SPAN + SCENE_FLOAT_AMPLITUDE_MIN,
            scale: rng.gen::<f32>() * SCENE_SCALE_SPAN + SCENE_SCALE_MIN,
            color: rng.gen_range(0..palette_len.max(1)),
        }
    }

    /// Current on-screen size including the breathing pulse.
    #[inline]
    pub fn pulsed_scale(&self) -> f32 {
        self.scale * (1.0 + self.phase.sin() * SCENE_SCALE_PULSE)
    }
}

/// Offset from the base position for sprite `index`.
///
/// The bobbing part is bounded by the sprite's amplitude on every axis; the
/// scroll part lifts the whole field as the page scrolls down.
pub fn float_offset(orbiter: &Orbiter, index: usize, time: f32, scroll: f32) -> Vec3 {
    let k = index as f32;
    let a = orbiter.amplitude;
    Vec3::new(
        (time * 0.3 + k).sin() * a * 0.5,
        orbiter.phase.sin() * a + scroll * SCENE_SCROLL_PARALLAX,
        (time * 0.2 + k * 0.7).cos() * a * 0.5,
    )
}

pub struct OrbitField {
    config: FieldConfig,
    orbiters: Vec<Orbiter>,
    time: f32,
    aspect: f32,
    camera_eye: Vec3,
}

impl OrbitField {
    pub fn new<R: Rng + ?Sized>(config: FieldConfig, rng: &mut R) -> Self {
        let count = config.count.count(0.0);
        let palette_len = config.palette.len();
        let orbiters = (0..count).map(|_| Orbiter::spawn(rng, palette_len)).collect();
        Self {
            config,
            orbiters,
            time: 0.0,
            aspect: 1.0,
            camera_eye: Vec3::new(0.0, 0.0, CAMERA_Z),
        }
    }

    /// Only the projection changes on resize; the sprites stay where they are.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn tick(&mut self, ambient: &AmbientInput, dt_sec: f32) {
        self.time += dt_sec.max(0.0);
        let scroll = ambient.scroll_offset();
        for (i, o) in self.orbiters.iter_mut().enumerate() {
            o.phase += o.phase_speed;
            o.angle = (o.angle + o.spin).rem_euclid(TAU);
            o.pos = o.base + float_offset(o, i, self.time, scroll);
        }
        let sway: Vec2 = ambient.pointer_normalized() * CAMERA_SWAY;
        self.camera_eye = Vec3::new(sway.x, -sway.y, CAMERA_Z);
    }

    pub fn orbiters(&self) -> &[Orbiter] {
        &self.orbiters
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn camera_eye(&self) -> Vec3 {
        self.camera_eye
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn len(&self) -> usize {
        self.orbiters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbiters.is_empty()
    }
}
