// Flat particle field: drifting dots that wrap at the viewport edges, get
// pushed away by the pointer and link up with nearby neighbours.

use super::config::{FieldConfig, Interaction};
use super::constants::*;
use super::smoothing::AmbientInput;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Spawn position.
    pub origin: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub pulse: f32,
    pub pulse_speed: f32,
    pub color: usize,
}

/// Resolved drawing parameters for one particle on the current tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    pub radius: f32,
    pub alpha: f32,
    pub glow_radius: f32,
    pub glow_alpha: f32,
}

/// A connection line between particles `a` and `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

impl Particle {
    fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, palette_len: usize) -> Self {
        let pos = Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height);
        Self {
            pos,
            vel: Vec2::new(
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
                (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
            ),
            origin: pos,
            radius: rng.gen::<f32>() * PARTICLE_RADIUS_SPAN + PARTICLE_RADIUS_MIN,
            alpha: rng.gen::<f32>() * PARTICLE_ALPHA_SPAN + PARTICLE_ALPHA_MIN,
            pulse: rng.gen::<f32>() * TAU,
            pulse_speed: rng.gen::<f32>() * PARTICLE_PULSE_SPEED_SPAN + PARTICLE_PULSE_SPEED_MIN,
            color: rng.gen_range(0..palette_len.max(1)),
        }
    }

    pub fn appearance(&self) -> Appearance {
        let s = self.pulse.sin();
        let alpha = self.alpha + s * PULSE_ALPHA_AMPLITUDE;
        let radius = self.radius + s * PULSE_RADIUS_AMPLITUDE;
        Appearance {
            radius,
            alpha: alpha.max(PULSE_ALPHA_FLOOR),
            glow_radius: radius * GLOW_RADIUS_MULTIPLIER,
            glow_alpha: (alpha * GLOW_ALPHA_MULTIPLIER).max(GLOW_ALPHA_FLOOR),
        }
    }
}

/// Velocity delta pushing a particle at `pos` away from `pointer`.
///
/// Zero outside the interaction radius and when the two coincide (no
/// direction to push in).
pub fn repulsion(pos: Vec2, pointer: Vec2, interaction: &Interaction) -> Vec2 {
    let away = pos - pointer;
    let dist = away.length();
    if dist <= 0.0 || dist >= interaction.radius {
        return Vec2::ZERO;
    }
    let force = (interaction.radius - dist) / interaction.radius * interaction.strength;
    away / dist * force
}

/// Wrap `v` into `[0, extent)`. A non-positive extent pins to 0.
#[inline]
pub fn wrap(v: f32, extent: f32) -> f32 {
    if !(extent > 0.0) {
        return 0.0;
    }
    let w = v.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if w >= extent {
        0.0
    } else {
        w
    }
}

pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(config: FieldConfig, width: f32, height: f32, rng: &mut R) -> Self {
        let mut field = Self {
            config,
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
        };
        field.resize(width, height, rng);
        field
    }

    /// Discard every particle and spawn a new batch sized for the viewport.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let count = self.config.count.count(self.width);
        let palette_len = self.config.palette.len();
        self.particles = (0..count)
            .map(|_| Particle::spawn(rng, self.width, self.height, palette_len))
            .collect();
    }

    pub fn tick(&mut self, ambient: &AmbientInput) {
        let pointer = ambient.pointer();
        let interaction = self.config.interaction;
        for p in &mut self.particles {
            if let (Some(ptr), Some(ia)) = (pointer, interaction.as_ref()) {
                p.vel += repulsion(p.pos, ptr, ia);
            }
            p.pos += p.vel;
            p.pulse += p.pulse_speed;
            p.pos.x = wrap(p.pos.x, self.width);
            p.pos.y = wrap(p.pos.y, self.height);
        }
    }

    /// Collect connection lines into `out` (cleared first). Quadratic in the
    /// particle count, which the count cap keeps small.
    pub fn links(&self, out: &mut Vec<Link>) {
        out.clear();
        let Some(max_d) = self.config.link_distance.filter(|d| *d > 0.0) else {
            return;
        };
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let d = a.pos.distance(b.pos);
                if d < max_d {
                    out.push(Link {
                        a: i,
                        b: j,
                        alpha: (1.0 - d / max_d) * LINK_ALPHA_MAX,
                    });
                }
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
