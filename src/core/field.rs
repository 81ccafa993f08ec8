// Common front for both field variants, chosen from the drift model.

use super::config::{DriftModel, FieldConfig};
use super::field2d::ParticleField;
use super::field3d::OrbitField;
use super::smoothing::AmbientInput;
use rand::Rng;

pub enum Field {
    Flat(ParticleField),
    Volume(OrbitField),
}

impl Field {
    pub fn new<R: Rng + ?Sized>(config: FieldConfig, width: f32, height: f32, rng: &mut R) -> Self {
        match config.drift {
            DriftModel::Wrap2d => Field::Flat(ParticleField::new(config, width, height, rng)),
            DriftModel::Free3d => {
                let mut f = OrbitField::new(config, rng);
                f.resize(width, height);
                Field::Volume(f)
            }
        }
    }

    /// One update: advance the ambient smoothers, then every entity.
    pub fn tick(&mut self, ambient: &mut AmbientInput, dt_sec: f32) {
        ambient.step();
        match self {
            Field::Flat(f) => f.tick(ambient),
            Field::Volume(f) => f.tick(ambient, dt_sec),
        }
    }

    pub fn resize<R: Rng + ?Sized>(&mut self, width: f32, height: f32, rng: &mut R) {
        match self {
            Field::Flat(f) => f.resize(width, height, rng),
            Field::Volume(f) => f.resize(width, height),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        match self {
            Field::Flat(f) => f.config(),
            Field::Volume(f) => f.config(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Field::Flat(f) => f.len(),
            Field::Volume(f) => f.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
