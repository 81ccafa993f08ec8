// One parameterised description of the background field.
//
// The 2D particle canvas and the 3D sprite scene differ only in the values
// held here; `from_variant` maps the page's `data-variant` attribute onto a
// preset.

use super::constants::*;

/// How entities move between ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriftModel {
    /// Velocity integration with wrap-around at the viewport edges.
    Wrap2d,
    /// Base position plus a bounded offset; never leaves the virtual volume.
    Free3d,
}

/// How many entities a batch holds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CountFormula {
    /// `min(floor(width / divisor), cap)`
    PerWidth { divisor: f32, cap: usize },
    Fixed(usize),
}

impl CountFormula {
    pub fn count(&self, viewport_width: f32) -> usize {
        match *self {
            CountFormula::PerWidth { divisor, cap } => {
                if !(divisor > 0.0) || !(viewport_width > 0.0) {
                    return 0;
                }
                ((viewport_width / divisor).floor() as usize).min(cap)
            }
            CountFormula::Fixed(n) => n,
        }
    }
}

/// Pointer repulsion parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interaction {
    pub radius: f32,
    pub strength: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub drift: DriftModel,
    pub count: CountFormula,
    pub interaction: Option<Interaction>,
    pub link_distance: Option<f32>,
    pub pointer_smoothing: f32,
    pub scroll_smoothing: f32,
    pub palette: &'static [[u8; 3]],
}

impl FieldConfig {
    pub fn particles_2d() -> Self {
        Self {
            drift: DriftModel::Wrap2d,
            count: CountFormula::PerWidth {
                divisor: PARTICLE_WIDTH_DIVISOR,
                cap: PARTICLE_CAP,
            },
            interaction: Some(Interaction {
                radius: REPULSION_RADIUS,
                strength: REPULSION_STRENGTH,
            }),
            link_distance: Some(LINK_DISTANCE),
            pointer_smoothing: POINTER_SMOOTHING,
            scroll_smoothing: SCROLL_SMOOTHING,
            palette: &PALETTE,
        }
    }

    pub fn scene_3d() -> Self {
        Self {
            drift: DriftModel::Free3d,
            count: CountFormula::Fixed(SCENE_ENTITY_COUNT),
            interaction: None,
            link_distance: None,
            pointer_smoothing: POINTER_SMOOTHING * 0.5,
            scroll_smoothing: SCROLL_SMOOTHING,
            palette: &PALETTE,
        }
    }

    /// Preset for a `data-variant` value. Absent or unknown values get the
    /// 2D preset.
    pub fn from_variant(name: Option<&str>) -> Self {
        match name.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("3d") | Some("scene") | Some("scene3d") => Self::scene_3d(),
            _ => Self::particles_2d(),
        }
    }

    pub fn is_3d(&self) -> bool {
        self.drift == DriftModel::Free3d
    }
}
