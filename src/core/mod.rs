pub mod attach;
pub mod config;
pub mod constants;
pub mod countdown;
pub mod effects;
pub mod field;
pub mod field2d;
pub mod field3d;
pub mod motion;
pub mod schedule;
pub mod smoothing;
pub mod typewriter;

pub use attach::Attachment;
pub use config::{CountFormula, DriftModel, FieldConfig, Interaction};
pub use field::Field;
pub use schedule::{FrameLoops, LoopToken, PageHide};
pub use smoothing::{AmbientInput, Smoothed};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
