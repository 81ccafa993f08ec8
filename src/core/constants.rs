// Shared tuning constants for the background fields and page effects.

// 2D particle field
pub const PARTICLE_WIDTH_DIVISOR: f32 = 12.0; // one particle per this many px of viewport width
pub const PARTICLE_CAP: usize = 120;
pub const PARTICLE_RADIUS_MIN: f32 = 0.5;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;
pub const PARTICLE_SPEED_SPAN: f32 = 0.3; // velocity components in [-span/2, span/2)
pub const PARTICLE_ALPHA_MIN: f32 = 0.1;
pub const PARTICLE_ALPHA_SPAN: f32 = 0.5;
pub const PARTICLE_PULSE_SPEED_MIN: f32 = 0.01;
pub const PARTICLE_PULSE_SPEED_SPAN: f32 = 0.02;

// Pulsing appearance
pub const PULSE_ALPHA_AMPLITUDE: f32 = 0.15;
pub const PULSE_RADIUS_AMPLITUDE: f32 = 0.3;
pub const PULSE_ALPHA_FLOOR: f32 = 0.05;
pub const GLOW_RADIUS_MULTIPLIER: f32 = 3.0;
pub const GLOW_ALPHA_MULTIPLIER: f32 = 0.1;
pub const GLOW_ALPHA_FLOOR: f32 = 0.01;

// Pointer repulsion
pub const REPULSION_RADIUS: f32 = 150.0;
pub const REPULSION_STRENGTH: f32 = 0.02;

// Connection lines
pub const LINK_DISTANCE: f32 = 120.0;
pub const LINK_ALPHA_MAX: f32 = 0.15;

// Ambient smoothing factors, per tick
pub const POINTER_SMOOTHING: f32 = 0.1;
pub const SCROLL_SMOOTHING: f32 = 0.05;

// 3D scene
pub const SCENE_ENTITY_COUNT: usize = 48;
pub const SCENE_HALF_EXTENT: [f32; 3] = [14.0, 10.0, 12.0]; // spawn volume half sizes
pub const SCENE_FLOAT_AMPLITUDE_MIN: f32 = 0.3;
pub const SCENE_FLOAT_AMPLITUDE_SPAN: f32 = 0.9;
pub const SCENE_SCALE_MIN: f32 = 0.25;
pub const SCENE_SCALE_SPAN: f32 = 0.55;
pub const SCENE_SPIN_MAX: f32 = 0.02; // radians per tick
pub const SCENE_SCROLL_PARALLAX: f32 = 0.004; // world units per scrolled px
pub const SCENE_SCALE_PULSE: f32 = 0.08;
pub const CAMERA_Z: f32 = 22.0;
pub const CAMERA_SWAY: f32 = 3.0; // eye offset at the viewport edge

// Colors: pink, purple, gold, soft pink, blue
pub const PALETTE: [[u8; 3]; 5] = [
    [255, 107, 157],
    [192, 108, 243],
    [255, 215, 0],
    [255, 143, 184],
    [102, 126, 234],
];
pub const LINK_COLOR: [u8; 3] = [255, 107, 157];
