/// Page wiring and rendering constants for the web frontend.
///
/// Element ids and selectors name the hooks the page markup provides.
// Background
pub const BACKGROUND_CANVAS_ID: &str = "particles-canvas";
pub const VARIANT_ATTRIBUTE: &str = "data-variant";

// Collaborators
pub const HEARTS_CONTAINER_ID: &str = "floating-hearts";
pub const ORB_SELECTOR: &str = ".hero-gradient-orb";
pub const TILT_CARD_SELECTOR: &str = ".memory-card, .reason-card";
pub const TYPEWRITER_ID: &str = "typewriter-text";
pub const COUNTDOWN_ID: &str = "countdown";
pub const COUNTDOWN_TARGET_ATTRIBUTE: &str = "data-target";
pub const COUNTDOWN_CELL_IDS: [&str; 4] = ["cd-days", "cd-hours", "cd-minutes", "cd-seconds"];
pub const COUNTDOWN_MSG_ID: &str = "countdown-msg";
pub const CAKE_ID: &str = "birthday-cake";
pub const FLAME_SELECTOR: &str = ".flame";
pub const CONFETTI_CONTAINER_ID: &str = "confetti-container";
pub const FINAL_WISH_ID: &str = "final-wish";
pub const CAKE_INSTRUCTION_SELECTOR: &str = ".cake-instruction";

// Timings (ms)
pub const COUNTDOWN_INTERVAL_MS: i32 = 1000;
pub const COUNTDOWN_FLIP_MS: i32 = 150;
pub const TYPEWRITER_VISIBLE_THRESHOLD: f64 = 0.3;

// 2D drawing
pub const LINK_LINE_WIDTH: f64 = 0.5;

// WebGPU scene
pub const SCENE_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const SCENE_ZNEAR: f32 = 0.1;
pub const SCENE_ZFAR: f32 = 200.0;
pub const SCENE_SPRITE_ALPHA: f32 = 0.85;
pub const SCENE_CLEAR: [f64; 3] = [0.03, 0.02, 0.06];
