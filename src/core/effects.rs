// Randomised parameters for the short-lived DOM decorations: floating
// emoji, confetti pieces and cursor sparkles. The browser side only turns
// these into inline styles.

use rand::seq::SliceRandom;
use rand::Rng;

pub const HEART_GLYPHS: [&str; 10] = ["💕", "❤️", "💖", "💗", "💝", "🩷", "✨", "🌸", "🦋", "💐"];
pub const HEART_INITIAL_BATCH: usize = 8;
pub const HEART_INITIAL_STAGGER_MS: i32 = 400;
pub const HEART_INTERVAL_MS: i32 = 2500;
pub const HEART_LIFETIME_MS: i32 = 16_000;

pub const CONFETTI_COLORS: [&str; 8] = [
    "#ff6b9d", "#c06cf3", "#ffd700", "#ff8fb8", "#667eea", "#00f2fe", "#f093fb", "#ff4d6d",
];
pub const CONFETTI_SHAPES: [&str; 6] = ["●", "■", "▲", "★", "♥", "✦"];
pub const CONFETTI_COUNT: usize = 150;
pub const CONFETTI_STAGGER_MS: i32 = 20;
pub const CONFETTI_LIFETIME_MS: i32 = 4000;

pub const FLAME_STAGGER_MS: i32 = 200;
pub const WISH_DELAY_MS: i32 = 800;

pub const SPARKLE_GLYPHS: [&str; 5] = ["✦", "✧", "⋆", "˚", "✩"];
pub const SPARKLE_SPAWN_PROBABILITY: f64 = 0.7;
pub const SPARKLE_LIFETIME_MS: i32 = 1000;

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingHeart {
    pub glyph: &'static str,
    pub left_pct: f32,
    pub font_rem: f32,
    pub duration_s: f32,
    pub delay_s: f32,
}

impl FloatingHeart {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            glyph: HEART_GLYPHS.choose(rng).copied().unwrap_or("💖"),
            left_pct: rng.gen::<f32>() * 100.0,
            font_rem: rng.gen::<f32>() * 1.2 + 0.6,
            duration_s: rng.gen::<f32>() * 6.0 + 8.0,
            delay_s: rng.gen::<f32>() * 2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub left_pct: f32,
    pub background: &'static str,
    pub width_px: f32,
    pub height_px: f32,
    pub round: bool,
    pub duration_s: f32,
    pub delay_s: f32,
    pub shape: &'static str,
    pub color: &'static str,
    pub font_px: f32,
}

impl ConfettiPiece {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.gen::<f32>() * 100.0,
            background: CONFETTI_COLORS.choose(rng).copied().unwrap_or("#ff6b9d"),
            width_px: rng.gen::<f32>() * 8.0 + 4.0,
            height_px: rng.gen::<f32>() * 8.0 + 4.0,
            round: rng.gen_bool(0.5),
            duration_s: rng.gen::<f32>() * 2.0 + 2.0,
            delay_s: rng.gen::<f32>() * 0.3,
            shape: CONFETTI_SHAPES.choose(rng).copied().unwrap_or("●"),
            color: CONFETTI_COLORS.choose(rng).copied().unwrap_or("#ff6b9d"),
            font_px: rng.gen::<f32>() * 12.0 + 8.0,
        }
    }

    pub fn border_radius(&self) -> &'static str {
        if self.round {
            "50%"
        } else {
            "2px"
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
    pub x: f32,
    pub y: f32,
    pub font_px: f32,
    pub glyph: &'static str,
    pub hue: f32,
    /// Where the sparkle drifts to before vanishing, relative to its spawn.
    pub drift_x: f32,
    pub drift_y: f32,
}

impl Sparkle {
    /// A sparkle at the pointer, or `None` for throttled moves.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R, x: f32, y: f32) -> Option<Self> {
        if !rng.gen_bool(SPARKLE_SPAWN_PROBABILITY) {
            return None;
        }
        Some(Self {
            x,
            y,
            font_px: rng.gen::<f32>() * 10.0 + 6.0,
            glyph: SPARKLE_GLYPHS.choose(rng).copied().unwrap_or("✦"),
            hue: rng.gen::<f32>() * 60.0 + 320.0,
            drift_x: (rng.gen::<f32>() - 0.5) * 60.0,
            drift_y: -40.0 - rng.gen::<f32>() * 30.0,
        })
    }
}
