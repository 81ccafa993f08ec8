pub mod cake;
pub mod countdown;
pub mod hearts;
pub mod parallax;
pub mod sparkle;
pub mod tilt;
pub mod typewriter;
