// Countdown arithmetic, independent of the clock source.

const MS_PER_SECOND: f64 = 1000.0;
const MS_PER_MINUTE: f64 = MS_PER_SECOND * 60.0;
const MS_PER_HOUR: f64 = MS_PER_MINUTE * 60.0;
const MS_PER_DAY: f64 = MS_PER_HOUR * 24.0;

/// Default birthday, midnight IST.
pub const DEFAULT_TARGET_ISO: &str = "2026-03-01T00:00:00+05:30";

/// Glyphs shown in the four cells once the day has come.
pub const ARRIVED_GLYPHS: [&str; 4] = ["🎉", "🎂", "🥳", "💖"];
pub const ARRIVED_MESSAGE: &str = "🎊 It's Your Birthday! Happy Birthday, My Love! 🎊";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Remaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Countdown {
    Running(Remaining),
    Arrived,
}

/// Break the time left until `target_ms` into whole units (both arguments in
/// epoch milliseconds). Non-finite input counts as arrived.
pub fn countdown(target_ms: f64, now_ms: f64) -> Countdown {
    let diff = target_ms - now_ms;
    if !diff.is_finite() || diff <= 0.0 {
        return Countdown::Arrived;
    }
    Countdown::Running(Remaining {
        days: (diff / MS_PER_DAY).floor() as u64,
        hours: ((diff % MS_PER_DAY) / MS_PER_HOUR).floor() as u64,
        minutes: ((diff % MS_PER_HOUR) / MS_PER_MINUTE).floor() as u64,
        seconds: ((diff % MS_PER_MINUTE) / MS_PER_SECOND).floor() as u64,
    })
}

impl Remaining {
    /// Cell texts in display order: days, hours, minutes, seconds.
    pub fn cells(&self) -> [String; 4] {
        [
            pad2(self.days),
            pad2(self.hours),
            pad2(self.minutes),
            pad2(self.seconds),
        ]
    }
}

/// Zero-pad to at least two digits.
pub fn pad2(value: u64) -> String {
    format!("{:02}", value)
}
