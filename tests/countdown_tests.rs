// Host-side tests for countdown arithmetic.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod countdown {
    include!("../src/core/countdown.rs");
}

use countdown::*;

const SECOND: f64 = 1000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;

#[test]
fn splits_remaining_time_into_units() {
    let now = 1_700_000_000_000.0;
    let target = now + DAY + 2.0 * HOUR + 3.0 * MINUTE + 4.0 * SECOND + 500.0;
    assert_eq!(
        countdown(target, now),
        Countdown::Running(Remaining {
            days: 1,
            hours: 2,
            minutes: 3,
            seconds: 4,
        })
    );
}

#[test]
fn cells_are_zero_padded() {
    let r = Remaining {
        days: 123,
        hours: 5,
        minutes: 0,
        seconds: 59,
    };
    assert_eq!(r.cells(), ["123", "05", "00", "59"].map(String::from));
}

#[test]
fn reaching_the_target_counts_as_arrived() {
    assert_eq!(countdown(1000.0, 1000.0), Countdown::Arrived);
    assert_eq!(countdown(1000.0, 5000.0), Countdown::Arrived);
}

#[test]
fn invalid_input_counts_as_arrived() {
    assert_eq!(countdown(f64::NAN, 0.0), Countdown::Arrived);
    assert_eq!(countdown(0.0, f64::INFINITY), Countdown::Arrived);
}

#[test]
fn sub_second_remainder_shows_zeroes() {
    assert_eq!(
        countdown(900.0, 0.0),
        Countdown::Running(Remaining {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
        })
    );
}

#[test]
fn pad2_keeps_wide_values() {
    assert_eq!(pad2(0), "00");
    assert_eq!(pad2(9), "09");
    assert_eq!(pad2(10), "10");
    assert_eq!(pad2(1000), "1000");
}

#[test]
fn arrived_glyphs_fill_every_cell() {
    assert_eq!(ARRIVED_GLYPHS.len(), 4);
    assert!(ARRIVED_GLYPHS.iter().all(|g| !g.is_empty()));
    assert!(!ARRIVED_MESSAGE.is_empty());
}
