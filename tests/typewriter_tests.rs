// Host-side tests for the typewriter reveal.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod typewriter {
    include!("../src/core/typewriter.rs");
}

use typewriter::*;

#[test]
fn reveals_one_character_per_step() {
    let mut line = TypewriterLine::new("abc");
    assert_eq!(line.visible(), "");
    assert!(line.step());
    assert_eq!(line.visible(), "a");
    assert!(line.step());
    assert!(!line.step());
    assert_eq!(line.visible(), "abc");
    assert!(line.is_done());
}

#[test]
fn multibyte_text_never_splits() {
    let mut line = TypewriterLine::new("hé💖!");
    let mut seen = Vec::new();
    while !line.is_done() {
        line.step();
        seen.push(line.visible().to_string());
    }
    assert_eq!(seen, vec!["h", "hé", "hé💖", "hé💖!"]);
}

#[test]
fn stepping_past_the_end_is_harmless() {
    let mut line = TypewriterLine::new("x");
    line.step();
    assert!(!line.step());
    assert_eq!(line.visible(), "x");
}

#[test]
fn empty_line_is_done_immediately() {
    let mut line = TypewriterLine::new("");
    assert!(line.is_done());
    assert!(!line.step());
}

#[test]
fn paragraphs_are_staggered() {
    assert_eq!(paragraph_delay_ms(0), 0);
    assert_eq!(paragraph_delay_ms(1), PARAGRAPH_STAGGER_MS);
    assert_eq!(paragraph_delay_ms(3), 3 * PARAGRAPH_STAGGER_MS);
}

#[test]
fn visible_prefix_borrows_without_copying() {
    let text = "ab💖";
    let mut line = TypewriterLine::new(text);
    line.step();
    line.step();
    let shown = line.visible();
    assert_eq!(shown, "ab");
    assert_eq!(shown.len(), 2);
    line.step();
    assert_eq!(line.visible().len(), text.len());
}
