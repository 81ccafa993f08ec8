// Character-by-character reveal of a block of paragraphs.

pub const PARAGRAPH_STAGGER_MS: i32 = 1200;
pub const CHAR_INTERVAL_MS: i32 = 18;

/// Reveal state for one paragraph. Steps over Unicode scalars, so emoji and
/// accented text never split mid-character.
#[derive(Clone, Debug)]
pub struct TypewriterLine {
    text: String,
    // byte offset of the revealed prefix, always on a char boundary
    shown: usize,
}

impl TypewriterLine {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            shown: 0,
        }
    }

    /// Reveal one more character; `false` once the line is complete.
    pub fn step(&mut self) -> bool {
        if let Some(c) = self.text[self.shown..].chars().next() {
            self.shown += c.len_utf8();
        }
        !self.is_done()
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.shown]
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.len()
    }
}

/// Start offset of paragraph `index` relative to the reveal trigger.
#[inline]
pub fn paragraph_delay_ms(index: usize) -> i32 {
    (index as i32).saturating_mul(PARAGRAPH_STAGGER_MS)
}
