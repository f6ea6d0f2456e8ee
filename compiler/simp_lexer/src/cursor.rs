//! Character cursor over the source text.
//!
//! Positions are char indices so every token span lines up with the
//! per-character classification overlay.

pub(crate) struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    pub(crate) fn new(source: &str) -> Self {
        Cursor {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        u32::try_from(self.pos).unwrap_or(u32::MAX)
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    #[inline]
    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += 1;
        Some(c)
    }

    /// Consume the current char if it equals `expected`.
    #[inline]
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.current() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume chars while `pred` holds.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Text between `start` and the current position.
    pub(crate) fn slice_from(&self, start: u32) -> String {
        let start = (start as usize).min(self.pos);
        self.chars[start..self.pos].iter().collect()
    }
}

#[cfg(test)]
mod tests;
