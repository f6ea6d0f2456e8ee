//! Line and column lookup for char-offset spans.
//!
//! SIMP spans count chars, not bytes, so offsets here are char indices.

use simp_ir::Span;

/// Pre-computed table of line start offsets.
///
/// # Example
///
/// ```
/// use simp_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "line1\nline2\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(0), (1, 1));
/// assert_eq!(table.offset_to_line_col(6), (2, 1));
/// assert_eq!(table.offset_to_line_col(14), (3, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Char offset of each line start. `offsets[0] = 0`.
    offsets: Vec<u32>,
    /// Total char count of the source.
    len: u32,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        let mut len = 0u32;
        for (i, ch) in source.chars().enumerate() {
            let i = u32::try_from(i).unwrap_or(u32::MAX - 1);
            if ch == '\n' {
                offsets.push(i + 1);
            }
            len = i + 1;
        }
        LineOffsetTable { offsets, len }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based (line, column) of `offset`. Offsets past the end clamp to it.
    pub fn offset_to_line_col(&self, offset: u32) -> (u32, u32) {
        let offset = offset.min(self.len);
        let line = self.line_from_offset(offset);
        let line_start = self.line_start_offset(line).unwrap_or(0);
        (line, offset - line_start + 1)
    }

    /// Char offset of a line start (1-based line number).
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// Text of the 1-based `line`, without its trailing newline.
pub fn line_text(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }
    source.lines().nth((line - 1) as usize)
}

/// 1-based line where `span` starts.
///
/// For repeated lookups build a [`LineOffsetTable`] instead.
pub fn line_number(source: &str, span: Span) -> u32 {
    let newlines = source
        .chars()
        .take(span.start as usize)
        .filter(|&c| c == '\n')
        .count();
    u32::try_from(newlines).unwrap_or(u32::MAX - 1) + 1
}

#[cfg(test)]
mod tests;
