//! Per-character classification overlay.

use simp_ir::Span;

use crate::HighlightKind;

/// One [`HighlightKind`] per source character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlights {
    kinds: Vec<HighlightKind>,
}

impl Highlights {
    /// An all-`None` overlay for `len` characters.
    pub fn new(len: usize) -> Self {
        Highlights {
            kinds: vec![HighlightKind::None; len],
        }
    }

    pub fn for_source(source: &str) -> Self {
        Self::new(source.chars().count())
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Classify every character of `span`. Out-of-range offsets are ignored.
    pub fn tag(&mut self, span: Span, kind: HighlightKind) {
        let end = (span.end as usize).min(self.kinds.len());
        let start = (span.start as usize).min(end);
        self.kinds[start..end].fill(kind);
    }

    pub fn get(&self, offset: u32) -> HighlightKind {
        self.kinds
            .get(offset as usize)
            .copied()
            .unwrap_or_default()
    }

    pub fn as_slice(&self) -> &[HighlightKind] {
        &self.kinds
    }

    pub fn into_vec(self) -> Vec<HighlightKind> {
        self.kinds
    }

    /// Maximal runs of equal, non-`None` kinds.
    pub fn runs(&self) -> Vec<(Span, HighlightKind)> {
        let mut runs: Vec<(Span, HighlightKind)> = Vec::new();
        for (offset, &kind) in (0u32..).zip(&self.kinds) {
            if kind == HighlightKind::None {
                continue;
            }
            match runs.last_mut() {
                Some((span, last)) if *last == kind && span.end == offset => span.end += 1,
                _ => runs.push((Span::new(offset, offset + 1), kind)),
            }
        }
        runs
    }
}

#[cfg(test)]
mod tests;
