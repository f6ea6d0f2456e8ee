//! Error recovery for the parser.
//!
//! Token sets and synchronization for panic-mode recovery. Membership is a
//! bitset test keyed by [`TokenKind::discriminant_index`].

use simp_ir::TokenKind;

use crate::cursor::Cursor;

/// A set of token kinds. Each bit corresponds to a `TokenKind` discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }
}

/// Tokens that plausibly begin a new statement.
pub const STMT_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Function)
    .with(TokenKind::Class)
    .with(TokenKind::Var)
    .with(TokenKind::Const)
    .with(TokenKind::Eof);

/// Recovery set inside a block: a statement start or the closing brace.
pub const BLOCK_BOUNDARY: TokenSet = STMT_BOUNDARY.with(TokenKind::RBrace);

/// Advance until a token in `recovery` is current.
///
/// Returns the number of tokens skipped.
pub fn synchronize(cursor: &mut Cursor, recovery: TokenSet) -> usize {
    let mut skipped = 0;
    while !recovery.contains(cursor.current_kind()) {
        cursor.advance();
        skipped += 1;
    }
    skipped
}

#[cfg(test)]
mod tests;
