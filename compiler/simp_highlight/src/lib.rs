//! Character-level classification of SIMP source for editors and printers.
//!
//! Two passes fill one overlay: a lexical pass over the token stream
//! (keywords, literals, comments, bracket colors) and a semantic pass over
//! the parsed program (identifier roles resolved through scopes). Source
//! with lex or parse errors is still classified as far as it goes.

mod highlights;
mod kind;
mod lexical;
mod semantic;

pub use highlights::Highlights;
pub use kind::{HighlightKind, IdentKind};
pub use lexical::{lexical_pass, token_kind};
pub use semantic::SemanticAnalyzer;

/// Classify `source`, one kind per character.
pub fn classify(source: &str) -> Vec<HighlightKind> {
    highlight(source).into_vec()
}

/// Like [`classify`], keeping the [`Highlights`] overlay.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn highlight(source: &str) -> Highlights {
    let lexed = simp_lexer::lex(source);
    let mut highlights = Highlights::for_source(source);
    lexical_pass(&lexed.tokens, &mut highlights);

    let parsed = simp_parse::parse(&lexed.tokens);
    if parsed.had_error() {
        tracing::debug!(
            errors = parsed.errors.len(),
            "classifying a program with parse errors"
        );
    }
    SemanticAnalyzer::new(&mut highlights).analyze(&parsed.statements);
    highlights
}
