use std::fmt;

/// Display classification of one source character.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum HighlightKind {
    #[default]
    None,
    Comment,

    // Identifier roles
    VariableName,
    AccessorToken,
    FunctionName,
    CtorDeclaration,
    ClassName,
    Argument,
    This,
    Base,
    Super,
    Called,

    // Keywords
    VarKeyword,
    FunctionKeyword,
    ClassKeyword,
    IfKeyword,
    ElseKeyword,
    WhileKeyword,
    ReturnKeyword,

    // Literals
    StringLiteral,
    NumberLiteral,
    True,
    False,
    Null,

    // Bracket pair colors, by nesting depth
    B0,
    B1,
    B2,
}

impl HighlightKind {
    /// Bracket color for a pair opened at nesting `depth`.
    pub const fn bracket(depth: usize) -> Self {
        match depth % 3 {
            0 => HighlightKind::B0,
            1 => HighlightKind::B1,
            _ => HighlightKind::B2,
        }
    }

    pub const fn is_bracket(self) -> bool {
        matches!(
            self,
            HighlightKind::B0 | HighlightKind::B1 | HighlightKind::B2
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            HighlightKind::None => "none",
            HighlightKind::Comment => "comment",
            HighlightKind::VariableName => "variable",
            HighlightKind::AccessorToken => "accessor",
            HighlightKind::FunctionName => "function",
            HighlightKind::CtorDeclaration => "ctor",
            HighlightKind::ClassName => "class",
            HighlightKind::Argument => "argument",
            HighlightKind::This => "this",
            HighlightKind::Base => "base",
            HighlightKind::Super => "super",
            HighlightKind::Called => "called",
            HighlightKind::VarKeyword => "kw-var",
            HighlightKind::FunctionKeyword => "kw-function",
            HighlightKind::ClassKeyword => "kw-class",
            HighlightKind::IfKeyword => "kw-if",
            HighlightKind::ElseKeyword => "kw-else",
            HighlightKind::WhileKeyword => "kw-while",
            HighlightKind::ReturnKeyword => "kw-return",
            HighlightKind::StringLiteral => "string",
            HighlightKind::NumberLiteral => "number",
            HighlightKind::True => "true",
            HighlightKind::False => "false",
            HighlightKind::Null => "null",
            HighlightKind::B0 => "bracket-0",
            HighlightKind::B1 => "bracket-1",
            HighlightKind::B2 => "bracket-2",
        }
    }
}

impl fmt::Display for HighlightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a name is bound to, as far as the semantic analyzer can tell.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IdentKind {
    Variable,
    Function,
    Class,
    Argument,
    This,
    Base,
    Super,
}

impl IdentKind {
    pub const fn highlight(self) -> HighlightKind {
        match self {
            IdentKind::Variable => HighlightKind::VariableName,
            IdentKind::Function => HighlightKind::FunctionName,
            IdentKind::Class => HighlightKind::ClassName,
            IdentKind::Argument => HighlightKind::Argument,
            IdentKind::This => HighlightKind::This,
            IdentKind::Base => HighlightKind::Base,
            IdentKind::Super => HighlightKind::Super,
        }
    }
}

#[cfg(test)]
mod tests;
