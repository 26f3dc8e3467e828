use crate::language::span::Span;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A variable name as the lexer produced it.
///
/// Two identifiers are the same variable when their names match; the span only
/// records where this occurrence sits in the source, so the declaration of `x`
/// and a later use of `x` resolve to one binding.
#[derive(Clone, Debug)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }

    /// An identifier with no source location, for callers that build programs
    /// directly.
    pub fn synthetic(name: impl Into<String>) -> Self {
        Self::new(name, Span::default())
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
