use crate::language::{span::Span, types::Type};
use miette::Diagnostic;
use thiserror::Error;

pub type MemoryResult<T> = Result<T, MemoryError>;

#[derive(Clone, Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum MemoryError {
    #[error("Variable `{name}` has not been declared")]
    #[diagnostic(
        code(silly::memory::undeclared),
        help("declare `{name}` with a type before using it")
    )]
    UndeclaredVariable { name: String, span: Span },
    #[error("Variable `{name}` was read before a value was assigned")]
    #[diagnostic(
        code(silly::memory::unpopulated),
        help("assign `{name}` a value before reading it")
    )]
    UnpopulatedRead { name: String, span: Span },
    #[error("Variable `{name}` is declared `{expected}` but was given a `{found}` value")]
    #[diagnostic(code(silly::memory::type_mismatch))]
    TypeMismatch {
        name: String,
        span: Span,
        expected: Type,
        found: Type,
    },
    #[error("Heap index {index} is out of bounds for a heap of {len} entries")]
    #[diagnostic(
        code(silly::memory::corrupt_heap),
        help("this is an interpreter bug, not an error in the program")
    )]
    CorruptHeapIndex { index: usize, len: usize },
}

impl MemoryError {
    /// The source location of the offending identifier, if the error has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            MemoryError::UndeclaredVariable { span, .. }
            | MemoryError::UnpopulatedRead { span, .. }
            | MemoryError::TypeMismatch { span, .. } => Some(*span),
            MemoryError::CorruptHeapIndex { .. } => None,
        }
    }

    /// Corrupt heap indices mean the memory space itself is broken; the
    /// interpreter should abort rather than report a program error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, MemoryError::CorruptHeapIndex { .. })
    }
}
