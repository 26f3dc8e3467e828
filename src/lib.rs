//! Variable storage for the SILLY interpreter.
//!
//! A [`MemorySpace`] binds variable names to typed values. Integers and
//! booleans are kept directly in the binding table; strings are kept in an
//! append-only heap and reached through an index, so every string assignment
//! allocates a new heap slot. The heap is never collected.

pub mod diagnostics;
pub mod language;
pub mod runtime;

pub use language::{span::Span, token::Identifier, types::Type};
pub use runtime::{MemoryError, MemoryResult, MemorySpace, Value};

#[cfg(test)]
mod tests;
