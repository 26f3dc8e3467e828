pub mod span;
pub mod token;
pub mod types;
