pub mod error;
pub mod memory;
pub mod value;

pub use error::{MemoryError, MemoryResult};
pub use memory::MemorySpace;
pub use value::Value;
