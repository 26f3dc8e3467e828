use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The declared type of a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    Integer,
    Boolean,
    String,
}

impl Type {
    pub fn keyword(&self) -> &'static str {
        match self {
            Type::Integer => "int",
            Type::Boolean => "bool",
            Type::String => "str",
        }
    }

    /// Whether values of this type live on the heap rather than in the binding.
    pub fn is_heap_allocated(&self) -> bool {
        matches!(self, Type::String)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Unknown type `{keyword}`")]
pub struct UnknownType {
    pub keyword: String,
}

impl FromStr for Type {
    type Err = UnknownType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(Type::Integer),
            "bool" => Ok(Type::Boolean),
            "str" => Ok(Type::String),
            other => Err(UnknownType {
                keyword: other.to_string(),
            }),
        }
    }
}
