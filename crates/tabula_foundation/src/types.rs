//! Value kind descriptors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a [`Value`](crate::Value).
///
/// Records are schema-less, so this never constrains a field. It exists to
/// describe what was found when an operation rejects its input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// The absent value.
    Nil,
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String.
    String,
    /// Sequence of values.
    Vec,
    /// Nested record.
    Map,
}

impl Type {
    /// Returns true for the numeric kinds.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }

    /// Returns true for kinds that can be indexed by position.
    #[must_use]
    pub const fn is_indexed(self) -> bool {
        matches!(self, Self::Vec | Self::String)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Vec => "vec",
            Self::Map => "map",
        };
        f.write_str(name)
    }
}
