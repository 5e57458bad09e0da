use crate::Shape;

/// Errors that can occur when writing through a [`crate::Poke`].
#[derive(Debug, Clone)]
pub enum ReflectError {
    /// Tried to set a scalar to a value of another type, e.g. a `u64`
    /// into a `String` slot.
    WrongShape {
        /// The shape of the slot.
        expected: &'static Shape,
        /// The Rust type of the value that was offered.
        actual: &'static str,
    },

    /// Attempted to perform an operation that expected a certain kind of
    /// value on a value of a different kind.
    WasNotA {
        /// The kind that was expected.
        expected: &'static str,
        /// The shape of the value actually found.
        actual: &'static Shape,
    },

    /// A record's field accessor has no field at an index its shape lists.
    FieldOutOfBounds {
        /// The record's shape.
        shape: &'static Shape,
        /// The offending index.
        index: usize,
    },
}

impl core::fmt::Display for ReflectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReflectError::WrongShape { expected, actual } => {
                write!(f, "Wrong shape: expected {expected}, but got {actual}")
            }
            ReflectError::WasNotA { expected, actual } => {
                write!(f, "Was not a {expected}: {actual}")
            }
            ReflectError::FieldOutOfBounds { shape, index } => {
                write!(f, "{shape} has no field at index {index}")
            }
        }
    }
}

impl core::error::Error for ReflectError {}
