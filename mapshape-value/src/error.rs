use mapshape_core::{ReflectError, Shape};

use crate::ValueType;

/// A segment in a decoding path
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathSegment {
    /// A field, by its lookup key
    Field(&'static str),
}

impl core::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PathSegment::Field(key) => write!(f, ".{key}"),
        }
    }
}

/// Error type for decoding a [`crate::Map`] into a record.
///
/// Decoding stops at the first error. Fields assigned before it keep their
/// new values, so the target should be treated as partially populated.
#[derive(Debug)]
pub struct DecodeError {
    /// The specific kind of error
    pub kind: DecodeErrorKind,
    /// Field keys from the root record down to where the error occurred
    pub path: Vec<PathSegment>,
    /// The root record's shape (for diagnostics)
    pub target_shape: Option<&'static Shape>,
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "at {}: {}", self.path_string(), self.kind)
        }
    }
}

impl DecodeError {
    /// Create a new DecodeError with an empty path
    pub fn new(kind: DecodeErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
            target_shape: None,
        }
    }

    /// Set the root shape for diagnostics
    pub fn with_shape(mut self, shape: &'static Shape) -> Self {
        self.target_shape = Some(shape);
        self
    }

    /// Add a path segment (prepends since we unwind from the error site)
    pub fn with_path(mut self, segment: PathSegment) -> Self {
        self.path.insert(0, segment);
        self
    }

    /// Format the path as a string
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            "<root>".into()
        } else {
            use core::fmt::Write;
            let mut s = String::new();
            for seg in &self.path {
                let _ = write!(s, "{seg}");
            }
            s
        }
    }
}

impl core::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.kind {
            DecodeErrorKind::Reflect(e) => Some(e),
            _ => None,
        }
    }
}

/// Specific error kinds for decoding.
#[derive(Debug)]
pub enum DecodeErrorKind {
    /// The target is not a record
    InvalidTarget {
        /// Type identifier of what was passed instead
        got: &'static str,
    },
    /// A nested map was found for a field that is not a record
    UnsupportedShape {
        /// Declared name of the field
        field: &'static str,
        /// Type identifier of the field
        shape: &'static str,
    },
    /// A leaf value's type differs from the field's type
    TypeMismatch {
        /// Type identifier of the field
        expected: &'static str,
        /// What the value actually contained
        got: ValueType,
    },
    /// Nested maps go deeper than [`crate::DecodeOptions::max_depth`]
    DepthExceeded {
        /// The configured bound
        max_depth: usize,
    },
    /// A key matches no field (when `deny_unknown_keys` is set)
    UnknownKey {
        /// The unknown key
        key: String,
    },
    /// Reflection error from mapshape-core
    Reflect(ReflectError),
}

impl core::fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DecodeErrorKind::InvalidTarget { got } => {
                write!(f, "expected a record to decode into, got {got}")
            }
            DecodeErrorKind::UnsupportedShape { field, shape } => {
                write!(
                    f,
                    "can only decode inner maps into structs, but field `{field}` is {shape}"
                )
            }
            DecodeErrorKind::TypeMismatch { expected, got } => {
                write!(
                    f,
                    "cannot assign value of type {got} to field of type {expected}"
                )
            }
            DecodeErrorKind::DepthExceeded { max_depth } => {
                write!(
                    f,
                    "maps nested deeper than the maximum depth of {max_depth}"
                )
            }
            DecodeErrorKind::UnknownKey { key } => write!(f, "unknown key `{key}`"),
            DecodeErrorKind::Reflect(e) => write!(f, "reflection error: {e}"),
        }
    }
}

impl From<ReflectError> for DecodeError {
    fn from(err: ReflectError) -> Self {
        DecodeError::new(DecodeErrorKind::Reflect(err))
    }
}

/// Result type for decoding.
pub type Result<T> = core::result::Result<T, DecodeError>;
