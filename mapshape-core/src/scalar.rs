//! Scalar type identification for shapes.

/// All leaf types a record field can hold.
///
/// This is a closed set: a decoder only ever needs to assign one of these
/// from a source value, and an exact match is required.
///
/// ```
/// use mapshape_core::{ScalarType, Shaped};
///
/// assert_eq!(u64::SHAPE.scalar_type(), Some(ScalarType::U64));
/// assert_eq!(<Vec<String>>::SHAPE.scalar_type(), Some(ScalarType::Strings));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ScalarType {
    /// Primitive type `i64`.
    I64,
    /// Primitive type `u64`.
    U64,
    /// `alloc::string::String`.
    String,
    /// `alloc::vec::Vec<String>`.
    Strings,
    /// `jiff::Timestamp`.
    Timestamp,
}

impl core::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ScalarType::I64 => "i64",
            ScalarType::U64 => "u64",
            ScalarType::String => "string",
            ScalarType::Strings => "string sequence",
            ScalarType::Timestamp => "timestamp",
        };
        f.write_str(name)
    }
}
