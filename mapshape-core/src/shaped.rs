use crate::{Poke, Shape};

/// Allows writing into a value through its [`Shape`].
///
/// Implemented for the built-in scalars (`i64`, `u64`, `String`,
/// `Vec<String>`, `jiff::Timestamp`), for `Box<T>`, for `Option<T>` when `T`
/// is a record, and for every type deriving `Record`.
pub trait Shaped {
    /// Static description of this type.
    const SHAPE: &'static Shape;

    /// Borrows `self` as a mutable handle.
    fn poke(&mut self) -> Poke<'_>;

    /// Returns [`Self::SHAPE`]. Fields point at this function so that
    /// records may contain themselves.
    fn shape() -> &'static Shape
    where
        Self: Sized,
    {
        Self::SHAPE
    }
}

/// Field access for record types.
///
/// Indices follow the order of the fields in the record's
/// [`crate::StructType`].
pub trait Record {
    /// Borrows the field at `index`, or `None` past the last field.
    fn poke_field(&mut self, index: usize) -> Option<Poke<'_>>;
}
