//! Mutable handles that write into values through their shapes.

use core::any::Any;

use crate::{Field, ReflectError, Record, ScalarType, Shape, Shaped};

/// A mutable, addressable handle onto a [`Shaped`] value.
///
/// A `Poke` always wraps an exclusive borrow, so anything written through
/// it lands in the caller's value.
pub enum Poke<'mem> {
    /// A leaf value.
    Scalar(PokeScalar<'mem>),
    /// A record.
    Struct(PokeStruct<'mem>),
    /// An optional nested record.
    Option(PokeOption<'mem>),
}

impl<'mem> Poke<'mem> {
    /// Borrows `value` as a handle.
    #[inline]
    pub fn new<T: Shaped>(value: &'mem mut T) -> Self {
        value.poke()
    }

    /// Shape of the value behind this handle.
    pub fn shape(&self) -> &'static Shape {
        match self {
            Poke::Scalar(p) => p.shape(),
            Poke::Struct(p) => p.shape(),
            Poke::Option(p) => p.shape(),
        }
    }

    /// Converts into a record handle, or fails if the value is not a record.
    pub fn into_struct(self) -> Result<PokeStruct<'mem>, ReflectError> {
        match self {
            Poke::Struct(p) => Ok(p),
            other => Err(ReflectError::WasNotA {
                expected: "struct",
                actual: other.shape(),
            }),
        }
    }

    /// Converts into a scalar handle, or fails if the value is not a leaf.
    pub fn into_scalar(self) -> Result<PokeScalar<'mem>, ReflectError> {
        match self {
            Poke::Scalar(p) => Ok(p),
            other => Err(ReflectError::WasNotA {
                expected: "scalar",
                actual: other.shape(),
            }),
        }
    }

    /// Converts into an option handle, or fails if the value is not optional.
    pub fn into_option(self) -> Result<PokeOption<'mem>, ReflectError> {
        match self {
            Poke::Option(p) => Ok(p),
            other => Err(ReflectError::WasNotA {
                expected: "option",
                actual: other.shape(),
            }),
        }
    }
}

/// Allows overwriting a leaf value.
pub struct PokeScalar<'mem> {
    shape: &'static Shape,
    slot: &'mem mut dyn Any,
}

impl<'mem> PokeScalar<'mem> {
    /// Borrows a leaf value.
    pub fn new<T: Shaped + Any>(value: &'mem mut T) -> Self {
        Self {
            shape: T::SHAPE,
            slot: value,
        }
    }

    /// Shape getter
    #[inline(always)]
    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    /// Which leaf type this is.
    pub fn scalar_type(&self) -> Option<ScalarType> {
        self.shape.scalar_type()
    }

    /// Replaces the value. `T` must be exactly the slot's type; nothing is
    /// converted. On mismatch the slot is left untouched.
    pub fn set<T: Any>(&mut self, value: T) -> Result<(), ReflectError> {
        match self.slot.downcast_mut::<T>() {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ReflectError::WrongShape {
                expected: self.shape,
                actual: core::any::type_name::<T>(),
            }),
        }
    }
}

/// Allows mutating the fields of a record.
pub struct PokeStruct<'mem> {
    shape: &'static Shape,
    value: &'mem mut dyn Record,
}

impl<'mem> PokeStruct<'mem> {
    /// Borrows a record.
    pub fn new<T: Shaped + Record>(value: &'mem mut T) -> Self {
        Self {
            shape: T::SHAPE,
            value,
        }
    }

    /// Shape getter
    #[inline(always)]
    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &'static [Field] {
        self.shape.fields()
    }

    /// Borrows the field at `index`.
    pub fn field(&mut self, index: usize) -> Result<Poke<'_>, ReflectError> {
        let shape = self.shape;
        self.value
            .poke_field(index)
            .ok_or(ReflectError::FieldOutOfBounds { shape, index })
    }

    /// Borrows the field looked up by `key`, if there is one.
    pub fn field_by_key(&mut self, key: &str) -> Option<Poke<'_>> {
        let index = self.shape.field_index(key)?;
        self.value.poke_field(index)
    }
}

/// Type-erased access to an `Option` holding a record.
pub trait OptionSlot {
    /// Whether the option is currently set.
    fn is_some(&self) -> bool;

    /// Unsets the option.
    fn clear(&mut self);

    /// Borrows the held record, constructing a default one first if the
    /// option is unset.
    fn get_or_insert_default(&mut self) -> Poke<'_>;
}

impl<T: Shaped + Record + Default> OptionSlot for Option<T> {
    fn is_some(&self) -> bool {
        Option::is_some(self)
    }

    fn clear(&mut self) {
        *self = None;
    }

    fn get_or_insert_default(&mut self) -> Poke<'_> {
        self.get_or_insert_with(T::default).poke()
    }
}

/// Allows setting, clearing and filling an optional nested record.
pub struct PokeOption<'mem> {
    shape: &'static Shape,
    pointee: &'static Shape,
    value: &'mem mut dyn OptionSlot,
}

impl<'mem> PokeOption<'mem> {
    /// Borrows an optional record.
    pub fn new<T>(value: &'mem mut Option<T>) -> Self
    where
        T: Shaped + Record + Default + 'static,
    {
        Self {
            shape: <Option<T> as Shaped>::SHAPE,
            pointee: T::SHAPE,
            value,
        }
    }

    /// Shape getter
    #[inline(always)]
    pub fn shape(&self) -> &'static Shape {
        self.shape
    }

    /// Shape of the record held when the option is set.
    #[inline(always)]
    pub fn pointee(&self) -> &'static Shape {
        self.pointee
    }

    /// Whether the option is currently set.
    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    /// Unsets the option.
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Turns into a handle on the held record, allocating a default record
    /// first if the option is unset.
    pub fn into_inner_or_default(self) -> Poke<'mem> {
        let value = self.value;
        value.get_or_insert_default()
    }
}
