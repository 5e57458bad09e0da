use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{OptionDef, Poke, PokeOption, PokeScalar, Record, ScalarType, Shape, Shaped, Type};

macro_rules! impl_scalar {
    ($ty:ty, $name:literal, $scalar:ident) => {
        impl Shaped for $ty {
            const SHAPE: &'static Shape = &Shape {
                type_identifier: $name,
                ty: Type::Scalar(ScalarType::$scalar),
            };

            #[inline]
            fn poke(&mut self) -> Poke<'_> {
                Poke::Scalar(PokeScalar::new(self))
            }
        }
    };
}

impl_scalar!(i64, "i64", I64);
impl_scalar!(u64, "u64", U64);
impl_scalar!(String, "String", String);
impl_scalar!(Vec<String>, "Vec<String>", Strings);
impl_scalar!(jiff::Timestamp, "Timestamp", Timestamp);

// Boxes are transparent: a `Box<T>` has the shape of its pointee.
impl<T: Shaped> Shaped for Box<T> {
    const SHAPE: &'static Shape = T::SHAPE;

    #[inline]
    fn poke(&mut self) -> Poke<'_> {
        (**self).poke()
    }
}

impl<T: Record> Record for Box<T> {
    #[inline]
    fn poke_field(&mut self, index: usize) -> Option<Poke<'_>> {
        (**self).poke_field(index)
    }
}

impl<T> Shaped for Option<T>
where
    T: Shaped + Record + Default + 'static,
{
    const SHAPE: &'static Shape = &Shape {
        type_identifier: "Option",
        ty: Type::Option(OptionDef {
            pointee: <T as Shaped>::shape,
        }),
    };

    #[inline]
    fn poke(&mut self) -> Poke<'_> {
        Poke::Option(PokeOption::new(self))
    }
}
