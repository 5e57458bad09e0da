use crate::ScalarType;

/// Static description of a type the decoder can write into.
///
/// Shapes are produced as constants by [`crate::Shaped::SHAPE`] and are never
/// built at runtime.
#[derive(Clone, Copy, Debug)]
pub struct Shape {
    /// Human-readable name of the type, used in error messages and logs.
    pub type_identifier: &'static str,

    /// What kind of type this is.
    pub ty: Type,
}

/// The structural kind of a [`Shape`].
#[derive(Clone, Copy, Debug)]
pub enum Type {
    /// A leaf value, assigned as a whole.
    Scalar(ScalarType),

    /// A record made of named fields.
    Struct(StructType),

    /// An optional, owned reference to a nested record, such as
    /// `Option<Job>` or `Option<Box<Job>>`.
    Option(OptionDef),
}

/// Field list of a record type.
#[derive(Clone, Copy, Debug)]
pub struct StructType {
    /// Fields in declaration order.
    pub fields: &'static [Field],
}

/// Describes an optional nested record.
#[derive(Clone, Copy, Debug)]
pub struct OptionDef {
    /// Shape of the record held when the option is set.
    pub pointee: fn() -> &'static Shape,
}

impl OptionDef {
    /// Returns the shape of the record held when the option is set.
    pub fn pointee(&self) -> &'static Shape {
        (self.pointee)()
    }
}

/// Describes a field in a record.
#[derive(Clone, Copy, Debug)]
pub struct Field {
    /// Declared name of the field.
    pub name: &'static str,

    /// Key this field is looked up by in a source map: the lower-cased
    /// field name, unless renamed.
    pub key: &'static str,

    /// Shape of the field's type.
    ///
    /// The layer of indirection allows for recursive record definitions.
    pub shape: fn() -> &'static Shape,
}

impl Field {
    /// Creates a field description.
    pub const fn new(name: &'static str, key: &'static str, shape: fn() -> &'static Shape) -> Self {
        Self { name, key, shape }
    }

    /// Returns the shape of the field's type.
    pub fn shape(&self) -> &'static Shape {
        (self.shape)()
    }
}

impl Shape {
    /// Returns the scalar type if this shape is a leaf.
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self.ty {
            Type::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Returns the field list if this shape is a record.
    pub fn struct_type(&self) -> Option<&StructType> {
        match &self.ty {
            Type::Struct(st) => Some(st),
            _ => None,
        }
    }

    /// Returns the option definition if this shape is an optional record.
    pub fn option_def(&self) -> Option<&OptionDef> {
        match &self.ty {
            Type::Option(def) => Some(def),
            _ => None,
        }
    }

    /// Returns true if this shape is a record.
    pub fn is_struct(&self) -> bool {
        matches!(self.ty, Type::Struct(_))
    }

    /// Returns the record's fields, or an empty slice for non-records.
    pub fn fields(&self) -> &'static [Field] {
        match self.ty {
            Type::Struct(st) => st.fields,
            _ => &[],
        }
    }

    /// Finds the index of the field looked up by `key`.
    pub fn field_index(&self, key: &str) -> Option<usize> {
        self.fields().iter().position(|f| f.key == key)
    }
}

impl core::fmt::Display for Shape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.type_identifier)
    }
}
