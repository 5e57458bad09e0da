//! Decode a [`Map`] into any record implementing [`Shaped`].

use core::any::Any;

use mapshape_core::{Field, Poke, Shape, Shaped};

use crate::{DecodeError, DecodeErrorKind, Map, PathSegment, Result, Value};

/// Default bound on how deeply nested maps may go.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options controlling [`decode_with`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// How many levels of nested maps below the root are accepted.
    pub max_depth: usize,

    /// Fail on source keys that match no field, instead of ignoring them.
    pub deny_unknown_keys: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            deny_unknown_keys: false,
        }
    }
}

impl DecodeOptions {
    /// Default options: depth bounded by [`DEFAULT_MAX_DEPTH`], unknown keys ignored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets whether unknown keys are an error.
    pub fn deny_unknown_keys(mut self, deny: bool) -> Self {
        self.deny_unknown_keys = deny;
        self
    }
}

/// Decode `source` into `target` with default options.
///
/// Fields without a matching key keep their current value. On error,
/// fields decoded before the failing one keep their new values.
pub fn decode<T: Shaped>(source: &Map, target: &mut T) -> Result<()> {
    decode_with(source, target, &DecodeOptions::default())
}

/// Decode `source` into `target`.
pub fn decode_with<T: Shaped>(source: &Map, target: &mut T, options: &DecodeOptions) -> Result<()> {
    decode_poke(source, Poke::new(target), options)
}

/// Decode `source` through a mutable handle. Fails with
/// [`DecodeErrorKind::InvalidTarget`] unless the handle is onto a record.
pub fn decode_poke(source: &Map, target: Poke<'_>, options: &DecodeOptions) -> Result<()> {
    let shape = target.shape();
    let decoder = Decoder { options };
    decoder
        .check_keys(source, shape)
        .and_then(|()| decoder.decode_record(source, target, 0))
        .map_err(|e| e.with_shape(shape))
}

/// Build a default `T` and decode `source` into it.
pub fn from_map<T: Shaped + Default>(source: &Map) -> Result<T> {
    from_map_with(source, &DecodeOptions::default())
}

/// Build a default `T` and decode `source` into it.
pub fn from_map_with<T: Shaped + Default>(source: &Map, options: &DecodeOptions) -> Result<T> {
    let mut target = T::default();
    decode_with(source, &mut target, options)?;
    Ok(target)
}

struct Decoder<'o> {
    options: &'o DecodeOptions,
}

impl Decoder<'_> {
    /// With `deny_unknown_keys`, fails on the first key of `source` that
    /// names no field of the record `shape`. Non-record shapes pass.
    fn check_keys(&self, source: &Map, shape: &'static Shape) -> Result<()> {
        if !self.options.deny_unknown_keys || !shape.is_struct() {
            return Ok(());
        }
        match source.keys().find(|key| shape.field_index(key).is_none()) {
            Some(key) => {
                let key = key.clone();
                Err(DecodeError::new(DecodeErrorKind::UnknownKey { key }))
            }
            None => Ok(()),
        }
    }

    /// Walks the fields of the record behind `target`. Its keys must
    /// already have passed [`Self::check_keys`].
    fn decode_record(&self, source: &Map, target: Poke<'_>, depth: usize) -> Result<()> {
        let mut record = match target {
            Poke::Struct(record) => record,
            other => {
                let got = other.shape().type_identifier;
                debug!(got, "target is not a record");
                return Err(DecodeError::new(DecodeErrorKind::InvalidTarget { got }));
            }
        };
        debug!(shape = %record.shape(), depth, keys = source.len(), "decoding record");

        for (index, field) in record.fields().iter().enumerate() {
            let Some(value) = source.get(field.key) else {
                trace!(field = field.name, "no value, leaving field as is");
                continue;
            };
            record
                .field(index)
                .map_err(DecodeError::from)
                .and_then(|target| self.decode_field(field, value, target, depth))
                .map_err(|e| e.with_path(PathSegment::Field(field.key)))?;
        }

        Ok(())
    }

    fn decode_field(
        &self,
        field: &Field,
        value: &Value,
        target: Poke<'_>,
        depth: usize,
    ) -> Result<()> {
        match value {
            Value::Map(inner) => self.decode_nested(field, inner, target, depth),
            Value::I64(n) => assign_leaf(value, target, || *n),
            Value::U64(n) => assign_leaf(value, target, || *n),
            Value::String(s) => assign_leaf(value, target, || s.clone()),
            Value::Strings(v) => assign_leaf(value, target, || v.clone()),
            Value::Timestamp(ts) => assign_leaf(value, target, || *ts),
        }
    }

    fn decode_nested(
        &self,
        field: &Field,
        inner: &Map,
        target: Poke<'_>,
        depth: usize,
    ) -> Result<()> {
        let depth = depth + 1;
        if depth > self.options.max_depth {
            return Err(DecodeError::new(DecodeErrorKind::DepthExceeded {
                max_depth: self.options.max_depth,
            }));
        }

        // keys are checked before an unset option is filled in
        let nested = match target {
            Poke::Struct(record) => {
                self.check_keys(inner, record.shape())?;
                Poke::Struct(record)
            }
            Poke::Option(option) => {
                self.check_keys(inner, option.pointee())?;
                if !option.is_some() {
                    trace!(
                        field = field.name,
                        shape = %option.pointee(),
                        "allocating nested record"
                    );
                }
                option.into_inner_or_default()
            }
            Poke::Scalar(slot) => {
                return Err(DecodeError::new(DecodeErrorKind::UnsupportedShape {
                    field: field.name,
                    shape: slot.shape().type_identifier,
                }));
            }
        };

        trace!(field = field.name, depth, "descending into nested map");
        self.decode_record(inner, nested, depth)
    }
}

/// Assigns a leaf value to a scalar field of exactly the same type.
fn assign_leaf<T: Any>(value: &Value, target: Poke<'_>, leaf: impl FnOnce() -> T) -> Result<()> {
    match target {
        Poke::Scalar(mut slot) if slot.scalar_type() == value.scalar_type() => {
            trace!(shape = %slot.shape(), value_type = %value.value_type(), "assigning leaf");
            slot.set(leaf())?;
            Ok(())
        }
        other => Err(DecodeError::new(DecodeErrorKind::TypeMismatch {
            expected: other.shape().type_identifier,
            got: value.value_type(),
        })),
    }
}
