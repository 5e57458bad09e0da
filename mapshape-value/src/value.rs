use indexmap::IndexMap;
use jiff::Timestamp;
use mapshape_core::ScalarType;

/// A mapping from lower-case keys to values, in insertion order.
pub type Map = IndexMap<String, Value>;

/// A dynamically-typed value in a source [`Map`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// Signed integer
    I64(i64),
    /// Unsigned integer
    U64(u64),
    /// String (UTF-8)
    String(String),
    /// Sequence of strings
    Strings(Vec<String>),
    /// Point in time
    Timestamp(Timestamp),
    /// Nested map, decoded into a nested record
    Map(Map),
}

/// Enum distinguishing the kinds of [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Signed integer
    I64,
    /// Unsigned integer
    U64,
    /// String (UTF-8)
    String,
    /// Sequence of strings
    Strings,
    /// Point in time
    Timestamp,
    /// Nested map
    Map,
}

impl core::fmt::Display for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ValueType::I64 => "i64",
            ValueType::U64 => "u64",
            ValueType::String => "string",
            ValueType::Strings => "string sequence",
            ValueType::Timestamp => "timestamp",
            ValueType::Map => "map",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Returns the kind of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::I64(_) => ValueType::I64,
            Value::U64(_) => ValueType::U64,
            Value::String(_) => ValueType::String,
            Value::Strings(_) => ValueType::Strings,
            Value::Timestamp(_) => ValueType::Timestamp,
            Value::Map(_) => ValueType::Map,
        }
    }

    /// Returns the scalar type a field needs to hold this value, or `None`
    /// for nested maps.
    pub fn scalar_type(&self) -> Option<ScalarType> {
        match self {
            Value::I64(_) => Some(ScalarType::I64),
            Value::U64(_) => Some(ScalarType::U64),
            Value::String(_) => Some(ScalarType::String),
            Value::Strings(_) => Some(ScalarType::Strings),
            Value::Timestamp(_) => Some(ScalarType::Timestamp),
            Value::Map(_) => None,
        }
    }

    /// Returns true if this is a nested map.
    #[inline]
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns the nested map, if this is one.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::I64(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::U64(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::Strings(v)
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::Strings(v.into_iter().map(str::to_owned).collect())
    }
}

impl From<Timestamp> for Value {
    fn from(ts: Timestamp) -> Self {
        Value::Timestamp(ts)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}
