#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub use mapshape_core::*;

/// Derive macro for [`Shaped`] and [`Record`]; see the `mapshape-macros` crate.
pub use mapshape_macros::Record;

pub use mapshape_value::{
    DEFAULT_MAX_DEPTH, DecodeError, DecodeErrorKind, DecodeOptions, Map, PathSegment, Value,
    ValueType, decode, decode_poke, decode_with, from_map, from_map_with, map,
};
