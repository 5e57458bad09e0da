#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod tracing_macros;

mod value;
pub use value::*;

mod macros;

mod error;
pub use error::*;

mod decode;
pub use decode::*;
