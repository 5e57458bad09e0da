#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod error;
pub use error::*;

mod scalar;
pub use scalar::*;

mod shape;
pub use shape::*;

mod shaped;
pub use shaped::*;

mod poke;
pub use poke::*;

mod impls;
