#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod value;
pub use value::*;

mod number;
pub use number::*;

mod describe_impl;
