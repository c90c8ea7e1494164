#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

use std::any::Any;

/// Debug-level logging macro that forwards to `tracing::debug!` when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Debug-level logging macro (no-op when `tracing` feature is disabled).
#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[allow(unused_imports)]
pub(crate) use debug;

mod macros;

mod types;
pub use types::*;

pub mod cache;
pub use cache::describe;

// Definition for `core::` types
mod impls_core;

// Definition for `alloc::` types
mod impls_alloc;

// Definition for `std::` types (that aren't in `alloc` or `core`)
mod impls_std;

mod impls_indexmap;
mod impls_rust_decimal;

/// A value slot the binder writes into, with its concrete type erased.
///
/// Every accessor in a [`TypeDescriptor`] receives and hands out slots of this
/// type; the descriptor's functions downcast them back to the type they were
/// built for.
pub type Erased = dyn Any;
