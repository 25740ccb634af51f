//! # lamb
//!
//! Higher-order function combinators for Rust: currying, partial application,
//! composition, arity control, argument transformation and call-rate control.
//!
//! ## Overview
//!
//! Functions are first-class [`Function`] values over dynamic [`Value`]
//! arguments, each declaring how many parameters it expects. On top of that:
//!
//! - **Currying**: [`curry`], [`curry_right`], [`curryable`], [`curryable_right`]
//! - **Application**: [`apply`], [`apply_args`], [`aritize`], [`flip`], [`wrap`]
//! - **Composition**: [`compose`], [`pipe`], [`partial`]
//! - **Argument Transformation**: [`invoker`], [`tap_args`], [`map_args`]
//! - **Rate Control**: [`debounce`], [`throttle`]
//! - **Namespace**: every combinator by name, see [`namespace()`]
//!
//! None of the combinators change the functions they are given; every
//! intermediate partial application is a new, independently callable value.
//!
//! ## Feature Flags
//!
//! - `timing`: [`debounce`] and [`throttle`] (tokio timers)
//! - `namespace`: the process-wide registry
//! - `derive`: the [`function!`] macro
//! - `serde`: serialization of data values
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lamb::prelude::*;
//!
//! let add = function!(|a, b| a.as_int().unwrap_or(0) + b.as_int().unwrap_or(0));
//! let add_five = curry(add, Inferred).call(&values![5])?;
//! assert_eq!(add_five.call(&values![3])?, Value::Int(8));
//!
//! let increment_then_double = pipe(vec![
//!     function!(|number| number.as_int().unwrap_or(0) + 1),
//!     function!(|number| number.as_int().unwrap_or(0) * 2),
//! ]);
//! assert_eq!(increment_then_double.call(&values![3])?, Value::Int(8));
//! # Ok::<(), lamb::CallError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

// Lets `function!` expansions name `::lamb` from inside this crate.
extern crate self as lamb;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, functions and macros.
///
/// # Usage
///
/// ```rust
/// use lamb::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinators::*;
    pub use crate::curry::*;
    pub use crate::primitives::*;
    pub use crate::value::*;
    pub use crate::values;

    #[cfg(feature = "timing")]
    pub use crate::timing::*;

    #[cfg(feature = "namespace")]
    pub use crate::namespace::{Namespace, namespace};

    #[cfg(feature = "derive")]
    pub use crate::function;
}

mod macros;

pub mod combinators;
pub mod curry;
pub mod primitives;
pub mod value;

#[cfg(feature = "timing")]
pub mod timing;

#[cfg(feature = "namespace")]
pub mod namespace;

pub use combinators::{
    apply, apply_args, apply_function, aritize, aritize_signed, flip, invoker, map_args, pipe,
    tap_args, wrap,
};
pub use curry::{
    ArityCandidate, CurryFlavor, Inferred, curry, curry_right, curry_with, curryable,
    curryable_right, resolve_arity,
};
pub use primitives::{
    __, compose, compose_function, list, list_function, map_with, map_with_function, partial,
    partial_function, slice, slice_function, slice_range, type_function, type_of,
};
pub use value::{CallError, CallResult, Function, IntoCallResult, Object, Value};

#[cfg(feature = "timing")]
pub use timing::{DebounceHandle, cancellable_debounce, debounce, throttle};

#[cfg(feature = "namespace")]
pub use namespace::{Namespace, namespace};

#[cfg(feature = "derive")]
pub use lamb_derive::function;
