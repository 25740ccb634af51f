//! Combinators built on top of the curry engine and the primitives.
//!
//! # Application and Arity
//!
//! - [`apply`]: call a function with a collected argument list
//! - [`apply_args`]: right-curried `apply`, arguments first
//! - [`aritize`], [`aritize_signed`]: cap how many arguments reach a function
//! - [`flip`]: reverse the argument order
//! - [`wrap`]: intercept calls with a wrapper
//! - [`pipe`]: left-to-right composition
//!
//! # Argument Transformation
//!
//! - [`invoker`]: call a named method on whatever object arrives
//! - [`tap_args`]: transform arguments position by position
//! - [`map_args`]: transform every argument with one mapper
//!
//! # Laws
//!
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Pipe/Compose Consistency**: `pipe([f, g]) == compose([g, f])`
//! - **Aritize Bound**: `aritize(f, n)` never passes more than `n` arguments

mod application;
mod transform;

pub use application::{
    apply, apply_args, apply_function, aritize, aritize_signed, flip, pipe, wrap,
};
pub use transform::{invoker, map_args, tap_args};
