//! Procedural macros for the `lamb` combinator library.
//!
//! # Available Function-like Macros
//!
//! - [`function!`]: Builds a `lamb::Function` from a closure or a Rust `fn`,
//!   recording its declared parameter count
//!
//! # Example
//!
//! ```rust,ignore
//! use lamb::{curry, function, values};
//!
//! let add = function!(|a, b| a.as_int().unwrap_or(0) + b.as_int().unwrap_or(0));
//! assert_eq!(add.length(), 2);
//!
//! // The declared length drives arity inference
//! let add_five = curry(add, lamb::Inferred).call(&values![5])?;
//! assert_eq!(add_five.call(&values![3])?, lamb::Value::Int(8));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod function;

use proc_macro::TokenStream;

/// Builds a `lamb::Function` with a declared length.
///
/// # Syntax
///
/// - `function!(|a, b| body)`: the closure's parameter count becomes the
///   declared length; untyped parameters are typed as `lamb::Value`
/// - `function!(path, N)`: wraps a Rust `fn` that takes `N` `lamb::Value`s
///
/// The body may return a `lamb::Value`, a `Result<lamb::Value, lamb::CallError>`
/// or any primitive convertible into a value. Closures always capture by
/// value, and whatever they capture must be `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use lamb::{function, values, Value};
///
/// fn join(first: Value, second: Value) -> String {
///     format!("{first}{second}")
/// }
///
/// let joined = function!(join, 2);
/// assert_eq!(joined.call(&values!["a", "b"])?, Value::from("ab"));
/// ```
#[proc_macro]
pub fn function(input: TokenStream) -> TokenStream {
    function::function_impl(input)
}
