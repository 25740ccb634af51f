//! Arity-driven currying.
//!
//! Currying turns a function of `n` arguments into a chain of calls that
//! collect arguments until `n` of them are available, then invoke the
//! original function once with all of them:
//!
//! ```text
//! curry(f, 3)(a)(b)(c) = f(a, b, c)
//! ```
//!
//! # Flavors
//!
//! | Constructor         | Order         | Arguments consumed per call |
//! |---------------------|---------------|-----------------------------|
//! | [`curry`]           | left to right | at most one                 |
//! | [`curry_right`]     | right to left | at most one                 |
//! | [`curryable`]       | left to right | all                         |
//! | [`curryable_right`] | right to left | all                         |
//!
//! Right currying reverses only the final argument list handed to the
//! target, not the order in which calls supply arguments:
//! `curry_right(f, 2)(1)(2)` calls `f(2, 1)`.
//!
//! # Arity
//!
//! The arity is either explicit or inferred from [`Function::length`]. An
//! explicit arity that is not a finite integer is discarded silently, see
//! [`ArityCandidate`].
//!
//! # Immutability
//!
//! Every intermediate step is a new function. Steps can be stored, shared
//! between threads and called any number of times; calling one never affects
//! another:
//!
//! ```rust
//! use lamb::{curry, function, values, Value};
//!
//! let sum = function!(|a, b, c| {
//!     a.as_int().unwrap_or(0) + b.as_int().unwrap_or(0) + c.as_int().unwrap_or(0)
//! });
//! let with_one = curry(sum, 3).call(&values![1])?;
//!
//! assert_eq!(with_one.call(&values![2])?.call(&values![3])?, Value::Int(6));
//! assert_eq!(with_one.call(&values![9])?.call(&values![9])?, Value::Int(19));
//! # Ok::<(), lamb::CallError>(())
//! ```
//!
//! # Dropped Arguments
//!
//! The one-argument flavors advance by exactly one argument per call and
//! drop the rest: `curry(f, 3)(1, 2)` holds `[1]`, not `[1, 2]`. Use the
//! `curryable` flavors to supply several arguments in one call.

mod arity;
mod currier;

pub use arity::{ArityCandidate, Inferred, resolve_arity};
pub use currier::CurryFlavor;

use crate::value::Function;
use currier::Currier;

/// Curries `function` with an explicit flavor.
///
/// The four named constructors delegate here.
pub fn curry_with(function: Function, arity: impl ArityCandidate, flavor: CurryFlavor) -> Function {
    let arity = resolve_arity(arity, &function);
    Currier::new(function, arity, flavor).into_step()
}

/// Curries `function` from the left, one argument per call.
///
/// # Examples
///
/// ```rust
/// use lamb::{curry, function, values, Value};
///
/// let multiply = function!(|a, b| a.as_int().unwrap_or(0) * b.as_int().unwrap_or(0));
/// let multiply_by_ten = curry(multiply, lamb::Inferred).call(&values![10])?;
///
/// assert_eq!(multiply_by_ten.call(&values![5])?, Value::Int(50));
/// // Empty calls do not consume arity
/// assert_eq!(multiply_by_ten.call(&[])?.call(&values![2])?, Value::Int(20));
/// # Ok::<(), lamb::CallError>(())
/// ```
pub fn curry(function: Function, arity: impl ArityCandidate) -> Function {
    curry_with(function, arity, CurryFlavor::LEFT)
}

/// Curries `function` from the right, one argument per call.
///
/// # Examples
///
/// ```rust
/// use lamb::{curry_right, function, values, Value};
///
/// let divide = function!(|a, b| a.as_float().unwrap_or(0.0) / b.as_float().unwrap_or(1.0));
/// let halve = curry_right(divide, 2).call(&values![2])?;
///
/// assert_eq!(halve.call(&values![3])?, Value::Float(1.5));
/// // Extra arguments are dropped
/// assert_eq!(halve.call(&values![3, 7])?, Value::Float(1.5));
/// # Ok::<(), lamb::CallError>(())
/// ```
pub fn curry_right(function: Function, arity: impl ArityCandidate) -> Function {
    curry_with(function, arity, CurryFlavor::RIGHT)
}

/// Auto-curries `function` from the left: each call may supply any number of arguments.
///
/// # Examples
///
/// ```rust
/// use lamb::{curryable, list_function, values, Value};
///
/// let collect_four = curryable(list_function(), 4);
/// let expected = Value::from(values![2, 3, 4, 5].to_vec());
///
/// assert_eq!(collect_four.call(&values![2, 3, 4, 5])?, expected);
/// assert_eq!(collect_four.call(&values![2])?.call(&values![3, 4])?.call(&values![5])?, expected);
/// assert_eq!(collect_four.call(&[])?.call(&values![2])?.call(&values![3, 4, 5])?, expected);
/// # Ok::<(), lamb::CallError>(())
/// ```
pub fn curryable(function: Function, arity: impl ArityCandidate) -> Function {
    curry_with(function, arity, CurryFlavor::AUTO)
}

/// Auto-curries `function` from the right.
///
/// # Examples
///
/// ```rust
/// use lamb::{curryable_right, list_function, values, Value};
///
/// let collect_four = curryable_right(list_function(), 4);
/// let expected = Value::from(values![5, 4, 3, 2].to_vec());
///
/// assert_eq!(collect_four.call(&values![2])?.call(&values![3, 4])?.call(&values![5])?, expected);
/// # Ok::<(), lamb::CallError>(())
/// ```
pub fn curryable_right(function: Function, arity: impl ArityCandidate) -> Function {
    curry_with(function, arity, CurryFlavor::AUTO_RIGHT)
}
