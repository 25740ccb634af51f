//! Application and arity combinators.

use crate::curry::curry_right;
use crate::primitives::{compose, partial, slice, slice_range};
use crate::value::{CallResult, Function, Value, expect_function};

/// Calls `function` with `arguments`, using the function itself as the context.
///
/// # Errors
///
/// Returns whatever `function` returns as an error.
///
/// # Examples
///
/// ```rust
/// use lamb::{apply, function, values, Value};
///
/// let add = function!(|a, b| a.as_int().unwrap_or(0) + b.as_int().unwrap_or(0));
/// assert_eq!(apply(&add, &values![3, 4])?, Value::Int(7));
/// # Ok::<(), lamb::CallError>(())
/// ```
#[inline]
pub fn apply(function: &Function, arguments: &[Value]) -> CallResult {
    function.call_with(&Value::Function(function.clone()), arguments)
}

/// [`apply`] as a function value: `(function, array_like)`.
///
/// The second argument is converted with [`slice`], so lists and strings
/// both work as argument collections.
pub fn apply_function() -> Function {
    Function::new(2, |_, arguments| {
        let function = expect_function(arguments.first())?;
        let array_like = arguments.get(1).cloned().unwrap_or_default();
        apply(function, &slice(&array_like, None, None))
    })
    .with_name("apply")
}

/// A right-curried, two-argument [`apply`]: supply the arguments first and
/// the function later.
///
/// # Examples
///
/// ```rust
/// use lamb::{apply_args, function, values, Value};
///
/// let add = function!(|a, b| a.as_int().unwrap_or(0) + b.as_int().unwrap_or(0));
/// let multiply = function!(|a, b| a.as_int().unwrap_or(0) * b.as_int().unwrap_or(0));
///
/// let apply_data_to = apply_args().call(&[Value::from(values![3, 4].to_vec())])?;
/// assert_eq!(apply_data_to.call(&[Value::from(add)])?, Value::Int(7));
/// assert_eq!(apply_data_to.call(&[Value::from(multiply)])?, Value::Int(12));
/// # Ok::<(), lamb::CallError>(())
/// ```
pub fn apply_args() -> Function {
    curry_right(apply_function(), 2).with_name("apply_args")
}

/// Builds a function that forwards at most `arity` of its arguments to `function`.
///
/// # Examples
///
/// ```rust
/// use lamb::{aritize, list_function, values, Value};
///
/// let first_two = aritize(list_function(), 2);
/// assert_eq!(first_two.call(&values![1, 2, 3])?, Value::from(values![1, 2].to_vec()));
/// # Ok::<(), lamb::CallError>(())
/// ```
pub fn aritize(function: Function, arity: usize) -> Function {
    aritize_signed(function, i64::try_from(arity).unwrap_or(i64::MAX))
}

/// [`aritize`] with a signed bound: the forwarded arguments are
/// `arguments[0..end]` under [`slice`] semantics.
///
/// A negative `end` counts from the end of each call's arguments, so
/// `aritize_signed(f, -1)` drops the last argument of every call.
///
/// # Examples
///
/// ```rust
/// use lamb::{aritize_signed, list_function, values, Value};
///
/// let all_but_last = aritize_signed(list_function(), -1);
/// assert_eq!(all_but_last.call(&values![1, 2, 3])?, Value::from(values![1, 2].to_vec()));
/// # Ok::<(), lamb::CallError>(())
/// ```
pub fn aritize_signed(function: Function, end: i64) -> Function {
    Function::variadic(move |_, arguments| {
        apply(&function, &arguments[slice_range(arguments.len(), Some(0), Some(end))])
    })
    .with_name("aritized")
}

/// Builds a function that passes its arguments to `function` in reverse order.
///
/// The call context is forwarded.
///
/// # Examples
///
/// ```rust
/// use lamb::{flip, list_function, values, Value};
///
/// let flipped = flip(list_function());
/// assert_eq!(flipped.call(&values![1, 2, 3])?, Value::from(values![3, 2, 1].to_vec()));
/// # Ok::<(), lamb::CallError>(())
/// ```
pub fn flip(function: Function) -> Function {
    Function::variadic(move |this, arguments| {
        let reversed: Vec<Value> = arguments.iter().rev().cloned().collect();
        function.call_with(this, &reversed)
    })
    .with_name("flipped")
}

/// Builds a left-to-right pipeline: each function consumes the result of the previous one.
///
/// This is [`compose`] with the declaration order flipped.
///
/// # Examples
///
/// ```rust
/// use lamb::{pipe, function, values, Value};
///
/// let add_one = function!(|number| number.as_int().unwrap_or(0) + 1);
/// let double = function!(|number| number.as_int().unwrap_or(0) * 2);
///
/// let pipeline = pipe(vec![add_one, double]);
/// assert_eq!(pipeline.call(&values![3])?, Value::Int(8));
/// # Ok::<(), lamb::CallError>(())
/// ```
pub fn pipe(mut functions: Vec<Function>) -> Function {
    functions.reverse();
    compose(functions)
}

/// Wraps `function` inside `wrapper`.
///
/// The result calls `wrapper` with `function` as its first argument followed
/// by the call arguments, so the wrapper decides whether, when and how the
/// wrapped function runs.
///
/// # Examples
///
/// ```rust
/// use lamb::{apply_function, wrap, values, Function, Value};
///
/// let max = Function::variadic(|_, arguments| {
///     Ok(arguments.iter().filter_map(Value::as_int).max().into())
/// });
/// let array_max = wrap(max, apply_function());
///
/// assert_eq!(array_max.call(&[Value::from(values![4, 5, 2, 6, 1].to_vec())])?, Value::Int(6));
/// # Ok::<(), lamb::CallError>(())
/// ```
pub fn wrap(function: Function, wrapper: Function) -> Function {
    partial(wrapper, vec![Value::Function(function)]).with_name("wrapped")
}
