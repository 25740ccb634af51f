//! Argument transformation combinators.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::combinators::application::apply_function;
use crate::primitives::{compose, list_function, map_with, partial};
use crate::value::{Function, Value};

/// Builds a function that calls the method `method_name` on whatever object it receives.
///
/// The first call argument is the target; `bound` arguments come before the
/// remaining call arguments. The method runs with the target as its context.
/// When the target has no callable member under that name the result is
/// [`Value::Nil`], so invokers compose without failing.
///
/// # Examples
///
/// ```rust
/// use lamb::{invoker, values, Function, Object, Value};
///
/// let greet = Function::variadic(|_, arguments| {
///     Ok(Value::from(format!("{}, {}!", arguments[0], arguments[1])))
/// });
/// let english = Value::from(Object::new().with("greet", greet));
///
/// let say_hello = invoker("greet", values!["Hello"].to_vec());
/// assert_eq!(say_hello.call(&[english, Value::from("world")])?, Value::from("Hello, world!"));
/// assert_eq!(say_hello.call(&values![42])?, Value::Nil);
/// # Ok::<(), lamb::CallError>(())
/// ```
pub fn invoker(method_name: impl Into<Arc<str>>, bound: Vec<Value>) -> Function {
    let method_name: Arc<str> = method_name.into();

    Function::new(1, move |_, arguments| {
        let Some((target, rest)) = arguments.split_first() else {
            return Ok(Value::Nil);
        };

        let Some(method) = target.method(&method_name) else {
            tracing::debug!(
                method = %method_name,
                target = target.type_tag(),
                "no callable member, returning nil"
            );
            return Ok(Value::Nil);
        };

        let mut collected: SmallVec<[Value; 8]> = SmallVec::with_capacity(bound.len() + rest.len());
        collected.extend(bound.iter().cloned());
        collected.extend(rest.iter().cloned());
        method.call_with(target, &collected)
    })
    .with_name("invoker")
}

/// Builds a function that transforms each argument with the reader at the same position.
///
/// Positions without a reader, and arguments beyond the reader list, pass
/// through unchanged. The call context is forwarded to `function`.
///
/// # Examples
///
/// ```rust
/// use lamb::{function, tap_args, values, Value};
///
/// let add = function!(|a, b| a.as_int().unwrap_or(0) + b.as_int().unwrap_or(0));
/// let count = function!(|object| object.member("count").cloned().unwrap_or_default());
/// let length = function!(|list| list.as_list().map_or(0, |items| items.len()));
///
/// let amount = tap_args(add, vec![Some(count), Some(length)]);
/// let counter = Value::from(lamb::Object::new().with("count", 5));
/// let data = Value::from(values![2, 3, 123, 5, 6, 7, 54, 65, 76, 0].to_vec());
///
/// assert_eq!(amount.call(&[counter, data])?, Value::Int(15));
/// # Ok::<(), lamb::CallError>(())
/// ```
pub fn tap_args(function: Function, readers: Vec<Option<Function>>) -> Function {
    Function::variadic(move |this, arguments| {
        let tapped = arguments
            .iter()
            .enumerate()
            .map(|(index, argument)| match readers.get(index) {
                Some(Some(reader)) => reader.call(std::slice::from_ref(argument)),
                _ => Ok(argument.clone()),
            })
            .collect::<Result<SmallVec<[Value; 8]>, _>>()?;

        function.call_with(this, &tapped)
    })
    .with_name("tapped")
}

/// Builds a function that maps every argument through `mapper` before applying `function`.
///
/// Assembled as `compose(partial(apply, function), map_with(mapper), list)`.
/// The mapper receives `(argument, index, all_arguments)`.
///
/// # Examples
///
/// ```rust
/// use lamb::{function, map_args, values, Function, Value};
///
/// let sum = Function::variadic(|_, arguments| {
///     Ok(Value::Int(arguments.iter().filter_map(Value::as_int).sum()))
/// });
/// let square = function!(|number| number.as_int().unwrap_or(0).pow(2));
///
/// let sum_squares = map_args(sum, square);
/// assert_eq!(sum_squares.call(&values![1, 2, 3, 4, 5])?, Value::Int(55));
/// # Ok::<(), lamb::CallError>(())
/// ```
pub fn map_args(function: Function, mapper: Function) -> Function {
    compose(vec![
        partial(apply_function(), vec![Value::Function(function)]),
        map_with(mapper),
        list_function(),
    ])
    .with_name("mapped_args")
}
