//! Right-to-left function composition over dynamic values.

use crate::value::{Function, Value, expect_function};

/// Composes functions from right to left.
///
/// The rightmost function receives every call argument and the call context;
/// each function to its left receives the single result of the one after it.
/// With no functions the composition returns its first argument.
///
/// ```text
/// compose([f, g, h])(x, y) = f(g(h(x, y)))
/// ```
///
/// # Examples
///
/// ```rust
/// use lamb::{compose, function, values, Value};
///
/// let add_one = function!(|number| number.as_int().unwrap_or(0) + 1);
/// let double = function!(|number| number.as_int().unwrap_or(0) * 2);
///
/// // double(add_one(3)) = 8
/// let composed = compose(vec![double, add_one]);
/// assert_eq!(composed.call(&values![3])?, Value::Int(8));
/// # Ok::<(), lamb::CallError>(())
/// ```
pub fn compose(functions: Vec<Function>) -> Function {
    Function::variadic(move |this, arguments| {
        let Some((innermost, outer)) = functions.split_last() else {
            return Ok(arguments.first().cloned().unwrap_or_default());
        };

        let mut result = innermost.call_with(this, arguments)?;
        for function in outer.iter().rev() {
            result = function.call_with(this, &[result])?;
        }
        Ok(result)
    })
    .with_name("composed")
}

/// [`compose`] as a function value: `(...functions) -> composition`.
///
/// Every argument must be a function.
pub fn compose_function() -> Function {
    Function::variadic(|_, arguments| {
        let functions = arguments
            .iter()
            .map(|argument| expect_function(Some(argument)).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::from(compose(functions)))
    })
    .with_name("compose")
}
