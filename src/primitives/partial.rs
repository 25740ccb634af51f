//! Placeholder-aware partial application.

use smallvec::SmallVec;

use crate::value::{Function, Value, expect_function};

/// The placeholder value for [`partial`].
///
/// Every `__` among the bound arguments is filled, in order, with the next
/// call argument.
#[allow(non_upper_case_globals)]
pub const __: Value = Value::Placeholder;

/// Partially applies `bound` to `function`.
///
/// Placeholders in `bound` are filled from the call arguments from left to
/// right; placeholders left unfilled become [`Value::Nil`]; call arguments left
/// over are appended. The call context is forwarded.
///
/// # Examples
///
/// ```rust
/// use lamb::{__, function, partial, values, Value};
///
/// let subtract = function!(|a, b| a.as_int().unwrap_or(0) - b.as_int().unwrap_or(0));
///
/// let minus_five = partial(subtract.clone(), values![__, 5].to_vec());
/// assert_eq!(minus_five.call(&values![12])?, Value::Int(7));
///
/// let from_ten = partial(subtract, values![10].to_vec());
/// assert_eq!(from_ten.call(&values![3])?, Value::Int(7));
/// # Ok::<(), lamb::CallError>(())
/// ```
pub fn partial(function: Function, bound: Vec<Value>) -> Function {
    Function::variadic(move |this, arguments| {
        let mut remaining = arguments.iter();
        let mut collected: SmallVec<[Value; 8]> = bound
            .iter()
            .map(|argument| {
                if argument.is_placeholder() {
                    remaining.next().cloned().unwrap_or_default()
                } else {
                    argument.clone()
                }
            })
            .collect();
        collected.extend(remaining.cloned());

        function.call_with(this, &collected)
    })
    .with_name("partial")
}

/// [`partial`] as a function value: `(function, ...bound) -> partial application`.
pub fn partial_function() -> Function {
    Function::variadic(|_, arguments| {
        let function = expect_function(arguments.first())?;
        let bound = arguments.get(1..).unwrap_or_default().to_vec();
        Ok(Value::from(partial(function.clone(), bound)))
    })
    .with_name("partial")
}
