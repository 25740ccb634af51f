//! The `values!` macro for building argument arrays.

/// Builds an array of [`Value`](crate::Value)s from expressions convertible into values.
///
/// The result coerces to `&[Value]`, the argument type of every call.
///
/// # Examples
///
/// ```rust
/// use lamb::{values, Value};
///
/// let arguments = values![1, "two", 3.0, true];
/// assert_eq!(arguments.len(), 4);
/// assert_eq!(arguments[1], Value::from("two"));
///
/// let empty: [Value; 0] = values![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! values {
    () => {
        []
    };
    ($($value:expr),+ $(,)?) => {
        [$($crate::Value::from($value)),+]
    };
}

#[cfg(test)]
mod tests {
    use crate::Value;

    #[test]
    fn converts_each_element() {
        let arguments = values![1, "a", Value::Nil];
        assert_eq!(
            arguments,
            [Value::Int(1), Value::from("a"), Value::Nil]
        );
    }

    #[test]
    fn trailing_comma_is_accepted() {
        let arguments = values![1, 2,];
        assert_eq!(arguments.len(), 2);
    }
}
