//! Sequence helpers: slicing, collecting, mapping and type tags.

use std::ops::Range;

use smallvec::SmallVec;

use crate::value::{CallError, Function, Value, expect_function};

/// Resolves a half-open range over a sequence of `length` items.
///
/// Negative offsets count from the end, `None` means "from the start" and
/// "to the end" respectively, and both bounds clamp to the sequence.
///
/// # Examples
///
/// ```rust
/// use lamb::slice_range;
///
/// assert_eq!(slice_range(5, Some(1), Some(3)), 1..3);
/// assert_eq!(slice_range(5, Some(-2), None), 3..5);
/// assert_eq!(slice_range(5, Some(4), Some(2)), 4..4);
/// assert_eq!(slice_range(5, None, Some(99)), 0..5);
/// ```
pub fn slice_range(length: usize, start: Option<i64>, end: Option<i64>) -> Range<usize> {
    let resolve = |offset: i64| -> usize {
        if offset < 0 {
            length.saturating_sub(usize::try_from(offset.unsigned_abs()).unwrap_or(usize::MAX))
        } else {
            usize::try_from(offset).unwrap_or(usize::MAX).min(length)
        }
    };

    let start = start.map_or(0, resolve);
    let end = end.map_or(length, resolve);
    start..end.max(start)
}

/// Extracts `start..end` from an array-like value.
///
/// Lists yield their elements and strings yield one-character strings. Any
/// other value is treated as an empty sequence.
///
/// # Examples
///
/// ```rust
/// use lamb::{slice, values, Value};
///
/// let list = Value::from(values![1, 2, 3, 4].to_vec());
/// assert_eq!(slice(&list, Some(1), Some(-1)), values![2, 3].to_vec());
///
/// let text = Value::from("hello");
/// assert_eq!(slice(&text, Some(-3), None), values!["l", "l", "o"].to_vec());
///
/// assert!(slice(&Value::Int(3), None, None).is_empty());
/// ```
pub fn slice(array_like: &Value, start: Option<i64>, end: Option<i64>) -> Vec<Value> {
    match array_like {
        Value::List(items) => items[slice_range(items.len(), start, end)].to_vec(),
        Value::Str(text) => {
            let characters: SmallVec<[char; 32]> = text.chars().collect();
            characters[slice_range(characters.len(), start, end)]
                .iter()
                .map(|character| Value::from(character.to_string()))
                .collect()
        }
        _ => Vec::new(),
    }
}

/// Returns the canonical type tag of `value`.
///
/// The tags are `"Undefined"`, `"Placeholder"`, `"Boolean"`, `"Number"`,
/// `"String"`, `"Array"`, `"Object"` and `"Function"`.
#[inline]
pub const fn type_of(value: &Value) -> &'static str {
    value.type_tag()
}

/// Collects arguments into a list value.
#[inline]
pub fn list(arguments: &[Value]) -> Value {
    Value::from(arguments)
}

/// Builds a function that maps the sequence in its first argument through `mapper`.
///
/// The mapper is called with `(element, index, whole_list)`, so mappers that
/// only declare one parameter simply ignore the rest.
///
/// # Examples
///
/// ```rust
/// use lamb::{function, map_with, values, Value};
///
/// let double = function!(|number| number.as_int().unwrap_or(0) * 2);
/// let double_all = map_with(double);
///
/// let doubled = double_all.call(&[Value::from(values![1, 2, 3].to_vec())])?;
/// assert_eq!(doubled, Value::from(values![2, 4, 6].to_vec()));
/// # Ok::<(), lamb::CallError>(())
/// ```
pub fn map_with(mapper: Function) -> Function {
    Function::new(1, move |_, arguments| {
        let source = arguments.first().cloned().unwrap_or_default();
        let items = slice(&source, None, None);
        let whole = Value::from(items.as_slice());

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| mapper.call(&[item, Value::from(index), whole.clone()]))
            .collect::<Result<Vec<_>, CallError>>()
            .map(Value::from)
    })
    .with_name("mapped")
}

/// [`slice`] as a function value: `(array_like, start?, end?)`.
pub fn slice_function() -> Function {
    Function::new(3, |_, arguments| {
        let source = arguments.first().cloned().unwrap_or_default();
        let start = arguments.get(1).and_then(Value::as_int);
        let end = arguments.get(2).and_then(Value::as_int);
        Ok(Value::from(slice(&source, start, end)))
    })
    .with_name("slice")
}

/// [`type_of`] as a function value.
pub fn type_function() -> Function {
    Function::new(1, |_, arguments| {
        Ok(Value::from(type_of(arguments.first().unwrap_or(&Value::Nil))))
    })
    .with_name("type")
}

/// [`list`] as a function value.
pub fn list_function() -> Function {
    Function::variadic(|_, arguments| Ok(list(arguments))).with_name("list")
}

/// [`map_with`] as a function value: `(mapper) -> mapping function`.
pub fn map_with_function() -> Function {
    Function::new(1, |_, arguments| {
        expect_function(arguments.first()).map(|mapper| Value::from(map_with(mapper.clone())))
    })
    .with_name("map_with")
}
