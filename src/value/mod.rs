//! Dynamic values passed through combinators.
//!
//! Currying by arity needs to count arguments at run time, so every
//! combinator in this crate works on [`Value`]s: a small dynamic value type
//! with cheap, reference-counted clones.
//!
//! - [`Value`]: the argument and return type of every [`Function`]
//! - [`Function`]: a shared callable with a declared parameter count
//! - [`Object`]: an immutable set of named members, the target of
//!   [`invoker`](crate::invoker)
//! - [`CallError`]: the error every call may produce
//!
//! # Examples
//!
//! ```rust
//! use lamb::{Object, Value, values};
//!
//! let arguments = values![1, 2.5, "three", true];
//! assert_eq!(arguments[0].as_int(), Some(1));
//! assert_eq!(arguments[1].as_float(), Some(2.5));
//! assert_eq!(arguments[2].as_str(), Some("three"));
//!
//! let point = Object::new().with("x", 1).with("y", 2);
//! assert_eq!(point.get("x"), Some(&Value::Int(1)));
//! ```

mod error;
mod function;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{CallError, CallResult};
pub use function::{Function, IntoCallResult};
pub(crate) use function::expect_function;

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

/// A dynamically typed value.
///
/// `Nil` doubles as the "no value" sentinel returned by combinators that
/// favour safe composition over failure.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Nil,
    /// The hole marker used by [`partial`](crate::partial). See [`__`](crate::__).
    Placeholder,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// An immutable string.
    Str(Arc<str>),
    /// An immutable ordered sequence.
    List(Arc<[Value]>),
    /// An immutable set of named members.
    Object(Object),
    /// A callable.
    Function(Function),
}

impl Value {
    /// Returns the canonical type tag of this value.
    ///
    /// See [`type_of`](crate::type_of).
    pub const fn type_tag(&self) -> &'static str {
        match self {
            Self::Nil => "Undefined",
            Self::Placeholder => "Placeholder",
            Self::Bool(_) => "Boolean",
            Self::Int(_) | Self::Float(_) => "Number",
            Self::Str(_) => "String",
            Self::List(_) => "Array",
            Self::Object(_) => "Object",
            Self::Function(_) => "Function",
        }
    }

    /// Returns `true` for [`Value::Nil`].
    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns `true` for [`Value::Placeholder`].
    #[inline]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Returns the boolean, if this is one.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the integer, if this is one.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the number as a float. Integers are widened.
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(number) => Some(*number),
            Self::Int(number) => Some(*number as f64),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements, if this is a list.
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the object, if this is one.
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the function, if this is one.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Calls this value with `Nil` as the context.
    ///
    /// This is what makes chained partial applications read naturally:
    ///
    /// ```rust
    /// use lamb::{curry, function, values, Value};
    ///
    /// let subtract = function!(|a, b| a.as_int().unwrap_or(0) - b.as_int().unwrap_or(0));
    /// let result = curry(subtract, 2).call(&values![10])?.call(&values![4])?;
    /// assert_eq!(result, Value::Int(6));
    /// # Ok::<(), lamb::CallError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CallError::NotCallable`] if this is not a function, or the
    /// function's own error.
    pub fn call(&self, arguments: &[Self]) -> CallResult {
        self.call_with(&Self::Nil, arguments)
    }

    /// Calls this value with an explicit context.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::NotCallable`] if this is not a function, or the
    /// function's own error.
    pub fn call_with(&self, this: &Self, arguments: &[Self]) -> CallResult {
        match self {
            Self::Function(function) => function.call_with(this, arguments),
            other => Err(CallError::NotCallable {
                type_tag: other.type_tag(),
            }),
        }
    }

    /// Returns the member registered under `name`, if any.
    pub fn member(&self, name: &str) -> Option<&Self> {
        self.as_object().and_then(|object| object.get(name))
    }

    /// Returns the callable member registered under `name`.
    ///
    /// This is the capability check behind [`invoker`](crate::invoker):
    /// `None` when the member is absent or is not a function.
    pub fn method(&self, name: &str) -> Option<&Function> {
        self.member(name).and_then(Self::as_function)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) | (Self::Placeholder, Self::Placeholder) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            #[allow(clippy::cast_precision_loss)]
            (Self::Int(left), Self::Float(right)) | (Self::Float(right), Self::Int(left)) => {
                (*left as f64) == *right
            }
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::List(left), Self::List(right)) => left == right,
            (Self::Object(left), Self::Object(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => left == right,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => formatter.write_str("undefined"),
            Self::Placeholder => formatter.write_str("__"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Int(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number}"),
            Self::Str(text) => formatter.write_str(text),
            Self::List(items) => {
                formatter.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                formatter.write_str("]")
            }
            Self::Object(object) => write!(formatter, "{object}"),
            Self::Function(function) => write!(formatter, "{function}"),
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Nil
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(number: usize) -> Self {
        i64::try_from(number).map_or_else(|_| Self::Float(number as f64), Self::Int)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(Arc::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(Arc::from(text))
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::List(Arc::from(items))
    }
}

impl From<&[Self]> for Value {
    fn from(items: &[Self]) -> Self {
        Self::List(Arc::from(items))
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nil, Into::into)
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iterator: I) -> Self {
        Self::List(iterator.into_iter().collect())
    }
}

/// An immutable set of named members.
///
/// Adding a member returns a new object; objects that were cloned before the
/// change keep their old members.
///
/// # Examples
///
/// ```rust
/// use lamb::Object;
///
/// let base = Object::new().with("count", 5);
/// let extended = base.clone().with("length", 10);
///
/// assert_eq!(base.len(), 1);
/// assert_eq!(extended.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    members: Arc<FxHashMap<Arc<str>, Value>>,
}

impl Object {
    /// Creates an object without members.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this object with `name` bound to `value`.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        Arc::make_mut(&mut self.members).insert(Arc::from(name), value.into());
        self
    }

    /// Returns the member registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members.get(name)
    }

    /// Returns `true` if a member is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// The number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the object has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over the members in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members.iter().map(|(name, value)| (name.as_ref(), value))
    }
}

impl fmt::Display for Object {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.members.keys().map(AsRef::as_ref).collect();
        names.sort_unstable();

        formatter.write_str("{")?;
        for (index, name) in names.into_iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{name}: {}", self.members[name])?;
        }
        formatter.write_str("}")
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);
static_assertions::assert_impl_all!(Function: Send, Sync, Clone);
