//! The callable value type.
//!
//! A [`Function`] pairs a shared closure with the number of parameters it
//! declares. The declared length is what arity inference reads when a curry
//! constructor is not given an explicit arity.

use std::fmt;
use std::sync::Arc;

use super::{CallError, CallResult, Object, Value};

type Callable = dyn Fn(&Value, &[Value]) -> CallResult + Send + Sync;

/// A dynamically callable function with a declared parameter count.
///
/// Every callable receives a context value (`this`) and a slice of positional
/// arguments. Cloning a `Function` is cheap and yields the same function:
/// equality is identity.
///
/// # Examples
///
/// ```rust
/// use lamb::{Function, Value, values};
///
/// let add = Function::new(2, |_, arguments| {
///     let sum: i64 = arguments.iter().filter_map(Value::as_int).sum();
///     Ok(Value::Int(sum))
/// });
///
/// assert_eq!(add.length(), 2);
/// assert_eq!(add.call(&values![3, 4]).unwrap(), Value::Int(7));
/// ```
#[derive(Clone)]
pub struct Function {
    callable: Arc<Callable>,
    length: usize,
    name: Option<Arc<str>>,
}

impl Function {
    /// Creates a function declaring `length` parameters.
    pub fn new<F>(length: usize, callable: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> CallResult + Send + Sync + 'static,
    {
        Self {
            callable: Arc::new(callable),
            length,
            name: None,
        }
    }

    /// Creates a function that declares no parameters and reads whatever it is given.
    pub fn variadic<F>(callable: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> CallResult + Send + Sync + 'static,
    {
        Self::new(0, callable)
    }

    /// Returns the same function labelled with `name` for diagnostics.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The declared parameter count.
    #[inline]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// The diagnostic name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Calls the function with `Nil` as the context.
    ///
    /// # Errors
    ///
    /// Returns whatever the function itself returns as an error.
    #[inline]
    pub fn call(&self, arguments: &[Value]) -> CallResult {
        (self.callable)(&Value::Nil, arguments)
    }

    /// Calls the function with an explicit context.
    ///
    /// # Errors
    ///
    /// Returns whatever the function itself returns as an error.
    #[inline]
    pub fn call_with(&self, this: &Value, arguments: &[Value]) -> CallResult {
        (self.callable)(this, arguments)
    }

    /// Returns `true` if both handles refer to the same function.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.callable, &other.callable)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("name", &self.name)
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(formatter, "[Function {name}]"),
            None => formatter.write_str("[Function]"),
        }
    }
}

/// Conversion of a closure body's return value into a [`CallResult`].
///
/// This is what lets `function!` bodies return plain values, `Value`s or
/// results interchangeably.
pub trait IntoCallResult {
    /// Performs the conversion.
    ///
    /// # Errors
    ///
    /// Returns the wrapped error when `self` already is a failed result.
    fn into_call_result(self) -> CallResult;
}

impl IntoCallResult for Value {
    #[inline]
    fn into_call_result(self) -> CallResult {
        Ok(self)
    }
}

impl IntoCallResult for CallResult {
    #[inline]
    fn into_call_result(self) -> CallResult {
        self
    }
}

macro_rules! impl_into_call_result {
    ($($source:ty),* $(,)?) => {
        $(
            impl IntoCallResult for $source {
                #[inline]
                fn into_call_result(self) -> CallResult {
                    Ok(Value::from(self))
                }
            }
        )*
    };
}

impl_into_call_result!(
    (),
    bool,
    i32,
    i64,
    u32,
    usize,
    f64,
    String,
    &'static str,
    Vec<Value>,
    Function,
    Object,
    Option<Value>,
);

/// Extracts the function in `value` or reports what was found instead.
pub(crate) fn expect_function(value: Option<&Value>) -> Result<&Function, CallError> {
    match value {
        Some(Value::Function(function)) => Ok(function),
        Some(other) => Err(CallError::NotCallable {
            type_tag: other.type_tag(),
        }),
        None => Err(CallError::NotCallable {
            type_tag: Value::Nil.type_tag(),
        }),
    }
}
