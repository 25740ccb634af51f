//! The process-wide registry of combinators.
//!
//! Every public combinator is registered under its snake_case name as a
//! [`Function`] that takes dynamic arguments, so callers that only hold
//! [`Value`]s (interpreters, configuration-driven pipelines) can reach the
//! whole library through one lookup. The registry is built on first access
//! and never changes afterwards.
//!
//! # Examples
//!
//! ```rust
//! use lamb::{namespace, function, values, Value};
//!
//! let add = function!(|a, b| a.as_int().unwrap_or(0) + b.as_int().unwrap_or(0));
//! let curried = namespace().call("curry", &[Value::from(add)])?;
//!
//! assert_eq!(curried.call(&values![1])?.call(&values![2])?, Value::Int(3));
//! # Ok::<(), lamb::CallError>(())
//! ```

use std::fmt;
use std::sync::LazyLock;
#[cfg(feature = "timing")]
use std::time::Duration;

use rustc_hash::FxHashMap;

use crate::combinators::{
    apply_args, apply_function, aritize, aritize_signed, flip, invoker, map_args, tap_args,
};
use crate::curry::{ArityCandidate, CurryFlavor, curry_with};
use crate::primitives::{
    compose_function, list_function, map_with_function, partial_function, slice_function,
    type_function,
};
use crate::value::{CallError, CallResult, Function, Value, expect_function};

static NAMESPACE: LazyLock<Namespace> = LazyLock::new(Namespace::populate);

/// Returns the process-wide registry.
pub fn namespace() -> &'static Namespace {
    &NAMESPACE
}

/// An immutable map from combinator names to function values.
pub struct Namespace {
    entries: FxHashMap<&'static str, Function>,
}

impl Namespace {
    fn populate() -> Self {
        let mut entries = FxHashMap::default();
        let mut register = |name: &'static str, function: Function| {
            entries.insert(name, function.with_name(name));
        };

        register("curry", curry_entry(CurryFlavor::LEFT));
        register("curry_right", curry_entry(CurryFlavor::RIGHT));
        register("curryable", curry_entry(CurryFlavor::AUTO));
        register("curryable_right", curry_entry(CurryFlavor::AUTO_RIGHT));

        register("apply", apply_function());
        register("apply_args", apply_args());
        register("aritize", aritize_entry());
        register("flip", flip_entry());
        register("pipe", flip(compose_function()));
        register("wrap", aritize(flip(partial_function()), 2));

        register("invoker", invoker_entry());
        register("tap_args", tap_args_entry());
        register("map_args", map_args_entry());

        register("compose", compose_function());
        register("partial", partial_function());
        register("list", list_function());
        register("map_with", map_with_function());
        register("slice", slice_function());
        register("type", type_function());

        #[cfg(feature = "timing")]
        {
            register("debounce", debounce_entry());
            register("throttle", throttle_entry());
        }

        tracing::debug!(entries = entries.len(), "namespace populated");
        Self { entries }
    }

    /// Returns the function registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Function> {
        self.entries.get(name)
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Calls the function registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::NotCallable`] for unknown names, or the
    /// function's own error.
    pub fn call(&self, name: &str, arguments: &[Value]) -> CallResult {
        self.get(name)
            .ok_or(CallError::NotCallable {
                type_tag: Value::Nil.type_tag(),
            })?
            .call(arguments)
    }

    /// The registered names in alphabetical order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Namespace {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.names()).finish()
    }
}

fn curry_entry(flavor: CurryFlavor) -> Function {
    Function::new(2, move |_, arguments| {
        let function = expect_function(arguments.first())?;
        let arity = arguments.get(1).and_then(ArityCandidate::explicit_arity);
        Ok(Value::from(curry_with(function.clone(), arity, flavor)))
    })
}

fn aritize_entry() -> Function {
    Function::new(2, |_, arguments| {
        let function = expect_function(arguments.first())?;
        Ok(Value::from(aritize_signed(
            function.clone(),
            slice_end_from(arguments.get(1)),
        )))
    })
}

/// Reads a slice end: a missing bound keeps everything, numbers truncate
/// toward zero and anything else means no arguments.
#[allow(clippy::cast_possible_truncation)]
fn slice_end_from(value: Option<&Value>) -> i64 {
    match value {
        None | Some(Value::Nil) => i64::MAX,
        Some(Value::Int(end)) => *end,
        Some(Value::Float(end)) if !end.is_nan() => end.trunc() as i64,
        Some(_) => 0,
    }
}

fn flip_entry() -> Function {
    Function::new(1, |_, arguments| {
        expect_function(arguments.first()).map(|function| Value::from(flip(function.clone())))
    })
}

fn invoker_entry() -> Function {
    Function::new(1, |_, arguments| {
        let method_name = match arguments.first() {
            Some(Value::Str(method_name)) => method_name.clone(),
            other => {
                return Err(CallError::TypeMismatch {
                    expected: "String",
                    found: other.map_or("Undefined", Value::type_tag),
                });
            }
        };
        let bound = arguments.get(1..).unwrap_or_default().to_vec();
        Ok(Value::from(invoker(method_name, bound)))
    })
}

fn tap_args_entry() -> Function {
    Function::new(1, |_, arguments| {
        let function = expect_function(arguments.first())?;
        let readers = arguments
            .get(1..)
            .unwrap_or_default()
            .iter()
            .map(|reader| match reader {
                Value::Function(reader) => Ok(Some(reader.clone())),
                Value::Nil => Ok(None),
                other => Err(CallError::NotCallable {
                    type_tag: other.type_tag(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::from(tap_args(function.clone(), readers)))
    })
}

fn map_args_entry() -> Function {
    Function::new(2, |_, arguments| {
        let function = expect_function(arguments.first())?;
        let mapper = expect_function(arguments.get(1))?;
        Ok(Value::from(map_args(function.clone(), mapper.clone())))
    })
}

/// Reads a timespan in milliseconds; anything unusable means no delay.
#[cfg(feature = "timing")]
fn timespan_from(value: Option<&Value>) -> Duration {
    match value {
        Some(Value::Int(milliseconds)) => {
            Duration::from_millis(u64::try_from(*milliseconds).unwrap_or(0))
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(Value::Float(milliseconds)) if milliseconds.is_finite() && *milliseconds > 0.0 => {
            Duration::from_micros((milliseconds * 1000.0).round() as u64)
        }
        _ => Duration::ZERO,
    }
}

#[cfg(feature = "timing")]
fn debounce_entry() -> Function {
    Function::new(2, |_, arguments| {
        let function = expect_function(arguments.first())?;
        let timespan = timespan_from(arguments.get(1));
        Ok(Value::from(crate::timing::debounce(function.clone(), timespan)))
    })
}

#[cfg(feature = "timing")]
fn throttle_entry() -> Function {
    Function::new(2, |_, arguments| {
        let function = expect_function(arguments.first())?;
        let timespan = timespan_from(arguments.get(1));
        Ok(Value::from(crate::timing::throttle(function.clone(), timespan)))
    })
}
