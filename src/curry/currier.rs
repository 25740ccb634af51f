//! The argument accumulator behind every curry flavor.
//!
//! A [`Currier`] holds the target, the arity to reach, the flavor and the
//! arguments collected so far. Calling its step function never changes it:
//! each call that does not yet reach the arity builds a new `Currier` over a
//! fresh copy of the held arguments, so any intermediate step can be called
//! again with different continuations.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::value::{CallResult, Function, Value};

/// How a curry chain consumes and orders arguments.
///
/// - `right`: reverse the collected arguments before invoking the target
/// - `auto`: consume every argument of a call instead of at most the first one
///
/// # Examples
///
/// ```rust
/// use lamb::CurryFlavor;
///
/// assert!(!CurryFlavor::LEFT.right && !CurryFlavor::LEFT.auto);
/// assert!(CurryFlavor::AUTO_RIGHT.right && CurryFlavor::AUTO_RIGHT.auto);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CurryFlavor {
    /// Reverse the final argument order.
    pub right: bool,
    /// Consume all arguments of each call.
    pub auto: bool,
}

impl CurryFlavor {
    /// Left to right, one argument per call.
    pub const LEFT: Self = Self {
        right: false,
        auto: false,
    };
    /// Right to left, one argument per call.
    pub const RIGHT: Self = Self {
        right: true,
        auto: false,
    };
    /// Left to right, all arguments per call.
    pub const AUTO: Self = Self {
        right: false,
        auto: true,
    };
    /// Right to left, all arguments per call.
    pub const AUTO_RIGHT: Self = Self {
        right: true,
        auto: true,
    };

    /// The arguments of one call that this flavor accepts.
    ///
    /// Standard currying advances by exactly one argument per call: anything
    /// after the first argument is dropped.
    #[inline]
    pub fn accepted<'a>(&self, arguments: &'a [Value]) -> &'a [Value] {
        if self.auto {
            arguments
        } else {
            &arguments[..arguments.len().min(1)]
        }
    }
}

#[derive(Clone)]
pub(crate) struct Currier {
    target: Function,
    arity: usize,
    flavor: CurryFlavor,
    held: Arc<[Value]>,
}

impl Currier {
    pub(crate) fn new(target: Function, arity: usize, flavor: CurryFlavor) -> Self {
        Self {
            target,
            arity,
            flavor,
            held: Arc::from(Vec::new()),
        }
    }

    /// Wraps this state in a step function.
    ///
    /// Steps declare no parameters: what they consume depends on the flavor.
    pub(crate) fn into_step(self) -> Function {
        Function::variadic(move |this, arguments| self.step(this, arguments)).with_name("curried")
    }

    fn step(&self, this: &Value, arguments: &[Value]) -> CallResult {
        let accepted = self.flavor.accepted(arguments);

        let mut collected: SmallVec<[Value; 8]> =
            SmallVec::with_capacity(self.held.len() + accepted.len());
        collected.extend(self.held.iter().cloned());
        collected.extend(accepted.iter().cloned());

        if collected.len() >= self.arity {
            if self.flavor.right {
                collected.reverse();
            }
            tracing::trace!(
                arity = self.arity,
                received = collected.len(),
                right = self.flavor.right,
                "curry chain complete, invoking target"
            );
            return self.target.call_with(this, &collected);
        }

        let next = Self {
            target: self.target.clone(),
            arity: self.arity,
            flavor: self.flavor,
            held: Arc::from(collected.into_vec()),
        };
        Ok(Value::Function(next.into_step()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;
    use rstest::rstest;

    fn collect() -> Function {
        Function::variadic(|_, arguments| Ok(Value::from(arguments)))
    }

    #[rstest]
    #[case(CurryFlavor::LEFT, 1)]
    #[case(CurryFlavor::RIGHT, 1)]
    #[case(CurryFlavor::AUTO, 3)]
    #[case(CurryFlavor::AUTO_RIGHT, 3)]
    fn accepted_depends_on_auto(#[case] flavor: CurryFlavor, #[case] expected: usize) {
        assert_eq!(flavor.accepted(&values![1, 2, 3]).len(), expected);
        assert!(flavor.accepted(&[]).is_empty());
    }

    #[rstest]
    fn accumulates_past_the_inline_buffer() {
        let step = Currier::new(collect(), 12, CurryFlavor::AUTO).into_step();
        let partial = step.call(&values![0, 1, 2, 3, 4]).unwrap();
        let result = partial.call(&values![5, 6, 7, 8, 9, 10, 11]).unwrap();

        let expected: Vec<Value> = (0..12).map(Value::from).collect();
        assert_eq!(result, Value::from(expected));
    }

    #[rstest]
    fn zero_arity_fires_on_first_call() {
        let step = Currier::new(collect(), 0, CurryFlavor::LEFT).into_step();
        assert_eq!(step.call(&[]).unwrap(), Value::from(Vec::new()));
    }

    #[rstest]
    fn held_arguments_are_not_shared_between_branches() {
        let step = Currier::new(collect(), 2, CurryFlavor::LEFT).into_step();
        let first = step.call(&values!["a"]).unwrap();

        let left = first.call(&values!["b"]).unwrap();
        let right = first.call(&values!["c"]).unwrap();

        assert_eq!(left, Value::from(values!["a", "b"].to_vec()));
        assert_eq!(right, Value::from(values!["a", "c"].to_vec()));
    }

    #[rstest]
    fn context_of_the_final_call_reaches_target() {
        let read_context = Function::variadic(|this, _| Ok(this.clone()));
        let step = Currier::new(read_context, 1, CurryFlavor::LEFT).into_step();
        assert_eq!(
            step.call_with(&Value::Int(9), &values![1]).unwrap(),
            Value::Int(9)
        );
    }
}
