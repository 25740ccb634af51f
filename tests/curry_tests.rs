//! Integration tests for the four curry flavors.
//!
//! Tests for arity resolution, argument accumulation, right currying and
//! branch independence of partial applications.

use lamb::{
    CallError, CurryFlavor, Function, Inferred, Value, curry, curry_right, curry_with, curryable,
    curryable_right, list_function, values,
};
use rstest::rstest;

fn list(items: &[Value]) -> Value {
    Value::from(items.to_vec())
}

fn collect(length: usize) -> Function {
    Function::new(length, |_, arguments| Ok(Value::from(arguments)))
}

fn subtract() -> Function {
    Function::new(2, |_, arguments| {
        let minuend = arguments[0].as_int().unwrap_or(0);
        let subtrahend = arguments[1].as_int().unwrap_or(0);
        Ok(Value::Int(minuend - subtrahend))
    })
}

// =============================================================================
// curry tests
// =============================================================================

mod curry_tests {
    use super::*;

    #[rstest]
    fn test_curry_one_argument_per_call() {
        let curried = curry(collect(3), Inferred);
        let result = curried
            .call(&values![1])
            .and_then(|step| step.call(&values![2]))
            .and_then(|step| step.call(&values![3]))
            .unwrap();

        assert_eq!(result, list(&values![1, 2, 3]));
    }

    #[rstest]
    fn test_curry_empty_calls_do_not_consume_arity() {
        let curried = curry(collect(2), Inferred);
        let result = curried
            .call(&[])
            .and_then(|step| step.call(&values![1]))
            .and_then(|step| step.call(&[]))
            .and_then(|step| step.call(&[]))
            .and_then(|step| step.call(&values![2]))
            .unwrap();

        assert_eq!(result, list(&values![1, 2]));
    }

    #[rstest]
    fn test_curry_drops_arguments_after_the_first() {
        // Documented quirk: standard currying advances one argument per call.
        let curried = curry(collect(0), 3);
        let after_first = curried.call(&values![1, 2, 3]).unwrap();

        assert!(after_first.as_function().is_some());

        let result = after_first
            .call(&values![4])
            .and_then(|step| step.call(&values![5]))
            .unwrap();
        assert_eq!(result, list(&values![1, 4, 5]));
    }

    #[rstest]
    fn test_curry_partial_application_is_reusable() {
        let minus = curry(subtract(), Inferred).call(&values![10]).unwrap();

        for subtrahend in 0..20 {
            assert_eq!(
                minus.call(&values![subtrahend]).unwrap(),
                Value::Int(10 - i64::from(subtrahend))
            );
        }
    }

    #[rstest]
    fn test_curry_branches_are_independent() {
        let partial = curry(collect(3), 3).call(&values![1]).unwrap();

        let first_branch = partial.call(&values![2]).unwrap();
        let second_branch = partial.call(&values![9]).unwrap();

        assert_eq!(
            first_branch.call(&values![3]).unwrap(),
            list(&values![1, 2, 3])
        );
        assert_eq!(
            second_branch.call(&values![9]).unwrap(),
            list(&values![1, 9, 9])
        );
        assert_eq!(
            first_branch.call(&values![4]).unwrap(),
            list(&values![1, 2, 4])
        );
    }

    #[rstest]
    fn test_curry_explicit_arity_overrides_length() {
        let curried = curry(collect(5), 2);
        let result = curried
            .call(&values!["a"])
            .and_then(|step| step.call(&values!["b"]))
            .unwrap();

        assert_eq!(result, list(&values!["a", "b"]));
    }

    #[rstest]
    #[case(Value::Float(2.5))]
    #[case(Value::Float(f64::NAN))]
    #[case(Value::from("2"))]
    #[case(Value::Nil)]
    fn test_curry_invalid_arity_is_inferred(#[case] arity: Value) {
        let curried = curry(collect(1), arity);
        assert_eq!(curried.call(&values![7]).unwrap(), list(&values![7]));
    }

    #[rstest]
    fn test_curry_zero_arity_fires_immediately() {
        let curried = curry(collect(0), Inferred);
        assert_eq!(curried.call(&[]).unwrap(), list(&[]));
    }

    #[rstest]
    fn test_curry_negative_arity_fires_immediately() {
        let curried = curry(collect(3), -1);
        assert_eq!(curried.call(&values![1]).unwrap(), list(&values![1]));
    }

    #[rstest]
    fn test_curry_target_errors_propagate() {
        let failing = Function::new(2, |_, _| Err(CallError::raised("target failed")));
        let result = curry(failing, Inferred)
            .call(&values![1])
            .and_then(|step| step.call(&values![2]));

        assert_eq!(result, Err(CallError::raised("target failed")));
    }
}

// =============================================================================
// curry_right tests
// =============================================================================

mod curry_right_tests {
    use super::*;

    #[rstest]
    fn test_curry_right_reverses_final_order() {
        let curried = curry_right(collect(2), Inferred);
        let result = curried
            .call(&values![1])
            .and_then(|step| step.call(&values![2]))
            .unwrap();

        assert_eq!(result, list(&values![2, 1]));
    }

    #[rstest]
    fn test_curry_right_fixes_rightmost_parameter_first() {
        let minus_three = curry_right(subtract(), Inferred)
            .call(&values![3])
            .unwrap();

        assert_eq!(minus_three.call(&values![10]).unwrap(), Value::Int(7));
        assert_eq!(minus_three.call(&values![10, 99]).unwrap(), Value::Int(7));
    }
}

// =============================================================================
// curryable tests
// =============================================================================

mod curryable_tests {
    use super::*;

    #[rstest]
    #[case(vec![values![2, 3, 4, 5].to_vec()])]
    #[case(vec![values![2].to_vec(), values![3].to_vec(), values![4].to_vec(), values![5].to_vec()])]
    #[case(vec![values![2].to_vec(), values![3, 4].to_vec(), values![5].to_vec()])]
    #[case(vec![vec![], values![2].to_vec(), vec![], values![3, 4, 5].to_vec()])]
    fn test_curryable_any_grouping(#[case] groups: Vec<Vec<Value>>) {
        let collect_four = curryable(list_function(), 4);
        let mut current = Value::from(collect_four);
        for group in &groups {
            current = current.call(group).unwrap();
        }

        assert_eq!(current, list(&values![2, 3, 4, 5]));
    }

    #[rstest]
    fn test_curryable_right_any_grouping() {
        let collect_four = curryable_right(list_function(), 4);
        let result = collect_four
            .call(&values![2])
            .and_then(|step| step.call(&values![3, 4]))
            .and_then(|step| step.call(&values![5]))
            .unwrap();

        assert_eq!(result, list(&values![5, 4, 3, 2]));
    }

    #[rstest]
    fn test_curryable_surplus_reaches_target() {
        let result = curryable(collect(2), Inferred)
            .call(&values![1, 2, 3])
            .unwrap();
        assert_eq!(result, list(&values![1, 2, 3]));
    }

    #[rstest]
    fn test_curryable_branches_are_independent() {
        let partial = curryable(collect(4), Inferred)
            .call(&values![1, 2])
            .unwrap();

        assert_eq!(
            partial.call(&values![3, 4]).unwrap(),
            list(&values![1, 2, 3, 4])
        );
        assert_eq!(
            partial.call(&values![5, 6]).unwrap(),
            list(&values![1, 2, 5, 6])
        );
    }
}

// =============================================================================
// curry_with tests
// =============================================================================

#[rstest]
#[case(CurryFlavor::LEFT, list(&values![1, 3]))]
#[case(CurryFlavor::RIGHT, list(&values![3, 1]))]
#[case(CurryFlavor::AUTO, list(&values![1, 2]))]
#[case(CurryFlavor::AUTO_RIGHT, list(&values![2, 1]))]
fn test_curry_with_flavors(#[case] flavor: CurryFlavor, #[case] expected: Value) {
    let curried = curry_with(collect(2), Inferred, flavor);
    let first = curried.call(&values![1, 2]).unwrap();
    let result = if first.as_function().is_some() {
        first.call(&values![3]).unwrap()
    } else {
        first
    };

    assert_eq!(result, expected);
}

#[rstest]
fn test_curried_steps_are_thread_safe() {
    let partial = curry(collect(2), Inferred).call(&values![1]).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let partial = partial.clone();
            std::thread::spawn(move || partial.call(&values![index]).unwrap())
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap(),
            list(&[Value::Int(1), Value::from(index)])
        );
    }
}
