//! Property-based tests for the curry engine and the combinators built on it.
//!
//! ## Curry Laws
//! - **Grouping Invariance**: `curryable(f, n)` gives `f(args)` for every
//!   split of `args` into sequential calls
//! - **One Step Per Call**: `curry(f, n)` keeps only the first argument of each call
//! - **Right Reversal**: `curry_right(f, n)` calls `f` with the arguments reversed
//! - **Branch Independence**: calling one continuation of a partial never
//!   changes another
//!
//! ## Combinator Laws
//! - **Aritize Bound**: `aritize(f, n)` passes `min(n, len)` arguments
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Pipe/Compose Consistency**: `pipe([f, g]) == compose([g, f])`

use lamb::{
    Function, Value, aritize, compose, curry, curry_right, curryable, flip, list_function, pipe,
};
use proptest::prelude::*;

fn ints(items: &[i64]) -> Vec<Value> {
    items.iter().copied().map(Value::Int).collect()
}

/// Splits `items` into consecutive groups using `cuts` as group sizes.
fn split_into_groups(items: &[Value], cuts: &[usize]) -> Vec<Vec<Value>> {
    let mut groups = Vec::new();
    let mut rest = items;
    for &cut in cuts {
        if rest.is_empty() {
            break;
        }
        let (group, tail) = rest.split_at(cut.min(rest.len()));
        groups.push(group.to_vec());
        rest = tail;
    }
    if !rest.is_empty() {
        groups.push(rest.to_vec());
    }
    groups
}

fn call_groups(start: Function, groups: &[Vec<Value>]) -> Value {
    groups
        .iter()
        .fold(Value::from(start), |current, group| {
            current.call(group).expect("curried call failed")
        })
}

// =============================================================================
// Curry Laws
// =============================================================================

proptest! {
    /// Grouping Invariance: any split into calls yields f(all arguments)
    #[test]
    fn prop_curryable_grouping_invariance(
        items in prop::collection::vec(any::<i64>(), 1..8),
        cuts in prop::collection::vec(0usize..4, 0..8),
    ) {
        let arguments = ints(&items);
        let groups = split_into_groups(&arguments, &cuts);

        let curried = curryable(list_function(), arguments.len());
        let result = call_groups(curried, &groups);

        prop_assert_eq!(result, Value::from(arguments));
    }

    /// One Step Per Call: each non-empty call contributes its first element only
    #[test]
    fn prop_curry_takes_first_of_each_group(
        groups in prop::collection::vec(prop::collection::vec(any::<i64>(), 1..4), 1..6),
    ) {
        let groups: Vec<Vec<Value>> = groups.iter().map(|group| ints(group)).collect();
        let expected: Vec<Value> = groups.iter().map(|group| group[0].clone()).collect();

        let curried = curry(list_function(), groups.len());
        let result = call_groups(curried, &groups);

        prop_assert_eq!(result, Value::from(expected));
    }

    /// Right Reversal: curry_right passes the supplied arguments reversed
    #[test]
    fn prop_curry_right_reverses(items in prop::collection::vec(any::<i64>(), 1..6)) {
        let groups: Vec<Vec<Value>> = items.iter().map(|item| vec![Value::Int(*item)]).collect();

        let curried = curry_right(list_function(), items.len());
        let result = call_groups(curried, &groups);

        let mut expected = ints(&items);
        expected.reverse();
        prop_assert_eq!(result, Value::from(expected));
    }

    /// Branch Independence: two continuations of one partial do not interfere
    #[test]
    fn prop_branches_are_independent(
        first in any::<i64>(),
        left in prop::collection::vec(any::<i64>(), 2),
        right in prop::collection::vec(any::<i64>(), 2),
    ) {
        let partial = curry(list_function(), 3).call(&[Value::Int(first)]).unwrap();

        let left_branch = partial.call(&[Value::Int(left[0])]).unwrap();
        let right_branch = partial.call(&[Value::Int(right[0])]).unwrap();

        let right_result = right_branch.call(&[Value::Int(right[1])]).unwrap();
        let left_result = left_branch.call(&[Value::Int(left[1])]).unwrap();

        prop_assert_eq!(left_result, Value::from(ints(&[first, left[0], left[1]])));
        prop_assert_eq!(right_result, Value::from(ints(&[first, right[0], right[1]])));
    }
}

// =============================================================================
// Combinator Laws
// =============================================================================

proptest! {
    /// Aritize Bound: exactly the first min(n, len) arguments arrive
    #[test]
    fn prop_aritize_truncates(
        items in prop::collection::vec(any::<i64>(), 0..8),
        arity in 0usize..10,
    ) {
        let arguments = ints(&items);
        let result = aritize(list_function(), arity).call(&arguments).unwrap();

        let expected = arguments[..arity.min(arguments.len())].to_vec();
        prop_assert_eq!(result, Value::from(expected));
    }

    /// Double Flip Identity: flip(flip(f))(args) == f(args)
    #[test]
    fn prop_double_flip_identity(items in prop::collection::vec(any::<i64>(), 0..8)) {
        let arguments = ints(&items);
        let twice = flip(flip(list_function()));

        prop_assert_eq!(
            twice.call(&arguments).unwrap(),
            list_function().call(&arguments).unwrap()
        );
    }

    /// Pipe/Compose Consistency: pipe([f, g]) == compose([g, f])
    #[test]
    fn prop_pipe_is_reversed_compose(x in -1_000_000i64..1_000_000) {
        let add_one = Function::new(1, |_, arguments| {
            Ok(Value::Int(arguments[0].as_int().unwrap_or(0) + 1))
        });
        let double = Function::new(1, |_, arguments| {
            Ok(Value::Int(arguments[0].as_int().unwrap_or(0) * 2))
        });

        let piped = pipe(vec![add_one.clone(), double.clone()]);
        let composed = compose(vec![double, add_one]);

        prop_assert_eq!(
            piped.call(&[Value::Int(x)]).unwrap(),
            composed.call(&[Value::Int(x)]).unwrap()
        );
    }
}
