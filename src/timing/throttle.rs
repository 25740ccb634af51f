//! Leading-edge throttling.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use crate::value::{Function, Value};

#[derive(Default)]
struct ThrottleState {
    last_call: Option<Instant>,
    result: Value,
}

impl ThrottleState {
    /// Claims the current window if it has elapsed.
    fn claim(&mut self, now: Instant, timespan: Duration) -> bool {
        let due = self
            .last_call
            .is_none_or(|last_call| now.saturating_duration_since(last_call) >= timespan);
        if due {
            self.last_call = Some(now);
        }
        due
    }
}

/// Builds a function that runs `function` at most once per `timespan`.
///
/// The first call runs immediately. Calls arriving before `timespan` has
/// passed since the last real invocation return that invocation's cached
/// result without running `function`. A failed invocation still starts a new
/// window and leaves the cached result untouched.
///
/// The lock is not held while `function` runs. A concurrent call that
/// arrives during an invocation gets the previous cached result, which is
/// `Nil` before the first invocation has finished. That stale result is
/// intended: callers never wait for another caller's invocation.
///
/// The clock is [`tokio::time::Instant`], so paused test runtimes control it;
/// no runtime is needed otherwise.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use lamb::{throttle, list_function, values, Value};
///
/// let log = throttle(list_function(), Duration::from_secs(5));
///
/// assert_eq!(log.call(&values!["Hi"])?, Value::from(values!["Hi"].to_vec()));
/// // Within the window: the cached result comes back
/// assert_eq!(log.call(&values!["Hi again"])?, Value::from(values!["Hi"].to_vec()));
/// # Ok::<(), lamb::CallError>(())
/// ```
pub fn throttle(function: Function, timespan: Duration) -> Function {
    let state = Arc::new(Mutex::new(ThrottleState::default()));

    Function::variadic(move |this, arguments| {
        {
            let mut state = state.lock();
            if !state.claim(Instant::now(), timespan) {
                tracing::trace!("throttled, returning cached result");
                return Ok(state.result.clone());
            }
        }

        tracing::trace!(?timespan, "throttle window open, invoking");
        let result = function.call_with(this, arguments)?;
        state.lock().result = result.clone();
        Ok(result)
    })
    .with_name("throttled")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn first_claim_always_succeeds() {
        let mut state = ThrottleState::default();
        assert!(state.claim(Instant::now(), Duration::from_secs(3600)));
    }

    #[rstest]
    fn claims_within_the_window_fail() {
        let mut state = ThrottleState::default();
        let start = Instant::now();
        assert!(state.claim(start, Duration::from_millis(100)));
        assert!(!state.claim(start + Duration::from_millis(99), Duration::from_millis(100)));
        assert!(state.claim(start + Duration::from_millis(100), Duration::from_millis(100)));
    }

    #[rstest]
    fn zero_timespan_never_throttles() {
        let mut state = ThrottleState::default();
        let now = Instant::now();
        assert!(state.claim(now, Duration::ZERO));
        assert!(state.claim(now, Duration::ZERO));
    }
}
