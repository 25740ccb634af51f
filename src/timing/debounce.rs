//! Trailing-edge debouncing on the tokio timer queue.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::value::{CallError, Function, Value};

#[derive(Default)]
struct DebounceState {
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl DebounceState {
    /// Supersedes the pending timer, if any, and returns the new generation.
    fn supersede(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        if let Some(pending) = self.pending.take() {
            pending.abort();
            tracing::trace!(generation = self.generation, "debounce timer superseded");
        }
        self.generation
    }
}

/// Cancels the pending invocation of a debounced function.
///
/// Obtained from [`cancellable_debounce`]. Cloning the handle shares the
/// same state.
#[derive(Clone)]
pub struct DebounceHandle {
    state: Arc<Mutex<DebounceState>>,
}

impl DebounceHandle {
    /// Drops the pending invocation without scheduling a new one.
    ///
    /// Returns `true` if an invocation was pending.
    pub fn cancel(&self) -> bool {
        let mut state = self.state.lock();
        let was_pending = state
            .pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished());
        state.supersede();
        was_pending
    }

    /// Returns `true` while an invocation is scheduled and has not run yet.
    pub fn is_pending(&self) -> bool {
        self.state
            .lock()
            .pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }
}

impl std::fmt::Debug for DebounceHandle {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("DebounceHandle")
            .field("pending", &self.is_pending())
            .finish()
    }
}

/// Builds a function that runs `function` only once calls stop for `timespan`.
///
/// Every call cancels the pending timer and schedules a new one with its own
/// context and arguments, so only the last call of a burst invokes
/// `function`. The call itself returns [`Value::Nil`] immediately; the
/// deferred result is discarded and a deferred failure is logged.
///
/// Timers run on the tokio runtime that is current at call time.
///
/// # Errors
///
/// The returned function fails with [`CallError::NoTimerRuntime`] when it is
/// called outside a tokio runtime.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::time::Duration;
/// use lamb::{debounce, values, Function, Value};
///
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() -> Result<(), lamb::CallError> {
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
/// let layout = Function::variadic(move |_, _| {
///     counter.fetch_add(1, Ordering::SeqCst);
///     Ok(Value::Nil)
/// });
///
/// let update_layout = debounce(layout, Duration::from_millis(200));
/// for _ in 0..5 {
///     update_layout.call(&[])?;
/// }
///
/// tokio::time::sleep(Duration::from_millis(201)).await;
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// # Ok(())
/// # }
/// ```
pub fn debounce(function: Function, timespan: Duration) -> Function {
    cancellable_debounce(function, timespan).0
}

/// Like [`debounce`], but also returns a handle that can cancel the pending invocation.
pub fn cancellable_debounce(function: Function, timespan: Duration) -> (Function, DebounceHandle) {
    let state = Arc::new(Mutex::new(DebounceState::default()));
    let handle = DebounceHandle {
        state: Arc::clone(&state),
    };

    let debounced = Function::variadic(move |this, arguments| {
        let runtime = Handle::try_current().map_err(|_| CallError::NoTimerRuntime)?;

        let mut guard = state.lock();
        let generation = guard.supersede();

        let state = Arc::clone(&state);
        let function = function.clone();
        let this = this.clone();
        let arguments = arguments.to_vec();

        guard.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(timespan).await;

            {
                let mut state = state.lock();
                if state.generation != generation {
                    return;
                }
                state.pending = None;
            }

            tracing::trace!(generation, "debounce timer fired");
            if let Err(error) = function.call_with(&this, &arguments) {
                tracing::warn!(%error, "debounced invocation failed");
            }
        }));
        tracing::trace!(generation, ?timespan, "debounce timer scheduled");

        Ok(Value::Nil)
    })
    .with_name("debounced");

    (debounced, handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn calling_outside_a_runtime_fails() {
        let debounced = debounce(
            Function::variadic(|_, _| Ok(Value::Nil)),
            Duration::from_millis(10),
        );
        assert_eq!(debounced.call(&[]), Err(CallError::NoTimerRuntime));
    }

    #[rstest]
    fn supersede_advances_generation() {
        let mut state = DebounceState::default();
        assert_eq!(state.supersede(), 1);
        assert_eq!(state.supersede(), 2);
        assert!(state.pending.is_none());
    }
}
