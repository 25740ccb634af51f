//! Call-rate control.
//!
//! - [`debounce`]: run once calls have stopped for a while (trailing edge)
//! - [`throttle`]: run at most once per window (leading edge)
//!
//! Both keep their state inside the returned function, shared by every clone
//! of it. Debounce timers are scheduled on the current tokio runtime.
//!
//! ```text
//! calls:     x  x  x        x
//! debounce:          ^         ^      (after `timespan` of quiet)
//! throttle:  ^              ^         (first call of each window)
//! ```

mod debounce;
mod throttle;

pub use debounce::{DebounceHandle, cancellable_debounce, debounce};
pub use throttle::throttle;
