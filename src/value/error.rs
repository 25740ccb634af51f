//! Error type shared by every callable.
//!
//! Combinators never translate errors: whatever a target function returns as
//! `Err` reaches the caller unchanged. The only errors this crate creates
//! itself are for calling something that is not a function, for dynamic entry
//! points receiving the wrong kind of argument, and for scheduling a timer
//! without a runtime.

use thiserror::Error;

/// Represents a failed call.
///
/// # Examples
///
/// ```rust
/// use lamb::CallError;
///
/// let error = CallError::raised("division by zero");
/// assert_eq!(error.to_string(), "division by zero");
///
/// let error = CallError::NotCallable { type_tag: "Number" };
/// assert_eq!(error.to_string(), "Number is not a function");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// A value that is not a function was called.
    #[error("{type_tag} is not a function")]
    NotCallable {
        /// The type tag of the value that was called.
        type_tag: &'static str,
    },

    /// A dynamic entry point received an argument it cannot work with.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// The expected type tag.
        expected: &'static str,
        /// The type tag that was received.
        found: &'static str,
    },

    /// A timer was requested outside a tokio runtime.
    #[error("no timer runtime available: debounced calls must run inside a tokio runtime")]
    NoTimerRuntime,

    /// A target function failed.
    #[error("{message}")]
    Raised {
        /// Human readable description of the failure.
        message: String,
    },
}

impl CallError {
    /// Creates the error a user function returns to signal failure.
    pub fn raised(message: impl Into<String>) -> Self {
        Self::Raised {
            message: message.into(),
        }
    }
}

/// The result of calling a [`Function`](crate::Function).
pub type CallResult = Result<crate::Value, CallError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn type_mismatch_names_both_tags() {
        let error = CallError::TypeMismatch {
            expected: "Function",
            found: "String",
        };
        assert_eq!(error.to_string(), "expected Function, found String");
    }

    #[rstest]
    fn raised_accepts_owned_and_borrowed_messages() {
        assert_eq!(CallError::raised("boom"), CallError::raised(String::from("boom")));
    }
}
