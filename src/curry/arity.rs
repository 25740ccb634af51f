//! Arity resolution.
//!
//! An explicit arity is only trusted when it is a finite integer. Anything
//! else is discarded silently and the target's declared length is used.

use crate::value::{Function, Value};

/// Marker for "no explicit arity": the target's declared length is used.
///
/// # Examples
///
/// ```rust
/// use lamb::{Inferred, resolve_arity, function};
///
/// let add = function!(|a, b| a.as_int().unwrap_or(0) + b.as_int().unwrap_or(0));
/// assert_eq!(resolve_arity(Inferred, &add), 2);
/// assert_eq!(resolve_arity(3, &add), 3);
/// assert_eq!(resolve_arity(2.5, &add), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Inferred;

/// Something that may carry an explicit arity.
///
/// Negative integers clamp to zero: a non-positive arity is satisfied by the
/// very first call.
pub trait ArityCandidate {
    /// Returns the explicit arity, or `None` when inference should be used.
    fn explicit_arity(&self) -> Option<usize>;
}

impl ArityCandidate for Inferred {
    fn explicit_arity(&self) -> Option<usize> {
        None
    }
}

impl ArityCandidate for usize {
    fn explicit_arity(&self) -> Option<usize> {
        Some(*self)
    }
}

impl ArityCandidate for u32 {
    fn explicit_arity(&self) -> Option<usize> {
        usize::try_from(*self).ok()
    }
}

impl ArityCandidate for i32 {
    fn explicit_arity(&self) -> Option<usize> {
        i64::from(*self).explicit_arity()
    }
}

impl ArityCandidate for i64 {
    fn explicit_arity(&self) -> Option<usize> {
        Some(usize::try_from((*self).max(0)).unwrap_or(usize::MAX))
    }
}

impl ArityCandidate for f64 {
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    fn explicit_arity(&self) -> Option<usize> {
        if self.is_finite() && self.fract() == 0.0 {
            (*self as i64).explicit_arity()
        } else {
            None
        }
    }
}

impl ArityCandidate for Value {
    fn explicit_arity(&self) -> Option<usize> {
        match self {
            Self::Int(number) => number.explicit_arity(),
            Self::Float(number) => number.explicit_arity(),
            _ => None,
        }
    }
}

impl<T: ArityCandidate + ?Sized> ArityCandidate for &T {
    fn explicit_arity(&self) -> Option<usize> {
        (**self).explicit_arity()
    }
}

impl<T: ArityCandidate> ArityCandidate for Option<T> {
    fn explicit_arity(&self) -> Option<usize> {
        self.as_ref().and_then(ArityCandidate::explicit_arity)
    }
}

/// Returns the arity a curry chain over `function` should collect.
///
/// Invalid candidates are not an error: they fall back to
/// [`Function::length`].
pub fn resolve_arity(candidate: impl ArityCandidate, function: &Function) -> usize {
    candidate
        .explicit_arity()
        .unwrap_or_else(|| function.length())
}
