//! Primitive building blocks the combinators are assembled from.
//!
//! These are small, stateless helpers: sequence extraction, type tags,
//! composition and placeholder-aware partial application. Each is available
//! both as a plain Rust function and as a [`Function`](crate::Function) value
//! so combinators can be built point-free from them.
//!
//! - [`slice`]: half-open extraction with negative offsets
//! - [`type_of`]: canonical type tags
//! - [`list`]: collects arguments into a list
//! - [`map_with`]: maps a list through a function
//! - [`compose`]: right-to-left composition
//! - [`partial`]: partial application with [`__`] placeholders
//!
//! # Composition
//!
//! ```text
//! compose(f, g, h)(x, y) = f(g(h(x, y)))
//! ```
//!
//! # Partial Application
//!
//! ```text
//! partial(f, a, __, c)(b, d) = f(a, b, c, d)
//! ```

mod compose;
mod partial;
mod sequence;

pub use compose::{compose, compose_function};
pub use partial::{__, partial, partial_function};
pub use sequence::{
    list, list_function, map_with, map_with_function, slice, slice_function, slice_range, type_of,
    type_function,
};
