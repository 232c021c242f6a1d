//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use result_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`question!`], [`boundary!`]
//! - **Types**: [`Outcome`] and its variants `Success` and `Failure`
//! - **Traits**: [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use result_rail::prelude::*;
//!
//! fn checked_div(a: i64, b: i64) -> Outcome<i64, &'static str> {
//!     if b == 0 {
//!         return Failure("division by zero");
//!     }
//!     Success(a / b)
//! }
//!
//! fn average(total: i64, count: i64) -> Outcome<i64, &'static str> {
//!     let mean = question!(checked_div(total, count));
//!     Success(mean)
//! }
//!
//! assert_eq!(average(10, 2), Success(5));
//! assert_eq!(average(10, 0), Failure("division by zero"));
//! ```

// Macros
pub use crate::{boundary, question};

// Core type and variants
pub use crate::outcome::Outcome;
pub use crate::outcome::Outcome::{Failure, Success};

// Traits
pub use crate::traits::ResultExt;
