//! Extension trait for converting `Result` values into `Outcome`.
//!
//! This module provides [`ResultExt`], which makes the conversion available
//! as a postfix call at the end of an existing expression chain, where
//! wrapping with [`Outcome::from_result`](crate::outcome::Outcome::from_result)
//! would read inside-out.
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::ResultExt;
//! use result_rail::{question, Outcome, Success};
//!
//! fn read_flag(raw: &str) -> Outcome<bool, String> {
//!     let flag = question!(raw.parse::<bool>().map_err(|e| e.to_string()).into_outcome());
//!     Success(flag)
//! }
//!
//! assert_eq!(read_flag("true"), Success(true));
//! assert!(read_flag("yes").is_err());
//! ```

use crate::outcome::core::Outcome;

/// Extension trait for lifting `Result` values onto the outcome rail.
///
/// Blanket-implemented for every `Result<T, E>`, so bringing the trait into
/// scope is all that is needed.
pub trait ResultExt<T, E> {
    /// Converts the result, mapping `Ok` to `Success` and `Err` to `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::traits::ResultExt;
    ///
    /// let result: Result<i32, &str> = Err("failed");
    /// let outcome = result.into_outcome();
    /// assert_eq!(outcome.err(), Some("failed"));
    /// ```
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from_result(self)
    }
}
