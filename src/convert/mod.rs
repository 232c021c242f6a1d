//! Conversion helpers between `Outcome` and `std::result::Result`.
//!
//! These adapters make it straightforward to adopt `result-rail` incrementally
//! by wrapping results from existing APIs, or by lowering an `Outcome` back to
//! the std type at the boundary to `?`-based code.
//!
//! # Examples
//!
//! ```
//! use result_rail::convert::*;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_ok());
//!
//! let back: Result<i32, &str> = outcome_to_result(outcome);
//! assert_eq!(back, Ok(42));
//! ```

use crate::outcome::core::Outcome;

/// Converts an `Outcome` to a `Result`.
///
/// # Arguments
///
/// * `outcome` - The outcome to convert
///
/// # Returns
///
/// * `Ok(value)` if the outcome is a `Success`
/// * `Err(error)` if the outcome is a `Failure`
///
/// # Examples
///
/// ```
/// use result_rail::convert::outcome_to_result;
/// use result_rail::{Failure, Outcome, Success};
///
/// let fine: Outcome<i32, &str> = Success(42);
/// assert_eq!(outcome_to_result(fine), Ok(42));
///
/// let broken: Outcome<i32, &str> = Failure("failed");
/// assert_eq!(outcome_to_result(broken), Err("failed"));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.into_result()
}

/// Converts a `Result` to an `Outcome`.
///
/// # Arguments
///
/// * `result` - The result to convert
///
/// # Returns
///
/// * `Outcome::Success(value)` if the result is `Ok`
/// * `Outcome::Failure(error)` if the result is `Err`
///
/// # Examples
///
/// ```
/// use result_rail::convert::result_to_outcome;
///
/// let ok_result: Result<i32, &str> = Ok(42);
/// assert!(result_to_outcome(ok_result).is_ok());
///
/// let err_result: Result<i32, &str> = Err("failed");
/// assert!(result_to_outcome(err_result).is_err());
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    Outcome::from_result(result)
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Wraps a `Result`, mapping `Ok` to `Success` and `Err` to `Failure`.
    ///
    /// The reverse direction is provided by
    /// [`Outcome::into_result`](crate::outcome::Outcome::into_result); coherence
    /// rules keep it from being a `From` impl.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Ok(42).into();
    /// assert!(outcome.is_ok());
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<C, T, E> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: FromIterator<T>,
{
    /// Collects an iterator of outcomes into an outcome of a collection,
    /// stopping at the first `Failure`.
    ///
    /// Elements after the first failure are not consumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// let all_fine = vec![Success(1), Success(2), Success(3)];
    /// let collected: Outcome<Vec<i32>, &str> = all_fine.into_iter().collect();
    /// assert_eq!(collected, Success(vec![1, 2, 3]));
    ///
    /// let one_broken = vec![Success(1), Failure("bad"), Success(3)];
    /// let collected: Outcome<Vec<i32>, &str> = one_broken.into_iter().collect();
    /// assert_eq!(collected, Failure("bad"));
    /// ```
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let mut first_failure: Option<E> = None;
        let collected: C = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(error) => {
                    first_failure = Some(error);
                    None
                }
            })
            .collect();
        match first_failure {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(collected),
        }
    }
}
