use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rail-style result value that is either a success payload or a failure payload.
///
/// `Outcome<T, E>` represents a computation that concluded with exactly one of
/// a value of type `T` or an error of type `E`. The variant is fixed at
/// construction and never changes afterwards; combinators never mutate in
/// place, they consume the receiver and produce a new `Outcome`.
///
/// The operation set mirrors `std::result::Result` closely enough to feel
/// familiar. What differs is the propagation story: instead of the `?`
/// operator, failures travel through the [`question!`](crate::question) macro,
/// which early-returns the original `Failure` to the nearest enclosing
/// propagation scope (an `Outcome`-returning function, or an explicit
/// [`boundary!`](crate::boundary) block).
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `T` and `E` do.
/// Requires the `serde` feature.
///
/// # Type Parameters
///
/// * `T` - The success payload type
/// * `E` - The failure payload type
///
/// # Variants
///
/// * `Success(T)` - The computation concluded with a value
/// * `Failure(E)` - The computation concluded with an error
///
/// # Examples
///
/// ```
/// use result_rail::{Failure, Outcome, Success};
///
/// fn divide(a: f64, b: f64) -> Outcome<f64, &'static str> {
///     if b == 0.0 {
///         return Failure("division by zero");
///     }
///     Success(a / b)
/// }
///
/// assert_eq!(divide(10.0, 2.0), Success(5.0));
/// assert_eq!(divide(10.0, 0.0).unwrap_err(), "division by zero");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a success value.
    ///
    /// Equivalent to writing the `Success` variant directly; provided for
    /// call sites that read better with a constructor function.
    ///
    /// # Arguments
    ///
    /// * `value` - The success payload to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let fine = Outcome::<i32, &str>::success(42);
    /// assert_eq!(fine.ok(), Some(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failure value.
    ///
    /// # Arguments
    ///
    /// * `error` - The failure payload to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let broken = Outcome::<i32, &str>::failure("missing field");
    /// assert!(broken.is_err());
    /// ```
    #[must_use]
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the outcome is a `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Outcome, Success};
    ///
    /// let x: Outcome<i32, &str> = Success(-3);
    /// assert!(x.is_ok());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome is a `Failure`.
    ///
    /// `is_ok` and `is_err` are mutually exclusive; exactly one of them holds
    /// for any outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome};
    ///
    /// let x: Outcome<i32, &str> = Failure("some error message");
    /// assert!(x.is_err());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if the outcome is a `Success` and its payload satisfies
    /// the predicate.
    ///
    /// The predicate is not invoked on a `Failure`.
    ///
    /// # Arguments
    ///
    /// * `f` - Predicate applied to the success payload
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// let x: Outcome<i32, &str> = Success(2);
    /// assert!(x.is_ok_and(|v| v > 1));
    ///
    /// let y: Outcome<i32, &str> = Success(0);
    /// assert!(!y.is_ok_and(|v| v > 1));
    ///
    /// let z: Outcome<i32, &str> = Failure("nope");
    /// assert!(!z.is_ok_and(|v| v > 1));
    /// ```
    #[must_use]
    #[inline]
    pub fn is_ok_and<F>(self, f: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if the outcome is a `Failure` and its payload satisfies
    /// the predicate.
    ///
    /// The predicate is not invoked on a `Success`.
    ///
    /// # Arguments
    ///
    /// * `f` - Predicate applied to the failure payload
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// let x: Outcome<i32, &str> = Failure("not found");
    /// assert!(x.is_err_and(|e| e.contains("found")));
    ///
    /// let y: Outcome<i32, &str> = Success(2);
    /// assert!(!y.is_err_and(|e| e.contains("found")));
    /// ```
    #[must_use]
    #[inline]
    pub fn is_err_and<F>(self, f: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => f(error),
        }
    }

    /// Converts into an `Option` over the success payload, discarding any
    /// failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// let x: Outcome<i32, &str> = Success(2);
    /// assert_eq!(x.ok(), Some(2));
    ///
    /// let y: Outcome<i32, &str> = Failure("nothing here");
    /// assert_eq!(y.ok(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into an `Option` over the failure payload, discarding any
    /// success.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// let x: Outcome<i32, &str> = Failure("worn rail");
    /// assert_eq!(x.err(), Some("worn rail"));
    ///
    /// let y: Outcome<i32, &str> = Success(2);
    /// assert_eq!(y.err(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    ///
    /// Produces a new outcome borrowing the original payload, leaving the
    /// receiver in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Outcome, Success};
    ///
    /// let x: Outcome<i32, &str> = Success(2);
    /// assert_eq!(x.as_ref().ok(), Some(&2));
    /// ```
    #[must_use]
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Outcome, Success};
    ///
    /// let mut x: Outcome<i32, &str> = Success(2);
    /// if let Success(value) = x.as_mut() {
    ///     *value = 42;
    /// }
    /// assert_eq!(x.unwrap(), 42);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Extracts the success payload, panicking with `msg` on failure.
    ///
    /// # Arguments
    ///
    /// * `msg` - Message to include in the panic
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`, with a message combining `msg`
    /// and the failure payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Outcome, Success};
    ///
    /// let x: Outcome<i32, &str> = Success(1);
    /// assert_eq!(x.expect("config should parse"), 1);
    /// ```
    ///
    /// ```should_panic
    /// use result_rail::{Failure, Outcome};
    ///
    /// let x: Outcome<i32, &str> = Failure("emergency failure");
    /// x.expect("config should parse"); // panics with `config should parse: "emergency failure"`
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => unwrap_failed(msg, &error),
        }
    }

    /// Extracts the failure payload, panicking with `msg` on success.
    ///
    /// # Arguments
    ///
    /// * `msg` - Message to include in the panic
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Success`, with a message combining `msg`
    /// and the success payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome};
    ///
    /// let x: Outcome<i32, &str> = Failure("locked switch");
    /// assert_eq!(x.expect_err("parsing should fail"), "locked switch");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => unwrap_failed(msg, &value),
            Self::Failure(error) => error,
        }
    }

    /// Extracts the success payload.
    ///
    /// Because this panics on failure, prefer pattern matching,
    /// [`unwrap_or`](Self::unwrap_or), or the [`question!`](crate::question)
    /// macro in code that handles errors as values.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`, with a message naming the
    /// operation and the failure payload's `Debug` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Outcome, Success};
    ///
    /// let x: Outcome<i32, &str> = Success(2);
    /// assert_eq!(x.unwrap(), 2);
    /// ```
    ///
    /// ```should_panic
    /// use result_rail::{Failure, Outcome};
    ///
    /// let x: Outcome<i32, &str> = Failure("emergency failure");
    /// x.unwrap(); // panics with `emergency failure`
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                unwrap_failed("called `Outcome::unwrap()` on a `Failure` value", &error)
            }
        }
    }

    /// Extracts the failure payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Success`, with a message naming the
    /// operation and the success payload's `Debug` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome};
    ///
    /// let x: Outcome<i32, &str> = Failure("emergency failure");
    /// assert_eq!(x.unwrap_err(), "emergency failure");
    /// ```
    ///
    /// ```should_panic
    /// use result_rail::{Outcome, Success};
    ///
    /// let x: Outcome<i32, &str> = Success(2);
    /// x.unwrap_err(); // panics with `2`
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => {
                unwrap_failed("called `Outcome::unwrap_err()` on a `Success` value", &value)
            }
            Self::Failure(error) => error,
        }
    }

    /// Extracts the success payload or returns `default` on failure.
    ///
    /// The default is evaluated eagerly at the call site; use
    /// [`unwrap_or_else`](Self::unwrap_or_else) when it is expensive to
    /// compute.
    ///
    /// # Arguments
    ///
    /// * `default` - Value to return on failure
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// let x: Outcome<i32, &str> = Success(9);
    /// assert_eq!(x.unwrap_or(2), 9);
    ///
    /// let y: Outcome<i32, &str> = Failure("error");
    /// assert_eq!(y.unwrap_or(2), 2);
    /// ```
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Extracts the success payload or computes a fallback from the failure
    /// payload.
    ///
    /// # Arguments
    ///
    /// * `f` - Fallback applied to the failure payload
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// let count = |e: &str| e.len() as i32;
    ///
    /// let x: Outcome<i32, &str> = Success(2);
    /// assert_eq!(x.unwrap_or_else(count), 2);
    ///
    /// let y: Outcome<i32, &str> = Failure("foo");
    /// assert_eq!(y.unwrap_or_else(count), 3);
    /// ```
    #[must_use]
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    /// Extracts the success payload or returns `T::default()` on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// let x: Outcome<u32, &str> = Success(1909);
    /// assert_eq!(x.unwrap_or_default(), 1909);
    ///
    /// let y: Outcome<u32, &str> = Failure("not a number");
    /// assert_eq!(y.unwrap_or_default(), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => T::default(),
        }
    }

    /// Maps the success payload using the provided function.
    ///
    /// If the outcome is a `Failure`, the error payload is carried over
    /// unchanged.
    ///
    /// # Arguments
    ///
    /// * `f` - Function transforming the success payload from `T` to `U`
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// let x: Outcome<i32, &str> = Success(21);
    /// assert_eq!(x.map(|v| v * 2), Success(42));
    ///
    /// let y: Outcome<i32, &str> = Failure("stale");
    /// assert_eq!(y.map(|v| v * 2), Failure("stale"));
    /// ```
    #[must_use]
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the failure payload using the provided function.
    ///
    /// The dual of [`map`](Self::map): success payloads pass through
    /// unchanged.
    ///
    /// # Arguments
    ///
    /// * `f` - Function transforming the failure payload from `E` to `G`
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// let stringify = |code: u32| format!("error code: {code}");
    ///
    /// let x: Outcome<i32, u32> = Failure(13);
    /// assert_eq!(x.map_err(stringify), Failure("error code: 13".to_string()));
    ///
    /// let y: Outcome<i32, u32> = Success(2);
    /// assert_eq!(y.map_err(stringify), Success(2));
    /// ```
    #[must_use]
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Applies a function to the success payload or returns `default`.
    ///
    /// Note the argument order: the default comes first so the closure can
    /// trail, matching `Result::map_or`.
    ///
    /// # Arguments
    ///
    /// * `default` - Value to return on failure (eagerly evaluated)
    /// * `f` - Function applied to the success payload
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// let x: Outcome<&str, &str> = Success("foo");
    /// assert_eq!(x.map_or(42, |v| v.len()), 3);
    ///
    /// let y: Outcome<&str, &str> = Failure("bar");
    /// assert_eq!(y.map_or(42, |v| v.len()), 42);
    /// ```
    #[must_use]
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(_) => default,
        }
    }

    /// Applies a function to the success payload or computes a fallback from
    /// the failure payload.
    ///
    /// # Arguments
    ///
    /// * `default` - Fallback applied to the failure payload
    /// * `f` - Function applied to the success payload
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// let k = 21;
    ///
    /// let x: Outcome<&str, &str> = Success("foo");
    /// assert_eq!(x.map_or_else(|_| k * 2, |v| v.len()), 3);
    ///
    /// let y: Outcome<&str, &str> = Failure("bar");
    /// assert_eq!(y.map_or_else(|_| k * 2, |v| v.len()), 42);
    /// ```
    #[must_use]
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => default(error),
        }
    }

    /// Returns `other` if the outcome is a `Success`, otherwise carries the
    /// failure over.
    ///
    /// `other` is eagerly evaluated; use [`and_then`](Self::and_then) for a
    /// lazily computed continuation.
    ///
    /// # Arguments
    ///
    /// * `other` - The outcome to return on success
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// let x: Outcome<i32, &str> = Success(2);
    /// let y: Outcome<&str, &str> = Failure("late error");
    /// assert_eq!(x.and(y), Failure("late error"));
    ///
    /// let x: Outcome<i32, &str> = Failure("early error");
    /// let y: Outcome<&str, &str> = Success("foo");
    /// assert_eq!(x.and(y), Failure("early error"));
    /// ```
    #[must_use]
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(_) => other,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a fallible computation over the success payload.
    ///
    /// Behaves like `Result::and_then`: on `Success`, returns `f(value)`
    /// (which itself produces an `Outcome`, enabling chaining); on `Failure`,
    /// carries the error over without invoking `f`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next step from the success payload
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// fn halve(n: i32) -> Outcome<i32, &'static str> {
    ///     if n % 2 == 0 {
    ///         Success(n / 2)
    ///     } else {
    ///         Failure("odd")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::<i32, &str>::Success(8).and_then(halve), Success(4));
    /// assert_eq!(Outcome::<i32, &str>::Success(3).and_then(halve), Failure("odd"));
    /// assert_eq!(Outcome::<i32, &str>::Failure("stuck").and_then(halve), Failure("stuck"));
    /// ```
    #[must_use]
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns `other` if the outcome is a `Failure`, otherwise carries the
    /// success over.
    ///
    /// # Arguments
    ///
    /// * `other` - The outcome to return on failure
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// let x: Outcome<i32, &str> = Failure("early error");
    /// let y: Outcome<i32, &str> = Success(2);
    /// assert_eq!(x.or(y), Success(2));
    ///
    /// let x: Outcome<i32, &str> = Success(5);
    /// let y: Outcome<i32, &str> = Success(100);
    /// assert_eq!(x.or(y), Success(5));
    /// ```
    #[must_use]
    #[inline]
    pub fn or<G>(self, other: Outcome<T, G>) -> Outcome<T, G> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => other,
        }
    }

    /// Calls `f` on the failure payload, otherwise carries the success over.
    ///
    /// The dual of [`and_then`](Self::and_then); useful for recovery chains.
    ///
    /// # Arguments
    ///
    /// * `f` - Recovery function applied to the failure payload
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// fn retry(attempt: u32) -> Outcome<u32, u32> {
    ///     Success(attempt + 1)
    /// }
    ///
    /// let x: Outcome<u32, u32> = Failure(2);
    /// assert_eq!(x.or_else(retry), Success(3));
    ///
    /// let y: Outcome<u32, u32> = Success(7);
    /// assert_eq!(y.or_else(retry), Success(7));
    /// ```
    #[must_use]
    #[inline]
    pub fn or_else<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => f(error),
        }
    }

    /// Converts into a `std::result::Result`, mapping `Success` to `Ok` and
    /// `Failure` to `Err`.
    ///
    /// Handy at the edge of APIs that speak the std type, including `?`-based
    /// call chains.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Outcome, Success};
    ///
    /// let x: Outcome<i32, &str> = Success(42);
    /// assert_eq!(x.into_result(), Ok(42));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Wraps a `std::result::Result`, mapping `Ok` to `Success` and `Err` to
    /// `Failure`.
    ///
    /// # Arguments
    ///
    /// * `result` - The result to convert
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::Outcome;
    ///
    /// let x = Outcome::from_result("5".parse::<i32>());
    /// assert_eq!(x.ok(), Some(5));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> Outcome<Option<T>, E> {
    /// Transposes an `Outcome` of an `Option` into an `Option` of an
    /// `Outcome`.
    ///
    /// `Success(None)` maps to `None`; `Success(Some(v))` maps to
    /// `Some(Success(v))`; `Failure(e)` maps to `Some(Failure(e))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// let x: Outcome<Option<i32>, &str> = Success(Some(5));
    /// assert_eq!(x.transpose(), Some(Success(5)));
    ///
    /// let y: Outcome<Option<i32>, &str> = Success(None);
    /// assert_eq!(y.transpose(), None);
    ///
    /// let z: Outcome<Option<i32>, &str> = Failure("blocked");
    /// assert_eq!(z.transpose(), Some(Failure("blocked")));
    /// ```
    #[must_use]
    #[inline]
    pub fn transpose(self) -> Option<Outcome<T, E>> {
        match self {
            Self::Success(Some(value)) => Some(Outcome::Success(value)),
            Self::Success(None) => None,
            Self::Failure(error) => Some(Outcome::Failure(error)),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes exactly one level of nesting.
    ///
    /// Failure payloads pass through untouched, whichever level they sit at.
    /// Flattening a non-nested outcome does not type-check, so repeated
    /// application always has one level to remove.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::{Failure, Outcome, Success};
    ///
    /// let x: Outcome<Outcome<i32, &str>, &str> = Success(Success(6));
    /// assert_eq!(x.flatten(), Success(6));
    ///
    /// let y: Outcome<Outcome<i32, &str>, &str> = Success(Failure("deep"));
    /// assert_eq!(y.flatten(), Failure("deep"));
    ///
    /// let z: Outcome<Outcome<i32, &str>, &str> = Failure("shallow");
    /// assert_eq!(z.flatten(), Failure("shallow"));
    /// ```
    #[must_use]
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

/// Allows demo binaries and small tools to return an `Outcome` from `main`.
///
/// Mirrors the std `Result` behavior: a `Success(())` reports success, a
/// `Failure` prints the error's `Debug` form to stderr and reports failure.
#[cfg(feature = "std")]
impl<E: fmt::Debug> std::process::Termination for Outcome<(), E> {
    fn report(self) -> std::process::ExitCode {
        match self {
            Self::Success(()) => std::process::ExitCode::SUCCESS,
            Self::Failure(error) => {
                std::eprintln!("Error: {error:?}");
                std::process::ExitCode::FAILURE
            }
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn unwrap_failed(msg: &str, payload: &dyn fmt::Debug) -> ! {
    panic!("{msg}: {payload:?}")
}
