//! Propagation macros for [`Outcome`](crate::outcome::Outcome).
//!
//! These macros give `Outcome` the same short-circuit ergonomics that the `?`
//! operator gives `Result`:
//!
//! - [`macro@crate::question`] - Unwraps a `Success` payload in place, or
//!   early-returns the `Failure` from the enclosing propagation scope.
//! - [`macro@crate::boundary`] - Opens an explicit propagation scope, so a
//!   propagated failure becomes a value at the block instead of leaving the
//!   enclosing function.
//!
//! # Examples
//!
//! ```
//! use result_rail::{boundary, question, Outcome, Success};
//!
//! fn read_port(raw: &str) -> Outcome<u16, String> {
//!     Outcome::from_result(raw.parse::<u16>()).map_err(|e| e.to_string())
//! }
//!
//! fn connect(raw: &str) -> Outcome<String, String> {
//!     let port = question!(read_port(raw));
//!     Success(format!("127.0.0.1:{port}"))
//! }
//!
//! assert_eq!(connect("8080"), Success("127.0.0.1:8080".to_string()));
//! assert!(connect("eighty").is_err());
//!
//! // boundary! keeps the failure local so the surrounding code can recover.
//! let addr = boundary! {
//!     let port = question!(read_port("eighty"));
//!     Success(format!("127.0.0.1:{port}"))
//! }
//! .unwrap_or_else(|_| "127.0.0.1:80".to_string());
//!
//! assert_eq!(addr, "127.0.0.1:80");
//! ```

/// Unwraps a `Success` payload, or early-returns the `Failure` from the
/// enclosing propagation scope.
///
/// Applied to an expression of type [`Outcome<T, E>`](crate::outcome::Outcome),
/// the macro evaluates to the `T` payload when the expression is a `Success`.
/// When it is a `Failure`, the macro returns that same `Failure` from the
/// nearest propagation scope: the enclosing `Outcome`-returning function, or
/// an enclosing [`boundary!`](crate::boundary) block.
///
/// The failure payload is moved out unchanged, so the enclosing scope must
/// share the expression's error type. Convert with
/// [`map_err`](crate::outcome::Outcome::map_err) first when the types differ.
///
/// # Syntax
///
/// - `question!(expr)` - Unwraps an `Outcome`-producing expression
///
/// # Examples
///
/// ```
/// use result_rail::{question, Failure, Outcome, Success};
///
/// fn inner() -> Outcome<i32, &'static str> {
///     Failure("x")
/// }
///
/// fn outer() -> Outcome<i32, &'static str> {
///     let value = question!(inner());
///     Success(value + 1)
/// }
///
/// // The failure travels through outer() without being rewrapped.
/// assert_eq!(outer(), Failure("x"));
/// ```
#[macro_export]
macro_rules! question {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::outcome::Outcome::Success(value) => value,
            $crate::outcome::Outcome::Failure(error) => {
                return $crate::outcome::Outcome::Failure(error);
            }
        }
    };
}

/// Opens an explicit propagation scope for [`question!`](crate::question).
///
/// The body runs as a block whose value is an
/// [`Outcome`](crate::outcome::Outcome). A failure propagated by `question!`
/// inside the body stops here and becomes the block's value, leaving the
/// enclosing function free to recover, log, or rewrap it.
///
/// # Syntax
///
/// - `boundary! { ... }` - Runs the statements and evaluates to their final
///   `Outcome`
///
/// # Examples
///
/// ```
/// use result_rail::{boundary, question, Failure, Outcome, Success};
///
/// fn fetch(id: u32) -> Outcome<u32, &'static str> {
///     if id == 0 {
///         Failure("unknown id")
///     } else {
///         Success(id * 10)
///     }
/// }
///
/// // The failure stops at the block, not the enclosing function.
/// let recovered = boundary! {
///     let value = question!(fetch(0));
///     Success(value + 1)
/// }
/// .unwrap_or(0);
///
/// assert_eq!(recovered, 0);
/// ```
#[macro_export]
macro_rules! boundary {
    ($($body:tt)*) => {
        (|| { $($body)* })()
    };
}
