//! Success/Failure outcome values with explicit, macro-driven propagation.
//!
//! `result-rail` provides [`Outcome`], a two-variant value that carries either
//! a success payload or a failure payload, together with the full combinator
//! set known from `std::result::Result` and a pair of propagation macros:
//! [`question!`] forwards a failure to the caller unchanged, and [`boundary!`]
//! stops a propagating failure at an explicit scope.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `result_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Success and Failure
//!
//! ```
//! use result_rail::{Failure, Outcome, Success};
//!
//! fn divide(a: f64, b: f64) -> Outcome<f64, String> {
//!     if b == 0.0 {
//!         return Failure("division by zero".to_string());
//!     }
//!     Success(a / b)
//! }
//!
//! assert_eq!(divide(10.0, 2.0).unwrap(), 5.0);
//! assert_eq!(divide(10.0, 0.0).unwrap_err(), "division by zero");
//! ```
//!
//! ## Failure Propagation
//!
//! ```
//! use result_rail::{question, Outcome, Success};
//!
//! fn parse(raw: &str) -> Outcome<i32, String> {
//!     Outcome::from_result(raw.parse::<i32>()).map_err(|e| e.to_string())
//! }
//!
//! fn double(raw: &str) -> Outcome<i32, String> {
//!     let n = question!(parse(raw));
//!     Success(n * 2)
//! }
//!
//! assert_eq!(double("21"), Success(42));
//! assert!(double("tram").is_err());
//! ```
//!
//! ## Collecting Many Outcomes
//!
//! ```
//! use result_rail::{Outcome, Success};
//!
//! let parsed: Outcome<Vec<i32>, String> = ["1", "2", "3"]
//!     .iter()
//!     .map(|raw| Outcome::from_result(raw.parse::<i32>()).map_err(|e| e.to_string()))
//!     .collect();
//!
//! assert_eq!(parsed, Success(vec![1, 2, 3]));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Outcome` and `std::result::Result`
pub mod convert;
/// Propagation macros for moving failures between scopes
pub mod macros;
/// The `Outcome` type and its combinators and iterators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for std interop
pub mod traits;

// Re-export the public surface at the root, with the variants available
// unqualified so construction sites read like `Result` code.
pub use convert::*;
pub use outcome::Outcome::{Failure, Success};
pub use outcome::*;
pub use traits::*;
