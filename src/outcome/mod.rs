//! The [`Outcome`] sum type and its combinator algebra.
//!
//! This module provides [`Outcome`], a closed two-variant value representing
//! either success or failure, modeled on `std::result::Result`. Unlike the
//! std type it keeps the `Success`/`Failure` vocabulary and pairs with the
//! [`question!`](crate::question) and [`boundary!`](crate::boundary) macros
//! for early-return propagation of failures.
//!
//! # Key Components
//!
//! - [`Outcome`] - Core type holding exactly one of a success or failure payload
//! - Iterator adapters for traversing either payload
//! - Conversions to and from `std::result::Result` (see [`crate::convert`])
//!
//! # Examples
//!
//! ```
//! use result_rail::{Failure, Outcome, Success};
//!
//! let fine: Outcome<i32, &str> = Success(42);
//! assert!(fine.is_ok());
//!
//! let broken: Outcome<i32, &str> = Failure("out of tape");
//! assert_eq!(broken.unwrap_or(0), 0);
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
