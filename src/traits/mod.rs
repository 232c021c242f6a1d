//! Extension traits for interoperating with std types.
//!
//! - [`ResultExt`]: Postfix conversion from `std::result::Result` into
//!   [`Outcome`](crate::outcome::Outcome)
//!
//! # Examples
//!
//! ```
//! use result_rail::traits::ResultExt;
//!
//! let outcome = "5".parse::<i32>().into_outcome();
//! assert_eq!(outcome.ok(), Some(5));
//! ```

pub mod result_ext;

pub use result_ext::ResultExt;
