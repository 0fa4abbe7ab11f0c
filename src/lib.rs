// Copyright 2020 CoD Team

//! Arbitrary precision signed decimal integer.
//!
//! [`Integer`] stores a sign and a sequence of decimal digits, so its range
//! is bounded only by memory. It supports parsing and formatting of plain
//! decimal strings, comparison, and truncating integer arithmetic, plus a
//! few number-theoretic functions in [`funcs`] built on top.
//!
//! # Examples
//!
//! ```
//! use decint::Integer;
//!
//! let a = Integer::from(-17);
//! let b = Integer::from(13);
//! let m: Integer = "+11".parse().unwrap();
//! assert_eq!(((a * b) % m).to_string(), "-1");
//! ```
//!
//! Values past any native width:
//!
//! ```
//! use decint::funcs::{factorial, gcd, pow2};
//!
//! assert_eq!(pow2(64).to_string(), "18446744073709551616");
//! assert_eq!(
//!     factorial(50).to_string(),
//!     "30414093201713378043612608166064768844377641568960512000000000000",
//! );
//! assert_eq!(
//!     gcd(&pow2(64), &factorial(50)).to_string(),
//!     "140737488355328",
//! );
//! ```

#[macro_use]
extern crate lazy_static;

mod convert;
mod error;
mod int;
mod ops;
mod parse;

pub mod funcs;

pub use crate::error::ArithmeticError;
pub use crate::error::ParseIntegerError;
pub use crate::int::{Integer, DIVIDE_BY_ZERO_MSG, MODULUS_BY_ZERO_MSG};

lazy_static! {
    /// Shared canonical zero.
    pub static ref ZERO: Integer = Integer::zero();
    /// Shared canonical one.
    pub static ref ONE: Integer = Integer::one();
}
