// Copyright 2020 CoD Team

use crate::int::{DIVIDE_BY_ZERO_MSG, MODULUS_BY_ZERO_MSG};
use std::error::Error;
use std::fmt;

/// An error which can be returned when parsing an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIntegerError {
    kind: IntegerErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum IntegerErrorKind {
    Empty,
    Invalid,
}

impl fmt::Display for ParseIntegerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.kind {
            IntegerErrorKind::Empty => write!(f, "cannot parse integer from empty string"),
            IntegerErrorKind::Invalid => write!(f, "invalid digit found in string"),
        }
    }
}

impl Error for ParseIntegerError {}

impl ParseIntegerError {
    #[inline]
    pub(crate) const fn new(kind: IntegerErrorKind) -> Self {
        ParseIntegerError { kind }
    }

    #[inline]
    pub(crate) const fn empty() -> Self {
        Self::new(IntegerErrorKind::Empty)
    }

    #[inline]
    pub(crate) const fn invalid() -> Self {
        Self::new(IntegerErrorKind::Invalid)
    }
}

/// An error which can be returned when dividing by a zero divisor.
///
/// The two variants tell a division apart from a modulus, so callers can
/// report the failing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The divisor of a division was zero.
    DivideByZero,
    /// The divisor of a modulus was zero.
    ModulusByZero,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ArithmeticError::DivideByZero => f.write_str(DIVIDE_BY_ZERO_MSG),
            ArithmeticError::ModulusByZero => f.write_str(MODULUS_BY_ZERO_MSG),
        }
    }
}

impl Error for ArithmeticError {}
