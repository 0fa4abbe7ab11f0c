// Copyright 2020 CoD Team

//! Integer parsing utilities.

use crate::error::ParseIntegerError;
use crate::int::Integer;
use std::str::FromStr;

#[derive(Debug)]
enum Sign {
    Positive,
    Negative,
}

/// Splits a decimal string bytes into sign and the rest, without inspecting
/// or validating the rest.
#[inline]
fn extract_sign(s: &[u8]) -> (Sign, &[u8]) {
    match s.first() {
        Some(b'+') => (Sign::Positive, &s[1..]),
        Some(b'-') => (Sign::Negative, &s[1..]),
        _ => (Sign::Positive, s),
    }
}

/// Carves off leading zero digits.
#[inline]
fn skip_zeros(s: &[u8]) -> &[u8] {
    let i = s.iter().take_while(|&&i| i == b'0').count();
    &s[i..]
}

/// Parses a string into an integer.
///
/// The accepted grammar is an optional `+` or `-` followed by one or more
/// ASCII decimal digits; no whitespace, decimal point, exponent or grouping
/// separators. Redundant leading zeroes are discarded, and an all-zero
/// input parses to canonical zero whatever its sign.
fn from_str(s: &str) -> Result<Integer, ParseIntegerError> {
    let s = s.as_bytes();
    if s.is_empty() {
        return Err(ParseIntegerError::empty());
    }

    let (sign, s) = extract_sign(s);

    // a sign character alone is not a number
    if s.is_empty() {
        return Err(ParseIntegerError::invalid());
    }

    if s.iter().any(|i| !i.is_ascii_digit()) {
        return Err(ParseIntegerError::invalid());
    }

    let s = skip_zeros(s);
    if s.is_empty() {
        return Ok(Integer::zero());
    }

    // reverse into least-significant-first storage
    let digits = s.iter().rev().map(|&i| i - b'0').collect();
    Ok(Integer::from_parts(matches!(sign, Sign::Positive), digits))
}

impl FromStr for Integer {
    type Err = ParseIntegerError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s)
    }
}
