// Copyright 2020 CoD Team

//! Number-theoretic functions built on [`Integer`] arithmetic.

use crate::int::Integer;

/// Computes the greatest common divisor of two integers.
///
/// The result is always non-negative; `gcd(a, 0)` is `|a|`, and
/// `gcd(0, 0)` is zero.
///
/// # Examples
///
/// ```
/// use decint::funcs::gcd;
/// use decint::Integer;
///
/// let a = Integer::from(12);
/// let b = Integer::from(-18);
/// assert_eq!(gcd(&a, &b).to_string(), "6");
/// ```
pub fn gcd(a: &Integer, b: &Integer) -> Integer {
    let mut a = a.abs();
    let mut b = b.abs();

    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }

    a
}

/// Computes the greatest common divisor of a sequence of integers.
///
/// An empty slice yields zero, the identity of `gcd`.
pub fn gcd_all(values: &[Integer]) -> Integer {
    values
        .iter()
        .fold(Integer::zero(), |acc, val| gcd(&acc, val))
}

/// Computes `n!`, the product of the integers from `1` to `n`.
///
/// `factorial(0)` is `1`, the empty product.
pub fn factorial(n: u8) -> Integer {
    let mut result = Integer::one();
    for i in 2..=u16::from(n) {
        result *= Integer::from(i);
    }
    result
}

/// Computes the falling factorial `x * (x - 1) * ... * (x - n + 1)`,
/// a product of `n` descending factors starting at `x`.
///
/// When `n` exceeds `x` a zero factor would be reached, so the result
/// is zero.
pub fn factorial_falling(x: u8, n: u8) -> Integer {
    if n > x {
        return Integer::zero();
    }

    let x = u16::from(x);
    let mut result = Integer::from(x);
    for i in 1..u16::from(n) {
        result *= Integer::from(x - i);
    }
    result
}

/// Computes the rising factorial `x * (x + 1) * ... * (x + n - 1)`,
/// a product of `n` ascending factors starting at `x`.
pub fn factorial_rising(x: u8, n: u8) -> Integer {
    let x = u16::from(x);
    let mut result = Integer::from(x);
    for i in 1..u16::from(n) {
        result *= Integer::from(x + i);
    }
    result
}

/// Computes `2^n` by repeated doubling.
pub fn pow2(n: u8) -> Integer {
    let two = Integer::from(2);
    let mut result = Integer::one();
    for _ in 0..n {
        result *= &two;
    }
    result
}
