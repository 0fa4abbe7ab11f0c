// Copyright 2020 CoD Team

//! Integer representation and arithmetic.

use crate::error::ArithmeticError;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

pub const DIVIDE_BY_ZERO_MSG: &str = "attempt to divide by zero";
pub const MODULUS_BY_ZERO_MSG: &str = "attempt to calculate the remainder with a divisor of zero";

/// An immutable arbitrary-precision signed decimal integer.
///
/// The value is a sign plus a sequence of decimal digits stored
/// least-significant first: `32001` is stored as `[1, 0, 0, 2, 3]`.
///
/// The representation is kept canonical by every producing operation:
/// the digit sequence is never empty, carries no redundant zero digits at
/// the most-significant end (zero itself is the single digit `[0]`), and
/// zero is always non-negative. Because of that, the derived structural
/// equality is value equality, and `Hash` agrees with it.
///
/// All operations return new values; none mutates an existing one.
///
/// # Examples
///
/// ```
/// use decint::Integer;
///
/// let a: Integer = "10000000000000".parse().unwrap();
/// let b: Integer = "900000000000".parse().unwrap();
/// assert_eq!((&a + &b).to_string(), "10900000000000");
/// assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
/// assert_eq!((&a / &b).to_string(), "11");
/// assert_eq!((&a % &b).to_string(), "100000000000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Integer {
    // true for non-negative values, zero included
    positive: bool,
    // decimal digits 0..=9, least-significant first
    digits: Vec<u8>,
}

impl Integer {
    /// Creates the canonical zero value.
    #[inline]
    pub fn zero() -> Integer {
        Integer {
            positive: true,
            digits: vec![0],
        }
    }

    /// Creates the canonical one value.
    #[inline]
    pub fn one() -> Integer {
        Integer {
            positive: true,
            digits: vec![1],
        }
    }

    /// Builds an integer from a sign and a least-significant-first digit
    /// sequence, restoring the canonical form.
    pub(crate) fn from_parts(positive: bool, mut digits: Vec<u8>) -> Integer {
        strip(&mut digits);
        // catch negative zero
        let positive = positive || is_zero_digits(&digits);
        Integer { positive, digits }
    }

    /// Checks if `self` is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        is_zero_digits(&self.digits)
    }

    /// Checks if `self` is non-negative. Zero counts as positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.positive
    }

    /// Checks if `self` is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        !self.positive
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Integer {
        Integer {
            positive: true,
            digits: self.digits.clone(),
        }
    }

    /// Returns the value with the opposite sign; zero is unchanged.
    #[inline]
    pub fn negate(&self) -> Integer {
        let mut result = self.clone();
        result.negate_mut();
        result
    }

    #[inline]
    pub(crate) fn negate_mut(&mut self) {
        if !self.is_zero() {
            self.positive = !self.positive;
        }
    }

    #[inline]
    fn abs_is_one(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 1
    }

    /// Compares `self` and `other`, sign first, then magnitude.
    pub(crate) fn cmp_common(&self, other: &Integer) -> Ordering {
        match (self.positive, other.positive) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => cmp_abs(&self.digits, &other.digits),
            // both negative: the smaller magnitude is the greater value
            (false, false) => cmp_abs(&other.digits, &self.digits),
        }
    }

    /// Full version of add functionality (handling signs).
    pub(crate) fn add_common(&self, other: &Integer) -> Integer {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }

        if self.positive == other.positive {
            // result = sign * (ABS(self) + ABS(other))
            return Integer::from_parts(self.positive, add_abs(&self.digits, &other.digits));
        }

        // Signs differ; the larger magnitude decides the result's sign
        match cmp_abs(&self.digits, &other.digits) {
            Ordering::Equal => Integer::zero(),
            Ordering::Greater => {
                Integer::from_parts(self.positive, sub_abs(&self.digits, &other.digits))
            }
            Ordering::Less => {
                Integer::from_parts(other.positive, sub_abs(&other.digits, &self.digits))
            }
        }
    }

    /// Full version of sub functionality (handling signs).
    pub(crate) fn sub_common(&self, other: &Integer) -> Integer {
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return other.negate();
        }

        if self.positive != other.positive {
            // result = sign(self) * (ABS(self) + ABS(other))
            return Integer::from_parts(self.positive, add_abs(&self.digits, &other.digits));
        }

        match cmp_abs(&self.digits, &other.digits) {
            Ordering::Equal => Integer::zero(),
            Ordering::Greater => {
                Integer::from_parts(self.positive, sub_abs(&self.digits, &other.digits))
            }
            Ordering::Less => {
                Integer::from_parts(!self.positive, sub_abs(&other.digits, &self.digits))
            }
        }
    }

    /// Schoolbook multiplication: one partial product per digit of `self`,
    /// shifted by its position and accumulated through [`add_abs`].
    pub(crate) fn mul_common(&self, other: &Integer) -> Integer {
        if self.is_zero() || other.is_zero() {
            return Integer::zero();
        }

        let positive = self.positive == other.positive;

        // multiplying by one only adjusts the sign
        if self.abs_is_one() {
            return Integer::from_parts(positive, other.digits.clone());
        }
        if other.abs_is_one() {
            return Integer::from_parts(positive, self.digits.clone());
        }

        let mut acc = vec![0];
        for (shift, &digit1) in self.digits.iter().enumerate() {
            if digit1 == 0 {
                continue;
            }

            // partial product, shifted by prefixing zero digits
            let mut partial: SmallVec<[u8; 32]> = SmallVec::new();
            partial.resize(shift, 0);

            let mut carry = 0;
            for &digit2 in &other.digits {
                let prod = digit1 * digit2 + carry;
                partial.push(prod % 10);
                carry = prod / 10;
            }
            if carry > 0 {
                partial.push(carry);
            }

            acc = add_abs(&acc, &partial);
        }

        Integer::from_parts(positive, acc)
    }

    /// Truncating division.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivideByZero`] if `other` is zero.
    #[inline]
    pub fn try_div(&self, other: &Integer) -> Result<Integer, ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }
        Ok(self.div_common(other))
    }

    /// Remainder after truncating division.
    ///
    /// The result carries the dividend's sign unless it is zero.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::ModulusByZero`] if `other` is zero.
    #[inline]
    pub fn try_rem(&self, other: &Integer) -> Result<Integer, ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::ModulusByZero);
        }
        Ok(self.mod_common(other))
    }

    /// Long division on a non-zero divisor, truncating toward zero.
    fn div_common(&self, other: &Integer) -> Integer {
        debug_assert!(!other.is_zero());

        if self.is_zero() {
            return Integer::zero();
        }

        let positive = self.positive == other.positive;

        match cmp_abs(&self.digits, &other.digits) {
            // result is less than one
            Ordering::Less => return Integer::zero(),
            Ordering::Equal => return Integer::from_parts(positive, vec![1]),
            Ordering::Greater => {}
        }

        let dividend = &self.digits;
        let divisor = &other.digits;

        // The remainder window starts over the most-significant dividend
        // digits, one divisor width wide; `pos` counts the dividend digits
        // not yet shifted in.
        let mut pos = dividend.len() - divisor.len();
        let mut window = dividend[pos..].to_vec();

        // quotient digits come out most-significant first
        let mut quotient = Vec::with_capacity(pos + 1);
        let mut count = 0;
        loop {
            if cmp_abs(&window, divisor) == Ordering::Less {
                quotient.push(count);
                count = 0;
                if pos == 0 {
                    break;
                }
                pos -= 1;
                window.insert(0, dividend[pos]);
                strip(&mut window);
            } else {
                count += 1;
                window = sub_abs(&window, divisor);
            }
        }

        quotient.reverse();
        Integer::from_parts(positive, quotient)
    }

    /// Modulus, derived from division:
    /// `ABS(self) - ABS(other) * (ABS(self) / ABS(other))`.
    fn mod_common(&self, other: &Integer) -> Integer {
        debug_assert!(!other.is_zero());

        let dividend = self.abs();
        let divisor = other.abs();
        let quotient = dividend.div_common(&divisor);
        let remainder = dividend.sub_common(&divisor.mul_common(&quotient));

        if remainder.is_zero() {
            remainder
        } else {
            Integer {
                positive: self.positive,
                digits: remainder.digits,
            }
        }
    }
}

impl Default for Integer {
    /// The default value is canonical zero.
    #[inline]
    fn default() -> Self {
        Integer::zero()
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::with_capacity(self.digits.len() + 1);
        if !self.positive {
            buf.push('-');
        }
        buf.extend(self.digits.iter().rev().map(|&d| (d + b'0') as char));
        f.write_str(&buf)
    }
}

#[inline]
fn is_zero_digits(digits: &[u8]) -> bool {
    digits.len() == 1 && digits[0] == 0
}

/// Removes redundant zero digits from the most-significant end, leaving
/// `[0]` for an all-zero (or empty) sequence.
fn strip(digits: &mut Vec<u8>) {
    while digits.len() > 1 && *digits.last().unwrap() == 0 {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(0);
    }
}

/// Compares two digit magnitudes: more digits win, equal lengths compare
/// from the most-significant end.
fn cmp_abs(var1: &[u8], var2: &[u8]) -> Ordering {
    if var1.len() != var2.len() {
        return var1.len().cmp(&var2.len());
    }

    for i in (0..var1.len()).rev() {
        if var1[i] != var2[i] {
            return var1[i].cmp(&var2[i]);
        }
    }

    Ordering::Equal
}

/// Adds two digit magnitudes.
fn add_abs(var1: &[u8], var2: &[u8]) -> Vec<u8> {
    let res_ndigits = var1.len().max(var2.len());
    let mut res = Vec::with_capacity(res_ndigits + 1);

    let mut carry = 0;
    for i in 0..res_ndigits {
        let mut sum = carry;
        if i < var1.len() {
            sum += var1[i];
        }
        if i < var2.len() {
            sum += var2[i];
        }

        if sum >= 10 {
            res.push(sum - 10);
            carry = 1;
        } else {
            res.push(sum);
            carry = 0;
        }
    }
    if carry > 0 {
        res.push(carry);
    }

    res
}

/// Subtracts the digit magnitude `var2` from `var1`.
///
/// NOTE: ABS(`var1`) MUST BE GREATER OR EQUAL ABS(`var2`) !!!
fn sub_abs(var1: &[u8], var2: &[u8]) -> Vec<u8> {
    let mut res = Vec::with_capacity(var1.len());

    let mut borrow: i8 = 0;
    for i in 0..var1.len() {
        let mut diff = var1[i] as i8 - borrow;
        if i < var2.len() {
            diff -= var2[i] as i8;
        }

        if diff < 0 {
            res.push((diff + 10) as u8);
            borrow = 1;
        } else {
            res.push(diff as u8);
            borrow = 0;
        }
    }
    debug_assert_eq!(borrow, 0); // else caller gave us var1 < var2

    strip(&mut res);
    res
}
