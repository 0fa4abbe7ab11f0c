// Copyright 2020 CoD Team

//! Implementing operators for integer.

use crate::int::{Integer, DIVIDE_BY_ZERO_MSG, MODULUS_BY_ZERO_MSG};
use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

// The main implementation
// &self + &other
impl Add<&Integer> for &Integer {
    type Output = Integer;

    #[inline]
    fn add(self, other: &Integer) -> Self::Output {
        self.add_common(other)
    }
}

// self + &other
impl Add<&Integer> for Integer {
    type Output = Integer;

    #[inline]
    fn add(self, other: &Integer) -> Self::Output {
        Add::add(&self, other)
    }
}

// self + other
impl Add<Integer> for Integer {
    type Output = Integer;

    #[inline]
    fn add(self, other: Integer) -> Self::Output {
        Add::add(&self, &other)
    }
}

// &self + other
impl Add<Integer> for &Integer {
    type Output = Integer;

    #[inline]
    fn add(self, other: Integer) -> Self::Output {
        Add::add(self, &other)
    }
}

// &mut self += &other
impl AddAssign<&Integer> for Integer {
    #[inline]
    fn add_assign(&mut self, other: &Integer) {
        let result = Add::add(self as &Integer, other);
        *self = result;
    }
}

// &mut self += other
impl AddAssign<Integer> for Integer {
    #[inline]
    fn add_assign(&mut self, other: Integer) {
        let result = Add::add(self as &Integer, &other);
        *self = result;
    }
}

// The main implementation
// &self - &other
impl Sub<&Integer> for &Integer {
    type Output = Integer;

    #[inline]
    fn sub(self, other: &Integer) -> Self::Output {
        self.sub_common(other)
    }
}

// self - &other
impl Sub<&Integer> for Integer {
    type Output = Integer;

    #[inline]
    fn sub(self, other: &Integer) -> Self::Output {
        Sub::sub(&self, other)
    }
}

// self - other
impl Sub<Integer> for Integer {
    type Output = Integer;

    #[inline]
    fn sub(self, other: Integer) -> Self::Output {
        Sub::sub(&self, &other)
    }
}

// &self - other
impl Sub<Integer> for &Integer {
    type Output = Integer;

    #[inline]
    fn sub(self, other: Integer) -> Self::Output {
        Sub::sub(self, &other)
    }
}

// &mut self -= &other
impl SubAssign<&Integer> for Integer {
    #[inline]
    fn sub_assign(&mut self, other: &Integer) {
        let result = Sub::sub(self as &Integer, other);
        *self = result;
    }
}

// &mut self -= other
impl SubAssign<Integer> for Integer {
    #[inline]
    fn sub_assign(&mut self, other: Integer) {
        let result = Sub::sub(self as &Integer, &other);
        *self = result;
    }
}

// The main implementation
// &self * &other
impl Mul<&Integer> for &Integer {
    type Output = Integer;

    #[inline]
    fn mul(self, other: &Integer) -> Self::Output {
        self.mul_common(other)
    }
}

// self * &other
impl Mul<&Integer> for Integer {
    type Output = Integer;

    #[inline]
    fn mul(self, other: &Integer) -> Self::Output {
        Mul::mul(&self, other)
    }
}

// self * other
impl Mul<Integer> for Integer {
    type Output = Integer;

    #[inline]
    fn mul(self, other: Integer) -> Self::Output {
        Mul::mul(&self, &other)
    }
}

// &self * other
impl Mul<Integer> for &Integer {
    type Output = Integer;

    #[inline]
    fn mul(self, other: Integer) -> Self::Output {
        Mul::mul(self, &other)
    }
}

// &mut self *= &other
impl MulAssign<&Integer> for Integer {
    #[inline]
    fn mul_assign(&mut self, other: &Integer) {
        let result = Mul::mul(self as &Integer, other);
        *self = result;
    }
}

// &mut self *= other
impl MulAssign<Integer> for Integer {
    #[inline]
    fn mul_assign(&mut self, other: Integer) {
        let result = Mul::mul(self as &Integer, &other);
        *self = result;
    }
}

// The main implementation
// &self / &other
impl Div<&Integer> for &Integer {
    type Output = Integer;

    #[inline]
    fn div(self, other: &Integer) -> Self::Output {
        self.try_div(other).expect(DIVIDE_BY_ZERO_MSG)
    }
}

// self / &other
impl Div<&Integer> for Integer {
    type Output = Integer;

    #[inline]
    fn div(self, other: &Integer) -> Self::Output {
        Div::div(&self, other)
    }
}

// self / other
impl Div<Integer> for Integer {
    type Output = Integer;

    #[inline]
    fn div(self, other: Integer) -> Self::Output {
        Div::div(&self, &other)
    }
}

// &self / other
impl Div<Integer> for &Integer {
    type Output = Integer;

    #[inline]
    fn div(self, other: Integer) -> Self::Output {
        Div::div(self, &other)
    }
}

// &mut self /= &other
impl DivAssign<&Integer> for Integer {
    #[inline]
    fn div_assign(&mut self, other: &Integer) {
        let result = Div::div(self as &Integer, other);
        *self = result;
    }
}

// &mut self /= other
impl DivAssign<Integer> for Integer {
    #[inline]
    fn div_assign(&mut self, other: Integer) {
        let result = Div::div(self as &Integer, &other);
        *self = result;
    }
}

// The main implementation
// &self % &other
impl Rem<&Integer> for &Integer {
    type Output = Integer;

    #[inline]
    fn rem(self, other: &Integer) -> Self::Output {
        self.try_rem(other).expect(MODULUS_BY_ZERO_MSG)
    }
}

// self % &other
impl Rem<&Integer> for Integer {
    type Output = Integer;

    #[inline]
    fn rem(self, other: &Integer) -> Self::Output {
        Rem::rem(&self, other)
    }
}

// self % other
impl Rem<Integer> for Integer {
    type Output = Integer;

    #[inline]
    fn rem(self, other: Integer) -> Self::Output {
        Rem::rem(&self, &other)
    }
}

// &self % other
impl Rem<Integer> for &Integer {
    type Output = Integer;

    #[inline]
    fn rem(self, other: Integer) -> Self::Output {
        Rem::rem(self, &other)
    }
}

// &mut self %= &other
impl RemAssign<&Integer> for Integer {
    #[inline]
    fn rem_assign(&mut self, other: &Integer) {
        let result = Rem::rem(self as &Integer, other);
        *self = result;
    }
}

// &mut self %= other
impl RemAssign<Integer> for Integer {
    #[inline]
    fn rem_assign(&mut self, other: Integer) {
        let result = Rem::rem(self as &Integer, &other);
        *self = result;
    }
}

// -self
impl Neg for Integer {
    type Output = Integer;

    #[inline]
    fn neg(mut self) -> Self::Output {
        self.negate_mut();
        self
    }
}

// -&self
impl Neg for &Integer {
    type Output = Integer;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl PartialOrd for Integer {
    #[inline]
    fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

impl Ord for Integer {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_common(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_add(val1: &str, val2: &str, expected: &str) {
        let var1 = val1.parse::<Integer>().unwrap();
        let var2 = val2.parse::<Integer>().unwrap();

        let result1 = &var1 + &var2;
        assert_eq!(result1.to_string(), expected);

        let result2 = &var2 + &var1;
        assert_eq!(result2.to_string(), expected);

        let mut result3 = var1.clone();
        result3 += &var2;
        assert_eq!(result3.to_string(), expected);

        let mut result4 = var2;
        result4 += var1;
        assert_eq!(result4.to_string(), expected);
    }

    #[test]
    fn add() {
        assert_add("0", "0", "0");
        assert_add("0", "12345", "12345");
        assert_add("0", "-12345", "-12345");
        assert_add("1", "-1", "0");
        assert_add("999", "1", "1000");
        assert_add("999999999999999999", "1", "1000000000000000000");
        assert_add("123", "-45", "78");
        assert_add("-123", "45", "-78");
        assert_add("-123", "-45", "-168");
        assert_add(
            "123456789987654321",
            "987654321123456789",
            "1111111111111111110",
        );
        assert_add(
            "-123456789987654321",
            "-987654321123456789",
            "-1111111111111111110",
        );
    }

    fn assert_sub(val1: &str, val2: &str, expected1: &str, expected2: &str) {
        let var1 = val1.parse::<Integer>().unwrap();
        let var2 = val2.parse::<Integer>().unwrap();

        let result1 = &var1 - &var2;
        assert_eq!(result1.to_string(), expected1);

        let result2 = &var2 - &var1;
        assert_eq!(result2.to_string(), expected2);

        let mut result3 = var1.clone();
        result3 -= &var2;
        assert_eq!(result3.to_string(), expected1);

        let mut result4 = var2;
        result4 -= var1;
        assert_eq!(result4.to_string(), expected2);
    }

    #[test]
    fn sub() {
        assert_sub("0", "0", "0", "0");
        assert_sub("12345", "0", "12345", "-12345");
        assert_sub("-12345", "0", "-12345", "12345");
        assert_sub("1", "1", "0", "0");
        assert_sub("1000", "1", "999", "-999");
        assert_sub("123", "-45", "168", "-168");
        assert_sub("-123", "45", "-168", "168");
        assert_sub("-123", "-45", "-78", "78");
        assert_sub(
            "123456789987654321",
            "987654321123456789",
            "-864197531135802468",
            "864197531135802468",
        );
    }

    fn assert_mul(val1: &str, val2: &str, expected: &str) {
        let var1 = val1.parse::<Integer>().unwrap();
        let var2 = val2.parse::<Integer>().unwrap();

        let result1 = &var1 * &var2;
        assert_eq!(result1.to_string(), expected);

        let result2 = &var2 * &var1;
        assert_eq!(result2.to_string(), expected);

        let mut result3 = var1.clone();
        result3 *= &var2;
        assert_eq!(result3.to_string(), expected);

        let mut result4 = var2;
        result4 *= var1;
        assert_eq!(result4.to_string(), expected);
    }

    #[test]
    fn mul() {
        assert_mul("0", "0", "0");
        assert_mul("0", "12345", "0");
        assert_mul("0", "-12345", "0");
        assert_mul("1", "12345", "12345");
        assert_mul("-1", "12345", "-12345");
        assert_mul("-1", "-12345", "12345");
        assert_mul("9", "9", "81");
        assert_mul("99", "99", "9801");
        assert_mul("123456789", "999999999", "123456788876543211");
        assert_mul("-17", "13", "-221");
        assert_mul(
            "123456789987654321",
            "987654321123456789",
            "121932632103337905662094193112635269",
        );
        assert_mul(
            "-123456789987654321",
            "987654321123456789",
            "-121932632103337905662094193112635269",
        );
        assert_mul(
            "-123456789987654321",
            "-987654321123456789",
            "121932632103337905662094193112635269",
        );
    }

    #[test]
    fn mul_identity_laws() {
        let vals = ["0", "1", "-1", "42", "-42", "987654321123456789"];
        for val in vals {
            let x = val.parse::<Integer>().unwrap();
            assert_eq!(&x * &Integer::one(), x);
            let product = &x * &Integer::zero();
            assert_eq!(product, Integer::zero());
            assert!(product.is_positive());
        }
    }

    fn assert_div(val1: &str, val2: &str, expected: &str) {
        let var1 = val1.parse::<Integer>().unwrap();
        let var2 = val2.parse::<Integer>().unwrap();

        let result1 = &var1 / &var2;
        assert_eq!(result1.to_string(), expected);

        let mut result2 = var1;
        result2 /= var2;
        assert_eq!(result2.to_string(), expected);
    }

    #[test]
    fn div() {
        assert_div("0", "12345", "0");
        assert_div("1", "12345", "0");
        assert_div("12345", "12345", "1");
        assert_div("-12345", "12345", "-1");
        assert_div("7", "2", "3");
        assert_div("-7", "2", "-3");
        assert_div("7", "-2", "-3");
        assert_div("-7", "-2", "3");
        assert_div("100", "3", "33");
        assert_div("987654321123456789", "123456789987654321", "8");
        assert_div("123456789987654321", "12345", "10000550019251");
        assert_div(
            "1000000000000000000000000000000",
            "7",
            "142857142857142857142857142857",
        );
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn div_by_zero() {
        assert_div("1", "0", "");
    }

    fn assert_rem(val1: &str, val2: &str, expected: &str) {
        let var1 = val1.parse::<Integer>().unwrap();
        let var2 = val2.parse::<Integer>().unwrap();

        let result1 = &var1 % &var2;
        assert_eq!(result1.to_string(), expected);

        let mut result2 = var1;
        result2 %= var2;
        assert_eq!(result2.to_string(), expected);
    }

    #[test]
    fn rem() {
        assert_rem("0", "12345", "0");
        assert_rem("1", "12345", "1");
        assert_rem("12345", "12345", "0");
        assert_rem("7", "2", "1");
        assert_rem("-7", "2", "-1");
        assert_rem("7", "-2", "1");
        assert_rem("-7", "-2", "-1");
        assert_rem("100", "3", "1");
        assert_rem("987654321123456789", "123456789987654321", "1222222221");
        assert_rem("123456789987654321", "12345", "726");
        assert_rem("1000000000000000000000000000000", "7", "1");
    }

    #[test]
    #[should_panic(expected = "attempt to calculate the remainder with a divisor of zero")]
    fn rem_by_zero() {
        assert_rem("1", "0", "");
    }

    #[test]
    fn neg() {
        let zero = -Integer::zero();
        assert!(zero.is_zero());
        assert!(zero.is_positive());

        assert_eq!((-Integer::from(17)).to_string(), "-17");
        assert_eq!((-Integer::from(-17)).to_string(), "17");
        assert_eq!((-&Integer::from(17)).to_string(), "-17");
    }

    macro_rules! assert_cmp {
        ($left: expr, $cmp: tt, $right: expr) => {{
            let left = $left.parse::<Integer>().unwrap();
            let right = $right.parse::<Integer>().unwrap();
            assert!(left $cmp right, "left = {}, right = {}", left, right);
        }};
    }

    #[test]
    fn cmp() {
        assert_cmp!("0", ==, "0");
        assert_cmp!("0", ==, "-0");
        assert_cmp!("1", >, "0");
        assert_cmp!("-1", <, "0");
        assert_cmp!("1", >, "-1");
        assert_cmp!("-1", <, "1");
        assert_cmp!("12345", ==, "12345");
        assert_cmp!("12345", !=, "12346");
        assert_cmp!("123", <, "1234");
        assert_cmp!("1234", >, "123");
        assert_cmp!("123", <, "124");
        assert_cmp!("-123", >, "-1234");
        assert_cmp!("-1234", <, "-123");
        assert_cmp!("-124", <, "-123");
        assert_cmp!("-123", >, "-124");
        assert_cmp!("987654321123456789", >=, "123456789987654321");
        assert_cmp!("123456789987654321", <=, "987654321123456789");
        assert_cmp!("-987654321123456789", <, "-123456789987654321");

        let larger = std::cmp::max(Integer::from(-5), Integer::from(-3));
        assert_eq!(larger.to_string(), "-3");
    }
}
