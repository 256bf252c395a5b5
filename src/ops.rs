use crate::{Integral, Ratio, RatioError};
use num_traits::{One, Zero};
use std::{
    cmp::Ordering,
    iter::{Product, Sum},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign}
};

/// `x * y`, or `Overflow` if it doesn't fit
fn checked_product<T: Integral>(x: T, y: T) -> Result<T, RatioError> {
    x.checked_mul(&y).ok_or(RatioError::Overflow)
}

impl<T: Integral> Ratio<T> {
    /// Calculates addition, `(a*d + b*c) / (b*d)`. Returns `Overflow` if a
    /// step doesn't fit `T`
    pub fn try_add(self, other: Self) -> Result<Self, RatioError> {
        let (a, b) = (self.numerator(), self.denominator());
        let (c, d) = (other.numerator(), other.denominator());
        let numerator = checked_product(a, d)?.checked_add(&checked_product(b, c)?).ok_or(RatioError::Overflow)?;
        Self::new(numerator, checked_product(b, d)?)
    }
    /// Calculates subtraction, `(a*d - b*c) / (b*d)`. Returns `Overflow` if a
    /// step doesn't fit `T`
    pub fn try_sub(self, other: Self) -> Result<Self, RatioError> {
        let (a, b) = (self.numerator(), self.denominator());
        let (c, d) = (other.numerator(), other.denominator());
        let numerator = checked_product(a, d)?.checked_sub(&checked_product(b, c)?).ok_or(RatioError::Overflow)?;
        Self::new(numerator, checked_product(b, d)?)
    }
    /// Calculates multiplication, `(a*c) / (b*d)`. Returns `Overflow` if a
    /// step doesn't fit `T`
    pub fn try_mul(self, other: Self) -> Result<Self, RatioError> {
        let (a, b) = (self.numerator(), self.denominator());
        let (c, d) = (other.numerator(), other.denominator());
        Self::new(checked_product(a, c)?, checked_product(b, d)?)
    }
    /// Calculates division, `(a*d) / (b*c)`. Returns `DivideByZero` if other
    /// is 0 and `Overflow` if a step doesn't fit `T`
    pub fn try_div(self, other: Self) -> Result<Self, RatioError> {
        if other.is_zero() {
            return Err(RatioError::DivideByZero);
        }
        let (a, b) = (self.numerator(), self.denominator());
        let (c, d) = (other.numerator(), other.denominator());
        Self::new(checked_product(a, d)?, checked_product(b, c)?)
    }
    /// Calculates the remainder, `(a*d % b*c) / (b*d)`. The result has the
    /// sign of self, like the integer `%`. Returns `DivideByZero` if other
    /// is 0 and `Overflow` if a step doesn't fit `T`
    pub fn try_rem(self, other: Self) -> Result<Self, RatioError> {
        if other.is_zero() {
            return Err(RatioError::DivideByZero);
        }
        let (a, b) = (self.numerator(), self.denominator());
        let (c, d) = (other.numerator(), other.denominator());
        let (dividend, divisor) = (checked_product(a, d)?, checked_product(b, c)?);
        // Everything is a multiple of -1, and MIN % -1 would overflow
        if divisor == -T::one() {
            return Ok(Self::zero());
        }
        Self::new(dividend % divisor, checked_product(b, d)?)
    }
}

impl<T: Integral> Neg for Ratio<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new_raw(-self.numerator(), self.denominator())
    }
}

// The operators can't return a Result, so errors panic like integer division
// by zero does.
macro_rules! impl_op {
    ($($trait:ident $fn:ident = $call:ident),* --- $($trait_assign:ident $fn_assign:ident = ($op_assign:tt)),*) => {
        $(impl<T: Integral, R: Into<Ratio<T>>> $trait<R> for Ratio<T> {
            type Output = Self;
            fn $fn(self, other: R) -> Self {
                match self.$call(other.into()) {
                    Ok(result) => result,
                    Err(err) => panic!("{}", err)
                }
            }
        })*
        $(impl<T: Integral, R: Into<Ratio<T>>> $trait_assign<R> for Ratio<T> {
            fn $fn_assign(&mut self, other: R) {
                *self = *self $op_assign other;
            }
        })*
    }
}
impl_op! {
    Add add = try_add,
    Sub sub = try_sub,
    Mul mul = try_mul,
    Div div = try_div,
    Rem rem = try_rem
    ---
    AddAssign add_assign = (+),
    SubAssign sub_assign = (-),
    MulAssign mul_assign = (*),
    DivAssign div_assign = (/),
    RemAssign rem_assign = (%)
}

/// Floored division: the remainder is in `0..denominator`
fn div_floor<T: Integral>(numerator: T, denominator: T) -> (T, T) {
    let (mut quotient, mut remainder) = (numerator / denominator, numerator % denominator);
    if remainder.is_negative() {
        quotient = quotient - T::one();
        remainder = remainder + denominator;
    }
    (quotient, remainder)
}
/// Compare a/b with c/d, where b and d are positive
fn cmp_parts<T: Integral>(a: T, b: T, c: T, d: T) -> Ordering {
    if b == d {
        return a.cmp(&c);
    }
    // Positive denominators, so cross multiplying keeps the order
    if let (Some(left), Some(right)) = (a.checked_mul(&d), c.checked_mul(&b)) {
        return left.cmp(&right);
    }

    // Too big to cross multiply. Compare the integer parts, then the
    // fractional parts
    let (left_int, left_rem) = div_floor(a, b);
    let (right_int, right_rem) = div_floor(c, d);
    match left_int.cmp(&right_int) {
        Ordering::Equal => match (left_rem.is_zero(), right_rem.is_zero()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            // Both in (0, 1): x < y if and only if 1/x > 1/y
            (false, false) => cmp_parts(b, left_rem, d, right_rem).reverse()
        },
        ordering => ordering
    }
}
impl<T: Integral> Ord for Ratio<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_parts(self.numerator(), self.denominator(), other.numerator(), other.denominator())
    }
}
impl<T: Integral> PartialOrd for Ratio<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Integral> Zero for Ratio<T> {
    fn zero() -> Self {
        Self::new_raw(T::zero(), T::one())
    }
    fn is_zero(&self) -> bool {
        self.numerator().is_zero()
    }
}
impl<T: Integral> One for Ratio<T> {
    fn one() -> Self {
        Self::new_raw(T::one(), T::one())
    }
}

impl<T: Integral> Sum for Ratio<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new_raw(T::zero(), T::one()), |acc, x| acc + x)
    }
}
impl<T: Integral> Product for Ratio<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new_raw(T::one(), T::one()), |acc, x| acc * x)
    }
}
