use crate::{integral::gcd_unsigned, Integral, RatioError};
use num_traits::{Float, One, Zero};

/// A number stored as numerator and denominator instead of actually
/// calculating the result. This ensures (10/3) * 3 is actually 10 and not
/// 9.99998.
///
/// A `Ratio` is always in lowest terms and its denominator is always
/// positive, so the sign lives in the numerator and zero is `0/1`. Every
/// public way of making one goes through that normalization.
///
/// Arithmetic cross multiplies the components in `T` itself. The `try_*`
/// methods return `Overflow` when a step doesn't fit `T`, and the operators
/// panic with it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio<T> {
    numerator: T,
    denominator: T
}

pub type Rational = Ratio<isize>;
pub type Rational32 = Ratio<i32>;
pub type Rational64 = Ratio<i64>;

/// Construct a new ratio, see `Ratio::new`
pub fn make_ratio<T: Integral>(numerator: T, denominator: T) -> Result<Ratio<T>, RatioError> {
    Ratio::new(numerator, denominator)
}

impl<T: Integral> Default for Ratio<T> {
    fn default() -> Self {
        Self::zero()
    }
}
impl<T: Integral> Ratio<T> {
    /// Construct without reducing. Only for values that are already in
    /// lowest terms with a positive denominator.
    pub(crate) fn new_raw(numerator: T, denominator: T) -> Self {
        debug_assert!(denominator > T::zero(), "denominator must be positive");
        Self { numerator, denominator }
    }
    /// Construct a new ratio, reduced to lowest terms with the sign moved to
    /// the numerator. 6/-4 becomes -3/2.
    ///
    /// ## Errors
    /// `DivideByZero` if the denominator is 0, `Overflow` if the reduced
    /// value can't be represented (`T::MIN / -1`).
    pub fn new(numerator: T, denominator: T) -> Result<Self, RatioError> {
        if denominator.is_zero() {
            return Err(RatioError::DivideByZero);
        }
        if numerator.is_zero() {
            return Ok(Self::zero());
        }

        // Work on magnitudes so T::MIN doesn't overflow
        let (n, d) = (numerator.unsigned_abs(), denominator.unsigned_abs());
        let gcd = gcd_unsigned(n, d);
        let negative = numerator.is_negative() != denominator.is_negative();

        Ok(Self::new_raw(
            T::from_magnitude(negative, n / gcd).ok_or(RatioError::Overflow)?,
            T::from_magnitude(false, d / gcd).ok_or(RatioError::Overflow)?
        ))
    }
    /// Alias of `new`
    pub fn from_parts(numerator: T, denominator: T) -> Result<Self, RatioError> {
        Self::new(numerator, denominator)
    }
    /// `value/1`, which is always in lowest terms
    pub fn from_integer(value: T) -> Self {
        Self::new_raw(value, T::one())
    }
    /// Construct a ratio from a float, keeping `precision` decimal digits.
    /// 0.75 with a precision of 2 is 75/100, which is 3/4. Digits past the
    /// precision are truncated.
    ///
    /// ## Errors
    /// `Overflow` if `10^precision` or the scaled value doesn't fit `T`.
    /// Infinities and NaN never fit.
    pub fn from_float<F: Float>(value: F, precision: u32) -> Result<Self, RatioError> {
        let ten: T = num_traits::cast(10).ok_or(RatioError::Overflow)?;
        let scale = num_traits::checked_pow(ten, precision as usize).ok_or(RatioError::Overflow)?;
        let float_scale: F = num_traits::cast(scale).ok_or(RatioError::Overflow)?;
        let numerator: T = num_traits::cast(value * float_scale).ok_or(RatioError::Overflow)?;
        Self::new(numerator, scale)
    }

    pub fn zero() -> Self {
        Self::new_raw(T::zero(), T::one())
    }
    pub fn one() -> Self {
        Self::new_raw(T::one(), T::one())
    }

    /// Return the numerator. Carries the sign.
    pub fn numerator(self) -> T {
        self.numerator
    }
    /// Return the denominator. Always positive.
    pub fn denominator(self) -> T {
        self.denominator
    }

    /// Bring the ratio into lowest terms. Every ratio already is, so this
    /// never changes anything
    pub fn reduce(&mut self) {
        debug_assert!(gcd_unsigned(self.numerator.unsigned_abs(), self.denominator.unsigned_abs()).is_one());
        *self = Self::new_raw(self.numerator, self.denominator);
    }
    /// Return a copy in lowest terms, see `reduce`
    pub fn reduced(mut self) -> Self {
        self.reduce();
        self
    }

    pub fn is_integer(self) -> bool {
        self.denominator.is_one()
    }
    pub fn is_zero(self) -> bool {
        self.numerator.is_zero()
    }
    pub fn is_one(self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }
    pub fn is_positive(self) -> bool {
        self.numerator.is_positive()
    }
    pub fn is_negative(self) -> bool {
        self.numerator.is_negative()
    }
    /// -1, 0 or 1 depending on the sign
    pub fn signum(self) -> T {
        self.numerator.signum()
    }
    /// Return this value with a positive sign.
    /// abs of -1/2 is 1/2.
    ///
    /// # Panics
    /// Overflows like `T::abs` for a numerator of `T::MIN`
    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }
    /// The absolute difference, `|self - other|`
    pub fn abs_sub(self, other: Self) -> Self {
        (self - other).abs()
    }

    /// Same thing as in mathematics taking the power of -1.
    ///
    /// ## Errors
    /// `DivideByZero` if this is 0
    pub fn recip(self) -> Result<Self, RatioError> {
        Self::new(self.denominator, self.numerator)
    }
    /// Raise to an integer power. Negative exponents take the power of the
    /// reciprocal. Anything to the power of 0 is 1.
    ///
    /// ## Errors
    /// `DivideByZero` for a negative power of 0, `Overflow` if a component
    /// of the result doesn't fit `T`
    pub fn pow(self, exp: i32) -> Result<Self, RatioError> {
        let base = if exp < 0 { self.recip()? } else { self };
        let exp = exp.unsigned_abs() as usize;

        // Powers of coprime numbers stay coprime, no need to reduce
        Ok(Self::new_raw(
            num_traits::checked_pow(base.numerator, exp).ok_or(RatioError::Overflow)?,
            num_traits::checked_pow(base.denominator, exp).ok_or(RatioError::Overflow)?
        ))
    }

    /// Round toward zero
    pub fn trunc(self) -> Self {
        Self::from_integer(self.to_integer())
    }
    /// What `trunc` throws away. Has the same sign as the ratio itself, so
    /// `trunc() + fract()` is the original value.
    pub fn fract(self) -> Self {
        let remainder = self.numerator % self.denominator;
        if remainder.is_zero() {
            Self::zero()
        } else {
            // gcd(n % d, d) == gcd(n, d) == 1
            Self::new_raw(remainder, self.denominator)
        }
    }
    /// Round toward negative infinity. -7/2 becomes -4.
    pub fn floor(self) -> Self {
        let quotient = self.to_integer();
        if self.is_negative() && !self.is_integer() {
            Self::from_integer(quotient - T::one())
        } else {
            Self::from_integer(quotient)
        }
    }
    /// Round toward positive infinity. -7/2 becomes -3.
    pub fn ceil(self) -> Self {
        let quotient = self.to_integer();
        if self.is_positive() && !self.is_integer() {
            Self::from_integer(quotient + T::one())
        } else {
            Self::from_integer(quotient)
        }
    }
    /// Round to the nearest integer. Halfway cases round away from zero, so
    /// 1/2 becomes 1 and -1/2 becomes -1.
    pub fn round(self) -> Self {
        let quotient = self.to_integer();
        let remainder = (self.numerator % self.denominator).unsigned_abs();
        let denominator = self.denominator.unsigned_abs();

        // 2r >= d without computing 2r, which may not fit
        if remainder.is_zero() || remainder < denominator - remainder {
            Self::from_integer(quotient)
        } else if self.is_positive() {
            Self::from_integer(quotient + T::one())
        } else {
            Self::from_integer(quotient - T::one())
        }
    }

    /// Integer division, rounding toward zero like `trunc`
    pub fn to_integer(self) -> T {
        self.numerator / self.denominator
    }
    /// Calculates the floating point result of this ratio. Only exact up to
    /// the precision of `F`, so do this as late as possible.
    pub fn to_float<F: Float>(self) -> F {
        match (num_traits::cast::<T, F>(self.numerator), num_traits::cast::<T, F>(self.denominator)) {
            (Some(numerator), Some(denominator)) => numerator / denominator,
            _ => F::nan()
        }
    }
    /// Convert to a ratio over another integer type. Widening always
    /// succeeds and is also available through `From`.
    ///
    /// ## Errors
    /// `Overflow` if a component doesn't fit `U`
    pub fn cast<U: Integral>(self) -> Result<Ratio<U>, RatioError> {
        Ok(Ratio::new_raw(
            num_traits::cast(self.numerator).ok_or(RatioError::Overflow)?,
            num_traits::cast(self.denominator).ok_or(RatioError::Overflow)?
        ))
    }
}
impl<T: Integral> Ratio<T>
    where T: From<i16>
{
    /// An approximation of pi, 6283/2000
    pub fn pi() -> Self {
        Self::new_raw(6283i16.into(), 2000i16.into())
    }
}

impl<T: Integral> From<T> for Ratio<T> {
    fn from(value: T) -> Self {
        Self::from_integer(value)
    }
}
macro_rules! impl_widen {
    ($($small:ident => $($big:ident),*);*) => {
        $($(
            impl From<Ratio<$small>> for Ratio<$big> {
                fn from(other: Ratio<$small>) -> Self {
                    Self::new_raw(other.numerator.into(), other.denominator.into())
                }
            }
            impl From<$small> for Ratio<$big> {
                fn from(value: $small) -> Self {
                    Self::from_integer(value.into())
                }
            }
        )*)*
    }
}
impl_widen! {
    i8 => i16, i32, i64, i128, isize;
    i16 => i32, i64, i128, isize;
    i32 => i64, i128;
    i64 => i128
}
