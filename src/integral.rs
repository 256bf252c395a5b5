use num_traits::{PrimInt, Signed};
use std::{
    fmt,
    hash::Hash,
    mem,
    num::ParseIntError,
    str::FromStr
};

/// The integer types a `Ratio` can be built on: every signed primitive
/// integer.
///
/// Besides the arithmetic from `num_traits`, implementors know their unsigned
/// counterpart so that magnitudes (including the one of `MIN`) can be handled
/// without overflowing.
pub trait Integral:
    PrimInt + Signed + Hash + fmt::Display + fmt::Debug + FromStr<Err = ParseIntError>
{
    /// The unsigned integer of the same width
    type Unsigned: PrimInt + fmt::Display + fmt::Debug;

    /// Absolute value as the unsigned counterpart. Never overflows.
    fn unsigned_abs(self) -> Self::Unsigned;
    /// Rebuild a signed value from a sign and a magnitude. Returns None if
    /// the result doesn't fit, like a magnitude of `MAX + 1` that isn't
    /// negative.
    fn from_magnitude(negative: bool, magnitude: Self::Unsigned) -> Option<Self>;
}

macro_rules! impl_integral {
    ($($int:ident => $uint:ident),*) => {
        $(impl Integral for $int {
            type Unsigned = $uint;

            fn unsigned_abs(self) -> $uint {
                self.wrapping_abs() as $uint
            }
            fn from_magnitude(negative: bool, magnitude: $uint) -> Option<Self> {
                if !negative {
                    num_traits::cast(magnitude)
                } else if magnitude == $int::MIN.unsigned_abs() {
                    Some($int::MIN)
                } else {
                    num_traits::cast::<$uint, $int>(magnitude).map(|i| -i)
                }
            }
        })*
    }
}
impl_integral!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

/// Greatest common divisor of two magnitudes, using the binary method.
pub(crate) fn gcd_unsigned<U: PrimInt>(mut x: U, mut y: U) -> U {
    // https://en.wikipedia.org/wiki/Binary_GCD_algorithm

    // Otherwise this will loop forever since 0 has no lowest set bit
    if x.is_zero() {
        return y;
    }
    if y.is_zero() {
        return x;
    }

    // gcd(4, 6) = gcd(2, 3) * 2
    let common = (x | y).trailing_zeros() as usize;

    // gcd(2, 3) = gcd(1, 3)
    x = x >> x.trailing_zeros() as usize;

    loop {
        y = y >> y.trailing_zeros() as usize;

        // Both are odd now. Keep x <= y so the subtraction can't underflow
        if x > y {
            mem::swap(&mut x, &mut y);
        }

        // The difference of two odd numbers is even, so the next round
        // shifts it down again
        y = y - x;

        if y.is_zero() {
            break;
        }
    }

    x << common
}

/// Find the greatest common divisor of two numbers.
///
/// The result is always non-negative, so it's returned as the unsigned
/// counterpart of `T`. That keeps `gcd(T::MIN, 0)` representable.
/// `gcd(a, 0)` is `|a|` and `gcd(0i32, 0)` is 0.
pub fn gcd<T: Integral>(a: T, b: T) -> T::Unsigned {
    gcd_unsigned(a.unsigned_abs(), b.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12i32, 18), 6u32);
        assert_eq!(gcd(-12i32, 18), 6u32);
        assert_eq!(gcd(12i64, -18), 6u64);
        assert_eq!(gcd(17i32, 5), 1u32);
        assert_eq!(gcd(81i32, 54), 27u32);
        assert_eq!(gcd(7i32, 0), 7u32);
        assert_eq!(gcd(0i32, -7), 7u32);
        assert_eq!(gcd(0i32, 0), 0u32);
    }

    #[test]
    fn gcd_extremes() {
        assert_eq!(gcd(i32::MIN, 0), 1u32 << 31);
        assert_eq!(gcd(i32::MIN, 6), 2u32);
        assert_eq!(gcd(i8::MIN, i8::MIN), 128u8);
        assert_eq!(gcd(i64::MAX, i64::MAX - 1), 1u64);
    }

    #[test]
    fn gcd_matches_euclid() {
        fn euclid(mut a: u32, mut b: u32) -> u32 {
            while b != 0 {
                let r = a % b;
                a = b;
                b = r;
            }
            a
        }
        for i in -40i32..40 {
            for j in -40i32..40 {
                assert_eq!(gcd(i, j), euclid(i.unsigned_abs(), j.unsigned_abs()), "gcd({}, {})", i, j);
            }
        }
    }

    #[test]
    fn magnitudes() {
        assert_eq!(i16::MIN.unsigned_abs(), 32768u16);
        assert_eq!(Integral::unsigned_abs(-5i8), 5u8);
        assert_eq!(i8::from_magnitude(true, 128), Some(i8::MIN));
        assert_eq!(i8::from_magnitude(false, 128), None);
        assert_eq!(i8::from_magnitude(true, 5), Some(-5));
        assert_eq!(i32::from_magnitude(false, 0), Some(0));
        assert_eq!(i32::from_magnitude(true, 0), Some(0));
    }
}
