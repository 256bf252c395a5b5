use crate::{Integral, Ratio, RatioError};
use num_traits::{CheckedMul, Zero};
use std::{fmt, str::FromStr};

impl<T: Integral> Ratio<T> {
    /// The value as an exact decimal with `precision` digits, split into the
    /// integer and fractional digits of its magnitude. None if the
    /// denominator doesn't divide `10^precision`.
    fn exact_decimal(self, precision: usize) -> Option<(T::Unsigned, T::Unsigned)> {
        let ten: T::Unsigned = num_traits::cast(10)?;
        let scale = num_traits::checked_pow(ten, precision)?;
        let denominator = self.denominator().unsigned_abs();
        if !(scale % denominator).is_zero() {
            return None;
        }
        let scaled = self.numerator().unsigned_abs().checked_mul(&(scale / denominator))?;
        Some((scaled / scale, scaled % scale))
    }
}

impl<T: Integral> fmt::Display for Ratio<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let decimal = f.precision().and_then(|precision| Some((precision, self.exact_decimal(precision)?)));
        let magnitude = match decimal {
            Some((0, (int, _))) => int.to_string(),
            Some((precision, (int, frac))) => format!("{}.{:0width$}", int, frac, width = precision),
            None => format!("{}/{}", self.numerator().unsigned_abs(), self.denominator())
        };
        // Takes care of the sign, width and fill
        f.pad_integral(!self.is_negative(), "", &magnitude)
    }
}
impl<T: Integral> fmt::Debug for Ratio<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numerator(), self.denominator())
    }
}

impl<T: Integral> FromStr for Ratio<T> {
    type Err = RatioError;

    /// Parse `n/d` or a bare integer `n`. The result is reduced.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.trim().splitn(2, '/');
        let numerator: T = parts.next().unwrap_or_default().trim().parse()?;
        let denominator: T = match parts.next().map(str::trim) {
            Some("") => return Err(RatioError::MissingDenominator),
            Some(part) => part.parse()?,
            None => T::one()
        };
        Self::new(numerator, denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(numerator: i32, denominator: i32) -> Ratio<i32> {
        Ratio::new(numerator, denominator).unwrap()
    }

    #[test]
    fn format() {
        assert_eq!(format!("{}", r(2, 4)), "1/2");
        assert_eq!(format!("{}", r(2, -4)), "-1/2");
        assert_eq!(format!("{}", r(8, 2)), "4/1");
        assert_eq!(format!("{}", Ratio::<i32>::zero()), "0/1");
        assert_eq!(format!("{:+}", r(2, 4)), "+1/2");
        assert_eq!(format!("{:+}", r(-2, 4)), "-1/2");
        assert_eq!(format!("{:?}", r(-2, 4)), "-1/2");
        assert_eq!(format!("{}", Ratio::from_integer(i8::MIN)), "-128/1");
    }

    #[test]
    fn format_precision() {
        assert_eq!(format!("{:.1}", r(1, 2)), "0.5");
        assert_eq!(format!("{:.1}", r(1, 4)), "1/4");
        assert_eq!(format!("{:.2}", r(1, 4)), "0.25");
        assert_eq!(format!("{:.3}", r(1, 4)), "0.250");
        assert_eq!(format!("{:.2}", r(1, 3)), "1/3");
        assert_eq!(format!("{:.2}", r(-21, 20)), "-1.05");
        assert_eq!(format!("{:.0}", r(7, 1)), "7");
        assert_eq!(format!("{:.1}", r(7, 1)), "7.0");
        assert_eq!(format!("{:+.1}", r(3, 2)), "+1.5");
        assert_eq!(format!("{:.2}", r(-1, 2)), "-0.50");
        // 10^3 doesn't fit an i8
        assert_eq!(format!("{:.3}", Ratio::<i8>::new(1, 2).unwrap()), "1/2");
    }

    #[test]
    fn format_width() {
        assert_eq!(format!("{:>6}", r(-1, 2)), "  -1/2");
        assert_eq!(format!("{:<5}|", r(1, 2)), "1/2  |");
        assert_eq!(format!("{:*^7}", r(3, 4)), "**3/4**");
        assert_eq!(format!("{:+6}", r(3, 4)), "  +3/4");
        assert_eq!(format!("{:>6.2}", r(1, 4)), "  0.25");
        assert_eq!(format!("{:06.1}", r(-3, 2)), "-001.5");
    }

    #[test]
    fn parse() {
        assert_eq!("3/4".parse::<Ratio<i32>>(), Ok(r(3, 4)));
        assert_eq!("6/8".parse::<Ratio<i32>>(), Ok(r(3, 4)));
        assert_eq!("-6/8".parse::<Ratio<i32>>(), Ok(r(-3, 4)));
        assert_eq!("6/-8".parse::<Ratio<i32>>(), Ok(r(-3, 4)));
        assert_eq!(" 5 / 10 ".parse::<Ratio<i32>>(), Ok(r(1, 2)));
        assert_eq!("12".parse::<Ratio<i64>>(), Ok(Ratio::from_integer(12)));
        assert_eq!("0/7".parse::<Ratio<i32>>(), Ok(Ratio::zero()));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("1/0".parse::<Ratio<i32>>(), Err(RatioError::DivideByZero));
        assert_eq!("1/".parse::<Ratio<i32>>(), Err(RatioError::MissingDenominator));
        assert!(matches!("".parse::<Ratio<i32>>(), Err(RatioError::Parse(_))));
        assert!(matches!("a/2".parse::<Ratio<i32>>(), Err(RatioError::Parse(_))));
        assert!(matches!("1/2/3".parse::<Ratio<i32>>(), Err(RatioError::Parse(_))));
        assert!(matches!("300/1".parse::<Ratio<i8>>(), Err(RatioError::Parse(_))));
    }

    #[test]
    fn display_round_trip() {
        for (n, d) in &[(1, 2), (-7, 3), (0, 1), (22, 7), (i32::MAX, 1), (i32::MIN, 1)] {
            let ratio = r(*n, *d);
            assert_eq!(ratio.to_string().parse::<Ratio<i32>>(), Ok(ratio));
        }
    }
}
