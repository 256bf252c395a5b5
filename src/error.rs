use std::num::ParseIntError;
use thiserror::Error;

/// Everything that can go wrong when building or combining ratios
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RatioError {
    /// A zero denominator was supplied or would have been produced
    #[error("division by zero is undefined")]
    DivideByZero,
    /// The result doesn't fit the underlying integer type
    #[error("arithmetic operation resulted in an overflow")]
    Overflow,
    #[error("invalid ratio component: {0}")]
    Parse(#[from] ParseIntError),
    #[error("missing denominator after '/'")]
    MissingDenominator
}
