mod error;
mod integral;
mod ops;
mod ratio;
mod text;

pub use self::error::*;
pub use self::integral::*;
pub use self::ratio::*;
