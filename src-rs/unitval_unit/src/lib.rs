//! Unit algebra for unitval
//!
//! A [`Unit`] is a product of [`Dimension`] exponents together with a
//! multiplicative factor and an additive offset relative to the SI base
//! units. Units with a nonzero offset (Celsius, Fahrenheit) are *affine* and
//! only take part in conversions, never in multiplicative operations.

mod dimension;
mod error;
mod unit;
pub mod util;

pub use self::dimension::{Dimension, DimensionMap};
pub use self::error::{UnitError, UnitOperation};
pub use self::unit::Unit;
