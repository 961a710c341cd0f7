//! Quantities for unitval
//!
//! A [`Quantity`] is a number together with the [`Unit`](unitval_unit::Unit)
//! it is measured in. Arithmetic on quantities checks that the units are
//! compatible, and the [safe constructors](constructor) narrow a quantity to
//! a type that carries a dimension guarantee.

pub mod constructor;
mod error;
mod quantity;

pub use self::constructor::{Energy, Length, Pressure, SafeConstructor, Temperature, construct};
pub use self::error::{QuantityError, SumOperation};
pub use self::quantity::{Quantity, SumUnitPolicy};
