//! The standard units and constants that come with unitval

mod constants;
mod registry;
mod units;

pub use self::constants::{avogadro, boltzmann};
pub use self::registry::{BuiltinUnitDoc, UnitRegistry};
pub use self::units::{
    ampere, bar, candela, celsius, electron_volt, fahrenheit, hertz, joule, kelvin, kilogram,
    meter, mole, newton, pascal, second,
};
