//! Named units
//!
//! Derived units are written out as dimension maps so that building them
//! cannot fail. Each one equals the composition it is named after, e.g.
//! `newton() == kilogram() · meter() / second()^2`.

use unitval_unit::{Dimension, DimensionMap, Unit};

const FORCE: DimensionMap = DimensionMap::from_exponents(&[
    (Dimension::Mass, 1.0),
    (Dimension::Length, 1.0),
    (Dimension::Time, -2.0),
]);

const ENERGY: DimensionMap = DimensionMap::from_exponents(&[
    (Dimension::Mass, 1.0),
    (Dimension::Length, 2.0),
    (Dimension::Time, -2.0),
]);

const PRESSURE: DimensionMap = DimensionMap::from_exponents(&[
    (Dimension::Mass, 1.0),
    (Dimension::Length, -1.0),
    (Dimension::Time, -2.0),
]);

const FREQUENCY: DimensionMap = DimensionMap::from_exponents(&[(Dimension::Time, -1.0)]);

const ELECTRON_VOLTS_PER_JOULE: f64 = 6.242e18;

fn named(dimension_map: DimensionMap, factor: f64, label: &str) -> Unit {
    Unit::new(dimension_map, factor, 0.0).with_label(label)
}

/// The kilogram, `kg`.
#[must_use]
pub fn kilogram() -> Unit {
    Dimension::Mass.unit()
}

/// The second, `s`.
#[must_use]
pub fn second() -> Unit {
    Dimension::Time.unit()
}

/// The kelvin, `K`.
#[must_use]
pub fn kelvin() -> Unit {
    Dimension::Temperature.unit()
}

/// The ampere, `A`.
#[must_use]
pub fn ampere() -> Unit {
    Dimension::Current.unit()
}

/// The mole, `mol`.
#[must_use]
pub fn mole() -> Unit {
    Dimension::Amount.unit()
}

/// The meter, `m`.
#[must_use]
pub fn meter() -> Unit {
    Dimension::Length.unit()
}

/// The candela, `cd`.
#[must_use]
pub fn candela() -> Unit {
    Dimension::LuminousIntensity.unit()
}

/// Degrees Celsius, `C`.
///
/// This is an affine unit: it can be added, subtracted and converted, but
/// not multiplied.
#[must_use]
pub fn celsius() -> Unit {
    kelvin().with_offset(-273.15).with_label("C")
}

/// Degrees Fahrenheit, `F`.
#[must_use]
pub fn fahrenheit() -> Unit {
    kelvin()
        .with_factor(9.0 / 5.0)
        .with_offset(-459.67)
        .with_label("F")
}

/// The newton, `N = kg·m/s^2`.
#[must_use]
pub fn newton() -> Unit {
    named(FORCE, 1.0, "N")
}

/// The joule, `J = N·m`.
#[must_use]
pub fn joule() -> Unit {
    named(ENERGY, 1.0, "J")
}

/// The pascal, `Pa = N/m^2`.
#[must_use]
pub fn pascal() -> Unit {
    named(PRESSURE, 1.0, "Pa")
}

/// The bar, `1 bar = 1e5 Pa`.
#[must_use]
pub fn bar() -> Unit {
    named(PRESSURE, 1e-5, "bar")
}

/// The electron-volt, `1 J = 6.242e18 eV`.
#[must_use]
pub fn electron_volt() -> Unit {
    named(ENERGY, ELECTRON_VOLTS_PER_JOULE, "eV")
}

/// The hertz, `Hz = 1/s`.
#[must_use]
pub fn hertz() -> Unit {
    named(FREQUENCY, 1.0, "Hz")
}
