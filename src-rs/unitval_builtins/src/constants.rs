//! Physical constants

use unitval_unit::{Dimension, DimensionMap, Unit};
use unitval_value::Quantity;

/// The Boltzmann constant, `1.38064852e-23 J/K`.
#[must_use]
pub fn boltzmann() -> Quantity {
    let unit = Unit::new(
        DimensionMap::from_exponents(&[
            (Dimension::Mass, 1.0),
            (Dimension::Length, 2.0),
            (Dimension::Time, -2.0),
            (Dimension::Temperature, -1.0),
        ]),
        1.0,
        0.0,
    )
    .with_label("J/K");

    Quantity::new(1.380_648_52e-23, unit)
}

/// The Avogadro constant, `6.022140857e23 / mol`.
#[must_use]
pub fn avogadro() -> Quantity {
    let unit = Unit::new(DimensionMap::base(Dimension::Amount).inverse(), 1.0, 0.0)
        .with_label("1/mol");

    Quantity::new(6.022_140_857e23, unit)
}
