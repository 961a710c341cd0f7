//! Shared printing utilities for the unitval CLI

use anstream::print;
use unitval_unit::Unit;
use unitval_value::Quantity;

use crate::stylesheet;

/// Prints a quantity as its value followed by its unit.
pub fn print_quantity(quantity: &Quantity) {
    let styled_value = stylesheet::QUANTITY_VALUE.style(quantity.value());
    print!("{styled_value} ");
    print_unit(quantity.unit());
}

/// Prints a unit's label followed by its base dimensions, factor and offset.
pub fn print_unit(unit: &Unit) {
    let styled_label = stylesheet::UNIT_LABEL.style(unit.display_label());
    let styled_bases = stylesheet::UNIT_BASES.style(unit_bases(unit));
    print!("{styled_label} {styled_bases}");
}

/// Formats the base dimensions, factor and offset of a unit without its
/// label, e.g. `(K x 1.8 -459.67)`.
fn unit_bases(unit: &Unit) -> String {
    Unit::new(*unit.dimension_map(), unit.factor(), unit.offset()).to_string()
}
