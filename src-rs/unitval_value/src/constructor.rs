//! Dimension-checked wrappers around [`Quantity`]
//!
//! Each wrapper can only be built from a quantity whose unit has the
//! wrapper's dimensions. The quantity is stored as given, so a
//! [`Temperature`] built from 32 °F still reads 32 °F.

use std::{fmt, ops::Deref};

use unitval_unit::{Dimension, DimensionMap};

use crate::{Quantity, QuantityError};

/// Validates that `input` has the `expected` dimensions.
///
/// The quantity is returned unchanged on success. No conversion is
/// performed, so any factor or offset of the unit is kept.
///
/// # Errors
///
/// Returns `QuantityError::DimensionValidation` if the dimensions of the
/// quantity's unit differ from `expected`.
pub fn construct(expected: &DimensionMap, input: Quantity) -> Result<Quantity, QuantityError> {
    if !input.unit().dimensions_match(expected) {
        tracing::debug!(
            expected = %expected,
            found = %input.unit().dimension_map(),
            "rejected quantity in safe constructor"
        );

        return Err(QuantityError::DimensionValidation {
            expected: *expected,
            unit: input.unit().clone(),
        });
    }

    Ok(input)
}

/// A quantity that is known to have a fixed set of dimensions.
pub trait SafeConstructor:
    TryFrom<Quantity, Error = QuantityError> + Deref<Target = Quantity>
{
    /// The name of the physical quantity, e.g. `"temperature"`.
    const NAME: &'static str;
    /// The dimensions every value of this type has.
    const DIMENSION: DimensionMap;

    /// Unwraps the underlying quantity.
    fn into_quantity(self) -> Quantity;
}

macro_rules! safe_constructor {
    (
        $(#[$attr:meta])*
        $name:ident, $label:literal, [$(($dimension:ident, $exponent:expr)),+ $(,)?]
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(Quantity);

        impl $name {
            /// Validates the dimensions of `quantity` and wraps it.
            ///
            /// # Errors
            ///
            /// Returns `QuantityError::DimensionValidation` if the quantity
            /// has different dimensions.
            pub fn new(quantity: Quantity) -> Result<Self, QuantityError> {
                construct(&<Self as SafeConstructor>::DIMENSION, quantity).map(Self)
            }

            /// Returns the underlying quantity.
            #[must_use]
            pub const fn quantity(&self) -> &Quantity {
                &self.0
            }
        }

        impl SafeConstructor for $name {
            const NAME: &'static str = $label;
            const DIMENSION: DimensionMap =
                DimensionMap::from_exponents(&[$((Dimension::$dimension, $exponent)),+]);

            fn into_quantity(self) -> Quantity {
                self.0
            }
        }

        impl TryFrom<Quantity> for $name {
            type Error = QuantityError;

            fn try_from(quantity: Quantity) -> Result<Self, Self::Error> {
                Self::new(quantity)
            }
        }

        impl Deref for $name {
            type Target = Quantity;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl From<$name> for Quantity {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

safe_constructor!(
    /// A quantity measured in kelvin or a unit derived from it.
    Temperature,
    "temperature",
    [(Temperature, 1.0)]
);

safe_constructor!(
    /// A quantity measured in meters or a unit derived from them.
    Length,
    "length",
    [(Length, 1.0)]
);

safe_constructor!(
    /// A quantity with the dimensions of a joule, `kg·m^2·s^-2`.
    Energy,
    "energy",
    [(Mass, 1.0), (Length, 2.0), (Time, -2.0)]
);

safe_constructor!(
    /// A quantity with the dimensions of a pascal, `kg·m^-1·s^-2`.
    Pressure,
    "pressure",
    [(Mass, 1.0), (Length, -1.0), (Time, -2.0)]
);
