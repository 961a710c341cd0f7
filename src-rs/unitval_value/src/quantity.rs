use std::{cmp::Ordering, fmt, ops};

use unitval_unit::{Unit, UnitError};

use crate::{QuantityError, SumOperation};

/// The unit given to the result of an addition or subtraction.
///
/// Both operands of a sum always have equal units, so the two policies only
/// differ in what they do with that unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SumUnitPolicy {
    /// The result keeps the unit of the operands: `5 J + 3 J = 8 J`.
    #[default]
    Operand,
    /// The result is in the product of the operand units, so
    /// `5 J + 3 J = 8 J·J`. Sums of affine units fail under this policy
    /// because affine units cannot be multiplied.
    Product,
}

impl SumUnitPolicy {
    fn result_unit(self, lhs: &Unit, rhs: &Unit) -> Result<Unit, UnitError> {
        match self {
            Self::Operand => Ok(lhs.clone()),
            Self::Product => lhs.checked_mul(rhs),
        }
    }
}

/// A value accompanied by a unit.
///
/// Quantities are immutable; every operation returns a new quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    /// Creates a new quantity.
    #[must_use]
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Creates a quantity without dimensions.
    #[must_use]
    pub const fn unitless(value: f64) -> Self {
        Self::new(value, Unit::unitless())
    }

    /// Returns the value, measured in the quantity's unit.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit of the quantity.
    #[must_use]
    pub const fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Splits the quantity into its value and unit.
    #[must_use]
    pub fn into_parts(self) -> (f64, Unit) {
        (self.value, self.unit)
    }

    /// Adds two quantities, keeping the unit of the operands.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::UnitMismatch` if the units are not equal.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, QuantityError> {
        self.checked_add_with(rhs, SumUnitPolicy::default())
    }

    /// Adds two quantities, choosing the result unit with `policy`.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::UnitMismatch` if the units are not equal, and
    /// `QuantityError::Unit` if the policy cannot build the result unit.
    pub fn checked_add_with(
        &self,
        rhs: &Self,
        policy: SumUnitPolicy,
    ) -> Result<Self, QuantityError> {
        let unit = self.sum_unit(rhs, SumOperation::Add, policy)?;

        Ok(Self {
            value: self.value + rhs.value,
            unit,
        })
    }

    /// Subtracts two quantities, keeping the unit of the operands.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::UnitMismatch` if the units are not equal.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, QuantityError> {
        self.checked_sub_with(rhs, SumUnitPolicy::default())
    }

    /// Subtracts two quantities, choosing the result unit with `policy`.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::UnitMismatch` if the units are not equal, and
    /// `QuantityError::Unit` if the policy cannot build the result unit.
    pub fn checked_sub_with(
        &self,
        rhs: &Self,
        policy: SumUnitPolicy,
    ) -> Result<Self, QuantityError> {
        let unit = self.sum_unit(rhs, SumOperation::Subtract, policy)?;

        Ok(Self {
            value: self.value - rhs.value,
            unit,
        })
    }

    fn sum_unit(
        &self,
        rhs: &Self,
        operation: SumOperation,
        policy: SumUnitPolicy,
    ) -> Result<Unit, QuantityError> {
        if self.unit != rhs.unit {
            return Err(QuantityError::UnitMismatch {
                operation,
                lhs: self.unit.clone(),
                rhs: rhs.unit.clone(),
            });
        }

        Ok(policy.result_unit(&self.unit, &rhs.unit)?)
    }

    /// Multiplies two quantities.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::Unit` if either unit is affine.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, QuantityError> {
        Ok(Self {
            value: self.value * rhs.value,
            unit: self.unit.checked_mul(&rhs.unit)?,
        })
    }

    /// Multiplies the quantity by a bare unit, as if by one of that unit.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::Unit` if either unit is affine.
    pub fn checked_mul_unit(&self, unit: &Unit) -> Result<Self, QuantityError> {
        Ok(Self {
            value: self.value,
            unit: self.unit.checked_mul(unit)?,
        })
    }

    /// Divides two quantities.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::Unit` if either unit is affine.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, QuantityError> {
        Ok(Self {
            value: self.value / rhs.value,
            unit: self.unit.checked_div(&rhs.unit)?,
        })
    }

    /// Divides the quantity by a bare unit, as if by one of that unit.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::Unit` if either unit is affine.
    pub fn checked_div_unit(&self, unit: &Unit) -> Result<Self, QuantityError> {
        Ok(Self {
            value: self.value,
            unit: self.unit.checked_div(unit)?,
        })
    }

    /// Raises the quantity to the power of the given exponent.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::Unit` if the unit is affine.
    pub fn checked_pow(&self, exponent: f64) -> Result<Self, QuantityError> {
        Ok(Self {
            value: self.value.powf(exponent),
            unit: self.unit.checked_pow(exponent)?,
        })
    }

    /// Compares two quantities for ordering.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::UnitMismatch` if the units are not equal.
    pub fn checked_partial_cmp(&self, rhs: &Self) -> Result<Option<Ordering>, QuantityError> {
        if self.unit != rhs.unit {
            return Err(QuantityError::UnitMismatch {
                operation: SumOperation::Compare,
                lhs: self.unit.clone(),
                rhs: rhs.unit.clone(),
            });
        }

        Ok(self.value.partial_cmp(&rhs.value))
    }

    /// Returns the value expressed in the SI base units.
    ///
    /// This is `(value - offset) / factor`.
    #[must_use]
    pub fn si_value(&self) -> f64 {
        (self.value - self.unit.offset()) / self.unit.factor()
    }

    /// Converts the quantity to another unit with the same dimensions.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::IncompatibleDimension` if the dimensions of
    /// `target` differ from the dimensions of the quantity's unit.
    pub fn convert_to(&self, target: &Unit) -> Result<Self, QuantityError> {
        if !self.unit.dimensionally_eq(target) {
            return Err(QuantityError::IncompatibleDimension {
                from: self.unit.clone(),
                to: target.clone(),
            });
        }

        let si_value = self.si_value();
        let value = si_value.mul_add(target.factor(), target.offset());

        tracing::trace!(
            from = %self.unit,
            to = %target,
            value = self.value,
            converted = value,
            "converted quantity"
        );

        Ok(Self {
            value,
            unit: target.clone(),
        })
    }

    /// Converts the quantity to `target`, or to SI units if no target is
    /// given.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::IncompatibleDimension` if the dimensions of
    /// `target` differ from the dimensions of the quantity's unit.
    pub fn convert(&self, target: Option<&Unit>) -> Result<Self, QuantityError> {
        match target {
            Some(target) => self.convert_to(target),
            None => Ok(self.to_si()),
        }
    }

    /// Converts the quantity to the SI unit with the same dimensions.
    #[must_use]
    pub fn to_si(&self) -> Self {
        let unit = Unit::new(*self.unit.dimension_map(), 1.0, 0.0).with_canonical_label();

        Self {
            value: self.si_value(),
            unit,
        }
    }

    /// Casts the quantity to a plain number.
    ///
    /// The value is returned as is; no conversion is applied.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::NonUnitlessCast` if the unit has dimensions.
    pub fn as_unitless(&self) -> Result<f64, QuantityError> {
        if !self.unit.is_unitless() {
            return Err(QuantityError::NonUnitlessCast {
                unit: self.unit.clone(),
            });
        }

        Ok(self.value)
    }

    /// Casts the quantity to an integer.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::NonUnitlessCast` if the unit has dimensions,
    /// and `QuantityError::NonIntegralCast` if the value is not a whole
    /// number that fits in an `i64`.
    pub fn as_integer(&self) -> Result<i64, QuantityError> {
        // 2^63, exactly representable
        const LIMIT: f64 = 9_223_372_036_854_775_808.0;

        let value = self.as_unitless()?;

        if value.fract() != 0.0 || !(-LIMIT..LIMIT).contains(&value) {
            return Err(QuantityError::NonIntegralCast { value });
        }

        #[expect(
            clippy::cast_possible_truncation,
            reason = "the value is a whole number within the range of i64"
        )]
        let integer = value as i64;

        Ok(integer)
    }

    /// Creates a unit out of the quantity.
    ///
    /// The quantity states how many of the new unit make up one of its own
    /// unit, so the factor of the new unit is `value * unit.factor`.
    /// `Quantity::new(1.05, meter).to_unit("yard")` defines a unit of which
    /// there are 1.05 in a meter. The new unit has no offset.
    ///
    /// The factor is not checked. A zero or negative value yields a
    /// degenerate unit: converting out of a zero-factor unit gives an
    /// infinite value, and its reciprocal has an infinite factor.
    #[must_use]
    pub fn to_unit(&self, label: impl Into<String>) -> Unit {
        Unit::new(
            *self.unit.dimension_map(),
            self.unit.factor() * self.value,
            0.0,
        )
        .with_label(label)
    }

    /// Relabels the unit with its canonical label.
    #[must_use]
    pub fn with_canonical_label(self) -> Self {
        Self {
            value: self.value,
            unit: self.unit.with_canonical_label(),
        }
    }
}

impl From<Unit> for Quantity {
    fn from(unit: Unit) -> Self {
        Self::new(1.0, unit)
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Self::unitless(value)
    }
}

impl TryFrom<&Quantity> for f64 {
    type Error = QuantityError;

    fn try_from(quantity: &Quantity) -> Result<Self, Self::Error> {
        quantity.as_unitless()
    }
}

impl TryFrom<&Quantity> for i64 {
    type Error = QuantityError;

    fn try_from(quantity: &Quantity) -> Result<Self, Self::Error> {
        quantity.as_integer()
    }
}

impl ops::Neg for Quantity {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            value: -self.value,
            unit: self.unit,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
