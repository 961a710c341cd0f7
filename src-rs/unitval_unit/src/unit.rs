use std::fmt;

use crate::{Dimension, DimensionMap, UnitError, UnitOperation, util::is_close};

/// A unit of measure.
///
/// A unit is a product of base dimensions raised to exponents, together
/// with a multiplicative `factor` and an additive `offset` relative to the
/// SI base units. A value `v` in this unit corresponds to the SI value
/// `(v - offset) / factor`.
///
/// Units are compared for equality on their factor, offset and dimension
/// map. The label is only used for display.
///
/// A unit with a nonzero offset is *affine* (Celsius, Fahrenheit). Affine
/// units cannot be multiplied, divided, exponentiated or inverted.
#[derive(Debug, Clone)]
pub struct Unit {
    dimension_map: DimensionMap,
    factor: f64,
    offset: f64,
    label: Option<String>,
}

impl Unit {
    /// Creates an unlabelled unit.
    ///
    /// `factor` is expected to be positive. It is not checked, and a zero or
    /// negative factor makes conversions out of the unit meaningless.
    #[must_use]
    pub const fn new(dimension_map: DimensionMap, factor: f64, offset: f64) -> Self {
        Self {
            dimension_map,
            factor,
            offset,
            label: None,
        }
    }

    /// Creates the unit of plain numbers.
    #[must_use]
    pub const fn unitless() -> Self {
        Self::new(DimensionMap::unitless(), 1.0, 0.0)
    }

    /// Sets the display label of the unit.
    #[must_use]
    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..self
        }
    }

    /// Sets the factor of the unit.
    #[must_use]
    pub fn with_factor(self, factor: f64) -> Self {
        Self { factor, ..self }
    }

    /// Sets the offset of the unit.
    #[must_use]
    pub fn with_offset(self, offset: f64) -> Self {
        Self { offset, ..self }
    }

    /// Relabels the unit with its canonical label.
    #[must_use]
    pub fn with_canonical_label(self) -> Self {
        let label = self.canonical_label();
        self.with_label(label)
    }

    /// Returns the dimensions of the unit.
    #[must_use]
    pub const fn dimension_map(&self) -> &DimensionMap {
        &self.dimension_map
    }

    /// Returns the factor of the unit (e.g. `1000` for `g`).
    #[must_use]
    pub const fn factor(&self) -> f64 {
        self.factor
    }

    /// Returns the offset of the unit (e.g. `-273.15` for `C`).
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns the label of the unit, if it has one.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the label of the unit, falling back to its canonical label.
    #[must_use]
    pub fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.canonical_label())
    }

    /// Returns the canonical label of the unit's dimensions.
    ///
    /// See [`DimensionMap::canonical_label`].
    #[must_use]
    pub fn canonical_label(&self) -> String {
        self.dimension_map.canonical_label()
    }

    /// Determines if the unit has no dimensions.
    ///
    /// The factor and offset are not considered.
    #[must_use]
    pub fn is_unitless(&self) -> bool {
        self.dimension_map.is_unitless()
    }

    /// Determines if the unit has a nonzero offset.
    #[must_use]
    pub fn is_affine(&self) -> bool {
        self.offset != 0.0
    }

    /// Determines if the unit has the given dimensions.
    #[must_use]
    pub fn dimensions_match(&self, dimension_map: &DimensionMap) -> bool {
        self.dimension_map == *dimension_map
    }

    /// Determines if the unit has the same dimensions as the given unit.
    ///
    /// For example, according to dimensional equality, `F == K` because
    /// they have the same dimensions, while `J != W` because they have
    /// different dimensions.
    #[must_use]
    pub fn dimensionally_eq(&self, other: &Self) -> bool {
        self.dimension_map == other.dimension_map
    }

    /// Determines if two units are equal up to floating point error.
    ///
    /// Every exponent, the factor and the offset are compared with
    /// [`is_close`].
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        is_close(self.factor, other.factor)
            && is_close(self.offset, other.offset)
            && self
                .dimension_map
                .iter()
                .zip(other.dimension_map.iter())
                .all(|((_, lhs), (_, rhs))| is_close(lhs, rhs))
    }

    /// Multiplies two units.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::AffineUnitMisuse` if either unit has an offset.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, UnitError> {
        self.ensure_linear(UnitOperation::Multiply)?;
        rhs.ensure_linear(UnitOperation::Multiply)?;

        Ok(Self {
            dimension_map: self.dimension_map * rhs.dimension_map,
            factor: self.factor * rhs.factor,
            offset: 0.0,
            label: Some(format!("{}·{}", self.display_label(), rhs.display_label())),
        })
    }

    /// Divides two units.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::AffineUnitMisuse` if either unit has an offset.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, UnitError> {
        self.ensure_linear(UnitOperation::Divide)?;
        rhs.ensure_linear(UnitOperation::Divide)?;

        Ok(Self {
            dimension_map: self.dimension_map / rhs.dimension_map,
            factor: self.factor / rhs.factor,
            offset: 0.0,
            label: Some(format!(
                "{}/{}",
                self.display_label(),
                group(&rhs.display_label())
            )),
        })
    }

    /// Raises the unit to the power of the given exponent.
    ///
    /// Non-integer exponents are allowed, so `checked_pow(0.5)` takes the
    /// square root of a unit.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::AffineUnitMisuse` if the unit has an offset.
    pub fn checked_pow(&self, exponent: f64) -> Result<Self, UnitError> {
        self.ensure_linear(UnitOperation::Power)?;

        Ok(Self {
            dimension_map: self.dimension_map.pow(exponent),
            factor: self.factor.powf(exponent),
            offset: 0.0,
            label: Some(format!("{}^{exponent}", group(&self.display_label()))),
        })
    }

    /// Computes `numerator / self` as a unit, as in `1 / s` for hertz.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::InvalidReciprocal` if the numerator is not `1`,
    /// and `UnitError::AffineUnitMisuse` if the unit has an offset.
    pub fn checked_inverse(&self, numerator: i64) -> Result<Self, UnitError> {
        if numerator != 1 {
            return Err(UnitError::InvalidReciprocal { numerator });
        }

        self.checked_reciprocal()
    }

    /// Computes `1 / self`.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::AffineUnitMisuse` if the unit has an offset.
    pub fn checked_reciprocal(&self) -> Result<Self, UnitError> {
        self.ensure_linear(UnitOperation::Reciprocal)?;

        Ok(Self {
            dimension_map: self.dimension_map.inverse(),
            factor: 1.0 / self.factor,
            offset: 0.0,
            label: Some(format!("1/{}", group(&self.display_label()))),
        })
    }

    /// Gives an unscaled unit a new name.
    ///
    /// To name a scaled unit, such as "1.05 m is a yard", derive it from a
    /// quantity instead.
    ///
    /// # Errors
    ///
    /// Returns `UnitError::ScaledUnitDerivation` if the unit has a factor
    /// other than `1` or a nonzero offset.
    #[expect(
        clippy::float_cmp,
        reason = "only units with a factor of exactly 1 are unscaled"
    )]
    pub fn to_unit(&self, label: impl Into<String>) -> Result<Self, UnitError> {
        if self.factor != 1.0 || self.is_affine() {
            return Err(UnitError::ScaledUnitDerivation { unit: self.clone() });
        }

        Ok(Self::new(self.dimension_map, 1.0, 0.0).with_label(label))
    }

    fn ensure_linear(&self, operation: UnitOperation) -> Result<(), UnitError> {
        if self.is_affine() {
            return Err(UnitError::AffineUnitMisuse {
                operation,
                unit: self.clone(),
            });
        }

        Ok(())
    }
}

/// Wraps a compound label in parentheses.
fn group(label: &str) -> String {
    if label.contains(['·', '/', '^']) {
        format!("({label})")
    } else {
        label.to_string()
    }
}

impl PartialEq for Unit {
    /// Checks if two units are equal
    ///
    /// Labels don't matter for equality.
    #[expect(
        clippy::float_cmp,
        reason = "unit equality is exact; use `approx_eq` for a tolerant comparison"
    )]
    fn eq(&self, other: &Self) -> bool {
        self.factor == other.factor
            && self.offset == other.offset
            && self.dimension_map == other.dimension_map
    }
}

impl Default for Unit {
    fn default() -> Self {
        Self::unitless()
    }
}

impl From<Dimension> for Unit {
    fn from(dimension: Dimension) -> Self {
        Self::new(DimensionMap::base(dimension), 1.0, 0.0).with_label(dimension.symbol())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bases = self.canonical_label();

        match &self.label {
            Some(label) => write!(f, "{label} ({bases}")?,
            None => write!(f, "({bases}")?,
        }

        #[expect(clippy::float_cmp, reason = "an unscaled unit has a factor of exactly 1")]
        let is_scaled = self.factor != 1.0;
        if is_scaled {
            write!(f, " x {}", self.factor)?;
        }

        if self.is_affine() {
            write!(f, " {:+}", self.offset)?;
        }

        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    fn meter() -> Unit {
        Unit::from(Dimension::Length)
    }

    fn second() -> Unit {
        Unit::from(Dimension::Time)
    }

    fn kilogram() -> Unit {
        Unit::from(Dimension::Mass)
    }

    fn celsius() -> Unit {
        Unit::from(Dimension::Temperature)
            .with_offset(-273.15)
            .with_label("C")
    }

    fn random_unit(rng: &mut StdRng) -> Unit {
        let exponents: Vec<(Dimension, f64)> = Dimension::ALL
            .iter()
            .map(|dimension| (*dimension, f64::from(rng.random_range(-3_i32..=3))))
            .collect();
        let factor = rng.random_range(0.001..1000.0);

        Unit::new(DimensionMap::from_exponents(&exponents), factor, 0.0)
    }

    mod success_tests {
        use super::*;

        #[test]
        fn labels_do_not_affect_equality() {
            let plain = Unit::new(DimensionMap::base(Dimension::Length), 1.0, 0.0);

            assert_eq!(plain, meter());
            assert_eq!(plain.clone().with_label("yard-ish"), meter());
            assert_ne!(plain.with_factor(1.05), meter());
        }

        #[test]
        fn multiply_sums_exponents_and_multiplies_factors() {
            let kilometer = meter().with_factor(0.001);
            let gram = kilogram().with_factor(1000.0);

            let product = kilometer.checked_mul(&gram).expect("linear units multiply");

            assert_eq!(product.dimension_map().get(Dimension::Length), 1.0);
            assert_eq!(product.dimension_map().get(Dimension::Mass), 1.0);
            assert!(is_close(product.factor(), 1.0));
            assert_eq!(product.offset(), 0.0);
            assert_eq!(product.label(), Some("m·kg"));
        }

        #[test]
        fn divide_subtracts_exponents_and_divides_factors() {
            let minute = second().with_factor(1.0 / 60.0);
            let velocity = meter().checked_div(&minute).expect("linear units divide");

            assert_eq!(velocity.dimension_map().get(Dimension::Length), 1.0);
            assert_eq!(velocity.dimension_map().get(Dimension::Time), -1.0);
            assert!(is_close(velocity.factor(), 60.0));
            assert_eq!(velocity.label(), Some("m/s"));
        }

        #[test]
        fn pow_supports_fractional_exponents() {
            let area = meter().with_factor(100.0).checked_pow(2.0).expect("pow");
            let side = area.checked_pow(0.5).expect("pow");

            assert_eq!(area.dimension_map().get(Dimension::Length), 2.0);
            assert!(is_close(area.factor(), 10_000.0));
            assert!(side.approx_eq(&meter().with_factor(100.0)));
        }

        #[test]
        fn reciprocal_of_second_is_hertz_like() {
            let hertz = second().checked_inverse(1).expect("numerator is 1");

            assert_eq!(hertz.dimension_map().get(Dimension::Time), -1.0);
            assert_eq!(hertz.factor(), 1.0);
            assert_eq!(hertz.label(), Some("1/s"));
            assert_eq!(hertz, second().checked_reciprocal().expect("linear"));
        }

        #[test]
        fn to_unit_relabels_unscaled_units() {
            let acceleration = second()
                .checked_pow(2.0)
                .and_then(|second_squared| meter().checked_div(&second_squared))
                .expect("linear units");
            let newton = kilogram().checked_mul(&acceleration).expect("linear units");

            let named = newton.to_unit("N").expect("newton is unscaled");

            assert_eq!(named, newton);
            assert_eq!(named.label(), Some("N"));
        }

        #[test]
        fn affine_units_can_still_be_compared() {
            assert!(celsius().is_affine());
            assert!(!meter().is_affine());
            assert!(celsius().dimensionally_eq(&Unit::from(Dimension::Temperature)));
            assert_ne!(celsius(), Unit::from(Dimension::Temperature));
        }

        #[test]
        fn display_includes_factor_and_offset() {
            let fahrenheit = Unit::from(Dimension::Temperature)
                .with_factor(1.8)
                .with_offset(-459.67)
                .with_label("F");

            assert_eq!(meter().to_string(), "m (m)");
            assert_eq!(fahrenheit.to_string(), "F (K x 1.8 -459.67)");
            assert_eq!(Unit::unitless().to_string(), "(1)");
        }

        #[test]
        fn with_canonical_label_replaces_composed_label() {
            let joule = kilogram()
                .checked_mul(&meter().checked_pow(2.0).expect("pow"))
                .and_then(|unit| unit.checked_div(&second().checked_pow(2.0)?))
                .expect("linear units");

            assert_eq!(joule.label(), Some("kg·m^2/(s^2)"));
            assert_eq!(
                joule.with_canonical_label().label(),
                Some("m^2·kg·s^-2")
            );
        }

        #[test]
        fn multiplication_is_commutative_and_associative() {
            let mut rng = StdRng::seed_from_u64(0x5eed);

            for _ in 0..200 {
                let a = random_unit(&mut rng);
                let b = random_unit(&mut rng);
                let c = random_unit(&mut rng);

                let ab = a.checked_mul(&b).expect("linear");
                let ba = b.checked_mul(&a).expect("linear");
                assert!(ab.approx_eq(&ba), "{ab} != {ba}");

                let ab_c = ab.checked_mul(&c).expect("linear");
                let a_bc = a
                    .checked_mul(&b.checked_mul(&c).expect("linear"))
                    .expect("linear");
                assert!(ab_c.approx_eq(&a_bc), "{ab_c} != {a_bc}");
            }
        }

        #[test]
        fn division_undoes_multiplication() {
            let mut rng = StdRng::seed_from_u64(42);

            for _ in 0..200 {
                let unit = random_unit(&mut rng);
                let other = random_unit(&mut rng);

                let round_trip = unit
                    .checked_mul(&other)
                    .and_then(|product| product.checked_div(&other))
                    .expect("linear");

                assert_eq!(round_trip.dimension_map(), unit.dimension_map());
                assert!(round_trip.approx_eq(&unit), "{round_trip} != {unit}");
            }
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn multiply_rejects_affine_left_operand() {
            let error = celsius().checked_mul(&meter()).expect_err("celsius is affine");

            assert_eq!(
                error,
                UnitError::AffineUnitMisuse {
                    operation: UnitOperation::Multiply,
                    unit: celsius(),
                }
            );
        }

        #[test]
        fn multiply_rejects_affine_right_operand() {
            let error = meter().checked_mul(&celsius()).expect_err("celsius is affine");

            assert!(matches!(
                error,
                UnitError::AffineUnitMisuse {
                    operation: UnitOperation::Multiply,
                    ..
                }
            ));
        }

        #[test]
        fn divide_pow_and_reciprocal_reject_affine_units() {
            assert!(matches!(
                celsius().checked_div(&second()),
                Err(UnitError::AffineUnitMisuse {
                    operation: UnitOperation::Divide,
                    ..
                })
            ));
            assert!(matches!(
                celsius().checked_pow(2.0),
                Err(UnitError::AffineUnitMisuse {
                    operation: UnitOperation::Power,
                    ..
                })
            ));
            assert!(matches!(
                celsius().checked_reciprocal(),
                Err(UnitError::AffineUnitMisuse {
                    operation: UnitOperation::Reciprocal,
                    ..
                })
            ));
        }

        #[test]
        fn inverse_requires_numerator_of_one() {
            let error = second().checked_inverse(2).expect_err("numerator is 2");

            assert_eq!(error, UnitError::InvalidReciprocal { numerator: 2 });
        }

        #[test]
        fn to_unit_rejects_scaled_units() {
            let kilometer = meter().with_factor(0.001);

            assert!(matches!(
                kilometer.to_unit("km"),
                Err(UnitError::ScaledUnitDerivation { .. })
            ));
            assert!(matches!(
                celsius().to_unit("C2"),
                Err(UnitError::ScaledUnitDerivation { .. })
            ));
        }

        #[test]
        fn affine_error_message_names_the_unit() {
            use unitval_error::AsUnitvalError;

            let error = celsius().checked_pow(2.0).expect_err("celsius is affine");

            assert_eq!(
                error.message(),
                "cannot exponentiate an affine unit: C (K -273.15)"
            );
            assert_eq!(error.context().len(), 2);
        }
    }
}
