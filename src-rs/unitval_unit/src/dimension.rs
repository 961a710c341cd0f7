use std::{array, fmt, ops};

use crate::Unit;

/// The SI base dimensions.
///
/// The set is closed; every [`DimensionMap`] holds an exponent for each of
/// these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Dimension {
    /// Base unit is 'kilogram'
    Mass,
    /// Base unit is 'second'
    Time,
    /// Base unit is 'kelvin'
    Temperature,
    /// Base unit is 'ampere'
    Current,
    /// Base unit is 'mole'
    Amount,
    /// Base unit is 'meter'
    Length,
    /// Base unit is 'candela'
    LuminousIntensity,
}

impl Dimension {
    /// The number of base dimensions.
    pub const COUNT: usize = 7;

    /// Every base dimension, in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Mass,
        Self::Time,
        Self::Temperature,
        Self::Current,
        Self::Amount,
        Self::Length,
        Self::LuminousIntensity,
    ];

    /// Returns the symbol of the SI base unit for this dimension.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mass => "kg",
            Self::Time => "s",
            Self::Temperature => "K",
            Self::Current => "A",
            Self::Amount => "mol",
            Self::Length => "m",
            Self::LuminousIntensity => "cd",
        }
    }

    /// Returns the SI base unit of the dimension, labelled by its symbol.
    #[must_use]
    pub fn unit(self) -> Unit {
        Unit::from(self)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A map of dimensions and their exponents.
///
/// The map is dense: every [`Dimension`] has an exponent, and dimensions
/// that a unit does not involve have the exponent `0`. For example, "m/s" is
/// represented with `1` for [`Dimension::Length`], `-1` for
/// [`Dimension::Time`] and `0` everywhere else.
///
/// Two maps are equal only if every exponent is exactly equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionMap([f64; Dimension::COUNT]);

impl DimensionMap {
    /// Creates a dimension map with every exponent set to zero.
    #[must_use]
    pub const fn unitless() -> Self {
        Self([0.0; Dimension::COUNT])
    }

    /// Creates a dimension map from `(dimension, exponent)` pairs.
    ///
    /// Dimensions that are not listed get the exponent `0`. If a dimension
    /// is listed more than once, the exponents are summed.
    ///
    /// ```
    /// use unitval_unit::{Dimension, DimensionMap};
    ///
    /// let velocity = DimensionMap::from_exponents(&[
    ///     (Dimension::Length, 1.0),
    ///     (Dimension::Time, -1.0),
    /// ]);
    ///
    /// assert_eq!(velocity.get(Dimension::Time), -1.0);
    /// assert_eq!(velocity.get(Dimension::Mass), 0.0);
    /// ```
    #[must_use]
    pub const fn from_exponents(exponents: &[(Dimension, f64)]) -> Self {
        let mut map = [0.0; Dimension::COUNT];
        let mut i = 0;
        while i < exponents.len() {
            let (dimension, exponent) = exponents[i];
            map[dimension.index()] += exponent;
            i += 1;
        }
        Self(map)
    }

    /// Creates a dimension map for a single base dimension with exponent 1.
    #[must_use]
    pub const fn base(dimension: Dimension) -> Self {
        Self::from_exponents(&[(dimension, 1.0)])
    }

    /// Returns the exponent of the given dimension.
    #[must_use]
    pub const fn get(&self, dimension: Dimension) -> f64 {
        self.0[dimension.index()]
    }

    /// Checks if every exponent is zero.
    #[must_use]
    pub fn is_unitless(&self) -> bool {
        self.0.iter().all(|exponent| *exponent == 0.0)
    }

    /// Raises the dimensions to the power of the given exponent.
    #[must_use]
    pub fn pow(self, exponent: f64) -> Self {
        Self(self.0.map(|value| value * exponent))
    }

    /// Negates every exponent.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self(self.0.map(|value| -value))
    }

    /// Iterates over every dimension and its exponent, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL
            .iter()
            .map(|dimension| (*dimension, self.get(*dimension)))
    }

    /// Returns the canonical label of the dimensions.
    ///
    /// Dimensions are ordered by descending exponent, with ties broken by
    /// reverse symbol order. Zero exponents are omitted and exponents other
    /// than `1` are written as `^exponent`. The dimensions are joined with
    /// `·`. A unitless map is labelled `1`.
    ///
    /// ```
    /// use unitval_unit::{Dimension, DimensionMap};
    ///
    /// let energy = DimensionMap::from_exponents(&[
    ///     (Dimension::Mass, 1.0),
    ///     (Dimension::Length, 2.0),
    ///     (Dimension::Time, -2.0),
    /// ]);
    ///
    /// assert_eq!(energy.canonical_label(), "m^2·kg·s^-2");
    /// ```
    #[must_use]
    #[expect(
        clippy::float_cmp,
        reason = "an exponent of exactly 1 is written without a power"
    )]
    pub fn canonical_label(&self) -> String {
        let mut terms: Vec<(f64, &'static str)> = self
            .iter()
            .filter(|(_, exponent)| *exponent != 0.0)
            .map(|(dimension, exponent)| (exponent, dimension.symbol()))
            .collect();

        if terms.is_empty() {
            return "1".to_string();
        }

        terms.sort_by(|(lhs_exp, lhs_sym), (rhs_exp, rhs_sym)| {
            rhs_exp.total_cmp(lhs_exp).then_with(|| rhs_sym.cmp(lhs_sym))
        });

        terms
            .into_iter()
            .map(|(exponent, symbol)| {
                if exponent == 1.0 {
                    symbol.to_string()
                } else {
                    format!("{symbol}^{exponent}")
                }
            })
            .collect::<Vec<_>>()
            .join("·")
    }
}

impl Default for DimensionMap {
    fn default() -> Self {
        Self::unitless()
    }
}

impl From<Dimension> for DimensionMap {
    fn from(dimension: Dimension) -> Self {
        Self::base(dimension)
    }
}

impl ops::Mul for DimensionMap {
    type Output = Self;

    /// Multiplies two sets of dimensions together
    ///
    /// For example, `(m/s) * (kg) = (kg*m/s)`
    #[expect(
        clippy::suspicious_arithmetic_impl,
        reason = "multiplication is defined as addition of the exponent"
    )]
    fn mul(self, rhs: Self) -> Self::Output {
        Self(array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl ops::Div for DimensionMap {
    type Output = Self;

    /// Divides two sets of dimensions
    ///
    /// For example, `(kg*m/s) / (kg) = (m/s)`
    #[expect(
        clippy::suspicious_arithmetic_impl,
        reason = "division is defined as subtraction of the exponent"
    )]
    fn div(self, rhs: Self) -> Self::Output {
        Self(array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl fmt::Display for DimensionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn velocity() -> DimensionMap {
        DimensionMap::from_exponents(&[(Dimension::Length, 1.0), (Dimension::Time, -1.0)])
    }

    #[test]
    fn missing_dimensions_have_zero_exponent() {
        let map = velocity();

        assert_eq!(map.get(Dimension::Length), 1.0);
        assert_eq!(map.get(Dimension::Time), -1.0);
        assert_eq!(map.get(Dimension::Mass), 0.0);
        assert_eq!(map.get(Dimension::LuminousIntensity), 0.0);
        assert_eq!(map.iter().count(), Dimension::COUNT);
    }

    #[test]
    fn repeated_dimensions_are_summed() {
        let map =
            DimensionMap::from_exponents(&[(Dimension::Length, 1.0), (Dimension::Length, 2.0)]);

        assert_eq!(map.get(Dimension::Length), 3.0);
    }

    #[test]
    fn unitless_map_is_unitless() {
        assert!(DimensionMap::unitless().is_unitless());
        assert!(DimensionMap::default().is_unitless());
        assert!(!velocity().is_unitless());
    }

    #[test]
    fn multiply_sums_exponents() {
        let mass = DimensionMap::base(Dimension::Mass);
        let momentum = velocity() * mass;

        assert_eq!(momentum.get(Dimension::Mass), 1.0);
        assert_eq!(momentum.get(Dimension::Length), 1.0);
        assert_eq!(momentum.get(Dimension::Time), -1.0);
    }

    #[test]
    fn divide_subtracts_exponents() {
        let length = DimensionMap::base(Dimension::Length);
        let frequency = velocity() / length;

        assert_eq!(frequency.get(Dimension::Length), 0.0);
        assert_eq!(frequency.get(Dimension::Time), -1.0);
    }

    #[test]
    fn dividing_by_itself_is_unitless() {
        assert!((velocity() / velocity()).is_unitless());
    }

    #[test]
    fn pow_scales_exponents() {
        let area = DimensionMap::base(Dimension::Length).pow(2.0);
        let root = area.pow(0.5);

        assert_eq!(area.get(Dimension::Length), 2.0);
        assert_eq!(root, DimensionMap::base(Dimension::Length));
    }

    #[test]
    fn inverse_negates_exponents() {
        let inverse = velocity().inverse();

        assert_eq!(inverse.get(Dimension::Length), -1.0);
        assert_eq!(inverse.get(Dimension::Time), 1.0);
    }

    #[test]
    fn canonical_label_orders_by_descending_exponent() {
        assert_eq!(velocity().canonical_label(), "m·s^-1");
        assert_eq!(DimensionMap::unitless().canonical_label(), "1");
    }

    #[test]
    fn canonical_label_breaks_ties_by_reverse_symbol() {
        let map = DimensionMap::from_exponents(&[
            (Dimension::Mass, 1.0),
            (Dimension::Length, 1.0),
            (Dimension::Current, 1.0),
        ]);

        assert_eq!(map.canonical_label(), "m·kg·A");
    }

    #[test]
    fn canonical_label_writes_fractional_exponents() {
        let map = DimensionMap::from_exponents(&[(Dimension::Length, 0.5)]);

        assert_eq!(map.to_string(), "m^0.5");
    }
}
