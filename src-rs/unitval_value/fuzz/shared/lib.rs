use libfuzzer_sys::arbitrary::{self, Result, Unstructured};
use unitval_unit::{Dimension, DimensionMap, Unit};

/// Exponents are kept small so that powers of factors stay finite.
const MAX_EXPONENT: i8 = 4;

fn arbitrary_dimension_map(u: &mut Unstructured<'_>) -> Result<DimensionMap> {
    let exponents: Vec<(Dimension, i8)> = u.arbitrary()?;
    let exponents: Vec<(Dimension, f64)> = exponents
        .into_iter()
        .map(|(dimension, exponent)| (dimension, f64::from(exponent % (MAX_EXPONENT + 1))))
        .collect();

    Ok(DimensionMap::from_exponents(&exponents))
}

/// A factor in `[1e-3, 1e3]`.
fn arbitrary_factor(u: &mut Unstructured<'_>) -> Result<f64> {
    let milli = u.int_in_range(1_u32..=1_000_000)?;
    Ok(f64::from(milli) / 1000.0)
}

/// A unit without an offset.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearUnit(pub Unit);

impl<'a> arbitrary::Arbitrary<'a> for LinearUnit {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let dimension_map = arbitrary_dimension_map(u)?;
        let factor = arbitrary_factor(u)?;

        Ok(LinearUnit(Unit::new(dimension_map, factor, 0.0)))
    }
}

/// Two units that share a dimension map but may differ in factor and
/// offset, together with a value in the first unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertibleUnits {
    pub from: Unit,
    pub to: Unit,
    pub value: f64,
}

fn arbitrary_offset(u: &mut Unstructured<'_>) -> Result<f64> {
    let centi = u.int_in_range(-100_000_i32..=100_000)?;
    Ok(f64::from(centi) / 100.0)
}

impl<'a> arbitrary::Arbitrary<'a> for ConvertibleUnits {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let dimension_map = arbitrary_dimension_map(u)?;

        let from = Unit::new(dimension_map, arbitrary_factor(u)?, arbitrary_offset(u)?);
        let to = Unit::new(dimension_map, arbitrary_factor(u)?, arbitrary_offset(u)?);

        let value = u.arbitrary::<f64>()?;
        if !value.is_finite() || value.abs() > 1e12 {
            return Err(arbitrary::Error::IncorrectFormat);
        }

        Ok(ConvertibleUnits { from, to, value })
    }
}
