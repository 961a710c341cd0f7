#![no_main]

use libfuzzer_sys::{arbitrary, fuzz_target};
use shared::LinearUnit;
use unitval_value::Quantity;

#[derive(Debug, Clone, PartialEq, arbitrary::Arbitrary)]
enum FuzzData {
    Commutative { lhs: LinearUnit, rhs: LinearUnit },
    Associative { a: LinearUnit, b: LinearUnit, c: LinearUnit },
    DivisionUndoesMultiplication { unit: LinearUnit, other: LinearUnit },
    ReciprocalIsDivisionOfOne { unit: LinearUnit },
    DerivedUnitKeepsDimensions { unit: LinearUnit, value: u16 },
}

fuzz_target!(|data: FuzzData| {
    match data {
        FuzzData::Commutative {
            lhs: LinearUnit(lhs),
            rhs: LinearUnit(rhs),
        } => {
            let lhs_rhs = lhs.checked_mul(&rhs).expect("linear units multiply");
            let rhs_lhs = rhs.checked_mul(&lhs).expect("linear units multiply");

            assert!(lhs_rhs.approx_eq(&rhs_lhs), "{lhs_rhs} != {rhs_lhs}");
        }
        FuzzData::Associative {
            a: LinearUnit(a),
            b: LinearUnit(b),
            c: LinearUnit(c),
        } => {
            let ab_c = a
                .checked_mul(&b)
                .and_then(|ab| ab.checked_mul(&c))
                .expect("linear units multiply");
            let a_bc = b
                .checked_mul(&c)
                .and_then(|bc| a.checked_mul(&bc))
                .expect("linear units multiply");

            assert!(ab_c.approx_eq(&a_bc), "{ab_c} != {a_bc}");
        }
        FuzzData::DivisionUndoesMultiplication {
            unit: LinearUnit(unit),
            other: LinearUnit(other),
        } => {
            let round_trip = unit
                .checked_mul(&other)
                .and_then(|product| product.checked_div(&other))
                .expect("linear units multiply and divide");

            assert_eq!(round_trip.dimension_map(), unit.dimension_map());
            assert!(round_trip.approx_eq(&unit), "{round_trip} != {unit}");
        }
        FuzzData::ReciprocalIsDivisionOfOne {
            unit: LinearUnit(unit),
        } => {
            let reciprocal = unit.checked_inverse(1).expect("linear units invert");
            let divided = unitval_unit::Unit::unitless()
                .checked_div(&unit)
                .expect("linear units divide");

            assert!(reciprocal.approx_eq(&divided), "{reciprocal} != {divided}");
            assert!(unit.checked_inverse(2).is_err());
        }
        FuzzData::DerivedUnitKeepsDimensions {
            unit: LinearUnit(unit),
            value,
        } => {
            let derived = Quantity::new(f64::from(value), unit.clone()).to_unit("derived");

            assert_eq!(derived.dimension_map(), unit.dimension_map());
            assert_eq!(derived.offset(), 0.0);
            assert_eq!(derived.label(), Some("derived"));
        }
    }
});
