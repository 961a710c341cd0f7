use std::fmt;

use unitval_error::{AsUnitvalError, Context};

use crate::Unit;

/// The unit operations that are only defined for non-affine units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitOperation {
    /// `a * b`
    Multiply,
    /// `a / b`
    Divide,
    /// `a ^ p`
    Power,
    /// `1 / a`
    Reciprocal,
}

impl fmt::Display for UnitOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "exponentiate",
            Self::Reciprocal => "invert",
        };
        write!(f, "{verb}")
    }
}

/// Errors produced by the unit algebra.
///
/// Every variant is a caller error: the operation was asked to do something
/// that is not defined for its operands.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    /// A multiplicative operation was attempted on a unit with an offset.
    #[error("cannot {operation} an affine unit: {unit}")]
    AffineUnitMisuse {
        /// The operation that was attempted
        operation: UnitOperation,
        /// The operand that has a nonzero offset
        unit: Unit,
    },
    /// A reciprocal was requested with a numerator other than `1`.
    #[error("reciprocal of a unit requires a numerator of 1, found {numerator}")]
    InvalidReciprocal {
        /// The numerator that was given
        numerator: i64,
    },
    /// A new unit was derived from a unit that is already scaled or shifted.
    #[error("cannot derive a new unit from the scaled unit {unit}")]
    ScaledUnitDerivation {
        /// The scaled unit
        unit: Unit,
    },
}

impl AsUnitvalError for UnitError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::AffineUnitMisuse { unit, .. } => vec![
                Context::Note(format!(
                    "`{}` has an offset of {}, so it only supports addition, subtraction and conversion",
                    unit.display_label(),
                    unit.offset()
                )),
                Context::Help(
                    "convert the quantity to its SI unit before multiplying, dividing or exponentiating"
                        .to_string(),
                ),
            ],
            Self::InvalidReciprocal { .. } => vec![Context::Help(
                "divide a quantity by the unit instead to keep a numeric value".to_string(),
            )],
            Self::ScaledUnitDerivation { unit } => vec![
                Context::Note(format!(
                    "`{}` has factor {} and offset {}",
                    unit.display_label(),
                    unit.factor(),
                    unit.offset()
                )),
                Context::Help(
                    "derive the unit from a quantity instead, e.g. `Quantity::new(1e-5, pascal).to_unit(\"bar\")`"
                        .to_string(),
                ),
            ],
        }
    }
}
