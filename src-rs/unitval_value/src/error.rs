use std::fmt;

use unitval_error::{AsUnitvalError, Context};
use unitval_unit::{DimensionMap, Unit, UnitError};

/// The operations that require both operands to share a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SumOperation {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a < b` and the other orderings
    Compare,
}

impl fmt::Display for SumOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Subtract => write!(f, "subtract"),
            Self::Compare => write!(f, "compare"),
        }
    }
}

/// Errors produced by quantity arithmetic, conversions, casts and safe
/// constructors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuantityError {
    /// The unit algebra rejected the operation.
    #[error(transparent)]
    Unit(#[from] UnitError),
    /// Addition or subtraction between quantities whose units differ.
    #[error("cannot {operation} quantities with different units: {lhs} and {rhs}")]
    UnitMismatch {
        /// The operation that was attempted
        operation: SumOperation,
        /// The unit of the left-hand side
        lhs: Unit,
        /// The unit of the right-hand side
        rhs: Unit,
    },
    /// Conversion to a unit with different dimensions.
    #[error("cannot convert {from} to {to}")]
    IncompatibleDimension {
        /// The unit of the quantity
        from: Unit,
        /// The requested unit
        to: Unit,
    },
    /// Cast to a plain number from a quantity that has dimensions.
    #[error("cannot cast into unitless number: {unit}")]
    NonUnitlessCast {
        /// The unit of the quantity
        unit: Unit,
    },
    /// Cast to an integer from a value that is not a whole number.
    #[error("cannot cast to integer: {value}")]
    NonIntegralCast {
        /// The value of the quantity
        value: f64,
    },
    /// A safe constructor was given a quantity of the wrong dimension.
    #[error("invalid unit {unit}: expected dimensions {expected}")]
    DimensionValidation {
        /// The dimensions the constructor requires
        expected: DimensionMap,
        /// The unit of the rejected quantity
        unit: Unit,
    },
}

impl AsUnitvalError for QuantityError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::Unit(error) => error.context(),
            Self::UnitMismatch { lhs, rhs, .. } => {
                let mut context = vec![
                    Context::Note(format!("left-hand side is in `{}`", lhs.display_label())),
                    Context::Note(format!("right-hand side is in `{}`", rhs.display_label())),
                ];
                if lhs.dimensionally_eq(rhs) {
                    context.push(Context::Help(
                        "the dimensions match, convert one side with `convert_to` first"
                            .to_string(),
                    ));
                }
                context
            }
            Self::IncompatibleDimension { from, to } => vec![Context::Note(format!(
                "`{}` has dimensions {} but `{}` has dimensions {}",
                from.display_label(),
                from.dimension_map(),
                to.display_label(),
                to.dimension_map()
            ))],
            Self::NonUnitlessCast { unit } => vec![Context::Help(format!(
                "divide by a quantity in {} to get a ratio",
                unit.dimension_map()
            ))],
            Self::NonIntegralCast { .. } => vec![],
            Self::DimensionValidation { expected, unit } => vec![Context::Note(format!(
                "`{}` has dimensions {}, not {expected}",
                unit.display_label(),
                unit.dimension_map()
            ))],
        }
    }
}
