//! Conversion between units looked up by name

use unitval_builtins::UnitRegistry;
use unitval_error::{AsUnitvalError, Context};
use unitval_unit::Unit;
use unitval_value::{Quantity, QuantityError};

/// Errors from the `convert` command.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// No unit is registered under the given name.
    #[error("unknown unit `{name}`")]
    UnknownUnit {
        /// The name that was looked up
        name: String,
    },
    /// The conversion itself failed.
    #[error(transparent)]
    Quantity(#[from] QuantityError),
}

impl AsUnitvalError for ConvertError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::UnknownUnit { .. } => vec![Context::Help(
                "run `unitval units` to list the builtin units".to_string(),
            )],
            Self::Quantity(error) => error.context(),
        }
    }
}

/// Converts `value` from the unit named `from` to the unit named `to`, or to
/// SI units if `to` is `None`.
pub fn convert(
    registry: &UnitRegistry,
    value: f64,
    from: &str,
    to: Option<&str>,
) -> Result<Quantity, ConvertError> {
    let from_unit = lookup(registry, from)?;
    let to_unit = to.map(|name| lookup(registry, name)).transpose()?;

    let quantity = Quantity::new(value, from_unit.clone());

    Ok(quantity.convert(to_unit)?)
}

fn lookup<'a>(registry: &'a UnitRegistry, name: &str) -> Result<&'a Unit, ConvertError> {
    registry.get(name).ok_or_else(|| ConvertError::UnknownUnit {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use unitval_unit::util::is_close;

    use super::*;

    #[test]
    fn converts_between_named_units() {
        let registry = UnitRegistry::standard();

        let converted =
            convert(&registry, 100.0, "degC", Some("F")).expect("both are temperatures");

        assert!(is_close(converted.value(), 212.0));
        assert_eq!(converted.unit().label(), Some("F"));
    }

    #[test]
    fn converts_to_si_without_target() {
        let registry = UnitRegistry::standard();

        let converted = convert(&registry, 1.0, "bar", None).expect("si always matches");

        assert!(is_close(converted.value(), 1e5));
        assert_eq!(converted.unit().label(), Some("kg·m^-1·s^-2"));
    }

    #[test]
    fn unknown_unit_is_reported_with_help() {
        let registry = UnitRegistry::standard();

        let error = convert(&registry, 1.0, "furlong", Some("m")).expect_err("not builtin");

        assert_eq!(
            error,
            ConvertError::UnknownUnit {
                name: "furlong".to_string()
            }
        );
        assert_eq!(error.context().len(), 1);
    }

    #[test]
    fn incompatible_units_are_rejected() {
        let registry = UnitRegistry::standard();

        let error = convert(&registry, 1.0, "J", Some("Pa")).expect_err("energy is not pressure");

        assert!(matches!(
            error,
            ConvertError::Quantity(QuantityError::IncompatibleDimension { .. })
        ));
    }
}
