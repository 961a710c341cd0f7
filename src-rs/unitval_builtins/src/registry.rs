use indexmap::IndexMap;
use unitval_unit::Unit;

use crate::units;

struct BuiltinUnit {
    name: &'static str,
    aliases: &'static [&'static str],
    unit: fn() -> Unit,
}

/// The builtin units, in the order they are listed.
fn builtin_units_complete() -> impl Iterator<Item = BuiltinUnit> {
    [
        // === BASE UNITS ===
        BuiltinUnit {
            name: "kilogram",
            aliases: &["kg", "kilogram", "kilograms"],
            unit: units::kilogram,
        },
        BuiltinUnit {
            name: "second",
            aliases: &["s", "second", "seconds", "sec"],
            unit: units::second,
        },
        BuiltinUnit {
            name: "kelvin",
            aliases: &["K", "kelvin"],
            unit: units::kelvin,
        },
        BuiltinUnit {
            name: "ampere",
            aliases: &["A", "ampere", "amp"],
            unit: units::ampere,
        },
        BuiltinUnit {
            name: "mole",
            aliases: &["mol", "mole", "moles"],
            unit: units::mole,
        },
        BuiltinUnit {
            name: "meter",
            aliases: &["m", "meter", "meters", "metre", "metres"],
            unit: units::meter,
        },
        BuiltinUnit {
            name: "candela",
            aliases: &["cd", "candela"],
            unit: units::candela,
        },
        // === TEMPERATURE SCALES ===
        BuiltinUnit {
            name: "celsius",
            aliases: &["C", "degC", "celsius"],
            unit: units::celsius,
        },
        BuiltinUnit {
            name: "fahrenheit",
            aliases: &["F", "degF", "fahrenheit"],
            unit: units::fahrenheit,
        },
        // === DERIVED UNITS ===
        BuiltinUnit {
            name: "newton",
            aliases: &["N", "newton", "newtons"],
            unit: units::newton,
        },
        BuiltinUnit {
            name: "joule",
            aliases: &["J", "joule", "joules"],
            unit: units::joule,
        },
        BuiltinUnit {
            name: "pascal",
            aliases: &["Pa", "pascal", "pascals"],
            unit: units::pascal,
        },
        BuiltinUnit {
            name: "bar",
            aliases: &["bar"],
            unit: units::bar,
        },
        BuiltinUnit {
            name: "electron-volt",
            aliases: &["eV", "electron-volt", "electronvolt"],
            unit: units::electron_volt,
        },
        BuiltinUnit {
            name: "hertz",
            aliases: &["Hz", "hertz"],
            unit: units::hertz,
        },
    ]
    .into_iter()
}

/// Documentation for one builtin unit: its name and every alias it can be
/// looked up by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinUnitDoc {
    /// The full name of the unit
    pub name: &'static str,
    /// The names the unit is registered under
    pub aliases: Vec<&'static str>,
}

/// A map from unit names to units.
///
/// Names are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: IndexMap<String, Unit>,
}

impl UnitRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every builtin unit under each of its
    /// aliases.
    ///
    /// The unit stored under an alias is labelled with that alias, so `J`
    /// and `joule` display differently but compare equal.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();

        for builtin in builtin_units_complete() {
            let unit = (builtin.unit)();
            for alias in builtin.aliases {
                registry.insert(*alias, unit.clone().with_label(*alias));
            }
        }

        registry
    }

    /// Documentation for the builtin units, in catalog order.
    #[must_use]
    pub fn standard_docs() -> Vec<BuiltinUnitDoc> {
        builtin_units_complete()
            .map(|builtin| BuiltinUnitDoc {
                name: builtin.name,
                aliases: builtin.aliases.to_vec(),
            })
            .collect()
    }

    /// Registers a unit under the given name, replacing and returning any
    /// unit previously registered under it.
    pub fn insert(&mut self, name: impl Into<String>, unit: Unit) -> Option<Unit> {
        let name = name.into();
        tracing::debug!(name = %name, unit = %unit, "registering unit");
        self.units.insert(name, unit)
    }

    /// Looks up a unit by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.units.get(name)
    }

    /// Checks if a unit is registered under the given name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }

    /// Iterates over the registered names and units in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Unit)> {
        self.units.iter().map(|(name, unit)| (name.as_str(), unit))
    }

    /// Returns the number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Checks if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
