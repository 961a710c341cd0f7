use clap::{Parser, Subcommand, ValueEnum};
use unitval_value::SumUnitPolicy;

/// unitval CLI
#[derive(Parser)]
#[command(name = "unitval")]
#[command(version, about = "Dimensional analysis with SI units", long_about = None)]
pub struct CliCommand {
    #[command(subcommand)]
    pub command: Commands,

    /// Print the output in debug format
    #[arg(long, global = true)]
    pub print_debug: bool,

    /// Disable colors in the output
    #[arg(long, global = true)]
    pub no_colors: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk through the unit algebra and the safe constructors
    Demo {
        /// The unit given to the result of an addition or subtraction
        #[arg(long, value_enum, default_value_t = SumUnit::Operand)]
        sum_unit: SumUnit,
    },
    /// Convert a value between two builtin units
    Convert {
        /// The value to convert
        #[arg(value_name = "VALUE", allow_negative_numbers = true)]
        value: f64,

        /// Name of the unit the value is in
        #[arg(value_name = "FROM")]
        from: String,

        /// Name of the unit to convert to
        ///
        /// If omitted, the value is converted to SI units.
        #[arg(value_name = "TO")]
        to: Option<String>,
    },
    /// List the builtin units and their aliases
    Units,
}

/// The unit given to the result of an addition or subtraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SumUnit {
    /// Keep the unit of the operands
    Operand,
    /// Multiply the units of the operands
    Product,
}

impl From<SumUnit> for SumUnitPolicy {
    fn from(sum_unit: SumUnit) -> Self {
        match sum_unit {
            SumUnit::Operand => Self::Operand,
            SumUnit::Product => Self::Product,
        }
    }
}
