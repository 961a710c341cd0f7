//! Command line tools for unitval

use std::{io, process::ExitCode};

use anstream::{ColorChoice, print, println};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use unitval_builtins::UnitRegistry;

use crate::command::{CliCommand, Commands};

mod command;
mod convert;
mod demo;
mod print_error;
mod print_utils;
mod stylesheet;

fn main() -> ExitCode {
    let cli = CliCommand::parse();

    init_tracing();

    if cli.no_colors {
        ColorChoice::Never.write_global();
    }

    match cli.command {
        Commands::Demo { sum_unit } => {
            demo::run(sum_unit.into(), cli.print_debug);
            ExitCode::SUCCESS
        }
        Commands::Convert { value, from, to } => {
            let registry = UnitRegistry::standard();

            match convert::convert(&registry, value, &from, to.as_deref()) {
                Ok(quantity) => {
                    if cli.print_debug {
                        println!("{quantity:?}");
                    } else {
                        print_utils::print_quantity(&quantity);
                        println!();
                    }
                    ExitCode::SUCCESS
                }
                Err(error) => {
                    print_error::print(&error, cli.print_debug);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Units => {
            print_units(cli.print_debug);
            ExitCode::SUCCESS
        }
    }
}

/// Installs a subscriber that writes to stderr, filtered by `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_units(print_debug: bool) {
    let registry = UnitRegistry::standard();

    if print_debug {
        println!("{registry:?}");
        return;
    }

    for doc in UnitRegistry::standard_docs() {
        let styled_name = stylesheet::UNIT_NAME.style(doc.name);
        print!("{styled_name} ");

        if let Some(unit) = doc.aliases.first().and_then(|alias| registry.get(alias)) {
            print_utils::print_unit(unit);
        }

        println!();
        println!("  aliases: {}", doc.aliases.join(", "));
    }
}
