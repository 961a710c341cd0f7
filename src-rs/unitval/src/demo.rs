//! A walkthrough of the unit algebra and the safe constructors
//!
//! Some steps are expected to fail. Their errors are printed and the walk
//! continues.

use anstream::{print, println};
use unitval_builtins::{boltzmann, celsius, fahrenheit, joule, kelvin, kilogram, meter, second};
use unitval_error::AsUnitvalError;
use unitval_value::{Energy, Quantity, QuantityError, SumUnitPolicy, Temperature};

use crate::{print_error, print_utils, stylesheet};

/// The outcome of a successful step.
#[derive(Debug)]
enum Outcome {
    Number(f64),
    Quantity(Quantity),
}

impl From<Quantity> for Outcome {
    fn from(quantity: Quantity) -> Self {
        Self::Quantity(quantity)
    }
}

impl From<f64> for Outcome {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

/// Runs every step of the walkthrough.
pub fn run(policy: SumUnitPolicy, print_debug: bool) {
    let length = Quantity::new(100.0, meter());
    let short_length = Quantity::new(10.0, meter());
    let time = Quantity::new(1.0, second());

    step("ratio of two lengths is a plain number", print_debug, || {
        length.checked_div(&short_length)?.as_unitless()
    });

    step("velocity is not a plain number", print_debug, || {
        length.checked_div(&time)?.as_unitless()
    });

    let energy = Quantity::new(5.0, joule());

    step("5 J + 3 kg·m^2/s^2", print_debug, || -> Result<_, QuantityError> {
        let expanded = kilogram()
            .checked_mul(&meter().checked_pow(2.0)?)?
            .checked_div(&second().checked_pow(2.0)?)?;
        energy.checked_add_with(&Quantity::new(3.0, expanded), policy)
    });

    step("energy and length do not add", print_debug, || {
        energy.checked_add_with(&length, policy)
    });

    step("100 C in Fahrenheit", print_debug, || {
        Quantity::new(100.0, celsius()).convert_to(&fahrenheit())
    });

    step("Celsius cannot be multiplied", print_debug, || {
        Quantity::new(20.0, celsius()).checked_mul_unit(&meter())
    });

    step("100 K is a temperature", print_debug, || {
        Temperature::new(Quantity::new(100.0, kelvin())).map(Quantity::from)
    });

    step("100 m is not a temperature", print_debug, || {
        Temperature::new(length.clone()).map(Quantity::from)
    });

    step("thermal energy of 100 K", print_debug, || {
        let temperature = Temperature::new(Quantity::new(100.0, kelvin()))?;
        thermal_energy(&temperature).map(Quantity::from)
    });
}

/// Computes `k_B · T`, which is guaranteed to be an energy.
fn thermal_energy(temperature: &Temperature) -> Result<Energy, QuantityError> {
    let energy = temperature.checked_mul(&boltzmann())?;
    Energy::new(energy)
}

fn step<T, E>(title: &str, print_debug: bool, body: impl FnOnce() -> Result<T, E>)
where
    T: Into<Outcome>,
    E: AsUnitvalError,
{
    let styled_title = stylesheet::STEP_TITLE.style(title);
    println!("{styled_title}");

    match body() {
        Ok(outcome) => {
            let outcome = outcome.into();

            print!("  = ");
            match &outcome {
                Outcome::Number(number) => {
                    let styled_number = stylesheet::QUANTITY_VALUE.style(number);
                    print!("{styled_number}");
                }
                Outcome::Quantity(quantity) => print_utils::print_quantity(quantity),
            }
            println!();

            if print_debug {
                println!("  {outcome:?}");
            }
        }
        Err(error) => print_error::print(&error, print_debug),
    }

    println!();
}

#[cfg(test)]
mod tests {
    use unitval_unit::util::is_close;

    use super::*;

    #[test]
    fn thermal_energy_of_room_temperature() {
        let temperature = Temperature::new(Quantity::new(300.0, kelvin())).expect("kelvin");

        let energy = thermal_energy(&temperature).expect("k_B T is an energy");

        assert!(is_close(energy.value(), 300.0 * 1.380_648_52e-23));
        assert!(energy.unit().dimensionally_eq(&joule()));
    }

    #[test]
    fn debug_outcome_shows_the_full_quantity() {
        let length = Quantity::new(100.0, meter());

        let debug = format!("{:?}", Outcome::from(length.clone()));

        assert_eq!(debug, format!("Quantity({length:?})"));
        assert_eq!(format!("{:?}", Outcome::from(10.0)), "Number(10.0)");
    }
}
