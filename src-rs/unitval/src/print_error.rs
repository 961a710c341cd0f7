//! Error message formatting and display functionality
//
//       error: cannot add quantities with different units: J (m^2·kg·s^-2) and m (m)
//         = note: left-hand side is in `J`
//         = note: right-hand side is in `m`
//

use anstream::eprintln;
use owo_colors::{OwoColorize, Style};
use unitval_error::{AsUnitvalError, Context, UnitvalError};

use crate::stylesheet;

/// Prints a formatted error report to stderr
pub fn print(error: &impl AsUnitvalError, print_debug: bool) {
    let error = UnitvalError::from_error(error);

    if print_debug {
        eprintln!("{error:?}");
    } else {
        let error_string = error_to_string(&error);
        eprintln!("{error_string}");
    }
}

/// Converts an error to a formatted string representation
fn error_to_string(error: &UnitvalError) -> String {
    let message_line = get_message_line("error", stylesheet::ERROR_COLOR, error.message());
    let context_lines = error.context().iter().map(get_context_line);

    let mut lines = vec![message_line];
    lines.extend(context_lines);

    lines.join("\n")
}

/// Formats a note or help line, indented under the error message
fn get_context_line(context: &Context) -> String {
    let color = match context {
        Context::Note(_) => stylesheet::NOTE_COLOR,
        Context::Help(_) => stylesheet::HELP_COLOR,
    };

    let equals = color.bold().style("=");
    let message_line = get_message_line(context.label(), color, context.text());

    format!("  {equals} {message_line}")
}

/// Formats a message line with a colored prefix
fn get_message_line(kind: &str, kind_color: Style, message: &str) -> String {
    // <kind>: <message>
    let kind_str = kind_color.style(kind);
    let message_line = format!("{kind_str}: {message}");

    message_line.bold().to_string()
}
