use owo_colors::Style;

pub const ERROR_COLOR: Style = Style::new().red();
pub const NOTE_COLOR: Style = Style::new().blue();
pub const HELP_COLOR: Style = Style::new().blue();
pub const STEP_TITLE: Style = Style::new().bold();
pub const QUANTITY_VALUE: Style = Style::new().yellow();
pub const UNIT_LABEL: Style = Style::new().cyan();
pub const UNIT_BASES: Style = Style::new().dimmed();
pub const UNIT_NAME: Style = Style::new().green().bold();
