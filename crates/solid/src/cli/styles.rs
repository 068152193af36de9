//! Styles for the solid CLI.
//!
//! Rendering code asks for styles by meaning (a product name, a sequence
//! number, a warning) and never picks colors itself.

use console::Style;
use solidapp::catalog::Color;
use solidapp::commands::MessageLevel;

pub fn title() -> Style {
    Style::new().bold()
}

pub fn muted() -> Style {
    Style::new().dim()
}

pub fn index() -> Style {
    Style::new().yellow()
}

pub fn ok() -> Style {
    Style::new().green()
}

pub fn violation() -> Style {
    Style::new().red().bold()
}

pub fn product_color(color: Color) -> Style {
    match color {
        Color::Red => Style::new().red(),
        Color::Green => Style::new().green(),
        Color::Blue => Style::new().blue(),
    }
}

pub fn message(level: MessageLevel) -> Style {
    match level {
        MessageLevel::Info => Style::new(),
        MessageLevel::Success => Style::new().green(),
        MessageLevel::Warning => Style::new().yellow(),
    }
}
