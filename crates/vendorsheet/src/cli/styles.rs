//! Terminal styles for the vendorsheet CLI.
//!
//! Output code asks for a style by what the text *is* (a header, an id, a
//! muted value), never by color. `console` drops the escape codes on its own
//! when stdout is not a terminal or `NO_COLOR` is set.

use console::Style;

/// Column headers and record field labels.
pub fn header() -> Style {
    Style::new().bold()
}

/// Record identifiers (`CAT-0001`, `VND-0003`).
pub fn id() -> Style {
    Style::new().yellow()
}

/// Placeholders and inactive records.
pub fn muted() -> Style {
    Style::new().dim()
}

/// Confirmation lines after a write.
pub fn success() -> Style {
    Style::new().green()
}

/// Section titles in search results.
pub fn title() -> Style {
    Style::new().bold().cyan()
}
