//! Cell value normalization.

use crate::sheet::Cell;

/// Converts a cell into the string written to the generated rules.
///
/// Absent, blank, formula and error cells all become an empty string, so
/// every cell has a textual value.
pub fn normalize_cell(cell: Option<&Cell>) -> String {
    match cell {
        Some(Cell::Text(value)) => value.clone(),
        Some(Cell::Numeric(value)) => format_numeric(*value),
        Some(Cell::Boolean(value)) => value.to_string(),
        Some(Cell::Formula(_) | Cell::Error(_) | Cell::Blank) | None => String::new(),
    }
}

/// Formats a number the way rule authors have always seen it in generated
/// rules: integral values keep a `.0` suffix, and magnitudes outside
/// `[1e-3, 1e7)` switch to `<mantissa>E<exponent>` notation.
pub fn format_numeric(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        let mut text = format!("{value}");
        if !text.contains('.') {
            text.push_str(".0");
        }
        return text;
    }

    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => text,
    }
}
