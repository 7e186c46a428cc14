//! Report formatting for CLI output

use cpploclib::CountResult;

/// Label that precedes the total on the report line
pub const TOTAL_LABEL: &str = "Total lines of code:";

/// Format the single report line, without a trailing newline.
pub fn render_total(result: &CountResult) -> String {
    format!("{TOTAL_LABEL} {}", result.total)
}
