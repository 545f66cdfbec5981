/// Upper magnitude for which doubles are printed in plain notation.
const PLAIN_NOTATION_LIMIT: f64 = 1e7;

/// Formats a double the way the example transcripts show it.
///
/// Integral values keep one decimal (`20.0`, `-1.0`), everything else uses the
/// shortest representation that round-trips (`78.53981633974483`).
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < PLAIN_NOTATION_LIMIT {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Prefixes single digit values with a zero.
pub fn two_digits(value: i64) -> String {
    if value < 10 {
        format!("0{value}")
    } else {
        value.to_string()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
