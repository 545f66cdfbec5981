//! Multi-way branching on integers, characters and strings.

/// Lines printed for an integer. Values 3 to 5 share an arm that prints two.
pub fn describe_value(value: i32) -> Vec<String> {
    match value {
        1 | 2 => vec![format!("Value was {value}")],
        3..=5 => vec![
            "Value was not 3 or 4 or 5".to_string(),
            format!("Actually it was a {value}"),
        ],
        _ => vec![format!("Other: {value}")],
    }
}

pub fn describe_letter(letter: char) -> String {
    match letter {
        'A' | 'B' => format!("{letter} was found"),
        'C'..='E' => format!("Actually it was a {letter}"),
        _ => format!("Other: {letter}"),
    }
}

/// Canonical name of a month given in any letter case. Only January and June are known.
pub fn month_label(month: &str) -> &'static str {
    let month: String = month.trim().to_ascii_uppercase();
    match month.as_str() {
        "JANUARY" => "January",
        "JUNE" => "June",
        _ => "Not sure",
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
