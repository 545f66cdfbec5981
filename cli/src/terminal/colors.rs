use colored::Color;

pub const PRIMARY: Color = Color::TrueColor {
    r: 110,
    g: 200,
    b: 140,
};
pub const ACCENT: Color = Color::TrueColor {
    r: 230,
    g: 190,
    b: 90,
};
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

/// Results of exercises.
pub const VALUE: Color = Color::BrightCyan;
/// Sentinels printed for rejected input.
pub const SENTINEL: Color = Color::Red;
