//! Areas of simple shapes.

use std::f64::consts::PI;

use primer_common::{Result, validate};

/// Area of a circle with the given radius.
pub fn area_circle(radius: f64) -> Result<f64> {
    let radius: f64 = validate::non_negative("radius", radius)?;
    Ok(radius.powi(2) * PI)
}

/// Area of an `x` by `y` rectangle.
pub fn area_rectangle(x: f64, y: f64) -> Result<f64> {
    let x: f64 = validate::non_negative("x", x)?;
    let y: f64 = validate::non_negative("y", y)?;
    Ok(x * y)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
