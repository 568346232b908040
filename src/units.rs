//! # Unit Conversion
//!
//! Label geometry is authored in inches and emitted in printer dots.
//!
//! ```text
//! dots = trunc(inches * dpi)
//!
//! At 203 dpi:
//!   0.1 in  -> 20 dots   (20.3 truncated)
//!   10 in   -> 2030 dots
//! ```
//!
//! Conversion truncates toward zero; it never rounds.

/// Convert a length in inches to printer dots, truncating toward zero.
///
/// ## Example
///
/// ```
/// use zpl_label::units::to_dots;
///
/// assert_eq!(to_dots(0.1, 203), 20);
/// assert_eq!(to_dots(10.0, 203), 2030);
/// assert_eq!(to_dots(-0.1, 203), -20);
/// ```
#[inline]
pub fn to_dots(inches: f64, dpi: u32) -> i64 {
    // `as` saturates and maps NaN to 0
    (inches * f64::from(dpi)).trunc() as i64
}

/// Coerce a coordinate that is not a usable number to `0`.
///
/// Authoring calls never fail on bad coordinates: NaN and infinities behave
/// exactly as if `0` had been passed.
#[inline]
pub fn lenient(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        tracing::warn!(value, "non-numeric coordinate treated as 0");
        0.0
    }
}

/// A field anchor in printer dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Convert an (x, y) pair in inches, coercing non-numeric values to `0`.
    pub fn from_inches(x: f64, y: f64, dpi: u32) -> Self {
        Self {
            x: to_dots(lenient(x), dpi),
            y: to_dots(lenient(y), dpi),
        }
    }
}
