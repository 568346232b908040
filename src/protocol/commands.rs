//! # ZPL II Commands
//!
//! This module implements the subset of the ZPL II command language used to
//! author labels and stored formats on Zebra thermal label printers.
//!
//! ## Protocol Overview
//!
//! ZPL is a text protocol. Every command starts with the caret `^`, followed
//! by a two-character mnemonic and comma-separated parameters:
//!
//! ```text
//! ^FO2030,2030      field origin at x=2030, y=2030 dots
//! ^A0B,20,20        scalable font 0, rotated 270°, 20x20 dots
//! ^FDZEBRA^FS       field data, field separator
//! ```
//!
//! Commands are simply adjacent; no line breaks are required. A label
//! format is bracketed by `^XA` ... `^XZ` and the printer executes the
//! commands in sequence, so a field origin must come before the commands
//! that describe the field it anchors.
//!
//! ## Reference
//!
//! Based on the "ZPL II Programming Guide" by Zebra Technologies.

use std::fmt;

// ============================================================================
// ROTATION
// ============================================================================

/// Field rotation parameter (`o` in `^A0o`, `^B3o`, `^BQo`, ...).
///
/// | Letter | Meaning |
/// |--------|---------|
/// | `N` | normal |
/// | `B` | read from bottom up, 270° |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Normal,
    BottomUp,
}

impl Rotation {
    /// The single-letter parameter value.
    pub fn letter(self) -> char {
        match self {
            Self::Normal => 'N',
            Self::BottomUp => 'B',
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// ============================================================================
// FORMAT CONTROL
// ============================================================================

/// # Start Format (^XA)
///
/// Opens a label format. Everything up to the matching `^XZ` belongs to
/// one label.
///
/// ```
/// use zpl_label::protocol::commands;
///
/// assert_eq!(commands::start_format(), "^XA");
/// ```
#[inline]
pub fn start_format() -> String {
    "^XA".to_string()
}

/// # End Format (^XZ)
///
/// Closes the label format and, for printable labels, starts printing.
#[inline]
pub fn end_format() -> String {
    "^XZ".to_string()
}

/// # Print Quantity (^PQ)
///
/// Number of copies of the label to print.
#[inline]
pub fn print_quantity(quantity: u32) -> String {
    format!("^PQ{}", quantity)
}

/// # Print Orientation Inverted (^POI)
///
/// Rotates the whole label 180°.
#[inline]
pub fn print_inverted() -> String {
    "^POI".to_string()
}

/// # Label Home (^LH)
///
/// Sets the origin that every following `^FO` is relative to.
#[inline]
pub fn label_home(x: i64, y: i64) -> String {
    format!("^LH{},{}", x, y)
}

/// # Label Top (^LT)
///
/// Shifts the whole format vertically, in dots. May be negative.
#[inline]
pub fn label_top(dots: i64) -> String {
    format!("^LT{}", dots)
}

/// # Label Length (^LL)
#[inline]
pub fn label_length(dots: i64) -> String {
    format!("^LL{}", dots)
}

/// # Print Width (^PW)
#[inline]
pub fn print_width(dots: i64) -> String {
    format!("^PW{}", dots)
}

/// # Field Orientation Default (^FW)
///
/// Sets the default rotation for all subsequent fields in the format.
/// `^FWB` is how a landscape template is declared.
#[inline]
pub fn field_orientation_default(rotation: Rotation) -> String {
    format!("^FW{}", rotation)
}

// ============================================================================
// STORED FORMATS
// ============================================================================

/// # Download Format (^DF)
///
/// Stores the rest of the format on the printer under `name` instead of
/// printing it. Must be followed by `^FS`.
///
/// ## Protocol Details
///
/// | Command | Effect |
/// |---------|--------|
/// | `^DFname^FS` | begin storing |
/// | `^FNn^FS` | placeholder for field `n` |
/// | `^XZ` | end of stored format |
#[inline]
pub fn download_format(name: &str) -> String {
    format!("^DF{}", name)
}

/// # Recall Format (^XF)
///
/// Recalls a format previously stored with `^DF`. Field data for the stored
/// `^FN` placeholders follows as `^FNn^FD...^FS`.
#[inline]
pub fn recall_format(name: &str) -> String {
    format!("^XF{}", name)
}

/// # Field Number (^FN)
///
/// In a stored format this is a placeholder; in a recall job it selects the
/// placeholder the following `^FD` fills.
#[inline]
pub fn field_number(id: u32) -> String {
    format!("^FN{}", id)
}

// ============================================================================
// FIELDS
// ============================================================================

/// # Field Origin (^FO)
///
/// Anchors the next field at (x, y) dots from the label home.
///
/// ```
/// use zpl_label::protocol::commands;
///
/// assert_eq!(commands::field_origin(2030, 6090), "^FO2030,6090");
/// ```
#[inline]
pub fn field_origin(x: i64, y: i64) -> String {
    format!("^FO{},{}", x, y)
}

/// # Field Data (^FD)
///
/// The content is emitted verbatim.
#[inline]
pub fn field_data(content: &str) -> String {
    format!("^FD{}", content)
}

/// # Field Separator (^FS)
#[inline]
pub fn field_separator() -> String {
    "^FS".to_string()
}

/// # Graphic Box (^GB)
///
/// Draws a box `width` x `height` dots with a border `thickness` dots wide.
#[inline]
pub fn graphic_box(width: i64, height: i64, thickness: u32) -> String {
    format!("^GB{},{},{}", width, height, thickness)
}

/// # Scalable Font (^A0)
///
/// Selects built-in font 0 with the given rotation and character
/// height/width in dots.
///
/// ```
/// use zpl_label::protocol::commands::{self, Rotation};
///
/// assert_eq!(commands::scalable_font(Rotation::BottomUp, 20, 20), "^A0B,20,20");
/// ```
#[inline]
pub fn scalable_font(rotation: Rotation, height: i64, width: i64) -> String {
    format!("^A0{},{},{}", rotation, height, width)
}

// ============================================================================
// BARCODES
// ============================================================================

/// # Bar Code Field Default (^BY)
///
/// | Param | Meaning |
/// |-------|---------|
/// | `w` | narrow module width in dots |
/// | `r` | wide to narrow bar ratio |
/// | `h` | default bar height in dots |
#[inline]
pub fn bar_code_defaults(module_width: u32, ratio: u32, height: u32) -> String {
    format!("^BY{},{},{}", module_width, ratio, height)
}

/// # Code 39 (^B3)
///
/// Emitted as `^B3o,Y,h,N,N`: Mod-43 check digit on, bar height `h`,
/// no interpretation line.
#[inline]
pub fn code39(rotation: Rotation, height: i64) -> String {
    format!("^B3{},Y,{},N,N", rotation, height)
}

/// # PDF417 (^B7)
///
/// Emitted as `^B7o,h,0,5,8,N`:
///
/// | Param | Value |
/// |-------|-------|
/// | `h` | row height in dots |
/// | `s` | security level 0 |
/// | `c` | 5 data columns |
/// | `r` | 8 rows |
/// | `t` | no truncation |
#[inline]
pub fn pdf417(rotation: Rotation, row_height: i64) -> String {
    format!("^B7{},{},0,5,8,N", rotation, row_height)
}

/// # QR Code (^BQ)
///
/// `params` is the parameter pair following the rotation. `None` emits the
/// bare command and leaves the printer defaults in effect.
pub fn qr_code(rotation: Rotation, params: Option<(u32, u32)>) -> String {
    match params {
        Some((a, b)) => format!("^BQ{},{},{}", rotation, a, b),
        None => format!("^BQ{},", rotation),
    }
}

/// # Data Matrix (^BX)
///
/// `params` is (element height in dots, quality level). `None` emits the
/// bare command.
pub fn data_matrix(rotation: Rotation, params: Option<(u32, u32)>) -> String {
    match params {
        Some((height, quality)) => format!("^BX{},{},{}", rotation, height, quality),
        None => format!("^BX{},", rotation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_control() {
        assert_eq!(start_format(), "^XA");
        assert_eq!(end_format(), "^XZ");
        assert_eq!(print_quantity(1), "^PQ1");
        assert_eq!(print_inverted(), "^POI");
        assert_eq!(label_home(30, 30), "^LH30,30");
        assert_eq!(label_top(-12), "^LT-12");
        assert_eq!(label_length(812), "^LL812");
        assert_eq!(print_width(609), "^PW609");
        assert_eq!(field_orientation_default(Rotation::BottomUp), "^FWB");
    }

    #[test]
    fn test_stored_formats() {
        assert_eq!(download_format("SHIPPING"), "^DFSHIPPING");
        assert_eq!(recall_format("SHIPPING"), "^XFSHIPPING");
        assert_eq!(field_number(12), "^FN12");
    }

    #[test]
    fn test_fields() {
        assert_eq!(field_origin(0, 0), "^FO0,0");
        assert_eq!(field_data("ZEBRA"), "^FDZEBRA");
        assert_eq!(field_separator(), "^FS");
        assert_eq!(graphic_box(81200, 60900, 1), "^GB81200,60900,1");
        assert_eq!(scalable_font(Rotation::Normal, 40, 30), "^A0N,40,30");
    }

    #[test]
    fn test_barcodes() {
        assert_eq!(bar_code_defaults(2, 2, 100), "^BY2,2,100");
        assert_eq!(code39(Rotation::Normal, 20), "^B3N,Y,20,N,N");
        assert_eq!(code39(Rotation::BottomUp, 20), "^B3B,Y,20,N,N");
        assert_eq!(pdf417(Rotation::Normal, 40), "^B7N,40,0,5,8,N");
        assert_eq!(qr_code(Rotation::BottomUp, Some((2, 10))), "^BQB,2,10");
        assert_eq!(qr_code(Rotation::Normal, None), "^BQN,");
        assert_eq!(data_matrix(Rotation::Normal, Some((20, 200))), "^BXN,20,200");
        assert_eq!(data_matrix(Rotation::BottomUp, None), "^BXB,");
    }
}
