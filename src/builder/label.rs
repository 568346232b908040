//! # Label Builder
//!
//! Authors an immediately printable label: fixed text, Code 39 barcodes and
//! borders, positioned in inches.
//!
//! ## Example
//!
//! ```
//! use zpl_label::builder::{BarcodeOptions, Label, LabelConfig, TextOptions};
//!
//! let mut label = Label::new(LabelConfig::default()).unwrap();
//! label
//!     .draw_border(0.0, 0.0, 4.0, 3.0)
//!     .text_field("ZEBRA", 0.5, 0.5, TextOptions::default())
//!     .bar_code_39("ZEBRA", 0.5, 1.0, BarcodeOptions::default());
//!
//! let zpl = label.to_zpl();
//! assert!(zpl.starts_with("^XA"));
//! assert!(zpl.ends_with("^PQ1^XZ"));
//! ```

use std::fmt;

use super::options::{BarcodeOptions, TextOptions, symbol_rotation, text_rotation};
use crate::error::ZplError;
use crate::ir::{Op, Program};
use crate::printer::{Orientation, PrinterConfig};
use crate::units::{Point, lenient, to_dots};

/// Static configuration of a [`Label`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelConfig {
    /// Printer resolution in dots per inch.
    pub dpi: u32,
    /// Default orientation for fields without an override.
    pub orientation: Orientation,
    /// Rotate the whole label 180° (`^POI`).
    pub invert: bool,
    /// Label home in dots (`^LH`), emitted at construction.
    pub home: Option<(f64, f64)>,
    /// Number of copies (minimum 1).
    pub quantity: u32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            dpi: PrinterConfig::DPI_203.dpi,
            orientation: Orientation::Portrait,
            invert: false,
            home: None,
            quantity: 1,
        }
    }
}

/// A printable label under construction.
///
/// Every authoring call appends to the program; nothing is ever removed.
/// Serializing does not change the label, so [`to_zpl`](Self::to_zpl) may be
/// called any number of times.
#[derive(Debug, Clone)]
pub struct Label {
    dpi: u32,
    orientation: Orientation,
    quantity: u32,
    program: Program,
}

impl Label {
    /// Start a new label: `^XA`, then `^POI` if inverted, then `^LH` if a
    /// home position is configured.
    ///
    /// Fails only for a zero resolution.
    pub fn new(config: LabelConfig) -> Result<Self, ZplError> {
        let mut label = Self::open(config.dpi, config.orientation)?;
        label.quantity = config.quantity.max(1);

        if config.invert {
            label.push(Op::PrintInverted);
        }
        if let Some((x, y)) = config.home {
            label.home_position(x, y);
        }
        Ok(label)
    }

    /// A label holding only `^XA`; callers add their own preamble.
    pub(crate) fn open(dpi: u32, orientation: Orientation) -> Result<Self, ZplError> {
        if dpi == 0 {
            return Err(ZplError::InvalidResolution(dpi));
        }
        Ok(Self {
            dpi,
            orientation,
            quantity: 1,
            program: Program::with_start(),
        })
    }

    pub(crate) fn push(&mut self, op: Op) {
        self.program.push(op);
    }

    /// Resolution in dots per inch.
    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Number of copies emitted by `^PQ`.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// The commands authored so far (without the closing `^PQ`/`^XZ`).
    pub fn program(&self) -> &Program {
        &self.program
    }

    fn is_landscape(&self, field: Option<Orientation>) -> bool {
        field.unwrap_or(self.orientation).is_landscape()
    }

    fn field_origin(&mut self, x: f64, y: f64) {
        let origin = Point::from_inches(x, y, self.dpi);
        self.push(Op::FieldOrigin {
            x: origin.x,
            y: origin.y,
        });
    }

    /// Set the label home (`^LH`).
    ///
    /// The coordinates are device dots, not inches.
    pub fn home_position(&mut self, x: f64, y: f64) -> &mut Self {
        self.push(Op::LabelHome {
            x: lenient(x).trunc() as i64,
            y: lenient(y).trunc() as i64,
        });
        self
    }

    /// Draw a box outline one dot thick.
    pub fn draw_border(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.draw_border_with_thickness(x, y, width, height, 1)
    }

    /// Draw a box outline. `thickness` is in dots.
    pub fn draw_border_with_thickness(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        thickness: u32,
    ) -> &mut Self {
        self.field_origin(x, y);
        self.push(Op::GraphicBox {
            width: to_dots(lenient(width), self.dpi),
            height: to_dots(lenient(height), self.dpi),
            thickness,
        });
        self.push(Op::FieldSeparator);
        self
    }

    /// Print fixed text with scalable font 0.
    pub fn text_field(&mut self, content: &str, x: f64, y: f64, options: TextOptions) -> &mut Self {
        self.field_origin(x, y);
        self.push(Op::Font {
            rotation: text_rotation(self.is_landscape(options.orientation)),
            height: to_dots(options.height, self.dpi),
            width: to_dots(options.width, self.dpi),
        });
        self.push(Op::FieldData(content.to_string()));
        self.push(Op::FieldSeparator);
        self
    }

    /// Print a fixed Code 39 barcode.
    pub fn bar_code_39(
        &mut self,
        content: &str,
        x: f64,
        y: f64,
        options: BarcodeOptions,
    ) -> &mut Self {
        self.field_origin(x, y);
        self.push(Op::Code39 {
            rotation: symbol_rotation(self.is_landscape(options.orientation)),
            height: to_dots(options.height, self.dpi),
        });
        self.push(Op::FieldData(content.to_string()));
        self.push(Op::FieldSeparator);
        self
    }

    /// The complete program: authored commands, `^PQ` and `^XZ`.
    pub fn to_program(&self) -> Program {
        let mut program = self.program.clone();
        program.push(Op::Quantity(self.quantity));
        program.push(Op::EndFormat);
        program
    }

    /// Serialize to ZPL text.
    pub fn to_zpl(&self) -> String {
        self.to_program().to_zpl()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_program())
    }
}
