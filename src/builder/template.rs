//! # Template Builder
//!
//! Authors a stored format: a label program saved on the printer under a
//! name (`^DF`) whose variable fields are `^FN` placeholders instead of
//! literal content. The format is printed later by a [`Recall`] job that
//! supplies data for each field number.
//!
//! ## Field Numbers
//!
//! Every variable field receives the next number from a per-template
//! counter, starting at 1 and increasing by exactly 1 regardless of the
//! field kind. The printer matches recalled data by this number.
//!
//! ```text
//! ^XA^DFSHIP^FS
//! ^FO20,20^A0B,20,20^FN1^FS               ← variable_text_field      → 1
//! ^FO20,60^BY2,2,100^B3N,Y,20,N,N^FN2^FS  ← variable_bar_code_39     → 2
//! ^FO20,120^BQN,2,10^FN3^FS               ← variable_qr_code         → 3
//! ```
//!
//! ## Closing
//!
//! [`to_zpl`](Template::to_zpl) returns the format exactly as authored, with
//! no `^XZ`. [`finish`](Template::finish) appends the `^XZ` that ends the
//! stored format and consumes the template.
//!
//! ## Example
//!
//! ```
//! use zpl_label::builder::{SymbolOptions, Template, TemplateConfig, TextOptions};
//!
//! let mut template = Template::new("SHIP", TemplateConfig::default()).unwrap();
//! let name = template.variable_text_field(0.1, 0.1, TextOptions::default());
//! let code = template.variable_qr_code(0.1, 0.5, SymbolOptions::default());
//! assert_eq!((name, code), (1, 2));
//!
//! assert_eq!(
//!     template.finish(),
//!     "^XA^DFSHIP^FS^FO20,20^A0B,20,20^FN1^FS^FO20,101^BQN,2,10^FN2^FS^XZ"
//! );
//! ```

use std::fmt;

use super::label::Label;
use super::options::{
    BarcodeOptions, Pdf417Options, SymbolOptions, TextOptions, symbol_rotation, text_rotation,
};
use super::recall::Recall;
use crate::error::ZplError;
use crate::ir::{Op, Program};
use crate::printer::{Orientation, PrinterConfig};
use crate::protocol::commands::Rotation;
use crate::units::{Point, to_dots};

/// Static configuration of a [`Template`]. Lengths are in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateConfig {
    /// Printer resolution in dots per inch.
    pub dpi: u32,
    /// Landscape templates emit `^FWB`.
    pub orientation: Orientation,
    /// Rotate the whole label 180° (`^POI`).
    pub invert: bool,
    /// Vertical shift of the format (`^LT`). May be negative.
    pub offset: Option<f64>,
    /// Label length (`^LL`).
    pub height: Option<f64>,
    /// Print width (`^PW`).
    pub width: Option<f64>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            dpi: PrinterConfig::DPI_203.dpi,
            orientation: Orientation::Portrait,
            invert: false,
            offset: None,
            height: None,
            width: None,
        }
    }
}

impl TemplateConfig {
    fn validate(&self) -> Result<(), ZplError> {
        for (name, value) in [("height", self.height), ("width", self.width)] {
            if let Some(value) = value.filter(|v| *v < 0.0) {
                return Err(ZplError::NegativeDimension { name, value });
            }
        }
        Ok(())
    }
}

/// A stored format under construction.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    orientation: Orientation,
    label: Label,
    variable_fields: u32,
}

impl Template {
    /// Start a new stored format.
    ///
    /// The preamble is emitted in this fixed order:
    ///
    /// | Command | When |
    /// |---------|------|
    /// | `^XA` | always |
    /// | `^POI` | `invert` |
    /// | `^LT` | `offset` set |
    /// | `^LL` | `height` set |
    /// | `^PW` | `width` set |
    /// | `^FWB` | landscape |
    /// | `^DF<name>^FS` | always |
    ///
    /// ## Errors
    ///
    /// A missing or blank `name` is [`ZplError::BlankTemplateName`]: the
    /// printer cannot store a nameless format, so no template is created.
    /// Zero resolution and negative height/width are also rejected.
    pub fn new(name: &str, config: TemplateConfig) -> Result<Self, ZplError> {
        if name.trim().is_empty() {
            return Err(ZplError::BlankTemplateName);
        }
        config.validate()?;

        // `^FWB` carries the template-wide rotation; fields only rotate on request
        let mut label = Label::open(config.dpi, Orientation::Portrait)?;
        let dpi = config.dpi;

        if config.invert {
            label.push(Op::PrintInverted);
        }
        if let Some(offset) = config.offset {
            label.push(Op::LabelTop(to_dots(offset, dpi)));
        }
        if let Some(height) = config.height {
            label.push(Op::LabelLength(to_dots(height, dpi)));
        }
        if let Some(width) = config.width {
            label.push(Op::PrintWidth(to_dots(width, dpi)));
        }
        if config.orientation.is_landscape() {
            label.push(Op::FieldOrientation(Rotation::BottomUp));
        }
        label.push(Op::DownloadFormat(name.to_string()));
        label.push(Op::FieldSeparator);

        tracing::debug!(name, dpi, "template opened");

        Ok(Self {
            name: name.to_string(),
            orientation: config.orientation,
            label,
            variable_fields: 0,
        })
    }

    /// The name the format is stored under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of variable fields authored so far; also the last field number.
    pub fn variable_field_count(&self) -> u32 {
        self.variable_fields
    }

    /// The commands authored so far.
    pub fn program(&self) -> &Program {
        self.label.program()
    }

    /// A recall job for this template.
    pub fn recall(&self) -> Recall {
        Recall::for_template(&self.name)
    }

    // ========================================================================
    // VARIABLE FIELDS
    // ========================================================================

    /// Take the next field number and anchor the field.
    fn open_field(&mut self, x: f64, y: f64) -> u32 {
        self.variable_fields += 1;
        let id = self.variable_fields;

        let origin = Point::from_inches(x, y, self.label.dpi());
        self.label.push(Op::FieldOrigin {
            x: origin.x,
            y: origin.y,
        });

        tracing::debug!(template = %self.name, id, "variable field");
        id
    }

    fn close_field(&mut self, id: u32) -> u32 {
        self.label.push(Op::FieldNumber(id));
        self.label.push(Op::FieldSeparator);
        id
    }

    /// A text placeholder. Returns its field number.
    pub fn variable_text_field(&mut self, x: f64, y: f64, options: TextOptions) -> u32 {
        let id = self.open_field(x, y);
        let dpi = self.label.dpi();
        self.label.push(Op::Font {
            rotation: text_rotation(options.orientation.is_some_and(Orientation::is_landscape)),
            height: to_dots(options.height, dpi),
            width: to_dots(options.width, dpi),
        });
        self.close_field(id)
    }

    /// A Code 39 placeholder. Returns its field number.
    pub fn variable_bar_code_39(&mut self, x: f64, y: f64, options: BarcodeOptions) -> u32 {
        let id = self.open_field(x, y);
        let dpi = self.label.dpi();
        self.label.push(Op::BarcodeDefaults {
            module_width: 2,
            ratio: 2,
            height: 100,
        });
        self.label.push(Op::Code39 {
            rotation: symbol_rotation(options.orientation.is_some_and(Orientation::is_landscape)),
            height: to_dots(options.height, dpi),
        });
        self.close_field(id)
    }

    /// A PDF417 placeholder. Returns its field number.
    ///
    /// Row height is a fifth of an inch (`dpi / 5`, integer division).
    pub fn variable_bar_code_pdf417(&mut self, x: f64, y: f64, options: Pdf417Options) -> u32 {
        let id = self.open_field(x, y);
        let row_height = i64::from(self.label.dpi() / 5);
        self.label.push(Op::Pdf417 {
            rotation: symbol_rotation(options.orientation.is_some_and(Orientation::is_landscape)),
            row_height,
        });
        self.close_field(id)
    }

    /// A QR code placeholder. Returns its field number.
    pub fn variable_qr_code(&mut self, x: f64, y: f64, options: SymbolOptions) -> u32 {
        let id = self.open_field(x, y);
        self.label.push(Op::QrCode {
            rotation: symbol_rotation(options.orientation.is_some_and(Orientation::is_landscape)),
            params: options.size.map(|size| size.qr_params()),
        });
        self.close_field(id)
    }

    /// A Data Matrix placeholder. Returns its field number.
    ///
    /// Unlike the other field kinds, a landscape template rotates Data Matrix
    /// symbols even without a per-field orientation.
    pub fn variable_data_matrix(&mut self, x: f64, y: f64, options: SymbolOptions) -> u32 {
        let id = self.open_field(x, y);
        let landscape = options.orientation.is_some_and(Orientation::is_landscape)
            || self.orientation.is_landscape();
        self.label.push(Op::DataMatrix {
            rotation: symbol_rotation(landscape),
            params: options.size.map(|size| size.data_matrix_params()),
        });
        self.close_field(id)
    }

    // ========================================================================
    // FIXED FIELDS
    // ========================================================================

    /// Fixed box outline, stored as part of the format.
    pub fn draw_border(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.label.draw_border(x, y, width, height);
        self
    }

    /// Fixed box outline with a border `thickness` dots wide.
    pub fn draw_border_with_thickness(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        thickness: u32,
    ) -> &mut Self {
        self.label
            .draw_border_with_thickness(x, y, width, height, thickness);
        self
    }

    /// Fixed text, stored as part of the format.
    ///
    /// Like variable fields, fixed fields rotate only when `options` asks;
    /// the template orientation is not a fallback.
    pub fn text_field(&mut self, content: &str, x: f64, y: f64, options: TextOptions) -> &mut Self {
        self.label.text_field(content, x, y, options);
        self
    }

    /// Fixed Code 39 barcode, stored as part of the format.
    pub fn bar_code_39(
        &mut self,
        content: &str,
        x: f64,
        y: f64,
        options: BarcodeOptions,
    ) -> &mut Self {
        self.label.bar_code_39(content, x, y, options);
        self
    }

    // ========================================================================
    // SERIALIZATION
    // ========================================================================

    /// The format as authored, without a closing `^XZ`.
    pub fn to_zpl(&self) -> String {
        self.label.program().to_zpl()
    }

    /// Close the stored format with `^XZ` and return its text.
    pub fn finish(mut self) -> String {
        self.label.push(Op::EndFormat);
        self.to_zpl()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label.program())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::SymbolSize;

    fn template() -> Template {
        Template::new("TEST", TemplateConfig::default()).unwrap()
    }

    #[test]
    fn test_blank_name_is_rejected() {
        for name in ["", "   ", "\t\n"] {
            assert!(matches!(
                Template::new(name, TemplateConfig::default()),
                Err(ZplError::BlankTemplateName)
            ));
        }
    }

    #[test]
    fn test_minimal_preamble() {
        assert_eq!(template().to_zpl(), "^XA^DFTEST^FS");
    }

    #[test]
    fn test_full_preamble_order() {
        let config = TemplateConfig {
            dpi: 203,
            orientation: Orientation::Landscape,
            invert: true,
            offset: Some(0.1),
            height: Some(4.0),
            width: Some(3.0),
        };
        let template = Template::new("SHIP", config).unwrap();
        assert_eq!(
            template.to_zpl(),
            "^XA^POI^LT20^LL812^PW609^FWB^DFSHIP^FS"
        );
    }

    #[test]
    fn test_negative_dimensions_rejected() {
        let config = TemplateConfig {
            width: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(
            Template::new("X", config),
            Err(ZplError::NegativeDimension { name: "width", .. })
        ));

        // A negative top offset is a legitimate upward shift
        let config = TemplateConfig {
            offset: Some(-0.1),
            ..Default::default()
        };
        assert_eq!(Template::new("X", config).unwrap().to_zpl(), "^XA^LT-20^DFX^FS");
    }

    #[test]
    fn test_zero_dpi_rejected() {
        let config = TemplateConfig {
            dpi: 0,
            ..Default::default()
        };
        assert!(matches!(
            Template::new("X", config),
            Err(ZplError::InvalidResolution(0))
        ));
    }

    #[test]
    fn test_variable_text_field() {
        let mut template = template();
        assert_eq!(template.variable_text_field(1.0, 2.0, TextOptions::default()), 1);
        assert_eq!(
            template.to_zpl(),
            "^XA^DFTEST^FS^FO203,406^A0B,20,20^FN1^FS"
        );
    }

    #[test]
    fn test_variable_text_field_landscape_is_normal() {
        let mut template = template();
        template.variable_text_field(0.0, 0.0, TextOptions::default().landscape());
        assert!(template.to_zpl().ends_with("^FO0,0^A0N,20,20^FN1^FS"));
    }

    #[test]
    fn test_variable_bar_code_39() {
        let mut template = template();
        template.variable_bar_code_39(0.0, 0.0, BarcodeOptions::default());
        template.variable_bar_code_39(0.0, 0.0, BarcodeOptions::default().landscape());
        assert_eq!(
            template.to_zpl(),
            "^XA^DFTEST^FS\
             ^FO0,0^BY2,2,100^B3N,Y,20,N,N^FN1^FS\
             ^FO0,0^BY2,2,100^B3B,Y,20,N,N^FN2^FS"
        );
    }

    #[test]
    fn test_variable_pdf417_row_height() {
        let mut template = template();
        template.variable_bar_code_pdf417(0.0, 0.0, Pdf417Options::default());
        assert!(template.to_zpl().ends_with("^B7N,40,0,5,8,N^FN1^FS"));

        let config = TemplateConfig {
            dpi: 300,
            ..Default::default()
        };
        let mut template = Template::new("X", config).unwrap();
        template.variable_bar_code_pdf417(0.0, 0.0, Pdf417Options::default().landscape());
        assert!(template.to_zpl().ends_with("^B7B,60,0,5,8,N^FN1^FS"));
    }

    #[test]
    fn test_variable_qr_sizes() {
        let mut template = template();
        template.variable_qr_code(0.0, 0.0, SymbolOptions::default().size(SymbolSize::Small));
        template.variable_qr_code(0.0, 0.0, SymbolOptions::default());
        template.variable_qr_code(0.0, 0.0, SymbolOptions::default().size(SymbolSize::Large).landscape());
        template.variable_qr_code(0.0, 0.0, SymbolOptions::default().printer_default_size());
        assert_eq!(
            template.to_zpl(),
            "^XA^DFTEST^FS\
             ^FO0,0^BQN,1,5^FN1^FS\
             ^FO0,0^BQN,2,10^FN2^FS\
             ^FO0,0^BQB,4,20^FN3^FS\
             ^FO0,0^BQN,^FN4^FS"
        );
    }

    #[test]
    fn test_variable_data_matrix_sizes() {
        let mut template = template();
        template.variable_data_matrix(0.0, 0.0, SymbolOptions::default().size(SymbolSize::Small));
        template.variable_data_matrix(0.0, 0.0, SymbolOptions::default());
        template.variable_data_matrix(0.0, 0.0, SymbolOptions::default().size(SymbolSize::Large));
        assert_eq!(
            template.to_zpl(),
            "^XA^DFTEST^FS\
             ^FO0,0^BXN,10,200^FN1^FS\
             ^FO0,0^BXN,20,200^FN2^FS\
             ^FO0,0^BXN,40,200^FN3^FS"
        );
    }

    #[test]
    fn test_landscape_template_rotates_only_data_matrix() {
        let config = TemplateConfig {
            orientation: Orientation::Landscape,
            ..Default::default()
        };
        let mut template = Template::new("L", config).unwrap();
        template.variable_qr_code(0.0, 0.0, SymbolOptions::default());
        template.variable_data_matrix(0.0, 0.0, SymbolOptions::default());
        assert_eq!(
            template.to_zpl(),
            "^XA^FWB^DFL^FS^FO0,0^BQN,2,10^FN1^FS^FO0,0^BXB,20,200^FN2^FS"
        );
    }

    #[test]
    fn test_landscape_template_fixed_fields_match_variable_fields() {
        let config = TemplateConfig {
            orientation: Orientation::Landscape,
            ..Default::default()
        };
        let mut template = Template::new("L", config).unwrap();
        template.text_field("F", 0.0, 0.0, TextOptions::default());
        template.variable_text_field(0.0, 0.0, TextOptions::default());
        template.bar_code_39("F", 0.0, 0.0, BarcodeOptions::default());
        template.variable_bar_code_39(0.0, 0.0, BarcodeOptions::default());
        template.text_field("R", 0.0, 0.0, TextOptions::default().landscape());
        assert_eq!(
            template.to_zpl(),
            "^XA^FWB^DFL^FS\
             ^FO0,0^A0B,20,20^FDF^FS\
             ^FO0,0^A0B,20,20^FN1^FS\
             ^FO0,0^B3N,Y,20,N,N^FDF^FS\
             ^FO0,0^BY2,2,100^B3N,Y,20,N,N^FN2^FS\
             ^FO0,0^A0N,20,20^FDR^FS"
        );
    }

    #[test]
    fn test_field_numbers_are_dense_across_kinds() {
        let mut template = template();
        let ids = [
            template.variable_text_field(0.0, 0.0, TextOptions::default()),
            template.variable_data_matrix(0.0, 0.0, SymbolOptions::default()),
            template.variable_bar_code_39(0.0, 0.0, BarcodeOptions::default()),
            template.variable_bar_code_pdf417(0.0, 0.0, Pdf417Options::default()),
            template.variable_qr_code(0.0, 0.0, SymbolOptions::default()),
            template.variable_text_field(0.0, 0.0, TextOptions::default()),
        ];
        assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
        assert_eq!(template.program().field_numbers(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(template.variable_field_count(), 6);
    }

    #[test]
    fn test_fixed_fields_do_not_take_numbers() {
        let mut template = template();
        template
            .draw_border(0.0, 0.0, 1.0, 1.0)
            .text_field("FROM", 0.1, 0.1, TextOptions::default());
        let id = template.variable_text_field(0.1, 0.3, TextOptions::default());
        assert_eq!(id, 1);
        assert_eq!(
            template.to_zpl(),
            "^XA^DFTEST^FS\
             ^FO0,0^GB203,203,1^FS\
             ^FO20,20^A0B,20,20^FDFROM^FS\
             ^FO20,60^A0B,20,20^FN1^FS"
        );
    }

    #[test]
    fn test_non_numeric_coordinates_are_zero() {
        let mut template = template();
        template.variable_qr_code(f64::NAN, f64::NEG_INFINITY, SymbolOptions::default());
        assert!(template.to_zpl().ends_with("^FO0,0^BQN,2,10^FN1^FS"));
    }

    #[test]
    fn test_serialization_is_idempotent_and_open() {
        let mut template = template();
        template.variable_text_field(0.0, 0.0, TextOptions::default());
        let first = template.to_zpl();
        assert_eq!(template.to_zpl(), first);
        assert_eq!(template.to_string(), first);
        assert!(!first.contains("^XZ"));
        assert!(!first.contains("^PQ"));
    }

    #[test]
    fn test_finish_closes_format() {
        let mut template = template();
        template.variable_text_field(0.0, 0.0, TextOptions::default());
        assert_eq!(template.finish(), "^XA^DFTEST^FS^FO0,0^A0B,20,20^FN1^FS^XZ");
    }

    #[test]
    fn test_recall_uses_template_name() {
        let template = template();
        assert_eq!(template.recall().to_zpl(), "^XA^XFTEST^FS^PQ1^XZ");
    }
}
