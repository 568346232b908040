//! # Label Documents
//!
//! A JSON description of a label or stored template, compiled through the
//! builders. The same type is constructible in Rust and deserializable from
//! JSON.
//!
//! ```
//! use zpl_label::document::LabelDocument;
//!
//! let doc = LabelDocument::from_json(r#"{
//!     "dpi": 203,
//!     "fields": [
//!         {"type": "text", "content": "ZEBRA", "x": 10, "y": 10}
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(doc.build().unwrap(), "^XA^FO2030,2030^A0B,20,20^FDZEBRA^FS^PQ1^XZ");
//! ```
//!
//! A document with a `template` section stores a format instead:
//!
//! ```
//! use zpl_label::document::LabelDocument;
//!
//! let doc = LabelDocument::from_json(r#"{
//!     "template": {"name": "SHIP"},
//!     "fields": [{"type": "variable_qr", "x": 0.1, "y": 0.1, "size": "small"}]
//! }"#).unwrap();
//!
//! assert_eq!(doc.build().unwrap(), "^XA^DFSHIP^FS^FO20,20^BQN,1,5^FN1^FS^XZ");
//! ```

pub mod types;

pub use types::*;

use types::{deserialize_lenient_pair, symbol_size};

use serde::{Deserialize, Serialize};

use crate::builder::{
    BarcodeOptions, Label, LabelConfig, Pdf417Options, SymbolOptions, Template, TemplateConfig,
    TextOptions,
};
use crate::error::ZplError;
use crate::printer::{Orientation, PrinterConfig};

fn default_dpi() -> u32 {
    PrinterConfig::DPI_203.dpi
}

fn default_quantity() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

/// Stored-format settings. Lengths are in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSettings {
    /// Name the format is stored under. Required; missing or blank fails.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub offset: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    /// Whether to end the stored format with `^XZ` (default: true).
    #[serde(default = "default_true")]
    pub close: bool,
}

/// A label document: printer settings plus a list of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDocument {
    /// Printer resolution in dots per inch (default: 203).
    #[serde(default = "default_dpi")]
    pub dpi: u32,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub invert: bool,
    /// Label home `[x, y]` in dots. Plain labels only.
    #[serde(default, deserialize_with = "deserialize_lenient_pair")]
    pub home: Option<[f64; 2]>,
    /// Copies to print (default: 1). Plain labels only.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Present for stored formats.
    #[serde(default)]
    pub template: Option<TemplateSettings>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Default for LabelDocument {
    fn default() -> Self {
        Self {
            dpi: default_dpi(),
            orientation: Orientation::Portrait,
            invert: false,
            home: None,
            quantity: 1,
            template: None,
            fields: Vec::new(),
        }
    }
}

impl LabelDocument {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ZplError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a field to the document.
    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Compile the document to ZPL text.
    pub fn build(&self) -> Result<String, ZplError> {
        match &self.template {
            Some(settings) => self.build_template(settings),
            None => self.build_label(),
        }
    }

    fn build_label(&self) -> Result<String, ZplError> {
        if let Some((i, field)) = self.fields.iter().enumerate().find(|(_, f)| f.is_variable()) {
            return Err(ZplError::InvalidField(format!(
                "fields[{}]: '{}' needs a template section",
                i,
                field.kind()
            )));
        }

        let mut label = Label::new(LabelConfig {
            dpi: self.dpi,
            orientation: self.orientation,
            invert: self.invert,
            home: self.home.map(|[x, y]| (x, y)),
            quantity: self.quantity,
        })?;

        for field in &self.fields {
            match field {
                Field::Border(b) => {
                    label.draw_border_with_thickness(b.x, b.y, b.width, b.height, b.thickness);
                }
                Field::Text(t) => {
                    label.text_field(&t.content, t.x, t.y, text_options(t.height, t.width, t.orientation));
                }
                Field::Code39(c) => {
                    label.bar_code_39(&c.content, c.x, c.y, barcode_options(c.height, c.orientation));
                }
                // Placeholders were rejected before the label was opened
                _ => {}
            }
        }

        Ok(label.to_zpl())
    }

    fn build_template(&self, settings: &TemplateSettings) -> Result<String, ZplError> {
        if self.home.is_some() {
            return Err(ZplError::InvalidField(
                "home: a stored template has no label home".to_string(),
            ));
        }
        if self.quantity != 1 {
            return Err(ZplError::InvalidField(format!(
                "quantity: {} copies must be set on the recall job, not the template",
                self.quantity
            )));
        }

        let name = settings.name.as_deref().unwrap_or_default();
        let mut template = Template::new(
            name,
            TemplateConfig {
                dpi: self.dpi,
                orientation: self.orientation,
                invert: self.invert,
                offset: settings.offset,
                height: settings.height,
                width: settings.width,
            },
        )?;

        for field in &self.fields {
            match field {
                Field::Border(b) => {
                    template.draw_border_with_thickness(b.x, b.y, b.width, b.height, b.thickness);
                }
                Field::Text(t) => {
                    template.text_field(&t.content, t.x, t.y, text_options(t.height, t.width, t.orientation));
                }
                Field::Code39(c) => {
                    template.bar_code_39(&c.content, c.x, c.y, barcode_options(c.height, c.orientation));
                }
                Field::VariableText(t) => {
                    template.variable_text_field(t.x, t.y, text_options(t.height, t.width, t.orientation));
                }
                Field::VariableCode39(c) => {
                    template.variable_bar_code_39(c.x, c.y, barcode_options(c.height, c.orientation));
                }
                Field::VariablePdf417(p) => {
                    template.variable_bar_code_pdf417(
                        p.x,
                        p.y,
                        Pdf417Options {
                            orientation: p.orientation,
                        },
                    );
                }
                Field::VariableQr(s) => {
                    template.variable_qr_code(s.x, s.y, symbol_options(s));
                }
                Field::VariableDataMatrix(s) => {
                    template.variable_data_matrix(s.x, s.y, symbol_options(s));
                }
            }
        }

        tracing::debug!(
            name,
            fields = template.variable_field_count(),
            "template document compiled"
        );

        if settings.close {
            Ok(template.finish())
        } else {
            Ok(template.to_zpl())
        }
    }
}

fn text_options(height: f64, width: f64, orientation: Option<Orientation>) -> TextOptions {
    TextOptions {
        height,
        width,
        orientation,
    }
}

fn barcode_options(height: f64, orientation: Option<Orientation>) -> BarcodeOptions {
    BarcodeOptions {
        height,
        orientation,
    }
}

fn symbol_options(symbol: &VariableSymbol) -> SymbolOptions {
    SymbolOptions {
        size: symbol_size(symbol.size.as_deref()),
        orientation: symbol.orientation,
    }
}
