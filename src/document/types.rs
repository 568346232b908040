//! Field types for the JSON label document.
//!
//! All types derive `Serialize + Deserialize`. Positions and sizes are in
//! inches. Coordinates are read leniently: any JSON value that is not a
//! number (a string, `true`, `null`, ...) is read as `0`.

use serde::{Deserialize, Deserializer, Serialize};

use crate::builder::{DEFAULT_FIELD_SIZE, SymbolSize};
use crate::printer::Orientation;

fn lenient_number(value: &serde_json::Value) -> f64 {
    match value.as_f64() {
        Some(n) => n,
        None => {
            tracing::warn!(%value, "non-numeric coordinate treated as 0");
            0.0
        }
    }
}

/// Deserialize a coordinate, reading anything that is not a number as `0`.
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(lenient_number(&value))
}

/// Deserialize an optional `[x, y]` pair leniently.
pub(crate) fn deserialize_lenient_pair<'de, D>(deserializer: D) -> Result<Option<[f64; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    let pair: Option<[serde_json::Value; 2]> = Option::deserialize(deserializer)?;
    Ok(pair.map(|[x, y]| [lenient_number(&x), lenient_number(&y)]))
}

fn default_field_size() -> f64 {
    DEFAULT_FIELD_SIZE
}

fn default_thickness() -> u32 {
    1
}

/// Read a size tier: absent means medium, an unknown name means no size.
pub(crate) fn symbol_size(size: Option<&str>) -> Option<SymbolSize> {
    match size {
        None => Some(SymbolSize::Medium),
        Some(name) => SymbolSize::parse_lenient(name),
    }
}

// ============================================================================
// FIXED FIELDS
// ============================================================================

/// Box outline. `thickness` is in dots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub x: f64,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub y: f64,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub width: f64,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub height: f64,
    #[serde(default = "default_thickness")]
    pub thickness: u32,
}

/// Fixed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub x: f64,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub y: f64,
    #[serde(default = "default_field_size")]
    pub height: f64,
    #[serde(default = "default_field_size")]
    pub width: f64,
    #[serde(default)]
    pub orientation: Option<Orientation>,
}

/// Fixed Code 39 barcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code39 {
    pub content: String,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub x: f64,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub y: f64,
    #[serde(default = "default_field_size")]
    pub height: f64,
    #[serde(default)]
    pub orientation: Option<Orientation>,
}

// ============================================================================
// VARIABLE FIELDS
// ============================================================================

/// Text placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableText {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub x: f64,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub y: f64,
    #[serde(default = "default_field_size")]
    pub height: f64,
    #[serde(default = "default_field_size")]
    pub width: f64,
    #[serde(default)]
    pub orientation: Option<Orientation>,
}

/// Code 39 placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableCode39 {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub x: f64,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub y: f64,
    #[serde(default = "default_field_size")]
    pub height: f64,
    #[serde(default)]
    pub orientation: Option<Orientation>,
}

/// PDF417 placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariablePdf417 {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub x: f64,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub y: f64,
    #[serde(default)]
    pub orientation: Option<Orientation>,
}

/// QR code or Data Matrix placeholder.
///
/// `size` is `"small"`, `"medium"` (default) or `"large"`; any other name
/// emits the symbol without size parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableSymbol {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub x: f64,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub y: f64,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub orientation: Option<Orientation>,
}

/// One entry of `fields`, tagged by `"type"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Field {
    Border(Border),
    Text(Text),
    Code39(Code39),
    VariableText(VariableText),
    VariableCode39(VariableCode39),
    VariablePdf417(VariablePdf417),
    VariableQr(VariableSymbol),
    VariableDataMatrix(VariableSymbol),
}

impl Field {
    /// The `"type"` tag, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Border(_) => "border",
            Self::Text(_) => "text",
            Self::Code39(_) => "code39",
            Self::VariableText(_) => "variable_text",
            Self::VariableCode39(_) => "variable_code39",
            Self::VariablePdf417(_) => "variable_pdf417",
            Self::VariableQr(_) => "variable_qr",
            Self::VariableDataMatrix(_) => "variable_data_matrix",
        }
    }

    /// Whether the field is a recallable placeholder.
    pub fn is_variable(&self) -> bool {
        !matches!(self, Self::Border(_) | Self::Text(_) | Self::Code39(_))
    }
}
