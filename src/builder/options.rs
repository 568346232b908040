//! # Field Options
//!
//! Per-field settings for the authoring calls of [`Label`](super::Label) and
//! [`Template`](super::Template). All lengths are in inches.
//!
//! ```
//! use zpl_label::builder::{SymbolSize, SymbolOptions, TextOptions};
//!
//! let text = TextOptions::default().height(0.25).width(0.2).landscape();
//! let qr = SymbolOptions::default().size(SymbolSize::Large);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::printer::Orientation;
use crate::protocol::commands::Rotation;

/// Default character and bar height, in inches.
pub const DEFAULT_FIELD_SIZE: f64 = 0.1;

// ============================================================================
// ROTATION SELECTION
// ============================================================================

/// Rotation for a text field.
///
/// Text is the odd one out: landscape prints the font normally and the
/// portrait default prints it bottom-up. Existing stored formats depend on
/// this polarity.
pub(crate) fn text_rotation(landscape: bool) -> Rotation {
    if landscape {
        Rotation::Normal
    } else {
        Rotation::BottomUp
    }
}

/// Rotation for a barcode or 2D symbol.
pub(crate) fn symbol_rotation(landscape: bool) -> Rotation {
    if landscape {
        Rotation::BottomUp
    } else {
        Rotation::Normal
    }
}

// ============================================================================
// TEXT
// ============================================================================

/// Options for text fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOptions {
    /// Character height in inches (default 0.1).
    pub height: f64,
    /// Character width in inches (default 0.1).
    pub width: f64,
    /// Per-field orientation override.
    pub orientation: Option<Orientation>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            height: DEFAULT_FIELD_SIZE,
            width: DEFAULT_FIELD_SIZE,
            orientation: None,
        }
    }
}

impl TextOptions {
    /// Set the character height in inches.
    pub fn height(mut self, inches: f64) -> Self {
        self.height = inches;
        self
    }

    /// Set the character width in inches.
    pub fn width(mut self, inches: f64) -> Self {
        self.width = inches;
        self
    }

    /// Set the field orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Shorthand for `orientation(Orientation::Landscape)`.
    pub fn landscape(self) -> Self {
        self.orientation(Orientation::Landscape)
    }
}

// ============================================================================
// 1D BARCODES
// ============================================================================

/// Options for Code 39 barcodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarcodeOptions {
    /// Bar height in inches (default 0.1).
    pub height: f64,
    /// Per-field orientation override.
    pub orientation: Option<Orientation>,
}

impl Default for BarcodeOptions {
    fn default() -> Self {
        Self {
            height: DEFAULT_FIELD_SIZE,
            orientation: None,
        }
    }
}

impl BarcodeOptions {
    /// Set the bar height in inches.
    pub fn height(mut self, inches: f64) -> Self {
        self.height = inches;
        self
    }

    /// Set the field orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Shorthand for `orientation(Orientation::Landscape)`.
    pub fn landscape(self) -> Self {
        self.orientation(Orientation::Landscape)
    }
}

/// Options for PDF417 symbols.
///
/// Row height is derived from the resolution, so orientation is the only
/// setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pdf417Options {
    /// Per-field orientation override.
    pub orientation: Option<Orientation>,
}

impl Pdf417Options {
    /// Set the field orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Shorthand for `orientation(Orientation::Landscape)`.
    pub fn landscape(self) -> Self {
        self.orientation(Orientation::Landscape)
    }
}

// ============================================================================
// 2D SYMBOLS
// ============================================================================

/// Size tier for QR and Data Matrix symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SymbolSize {
    /// `^BQ` parameter pair for this tier.
    pub fn qr_params(self) -> (u32, u32) {
        match self {
            Self::Small => (1, 5),
            Self::Medium => (2, 10),
            Self::Large => (4, 20),
        }
    }

    /// `^BX` element height and quality level (ECC 200) for this tier.
    pub fn data_matrix_params(self) -> (u32, u32) {
        match self {
            Self::Small => (10, 200),
            Self::Medium => (20, 200),
            Self::Large => (40, 200),
        }
    }

    /// Parse a tier name, mapping unknown names to `None`.
    ///
    /// A `None` size emits the symbol command without size parameters, so a
    /// misspelled tier still produces a scannable symbol at the printer's
    /// default size.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.parse() {
            Ok(size) => Some(size),
            Err(()) => {
                tracing::warn!(size = s, "unknown symbol size, size parameters omitted");
                None
            }
        }
    }
}

impl FromStr for SymbolSize {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(()),
        }
    }
}

/// Options for QR and Data Matrix symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolOptions {
    /// Size tier. `None` omits the size parameters (default: medium).
    pub size: Option<SymbolSize>,
    /// Per-field orientation override.
    pub orientation: Option<Orientation>,
}

impl Default for SymbolOptions {
    fn default() -> Self {
        Self {
            size: Some(SymbolSize::Medium),
            orientation: None,
        }
    }
}

impl SymbolOptions {
    /// Set the size tier.
    pub fn size(mut self, size: SymbolSize) -> Self {
        self.size = Some(size);
        self
    }

    /// Emit the symbol without size parameters.
    pub fn printer_default_size(mut self) -> Self {
        self.size = None;
        self
    }

    /// Set the field orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Shorthand for `orientation(Orientation::Landscape)`.
    pub fn landscape(self) -> Self {
        self.orientation(Orientation::Landscape)
    }
}
