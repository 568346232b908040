//! # Printer Configuration
//!
//! This module defines the printhead resolutions of Zebra label printers and
//! the label orientation setting.
//!
//! ## Supported Resolutions
//!
//! | Printhead | Dots/mm | Resolution |
//! |-----------|---------|------------|
//! | 6 dpmm  | 6  | 152 DPI |
//! | 8 dpmm  | 8  | 203 DPI |
//! | 12 dpmm | 12 | 300 DPI |
//! | 24 dpmm | 24 | 600 DPI |
//!
//! ## Usage
//!
//! ```
//! use zpl_label::printer::PrinterConfig;
//!
//! let config = PrinterConfig::DPI_203;
//! assert_eq!(config.dpi, 203);
//!
//! let parsed = PrinterConfig::parse("12dpmm").unwrap();
//! assert_eq!(parsed.dpi, 300);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ZplError;

/// # Printer Configuration
///
/// The only hardware property the encoder needs is the printhead
/// resolution: every inch-based coordinate is multiplied by `dpi` before it
/// is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Printhead name
    pub name: &'static str,

    /// Resolution in dots per inch
    pub dpi: u32,
}

impl PrinterConfig {
    /// 6 dpmm printhead (152 DPI).
    pub const DPI_152: Self = Self {
        name: "6 dpmm",
        dpi: 152,
    };

    /// # 8 dpmm printhead (203 DPI)
    ///
    /// The most common Zebra desktop resolution (GK420, ZD420, LP 2844).
    pub const DPI_203: Self = Self {
        name: "8 dpmm",
        dpi: 203,
    };

    /// 12 dpmm printhead (300 DPI).
    pub const DPI_300: Self = Self {
        name: "12 dpmm",
        dpi: 300,
    };

    /// 24 dpmm printhead (600 DPI).
    pub const DPI_600: Self = Self {
        name: "24 dpmm",
        dpi: 600,
    };

    /// All built-in printhead presets.
    pub const BUILT_IN: [Self; 4] = [Self::DPI_152, Self::DPI_203, Self::DPI_300, Self::DPI_600];

    /// A configuration with an arbitrary resolution.
    ///
    /// Zero dots per inch cannot place anything and is rejected.
    pub fn custom(dpi: u32) -> Result<Self, ZplError> {
        if dpi == 0 {
            return Err(ZplError::InvalidResolution(dpi));
        }
        Ok(Self {
            name: "custom",
            dpi,
        })
    }

    /// Parse a printhead description (CLI args).
    ///
    /// Formats:
    /// - `"8dpmm"` / `"8 dpmm"` → built-in preset by dots per millimeter
    /// - `"203"` / `"203dpi"` → any resolution in dots per inch
    pub fn parse(s: &str) -> Result<Self, ZplError> {
        let lower = s.trim().to_lowercase().replace(' ', "");

        if let Some(preset) = Self::BUILT_IN
            .into_iter()
            .find(|p| p.name.replace(' ', "") == lower)
        {
            return Ok(preset);
        }

        let digits = lower.strip_suffix("dpi").unwrap_or(&lower);
        let dpi: u32 = digits.parse().map_err(|_| {
            ZplError::InvalidField(format!(
                "Unknown printer '{}'. Use a resolution like '203' or a head like '8dpmm'",
                s
            ))
        })?;

        Self::BUILT_IN
            .into_iter()
            .find(|p| p.dpi == dpi)
            .map(Ok)
            .unwrap_or_else(|| Self::custom(dpi))
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::DPI_203
    }
}

// ============================================================================
// ORIENTATION
// ============================================================================

/// Label orientation.
///
/// Portrait is the printer's native feed direction. Landscape selects the
/// rotated variant of field commands (see [`crate::protocol::commands::Rotation`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn is_landscape(self) -> bool {
        self == Self::Landscape
    }
}

// ============================================================================
// TESTS
// ============================================================================
