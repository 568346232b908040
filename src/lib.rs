//! # zpl-label - ZPL Label Encoder
//!
//! zpl-label turns label layouts described in inches into ZPL II, the command
//! language of Zebra thermal label printers. It provides:
//!
//! - **Labels**: fixed text, Code 39 barcodes and borders, printed immediately
//! - **Templates**: formats stored on the printer with numbered placeholders
//! - **Recall jobs**: print a stored format with data for each placeholder
//! - **Documents**: the same, described as JSON
//!
//! ## Quick Start
//!
//! ```
//! use zpl_label::builder::{BarcodeOptions, Label, LabelConfig, TextOptions};
//!
//! let mut label = Label::new(LabelConfig {
//!     home: Some((30.0, 30.0)),
//!     ..Default::default()
//! })?;
//!
//! label
//!     .draw_border(0.0, 0.0, 400.0, 300.0)
//!     .text_field("ZEBRA", 10.0, 10.0, TextOptions::default())
//!     .bar_code_39("ZEBRA", 10.0, 30.0, BarcodeOptions::default());
//!
//! assert_eq!(
//!     label.to_zpl(),
//!     "^XA^LH30,30^FO0,0^GB81200,60900,1^FS^FO2030,2030^A0B,20,20^FDZEBRA^FS\
//!      ^FO2030,6090^B3N,Y,20,N,N^FDZEBRA^FS^PQ1^XZ"
//! );
//!
//! # Ok::<(), zpl_label::error::ZplError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`builder`] | Label, template and recall builders |
//! | [`document`] | JSON label documents |
//! | [`ir`] | Structured command list and codegen |
//! | [`protocol`] | ZPL command builders |
//! | [`units`] | Inch to dot conversion |
//! | [`printer`] | Printhead resolutions |
//! | [`error`] | Error types |

pub mod builder;
pub mod document;
pub mod error;
pub mod ir;
pub mod printer;
pub mod protocol;
pub mod units;

// Re-exports for convenience
pub use builder::{Label, Recall, Template};
pub use error::ZplError;
pub use printer::PrinterConfig;
