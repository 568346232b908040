//! # Label Builders
//!
//! Stateful builders that accumulate a ZPL program from authoring calls.
//!
//! | Builder | Output |
//! |---------|--------|
//! | [`Label`] | A label printed immediately (`^XA ... ^PQn^XZ`) |
//! | [`Template`] | A format stored on the printer (`^XA ... ^DFname^FS ...`) |
//! | [`Recall`] | A job printing a stored format with field data |
//!
//! All positions and sizes are in inches and converted to dots with the
//! configured resolution. Builders assume a single writer; wrap one in a
//! mutex to share it between threads.

mod label;
mod options;
mod recall;
mod template;

pub use label::{Label, LabelConfig};
pub use options::{
    BarcodeOptions, DEFAULT_FIELD_SIZE, Pdf417Options, SymbolOptions, SymbolSize, TextOptions,
};
pub use recall::Recall;
pub use template::{Template, TemplateConfig};
