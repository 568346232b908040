//! # ZPL Protocol Implementation
//!
//! This module provides low-level command builders for ZPL II, the label
//! description language of Zebra thermal printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Format control, stored formats, fields and barcodes
//!
//! ## Usage Example
//!
//! ```
//! use zpl_label::protocol::commands::{self, Rotation};
//!
//! let mut zpl = String::new();
//! zpl.push_str(&commands::start_format());
//! zpl.push_str(&commands::field_origin(20, 20));
//! zpl.push_str(&commands::scalable_font(Rotation::Normal, 30, 30));
//! zpl.push_str(&commands::field_data("HELLO"));
//! zpl.push_str(&commands::field_separator());
//! zpl.push_str(&commands::end_format());
//!
//! assert_eq!(zpl, "^XA^FO20,20^A0N,30,30^FDHELLO^FS^XZ");
//! ```
//!
//! ## Protocol Reference
//!
//! This implementation is based on the "ZPL II Programming Guide" by Zebra
//! Technologies.

pub mod commands;
