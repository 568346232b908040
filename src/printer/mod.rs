//! # Printer Module
//!
//! This module provides printer-specific configurations.
//!
//! ## Modules
//!
//! - [`config`]: Printhead resolutions and label orientation

pub mod config;

pub use config::{Orientation, PrinterConfig};
