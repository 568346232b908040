//! # IR Opcodes
//!
//! This module defines the intermediate representation (IR) for label
//! formats. The IR is a sequence of opcodes that can be inspected and
//! compiled to ZPL text.
//!
//! ## Design Philosophy
//!
//! The IR sits between the label builders and the wire text:
//!
//! ```text
//! Label / Template builders → IR (inspectable) → Codegen → ZPL
//! ```
//!
//! Each opcode is one ZPL command with its parameters already converted to
//! dots. Field data and separators are individual ops so a field reads in
//! the program exactly as it does on the wire.

use crate::protocol::commands::Rotation;

/// IR opcodes - one per ZPL command.
///
/// The IR can be:
/// - Inspected for debugging (`{:#?}`)
/// - Compared in tests without string matching
/// - Compiled to ZPL text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    // ========== Format Control ==========
    /// Start of label format (^XA).
    StartFormat,

    /// End of label format (^XZ).
    EndFormat,

    /// Number of copies (^PQ).
    Quantity(u32),

    /// Rotate the whole label 180° (^POI).
    PrintInverted,

    /// Label home position in dots (^LH).
    LabelHome { x: i64, y: i64 },

    /// Vertical shift in dots (^LT).
    LabelTop(i64),

    /// Label length in dots (^LL).
    LabelLength(i64),

    /// Print width in dots (^PW).
    PrintWidth(i64),

    /// Default rotation for following fields (^FW).
    FieldOrientation(Rotation),

    // ========== Stored Formats ==========
    /// Store the format under a name (^DF).
    DownloadFormat(String),

    /// Recall a stored format (^XF).
    RecallFormat(String),

    /// Field number placeholder / selector (^FN).
    FieldNumber(u32),

    // ========== Fields ==========
    /// Field anchor in dots (^FO).
    FieldOrigin { x: i64, y: i64 },

    /// Literal field content (^FD).
    FieldData(String),

    /// End of field (^FS).
    FieldSeparator,

    /// Box outline (^GB). Thickness is a line weight, not a distance.
    GraphicBox {
        width: i64,
        height: i64,
        thickness: u32,
    },

    /// Scalable font 0 (^A0).
    Font {
        rotation: Rotation,
        height: i64,
        width: i64,
    },

    // ========== Barcodes ==========
    /// Module width, ratio and default height for following barcodes (^BY).
    BarcodeDefaults {
        module_width: u32,
        ratio: u32,
        height: u32,
    },

    /// Code 39 (^B3).
    Code39 { rotation: Rotation, height: i64 },

    /// PDF417 (^B7).
    Pdf417 { rotation: Rotation, row_height: i64 },

    /// QR code (^BQ). `None` leaves printer defaults for the size.
    QrCode {
        rotation: Rotation,
        params: Option<(u32, u32)>,
    },

    /// Data Matrix (^BX). `None` leaves printer defaults for the size.
    DataMatrix {
        rotation: Rotation,
        params: Option<(u32, u32)>,
    },
}

/// A label format program.
///
/// Contains a sequence of ops that compile to ZPL text in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    /// Create a program with an initial StartFormat op.
    pub fn with_start() -> Self {
        Self {
            ops: vec![Op::StartFormat],
        }
    }

    /// Add an op to the program.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Get the number of ops in the program.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the program is empty.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The `^FN` numbers in program order.
    pub fn field_numbers(&self) -> Vec<u32> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::FieldNumber(id) => Some(*id),
                _ => None,
            })
            .collect()
    }
}
