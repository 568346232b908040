//! # Code Generation
//!
//! Converts IR programs to ZPL text.

use std::fmt;

use super::ops::{Op, Program};
use crate::protocol::commands;

impl Op {
    /// The ZPL text of this single op.
    pub fn to_zpl(&self) -> String {
        match self {
            // ===== Format Control =====
            Op::StartFormat => commands::start_format(),
            Op::EndFormat => commands::end_format(),
            Op::Quantity(n) => commands::print_quantity(*n),
            Op::PrintInverted => commands::print_inverted(),
            Op::LabelHome { x, y } => commands::label_home(*x, *y),
            Op::LabelTop(dots) => commands::label_top(*dots),
            Op::LabelLength(dots) => commands::label_length(*dots),
            Op::PrintWidth(dots) => commands::print_width(*dots),
            Op::FieldOrientation(rotation) => commands::field_orientation_default(*rotation),

            // ===== Stored Formats =====
            Op::DownloadFormat(name) => commands::download_format(name),
            Op::RecallFormat(name) => commands::recall_format(name),
            Op::FieldNumber(id) => commands::field_number(*id),

            // ===== Fields =====
            Op::FieldOrigin { x, y } => commands::field_origin(*x, *y),
            Op::FieldData(content) => commands::field_data(content),
            Op::FieldSeparator => commands::field_separator(),
            Op::GraphicBox {
                width,
                height,
                thickness,
            } => commands::graphic_box(*width, *height, *thickness),
            Op::Font {
                rotation,
                height,
                width,
            } => commands::scalable_font(*rotation, *height, *width),

            // ===== Barcodes =====
            Op::BarcodeDefaults {
                module_width,
                ratio,
                height,
            } => commands::bar_code_defaults(*module_width, *ratio, *height),
            Op::Code39 { rotation, height } => commands::code39(*rotation, *height),
            Op::Pdf417 {
                rotation,
                row_height,
            } => commands::pdf417(*rotation, *row_height),
            Op::QrCode { rotation, params } => commands::qr_code(*rotation, *params),
            Op::DataMatrix { rotation, params } => commands::data_matrix(*rotation, *params),
        }
    }
}

impl Program {
    /// Compile the IR program to ZPL text.
    ///
    /// Ops are concatenated in order with no separators.
    pub fn to_zpl(&self) -> String {
        self.ops.iter().map(Op::to_zpl).collect()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            f.write_str(&op.to_zpl())?;
        }
        Ok(())
    }
}
