//! # Intermediate Representation (IR)
//!
//! This module provides the IR layer for label formats. The IR is a list of
//! structured ZPL commands that sits between the label builders and the
//! final text.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────┐
//! │  Builders   │ ──► │     IR      │ ──► │ Codegen  │
//! │(Label, ...) │     │  (Vec<Op>)  │     │  (ZPL)   │
//! └─────────────┘     └─────────────┘     └──────────┘
//! ```
//!
//! ## Benefits of IR
//!
//! 1. **Inspectable**: Debug and visualize what will be sent
//! 2. **Testable**: Check individual commands without string matching
//! 3. **One serialization pass**: Text is produced only at the end
//!
//! ## Example
//!
//! ```
//! use zpl_label::ir::{Op, Program};
//!
//! let mut program = Program::with_start();
//! program.push(Op::FieldOrigin { x: 10, y: 10 });
//! program.push(Op::FieldData("HELLO".into()));
//! program.push(Op::FieldSeparator);
//! program.push(Op::Quantity(1));
//! program.push(Op::EndFormat);
//!
//! assert_eq!(program.to_zpl(), "^XA^FO10,10^FDHELLO^FS^PQ1^XZ");
//! ```

mod codegen;
mod ops;

// Re-export the ops types (codegen adds methods to Program via impl)
pub use ops::*;
