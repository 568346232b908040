//! # Recall Jobs
//!
//! Prints a format stored with [`Template`](super::Template) by filling its
//! numbered placeholders.
//!
//! ```
//! use zpl_label::builder::Recall;
//!
//! let job = Recall::new("SHIP")
//!     .unwrap()
//!     .field(1, "ACME Corp")
//!     .field(2, "1Z999")
//!     .quantity(2);
//!
//! assert_eq!(
//!     job.to_zpl(),
//!     "^XA^XFSHIP^FS^FN1^FDACME Corp^FS^FN2^FD1Z999^FS^PQ2^XZ"
//! );
//! ```

use std::fmt;

use crate::error::ZplError;
use crate::ir::{Op, Program};

/// A print job for a stored format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recall {
    name: String,
    fields: Vec<(u32, String)>,
    quantity: u32,
}

impl Recall {
    /// Recall the format stored under `name`.
    pub fn new(name: &str) -> Result<Self, ZplError> {
        if name.trim().is_empty() {
            return Err(ZplError::BlankTemplateName);
        }
        Ok(Self::for_template(name))
    }

    /// Name already checked by the template.
    pub(crate) fn for_template(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fields: Vec::new(),
            quantity: 1,
        }
    }

    /// Supply data for field number `id`. Fields are emitted in call order.
    pub fn field(mut self, id: u32, data: impl Into<String>) -> Self {
        self.fields.push((id, data.into()));
        self
    }

    /// Set the number of copies (minimum 1).
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    /// The name of the recalled format.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compile to IR.
    pub fn to_program(&self) -> Program {
        let mut program = Program::with_start();
        program.push(Op::RecallFormat(self.name.clone()));
        program.push(Op::FieldSeparator);
        for (id, data) in &self.fields {
            program.push(Op::FieldNumber(*id));
            program.push(Op::FieldData(data.clone()));
            program.push(Op::FieldSeparator);
        }
        program.push(Op::Quantity(self.quantity));
        program.push(Op::EndFormat);
        program
    }

    /// Serialize to ZPL text.
    pub fn to_zpl(&self) -> String {
        self.to_program().to_zpl()
    }
}

impl fmt::Display for Recall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_program())
    }
}
