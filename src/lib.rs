mod classify;
mod error;
mod opcode;
mod validate;

pub mod cli;

pub use classify::{classify, Instruction};
pub use error::{Error, Result};
pub use opcode::{Opcode, MAX_INSTRUCTIONS};
pub use validate::{validate_instructions, ValidationReport};

/// Classifies `source` and checks it against the instruction set.
///
/// Never fails: problems with the program end up in the report's errors.
pub fn validate(source: &str) -> ValidationReport {
    validate_instructions(classify(source))
}
