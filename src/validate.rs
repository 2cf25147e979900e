use log::debug;
use serde::Serialize;

use crate::classify::Instruction;
use crate::opcode::{Opcode, MAX_INSTRUCTIONS};

/// Outcome of one validation pass.
///
/// Holds every classified instruction, including the ones that were
/// rejected, so callers can render per-line diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    valid: bool,
    instructions: Vec<Instruction>,
    errors: Vec<String>,
}

impl ValidationReport {
    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Checks classified instructions against the opcode set and the program
/// length limit. Every rule runs; nothing short-circuits.
pub fn validate_instructions(instructions: Vec<Instruction>) -> ValidationReport {
    let mut errors: Vec<String> = instructions
        .iter()
        .filter(|ins| !Opcode::is_known(&ins.op))
        .map(|ins| format!("line {}: unknown opcode '{}'", ins.line, ins.op))
        .collect();

    if instructions.len() > MAX_INSTRUCTIONS {
        errors.push(format!(
            "program has {} instructions, max is {}",
            instructions.len(),
            MAX_INSTRUCTIONS
        ));
    }

    debug!(
        "validated {} instructions, {} errors",
        instructions.len(),
        errors.len()
    );

    ValidationReport {
        valid: errors.is_empty(),
        instructions,
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ins(line: usize, op: &str) -> Instruction {
        Instruction {
            line,
            op: op.to_owned(),
            args: String::new(),
            comment: String::new(),
        }
    }

    #[test]
    fn accepts_known_ops() {
        let program = Opcode::ALL
            .iter()
            .enumerate()
            .map(|(i, op)| ins(i + 1, op.mnemonic()))
            .collect();
        let report = validate_instructions(program);

        assert!(report.valid());
        assert!(report.errors().is_empty());
        assert_eq!(report.instructions().len(), Opcode::ALL.len());
    }

    #[test]
    fn accepts_empty_program() {
        let report = validate_instructions(vec![]);
        assert!(report.valid());
        assert!(report.instructions().is_empty());
    }

    #[test]
    fn reports_unknown_ops() {
        let report = validate_instructions(vec![ins(1, "set"), ins(4, "badop"), ins(7, "hlt")]);

        assert!(!report.valid());
        assert_eq!(
            report.errors(),
            [
                "line 4: unknown opcode 'badop'".to_owned(),
                "line 7: unknown opcode 'hlt'".to_owned(),
            ]
        );
        // rejected instructions are still reported
        assert_eq!(report.instructions().len(), 3);
    }

    #[test]
    fn length_limit() {
        let at_limit = (1..=MAX_INSTRUCTIONS).map(|i| ins(i, "nop")).collect();
        assert!(validate_instructions(at_limit).valid());

        let over = (1..=MAX_INSTRUCTIONS + 1).map(|i| ins(i, "nop")).collect();
        let report = validate_instructions(over);
        assert!(!report.valid());
        assert_eq!(report.errors(), ["program has 33 instructions, max is 32".to_owned()]);
        assert_eq!(report.instructions().len(), 33);
    }

    #[test]
    fn length_error_comes_last() {
        let mut program: Vec<_> = (1..=40).map(|i| ins(i, "nop")).collect();
        program[2].op = "foo".into();
        program[30].op = "bar".into();

        let report = validate_instructions(program);
        assert_eq!(
            report.errors(),
            [
                "line 3: unknown opcode 'foo'".to_owned(),
                "line 31: unknown opcode 'bar'".to_owned(),
                "program has 40 instructions, max is 32".to_owned(),
            ]
        );
    }
}
