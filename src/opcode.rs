use std::fmt;

/// Longest program the state machine's instruction memory can hold.
pub const MAX_INSTRUCTIONS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Jump,
    Wait,
    In,
    Out,
    Push,
    Pull,
    Move,
    Irq,
    Set,
    Nop,
}

impl Opcode {
    pub const ALL: [Opcode; 10] = [
        Opcode::Jump,
        Opcode::Wait,
        Opcode::In,
        Opcode::Out,
        Opcode::Push,
        Opcode::Pull,
        Opcode::Move,
        Opcode::Irq,
        Opcode::Set,
        Opcode::Nop,
    ];

    /// Looks up a lowercase mnemonic. Case folding is the classifier's job.
    pub fn from_mnemonic(word: &str) -> Option<Self> {
        match word {
            "jmp" => Some(Opcode::Jump),
            "wait" => Some(Opcode::Wait),
            "in" => Some(Opcode::In),
            "out" => Some(Opcode::Out),
            "push" => Some(Opcode::Push),
            "pull" => Some(Opcode::Pull),
            "mov" => Some(Opcode::Move),
            "irq" => Some(Opcode::Irq),
            "set" => Some(Opcode::Set),
            "nop" => Some(Opcode::Nop),
            _ => None,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Jump => "jmp",
            Opcode::Wait => "wait",
            Opcode::In => "in",
            Opcode::Out => "out",
            Opcode::Push => "push",
            Opcode::Pull => "pull",
            Opcode::Move => "mov",
            Opcode::Irq => "irq",
            Opcode::Set => "set",
            Opcode::Nop => "nop",
        }
    }

    pub fn is_known(word: &str) -> bool {
        Self::from_mnemonic(word).is_some()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
