use super::{Bus, Cpu};

// Register operand indices, in opcode encoding order.
pub(super) const R_B: u8 = 0;
pub(super) const R_C: u8 = 1;
pub(super) const R_D: u8 = 2;
pub(super) const R_E: u8 = 3;
pub(super) const R_H: u8 = 4;
pub(super) const R_L: u8 = 5;
pub(super) const R_HL: u8 = 6;
pub(super) const R_A: u8 = 7;

// Register pair indices. `P_SP` and `P_AF` share index 3; which one is
// meant depends on the instruction (PUSH/POP use AF).
pub(super) const P_BC: u8 = 0;
pub(super) const P_DE: u8 = 1;
pub(super) const P_HL: u8 = 2;
pub(super) const P_SP: u8 = 3;
pub(super) const P_AF: u8 = 3;

// Branch conditions.
pub(super) const CC_NZ: u8 = 0;
pub(super) const CC_Z: u8 = 1;
pub(super) const CC_NC: u8 = 2;
pub(super) const CC_C: u8 = 3;

/// What the outer loop should do after a handler returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Step PC past the operand bytes and charge the base cost.
    Next,
    /// The handler wrote PC itself. PC is left alone and the taken cost
    /// is charged.
    Jump,
    /// A CB-prefixed instruction ran; its own cost is added on top of the
    /// prefix's base cost.
    Prefixed(u8),
}

/// Handler binding for one opcode. The variant fixes the operand width.
///
/// Handlers run with PC pointing at the first operand byte (or at the next
/// opcode for `NoOperand`).
#[derive(Clone, Copy)]
pub enum Operation {
    NoOperand(fn(&mut Cpu, &mut dyn Bus) -> Flow),
    Imm8(fn(&mut Cpu, &mut dyn Bus, u8) -> Flow),
    Imm16(fn(&mut Cpu, &mut dyn Bus, u16) -> Flow),
}

impl Operation {
    /// Operand width in bytes.
    #[inline]
    pub const fn width(&self) -> u16 {
        match self {
            Operation::NoOperand(_) => 0,
            Operation::Imm8(_) => 1,
            Operation::Imm16(_) => 2,
        }
    }
}

/// Static opcode descriptor.
#[derive(Clone, Copy)]
pub struct Instruction {
    pub mnemonic: &'static str,
    /// Cost in ticks when the instruction falls through.
    pub ticks: u8,
    /// Cost when a conditional branch is taken. Equal to `ticks` for
    /// everything else.
    pub taken_ticks: u8,
    pub operation: Operation,
}

impl Instruction {
    pub(super) const fn none(
        mnemonic: &'static str,
        ticks: u8,
        handler: fn(&mut Cpu, &mut dyn Bus) -> Flow,
    ) -> Self {
        Self {
            mnemonic,
            ticks,
            taken_ticks: ticks,
            operation: Operation::NoOperand(handler),
        }
    }

    pub(super) const fn imm8(
        mnemonic: &'static str,
        ticks: u8,
        handler: fn(&mut Cpu, &mut dyn Bus, u8) -> Flow,
    ) -> Self {
        Self {
            mnemonic,
            ticks,
            taken_ticks: ticks,
            operation: Operation::Imm8(handler),
        }
    }

    pub(super) const fn imm16(
        mnemonic: &'static str,
        ticks: u8,
        handler: fn(&mut Cpu, &mut dyn Bus, u16) -> Flow,
    ) -> Self {
        Self {
            mnemonic,
            ticks,
            taken_ticks: ticks,
            operation: Operation::Imm16(handler),
        }
    }

    /// Override the cost charged when a conditional branch is taken.
    pub(super) const fn taken(mut self, ticks: u8) -> Self {
        self.taken_ticks = ticks;
        self
    }

    #[inline]
    pub const fn width(&self) -> u16 {
        self.operation.width()
    }
}

/// Descriptor for a CB-prefixed opcode. These never take an operand, so
/// the handler is stored directly.
#[derive(Clone, Copy)]
pub struct CbInstruction {
    pub mnemonic: &'static str,
    /// Cost in ticks on top of the prefix entry.
    pub ticks: u8,
    pub handler: fn(&mut Cpu, &mut dyn Bus) -> Flow,
}

impl CbInstruction {
    pub(super) const fn new(
        mnemonic: &'static str,
        ticks: u8,
        handler: fn(&mut Cpu, &mut dyn Bus) -> Flow,
    ) -> Self {
        Self {
            mnemonic,
            ticks,
            handler,
        }
    }
}

impl std::fmt::Debug for CbInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CbInstruction")
            .field("mnemonic", &self.mnemonic)
            .field("ticks", &self.ticks)
            .finish()
    }
}

impl std::fmt::Debug for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instruction")
            .field("mnemonic", &self.mnemonic)
            .field("width", &self.width())
            .field("ticks", &self.ticks)
            .field("taken_ticks", &self.taken_ticks)
            .finish()
    }
}
