//! Sharp LR35902 CPU core.
//!
//! Instructions are dispatched through two static descriptor tables
//! (`table::BASE_TABLE` and `cb_table::CB_TABLE`). Each descriptor carries
//! the operand width, tick costs and a plain function pointer, so decoding
//! is an array index and a match on the operand kind.

mod alu;
mod bus;
mod cb_table;
mod decode;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;
mod table;

pub use bus::Bus;
pub use decode::{CbInstruction, Flow, Instruction, Operation};
pub use regs::{Flag, Registers};

/// Ticks charged for entering an interrupt handler.
pub const INTERRUPT_TICKS: u32 = 12;

/// Look up the descriptor for a base opcode. `None` marks an opcode hole.
pub fn base_instruction(opcode: u8) -> Option<&'static Instruction> {
    table::BASE_TABLE[opcode as usize].as_ref()
}

/// Look up the descriptor for a CB-prefixed opcode.
pub fn cb_instruction(opcode: u8) -> &'static CbInstruction {
    &cb_table::CB_TABLE[opcode as usize]
}

/// Game Boy CPU core.
///
/// Interrupt master enable lives in the bus-owned `InterruptController`;
/// the CPU only keeps the EI delay latches.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub halted: bool,
    /// Set by STOP. The machine loop treats this as the end of the run.
    stopped: bool,
    /// HALT executed with IME=0 while an interrupt was already pending:
    /// the next opcode fetch does not advance PC.
    halt_bug: bool,
    ime_enable_pending: bool,
    ime_enable_delay: bool,
    /// Opcode and PC of the unhandled opcode that locked the CPU.
    locked: Option<(u8, u16)>,
}

impl Cpu {
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked.is_some()
    }
}
