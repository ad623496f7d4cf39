use crate::error::{GbError, Result};

use super::decode::{Flow, Instruction, Operation};
use super::table::BASE_TABLE;
use super::{Bus, Cpu};

impl Cpu {
    /// Execute one step and return the number of ticks consumed.
    ///
    /// A step is one of: an idle tick while halted or stopped, one
    /// interrupt entry, or one instruction (a CB-prefixed opcode counts as
    /// a single instruction).
    pub fn step(&mut self, bus: &mut dyn Bus) -> Result<u32> {
        if let Some((opcode, pc)) = self.locked {
            return Err(GbError::FatalDecode { opcode, pc });
        }

        if self.stopped {
            return Ok(4);
        }

        if self.halted {
            if bus.interrupts().pending().is_empty() {
                return Ok(4);
            }
            // Wake up. With IME clear the pending interrupt is not taken
            // and execution simply continues after the HALT.
            self.halted = false;
        }

        if let Some(ticks) = self.handle_interrupts(bus) {
            return Ok(ticks);
        }

        let pc = self.regs.pc;
        let opcode = self.fetch_opcode(bus);
        let Some(instruction) = BASE_TABLE[opcode as usize].as_ref() else {
            return Err(self.lock(opcode, pc));
        };

        let flow = match instruction.operation {
            Operation::NoOperand(handler) => {
                self.trace(pc, instruction, None);
                handler(self, bus)
            }
            Operation::Imm8(handler) => {
                let operand = bus.read8(self.regs.pc);
                self.trace(pc, instruction, Some(operand as u16));
                handler(self, bus, operand)
            }
            Operation::Imm16(handler) => {
                let operand = bus.read16(self.regs.pc);
                self.trace(pc, instruction, Some(operand));
                handler(self, bus, operand)
            }
        };

        let ticks = match flow {
            Flow::Next => {
                self.regs.pc = self.regs.pc.wrapping_add(instruction.width());
                instruction.ticks as u32
            }
            Flow::Jump => instruction.taken_ticks as u32,
            Flow::Prefixed(extra) => {
                self.regs.pc = self.regs.pc.wrapping_add(instruction.width());
                instruction.ticks as u32 + extra as u32
            }
        };

        self.apply_ime_delay(bus);
        Ok(ticks)
    }

    /// Latch the locked state for an opcode with no handler.
    fn lock(&mut self, opcode: u8, pc: u16) -> GbError {
        let regs = &self.regs;
        log::error!(
            "GB CPU: invalid opcode 0x{:02X} at pc=0x{:04X}; locking CPU (af=0x{:04X} bc=0x{:04X} de=0x{:04X} hl=0x{:04X} sp=0x{:04X})",
            opcode,
            pc,
            regs.af(),
            regs.bc(),
            regs.de(),
            regs.hl(),
            regs.sp,
        );
        // Leave PC on the offending opcode.
        self.regs.pc = pc;
        self.locked = Some((opcode, pc));
        GbError::FatalDecode { opcode, pc }
    }

    #[inline]
    fn trace(&self, pc: u16, instruction: &Instruction, operand: Option<u16>) {
        if !log::log_enabled!(log::Level::Trace) {
            return;
        }
        match operand {
            Some(value) => log::trace!(
                "GB CPU: {:04X} {:<12} ${:0width$X}",
                pc,
                instruction.mnemonic,
                value,
                width = instruction.width() as usize * 2,
            ),
            None => log::trace!("GB CPU: {:04X} {}", pc, instruction.mnemonic),
        }
    }
}
