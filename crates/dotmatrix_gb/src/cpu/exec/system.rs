use crate::cpu::cb_table::CB_TABLE;
use crate::cpu::decode::Flow;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn nop(&mut self, _bus: &mut dyn Bus) -> Flow {
        Flow::Next
    }

    /// HALT.
    ///
    /// With IME set, or with nothing pending, the CPU suspends until
    /// `IE & IF` becomes non-zero. With IME clear and an interrupt already
    /// pending the CPU does not halt; instead the following opcode fetch
    /// fails to advance PC (the HALT bug).
    pub(in crate::cpu) fn halt(&mut self, bus: &mut dyn Bus) -> Flow {
        let interrupts = bus.interrupts();
        if interrupts.ime || interrupts.pending().is_empty() {
            self.halted = true;
        } else {
            self.halt_bug = true;
        }
        Flow::Next
    }

    /// STOP. The padding byte is consumed as an operand and ignored.
    pub(in crate::cpu) fn stop(&mut self, _bus: &mut dyn Bus, _padding: u8) -> Flow {
        log::info!("GB CPU: STOP at pc=0x{:04X}", self.regs.pc.wrapping_sub(1));
        self.stopped = true;
        self.halted = false;
        Flow::Next
    }

    /// DI. Also cancels an EI that has not taken effect yet.
    pub(in crate::cpu) fn di(&mut self, bus: &mut dyn Bus) -> Flow {
        bus.interrupts().ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        Flow::Next
    }

    /// EI. IME becomes 1 after the *next* instruction completes.
    pub(in crate::cpu) fn ei(&mut self, _bus: &mut dyn Bus) -> Flow {
        self.ime_enable_pending = true;
        Flow::Next
    }

    /// 0xCB prefix: the operand byte selects an entry in the CB table.
    pub(in crate::cpu) fn prefixed(&mut self, bus: &mut dyn Bus, opcode: u8) -> Flow {
        let instruction = &CB_TABLE[opcode as usize];
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("GB CPU:   CB {:02X} {}", opcode, instruction.mnemonic);
        }
        (instruction.handler)(self, bus);
        Flow::Prefixed(instruction.ticks)
    }
}
