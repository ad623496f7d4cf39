use crate::cpu::decode::Flow;
use crate::cpu::{Bus, Cpu};

// Handlers are entered with PC at the first operand byte, so the address
// of the next instruction is `pc + width`.

impl Cpu {
    /// JP a16.
    pub(in crate::cpu) fn jp(&mut self, _bus: &mut dyn Bus, addr: u16) -> Flow {
        self.regs.pc = addr;
        Flow::Jump
    }

    /// JP cc, a16.
    pub(in crate::cpu) fn jp_cc<const CC: u8>(&mut self, bus: &mut dyn Bus, addr: u16) -> Flow {
        if self.condition(CC) {
            self.jp(bus, addr)
        } else {
            Flow::Next
        }
    }

    /// JP HL.
    pub(in crate::cpu) fn jp_hl(&mut self, _bus: &mut dyn Bus) -> Flow {
        self.regs.pc = self.regs.hl();
        Flow::Jump
    }

    /// JR r8. The displacement is relative to the following instruction.
    pub(in crate::cpu) fn jr(&mut self, _bus: &mut dyn Bus, offset: u8) -> Flow {
        let next = self.regs.pc.wrapping_add(1);
        self.regs.pc = next.wrapping_add(offset as i8 as i16 as u16);
        Flow::Jump
    }

    /// JR cc, r8.
    pub(in crate::cpu) fn jr_cc<const CC: u8>(&mut self, bus: &mut dyn Bus, offset: u8) -> Flow {
        if self.condition(CC) {
            self.jr(bus, offset)
        } else {
            Flow::Next
        }
    }

    /// CALL a16.
    pub(in crate::cpu) fn call(&mut self, bus: &mut dyn Bus, addr: u16) -> Flow {
        let ret = self.regs.pc.wrapping_add(2);
        self.push_u16(bus, ret);
        self.regs.pc = addr;
        Flow::Jump
    }

    /// CALL cc, a16.
    pub(in crate::cpu) fn call_cc<const CC: u8>(&mut self, bus: &mut dyn Bus, addr: u16) -> Flow {
        if self.condition(CC) {
            self.call(bus, addr)
        } else {
            Flow::Next
        }
    }

    /// RET.
    pub(in crate::cpu) fn ret(&mut self, bus: &mut dyn Bus) -> Flow {
        self.regs.pc = self.pop_u16(bus);
        Flow::Jump
    }

    /// RET cc.
    pub(in crate::cpu) fn ret_cc<const CC: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        if self.condition(CC) {
            self.ret(bus)
        } else {
            Flow::Next
        }
    }

    /// RETI: return and re-enable interrupts immediately (no EI delay).
    pub(in crate::cpu) fn reti(&mut self, bus: &mut dyn Bus) -> Flow {
        bus.interrupts().ime = true;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        self.ret(bus)
    }

    /// RST n.
    pub(in crate::cpu) fn rst<const VECTOR: u16>(&mut self, bus: &mut dyn Bus) -> Flow {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = VECTOR;
        Flow::Jump
    }
}
