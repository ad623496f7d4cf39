use crate::cpu::decode::Flow;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// LD r, r' (including the (HL) forms).
    pub(in crate::cpu) fn ld_r_r<const DST: u8, const SRC: u8>(
        &mut self,
        bus: &mut dyn Bus,
    ) -> Flow {
        let value = self.read_reg8(bus, SRC);
        self.write_reg8(bus, DST, value);
        Flow::Next
    }

    /// LD r, d8 and LD (HL), d8.
    pub(in crate::cpu) fn ld_r_d8<const DST: u8>(&mut self, bus: &mut dyn Bus, value: u8) -> Flow {
        self.write_reg8(bus, DST, value);
        Flow::Next
    }

    /// LD rr, d16.
    pub(in crate::cpu) fn ld_rr_d16<const PAIR: u8>(&mut self, _bus: &mut dyn Bus, value: u16) -> Flow {
        self.write_pair(PAIR, value);
        Flow::Next
    }

    /// LD (BC), A / LD (DE), A.
    pub(in crate::cpu) fn ld_at_rr_a<const PAIR: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        bus.write8(self.read_pair(PAIR), self.regs.a);
        Flow::Next
    }

    /// LD A, (BC) / LD A, (DE).
    pub(in crate::cpu) fn ld_a_at_rr<const PAIR: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        self.regs.a = bus.read8(self.read_pair(PAIR));
        Flow::Next
    }

    /// LD (HL+), A and LD (HL-), A. `DEC` selects the post-decrement form.
    pub(in crate::cpu) fn ld_hl_step_a<const DEC: bool>(&mut self, bus: &mut dyn Bus) -> Flow {
        let hl = self.regs.hl();
        bus.write8(hl, self.regs.a);
        self.regs.set_hl(step_hl::<DEC>(hl));
        Flow::Next
    }

    /// LD A, (HL+) and LD A, (HL-).
    pub(in crate::cpu) fn ld_a_hl_step<const DEC: bool>(&mut self, bus: &mut dyn Bus) -> Flow {
        let hl = self.regs.hl();
        self.regs.a = bus.read8(hl);
        self.regs.set_hl(step_hl::<DEC>(hl));
        Flow::Next
    }

    /// LD (a16), SP.
    pub(in crate::cpu) fn ld_a16_sp(&mut self, bus: &mut dyn Bus, addr: u16) -> Flow {
        bus.write16(addr, self.regs.sp);
        Flow::Next
    }

    /// LDH (a8), A.
    pub(in crate::cpu) fn ldh_a8_a(&mut self, bus: &mut dyn Bus, offset: u8) -> Flow {
        bus.write8(0xFF00 | offset as u16, self.regs.a);
        Flow::Next
    }

    /// LDH A, (a8).
    pub(in crate::cpu) fn ldh_a_a8(&mut self, bus: &mut dyn Bus, offset: u8) -> Flow {
        self.regs.a = bus.read8(0xFF00 | offset as u16);
        Flow::Next
    }

    /// LD (C), A.
    pub(in crate::cpu) fn ldh_c_a(&mut self, bus: &mut dyn Bus) -> Flow {
        bus.write8(0xFF00 | self.regs.c as u16, self.regs.a);
        Flow::Next
    }

    /// LD A, (C).
    pub(in crate::cpu) fn ldh_a_c(&mut self, bus: &mut dyn Bus) -> Flow {
        self.regs.a = bus.read8(0xFF00 | self.regs.c as u16);
        Flow::Next
    }

    /// LD (a16), A.
    pub(in crate::cpu) fn ld_a16_a(&mut self, bus: &mut dyn Bus, addr: u16) -> Flow {
        bus.write8(addr, self.regs.a);
        Flow::Next
    }

    /// LD A, (a16).
    pub(in crate::cpu) fn ld_a_a16(&mut self, bus: &mut dyn Bus, addr: u16) -> Flow {
        self.regs.a = bus.read8(addr);
        Flow::Next
    }

    /// LD HL, SP+r8.
    pub(in crate::cpu) fn ld_hl_sp_r8(&mut self, _bus: &mut dyn Bus, offset: u8) -> Flow {
        let value = self.alu_add16_signed(self.regs.sp, offset);
        self.regs.set_hl(value);
        Flow::Next
    }

    /// LD SP, HL.
    pub(in crate::cpu) fn ld_sp_hl(&mut self, _bus: &mut dyn Bus) -> Flow {
        self.regs.sp = self.regs.hl();
        Flow::Next
    }
}

#[inline]
fn step_hl<const DEC: bool>(hl: u16) -> u16 {
    if DEC {
        hl.wrapping_sub(1)
    } else {
        hl.wrapping_add(1)
    }
}
