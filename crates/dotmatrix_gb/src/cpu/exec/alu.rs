use crate::cpu::decode::Flow;
use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A, r (0x80-0xBF).
    pub(in crate::cpu) fn alu_r<const OP: u8, const SRC: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        let value = self.read_reg8(bus, SRC);
        self.alu_op(OP, value);
        Flow::Next
    }

    /// The immediate forms of the accumulator group (0xC6, 0xCE, ... 0xFE).
    pub(in crate::cpu) fn alu_d8<const OP: u8>(&mut self, _bus: &mut dyn Bus, value: u8) -> Flow {
        self.alu_op(OP, value);
        Flow::Next
    }

    /// ADD HL, rr.
    pub(in crate::cpu) fn add_hl_rr<const PAIR: u8>(&mut self, _bus: &mut dyn Bus) -> Flow {
        let value = self.read_pair(PAIR);
        self.alu_add16_hl(value);
        Flow::Next
    }

    /// ADD SP, r8.
    pub(in crate::cpu) fn add_sp_r8(&mut self, _bus: &mut dyn Bus, offset: u8) -> Flow {
        self.regs.sp = self.alu_add16_signed(self.regs.sp, offset);
        Flow::Next
    }

    pub(in crate::cpu) fn daa(&mut self, _bus: &mut dyn Bus) -> Flow {
        self.alu_daa();
        Flow::Next
    }

    /// CPL: A = !A, sets N and H.
    pub(in crate::cpu) fn cpl(&mut self, _bus: &mut dyn Bus) -> Flow {
        self.regs.a = !self.regs.a;
        self.regs.set_flag(Flag::N, true);
        self.regs.set_flag(Flag::H, true);
        Flow::Next
    }

    /// SCF: C=1, N=H=0.
    pub(in crate::cpu) fn scf(&mut self, _bus: &mut dyn Bus) -> Flow {
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, false);
        self.regs.set_flag(Flag::C, true);
        Flow::Next
    }

    /// CCF: C=!C, N=H=0.
    pub(in crate::cpu) fn ccf(&mut self, _bus: &mut dyn Bus) -> Flow {
        let carry = self.regs.is_flag_set(Flag::C);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, false);
        self.regs.set_flag(Flag::C, !carry);
        Flow::Next
    }

    // The accumulator rotates behave like their CB twins except that Z is
    // always cleared.

    pub(in crate::cpu) fn rlca(&mut self, _bus: &mut dyn Bus) -> Flow {
        self.regs.a = self.alu_rlc(self.regs.a);
        self.regs.clear_flag(Flag::Z);
        Flow::Next
    }

    pub(in crate::cpu) fn rrca(&mut self, _bus: &mut dyn Bus) -> Flow {
        self.regs.a = self.alu_rrc(self.regs.a);
        self.regs.clear_flag(Flag::Z);
        Flow::Next
    }

    pub(in crate::cpu) fn rla(&mut self, _bus: &mut dyn Bus) -> Flow {
        self.regs.a = self.alu_rl(self.regs.a);
        self.regs.clear_flag(Flag::Z);
        Flow::Next
    }

    pub(in crate::cpu) fn rra(&mut self, _bus: &mut dyn Bus) -> Flow {
        self.regs.a = self.alu_rr(self.regs.a);
        self.regs.clear_flag(Flag::Z);
        Flow::Next
    }
}
