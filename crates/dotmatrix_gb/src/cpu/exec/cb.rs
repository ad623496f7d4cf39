use crate::cpu::decode::Flow;
use crate::cpu::{Bus, Cpu, Flag};

// Handlers for the CB table. `REG` uses the usual 0=B .. 6=(HL) .. 7=A
// encoding and `BIT` is the bit index taken from bits 3-5 of the opcode.

impl Cpu {
    #[inline]
    fn modify_reg8(&mut self, bus: &mut dyn Bus, reg: u8, f: impl FnOnce(&mut Cpu, u8) -> u8) {
        let value = self.read_reg8(bus, reg);
        let result = f(self, value);
        self.write_reg8(bus, reg, result);
    }

    pub(in crate::cpu) fn rlc<const REG: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        self.modify_reg8(bus, REG, Cpu::alu_rlc);
        Flow::Next
    }

    pub(in crate::cpu) fn rrc<const REG: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        self.modify_reg8(bus, REG, Cpu::alu_rrc);
        Flow::Next
    }

    pub(in crate::cpu) fn rl<const REG: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        self.modify_reg8(bus, REG, Cpu::alu_rl);
        Flow::Next
    }

    pub(in crate::cpu) fn rr<const REG: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        self.modify_reg8(bus, REG, Cpu::alu_rr);
        Flow::Next
    }

    pub(in crate::cpu) fn sla<const REG: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        self.modify_reg8(bus, REG, Cpu::alu_sla);
        Flow::Next
    }

    pub(in crate::cpu) fn sra<const REG: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        self.modify_reg8(bus, REG, Cpu::alu_sra);
        Flow::Next
    }

    pub(in crate::cpu) fn swap<const REG: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        self.modify_reg8(bus, REG, Cpu::alu_swap);
        Flow::Next
    }

    pub(in crate::cpu) fn srl<const REG: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        self.modify_reg8(bus, REG, Cpu::alu_srl);
        Flow::Next
    }

    /// BIT b, r: Z = !bit, N=0, H=1, C preserved.
    pub(in crate::cpu) fn bit<const BIT: u8, const REG: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        let value = self.read_reg8(bus, REG);
        self.regs.set_flag(Flag::Z, (value & (1 << BIT)) == 0);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, true);
        Flow::Next
    }

    /// RES b, r. No flags are affected.
    pub(in crate::cpu) fn res<const BIT: u8, const REG: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        self.modify_reg8(bus, REG, |_, value| value & !(1 << BIT));
        Flow::Next
    }

    /// SET b, r. No flags are affected.
    pub(in crate::cpu) fn set<const BIT: u8, const REG: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        self.modify_reg8(bus, REG, |_, value| value | (1 << BIT));
        Flow::Next
    }
}
