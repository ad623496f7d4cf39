use crate::cpu::decode::Flow;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// INC r and INC (HL).
    pub(in crate::cpu) fn inc_r<const REG: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        let value = self.read_reg8(bus, REG);
        let result = self.alu_inc8(value);
        self.write_reg8(bus, REG, result);
        Flow::Next
    }

    /// DEC r and DEC (HL).
    pub(in crate::cpu) fn dec_r<const REG: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        let value = self.read_reg8(bus, REG);
        let result = self.alu_dec8(value);
        self.write_reg8(bus, REG, result);
        Flow::Next
    }

    /// INC rr. No flags are affected.
    pub(in crate::cpu) fn inc_rr<const PAIR: u8>(&mut self, _bus: &mut dyn Bus) -> Flow {
        let value = self.read_pair(PAIR).wrapping_add(1);
        self.write_pair(PAIR, value);
        Flow::Next
    }

    /// DEC rr. No flags are affected.
    pub(in crate::cpu) fn dec_rr<const PAIR: u8>(&mut self, _bus: &mut dyn Bus) -> Flow {
        let value = self.read_pair(PAIR).wrapping_sub(1);
        self.write_pair(PAIR, value);
        Flow::Next
    }
}
