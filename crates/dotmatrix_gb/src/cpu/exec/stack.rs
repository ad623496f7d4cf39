use crate::cpu::decode::Flow;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// PUSH BC/DE/HL/AF.
    pub(in crate::cpu) fn push<const PAIR: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        let value = self.read_stack_pair(PAIR);
        self.push_u16(bus, value);
        Flow::Next
    }

    /// POP BC/DE/HL/AF. Popping AF drops the low nibble of F.
    pub(in crate::cpu) fn pop<const PAIR: u8>(&mut self, bus: &mut dyn Bus) -> Flow {
        let value = self.pop_u16(bus);
        self.write_stack_pair(PAIR, value);
        Flow::Next
    }
}
