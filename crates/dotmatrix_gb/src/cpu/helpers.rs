use super::decode::{CC_C, CC_NC, CC_NZ, P_BC, P_DE, P_HL};
use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Helper to read an 8-bit register or (HL) by index.
    ///
    /// The encoding matches the standard Game Boy register order used by
    /// opcode tables:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    #[inline]
    pub(super) fn read_reg8(&mut self, bus: &mut dyn Bus, index: u8) -> u8 {
        match index {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => bus.read8(self.regs.hl()),
            _ => self.regs.a,
        }
    }

    /// Helper to write an 8-bit register or (HL) by index.
    ///
    /// The encoding matches `read_reg8`.
    #[inline]
    pub(super) fn write_reg8(&mut self, bus: &mut dyn Bus, index: u8, value: u8) {
        match index {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => bus.write8(self.regs.hl(), value),
            _ => self.regs.a = value,
        }
    }

    /// 16-bit register pair by index: 0=BC, 1=DE, 2=HL, 3=SP.
    #[inline]
    pub(super) fn read_pair(&self, index: u8) -> u16 {
        match index {
            P_BC => self.regs.bc(),
            P_DE => self.regs.de(),
            P_HL => self.regs.hl(),
            _ => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn write_pair(&mut self, index: u8, value: u16) {
        match index {
            P_BC => self.regs.set_bc(value),
            P_DE => self.regs.set_de(value),
            P_HL => self.regs.set_hl(value),
            _ => self.regs.sp = value,
        }
    }

    /// PUSH/POP variant of the pair encoding where index 3 is AF.
    #[inline]
    pub(super) fn read_stack_pair(&self, index: u8) -> u16 {
        match index {
            P_BC | P_DE | P_HL => self.read_pair(index),
            _ => self.regs.af(),
        }
    }

    #[inline]
    pub(super) fn write_stack_pair(&mut self, index: u8, value: u16) {
        match index {
            P_BC | P_DE | P_HL => self.write_pair(index, value),
            _ => self.regs.set_af(value),
        }
    }

    /// Evaluate a branch condition: 0=NZ, 1=Z, 2=NC, 3=C.
    #[inline]
    pub(super) fn condition(&self, cc: u8) -> bool {
        match cc {
            CC_NZ => !self.regs.is_flag_set(Flag::Z),
            CC_NC => !self.regs.is_flag_set(Flag::C),
            CC_C => self.regs.is_flag_set(Flag::C),
            _ => self.regs.is_flag_set(Flag::Z),
        }
    }

    /// Fetch the opcode byte at PC and step past it.
    #[inline]
    pub(super) fn fetch_opcode(&mut self, bus: &mut dyn Bus) -> u8 {
        let value = bus.read8(self.regs.pc);
        if self.halt_bug {
            // The first fetch after the HALT bug does not advance PC, so
            // the same byte is read again as the next opcode or operand.
            self.halt_bug = false;
        } else {
            self.regs.pc = self.regs.pc.wrapping_add(1);
        }
        value
    }

    /// SP -= 2, then a little-endian 16-bit store at the new SP.
    #[inline]
    pub(crate) fn push_u16(&mut self, bus: &mut dyn Bus, value: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(2);
        bus.write16(self.regs.sp, value);
    }

    /// Little-endian 16-bit load at SP, then SP += 2.
    #[inline]
    pub(crate) fn pop_u16(&mut self, bus: &mut dyn Bus) -> u16 {
        let value = bus.read16(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }
}
