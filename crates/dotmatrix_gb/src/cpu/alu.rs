use super::{Cpu, Flag};

// Operation selectors for the eight-way accumulator group
// (bits 3-5 of the 0x80-0xBF and 0xC6-0xFE opcodes).
pub(super) const ALU_ADD: u8 = 0;
pub(super) const ALU_ADC: u8 = 1;
pub(super) const ALU_SUB: u8 = 2;
pub(super) const ALU_SBC: u8 = 3;
pub(super) const ALU_AND: u8 = 4;
pub(super) const ALU_XOR: u8 = 5;
pub(super) const ALU_OR: u8 = 6;
pub(super) const ALU_CP: u8 = 7;

impl Cpu {
    /// Apply one of the eight accumulator operations to A.
    #[inline]
    pub(super) fn alu_op(&mut self, op: u8, value: u8) {
        match op {
            ALU_ADD => self.alu_add(value, false),
            ALU_ADC => self.alu_add(value, true),
            ALU_SUB => self.alu_sub(value, false),
            ALU_SBC => self.alu_sub(value, true),
            ALU_AND => self.alu_and(value),
            ALU_XOR => self.alu_xor(value),
            ALU_OR => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.regs.is_flag_set(Flag::C));

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = (a as u16) + (value as u16) + (carry_in as u16);
        let result = full as u8;

        self.regs.a = result;

        self.regs.clear_flags();
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::H, half > 0x0F);
        self.regs.set_flag(Flag::C, full > 0xFF);
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let result = self.sub_flags(a, value, use_carry);
        self.regs.a = result;
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;

        self.regs.clear_flags();
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::H, true);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;

        self.regs.clear_flags();
        self.regs.set_flag(Flag::Z, result == 0);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;

        self.regs.clear_flags();
        self.regs.set_flag(Flag::Z, result == 0);
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        let a = self.regs.a;
        self.sub_flags(a, value, false);
    }

    fn sub_flags(&mut self, a: u8, value: u8, use_carry: bool) -> u8 {
        let carry_in = i16::from(use_carry && self.regs.is_flag_set(Flag::C));

        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry_in;
        let full = a as i16 - value as i16 - carry_in;
        let result = full as u8;

        self.regs.clear_flags();
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::N, true);
        self.regs.set_flag(Flag::H, half < 0);
        self.regs.set_flag(Flag::C, full < 0);
        result
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// The correction is built from C and H first; after an addition the
    /// nibble checks (`> 0x09`, `> 0x99`) extend it. N is preserved, H is
    /// cleared and C reports whether the high correction was applied.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.regs.is_flag_set(Flag::C) { 0x60 } else { 0x00 };
        if self.regs.is_flag_set(Flag::H) {
            adjust |= 0x06;
        }

        if !self.regs.is_flag_set(Flag::N) {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.regs.set_flag(Flag::C, adjust >= 0x60);
        self.regs.set_flag(Flag::H, false);
        self.regs.set_flag(Flag::Z, a == 0);
        self.regs.a = a;
    }

    /// 8-bit increment helper used by INC r and INC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, (value & 0x0F) == 0x0F);
        result
    }

    /// 8-bit decrement helper used by DEC r and DEC (HL).
    ///
    /// Updates Z, N, H while leaving C unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::N, true);
        self.regs.set_flag(Flag::H, (value & 0x0F) == 0);
        result
    }

    /// 16-bit add helper for `ADD HL,rr`.
    ///
    /// Z is unaffected; N is cleared; H is the carry out of bit 11 and C
    /// the carry out of bit 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(value);

        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.regs.set_flag(Flag::C, (hl as u32) + (value as u32) > 0xFFFF);

        self.regs.set_hl(result);
    }

    /// Signed 8-bit offset added to a 16-bit base (ADD SP,r8 and
    /// LD HL,SP+r8).
    ///
    /// Z and N are cleared; H and C come from the unsigned low-byte add.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.regs.set_flag(Flag::N, false);
        self.regs.set_flag(Flag::Z, false);
        self.regs.set_flag(Flag::H, (base & 0x000F) + (offset & 0x000F) > 0x000F);
        self.regs.set_flag(Flag::C, (base & 0x00FF) + (offset & 0x00FF) > 0x00FF);
        base.wrapping_add(offset)
    }

    // Shift/rotate primitives shared by the CB table and the
    // accumulator-only RLCA/RRCA/RLA/RRA.

    #[inline]
    fn shift_result(&mut self, result: u8, carry: bool) -> u8 {
        self.regs.clear_flags();
        self.regs.set_flag(Flag::Z, result == 0);
        self.regs.set_flag(Flag::C, carry);
        result
    }

    pub(super) fn alu_rlc(&mut self, value: u8) -> u8 {
        self.shift_result(value.rotate_left(1), (value & 0x80) != 0)
    }

    pub(super) fn alu_rrc(&mut self, value: u8) -> u8 {
        self.shift_result(value.rotate_right(1), (value & 0x01) != 0)
    }

    pub(super) fn alu_rl(&mut self, value: u8) -> u8 {
        let carry_in = u8::from(self.regs.is_flag_set(Flag::C));
        self.shift_result((value << 1) | carry_in, (value & 0x80) != 0)
    }

    pub(super) fn alu_rr(&mut self, value: u8) -> u8 {
        let carry_in = if self.regs.is_flag_set(Flag::C) { 0x80 } else { 0 };
        self.shift_result((value >> 1) | carry_in, (value & 0x01) != 0)
    }

    pub(super) fn alu_sla(&mut self, value: u8) -> u8 {
        self.shift_result(value << 1, (value & 0x80) != 0)
    }

    pub(super) fn alu_sra(&mut self, value: u8) -> u8 {
        self.shift_result((value >> 1) | (value & 0x80), (value & 0x01) != 0)
    }

    pub(super) fn alu_swap(&mut self, value: u8) -> u8 {
        self.shift_result(value.rotate_left(4), false)
    }

    pub(super) fn alu_srl(&mut self, value: u8) -> u8 {
        self.shift_result(value >> 1, (value & 0x01) != 0)
    }
}
