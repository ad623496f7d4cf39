use super::alu::{ALU_ADC, ALU_ADD, ALU_AND, ALU_CP, ALU_OR, ALU_SBC, ALU_SUB, ALU_XOR};
use super::decode::{
    Instruction, CC_C, CC_NC, CC_NZ, CC_Z, P_AF, P_BC, P_DE, P_HL, P_SP, R_A, R_B, R_C, R_D, R_E,
    R_H, R_HL, R_L,
};
use super::Cpu;

/// Unprefixed opcode table.
///
/// Tick costs are in T-cycles. Conditional entries carry the not-taken
/// cost as `ticks` and the taken cost via `.taken(..)`. `None` entries are
/// the eleven opcodes the LR35902 does not implement; executing one is a
/// `FatalDecode`.
#[rustfmt::skip]
pub(super) static BASE_TABLE: [Option<Instruction>; 256] = [
    // 0x00-0x3F: loads, 16-bit arithmetic, INC/DEC, rotates, relative jumps
    /* 00 */ Some(Instruction::none("NOP", 4, Cpu::nop)),
    /* 01 */ Some(Instruction::imm16("LD BC,d16", 12, Cpu::ld_rr_d16::<P_BC>)),
    /* 02 */ Some(Instruction::none("LD (BC),A", 8, Cpu::ld_at_rr_a::<P_BC>)),
    /* 03 */ Some(Instruction::none("INC BC", 8, Cpu::inc_rr::<P_BC>)),
    /* 04 */ Some(Instruction::none("INC B", 4, Cpu::inc_r::<R_B>)),
    /* 05 */ Some(Instruction::none("DEC B", 4, Cpu::dec_r::<R_B>)),
    /* 06 */ Some(Instruction::imm8("LD B,d8", 8, Cpu::ld_r_d8::<R_B>)),
    /* 07 */ Some(Instruction::none("RLCA", 4, Cpu::rlca)),
    /* 08 */ Some(Instruction::imm16("LD (a16),SP", 20, Cpu::ld_a16_sp)),
    /* 09 */ Some(Instruction::none("ADD HL,BC", 8, Cpu::add_hl_rr::<P_BC>)),
    /* 0A */ Some(Instruction::none("LD A,(BC)", 8, Cpu::ld_a_at_rr::<P_BC>)),
    /* 0B */ Some(Instruction::none("DEC BC", 8, Cpu::dec_rr::<P_BC>)),
    /* 0C */ Some(Instruction::none("INC C", 4, Cpu::inc_r::<R_C>)),
    /* 0D */ Some(Instruction::none("DEC C", 4, Cpu::dec_r::<R_C>)),
    /* 0E */ Some(Instruction::imm8("LD C,d8", 8, Cpu::ld_r_d8::<R_C>)),
    /* 0F */ Some(Instruction::none("RRCA", 4, Cpu::rrca)),
    /* 10 */ Some(Instruction::imm8("STOP", 4, Cpu::stop)),
    /* 11 */ Some(Instruction::imm16("LD DE,d16", 12, Cpu::ld_rr_d16::<P_DE>)),
    /* 12 */ Some(Instruction::none("LD (DE),A", 8, Cpu::ld_at_rr_a::<P_DE>)),
    /* 13 */ Some(Instruction::none("INC DE", 8, Cpu::inc_rr::<P_DE>)),
    /* 14 */ Some(Instruction::none("INC D", 4, Cpu::inc_r::<R_D>)),
    /* 15 */ Some(Instruction::none("DEC D", 4, Cpu::dec_r::<R_D>)),
    /* 16 */ Some(Instruction::imm8("LD D,d8", 8, Cpu::ld_r_d8::<R_D>)),
    /* 17 */ Some(Instruction::none("RLA", 4, Cpu::rla)),
    /* 18 */ Some(Instruction::imm8("JR r8", 12, Cpu::jr)),
    /* 19 */ Some(Instruction::none("ADD HL,DE", 8, Cpu::add_hl_rr::<P_DE>)),
    /* 1A */ Some(Instruction::none("LD A,(DE)", 8, Cpu::ld_a_at_rr::<P_DE>)),
    /* 1B */ Some(Instruction::none("DEC DE", 8, Cpu::dec_rr::<P_DE>)),
    /* 1C */ Some(Instruction::none("INC E", 4, Cpu::inc_r::<R_E>)),
    /* 1D */ Some(Instruction::none("DEC E", 4, Cpu::dec_r::<R_E>)),
    /* 1E */ Some(Instruction::imm8("LD E,d8", 8, Cpu::ld_r_d8::<R_E>)),
    /* 1F */ Some(Instruction::none("RRA", 4, Cpu::rra)),
    /* 20 */ Some(Instruction::imm8("JR NZ,r8", 8, Cpu::jr_cc::<CC_NZ>).taken(12)),
    /* 21 */ Some(Instruction::imm16("LD HL,d16", 12, Cpu::ld_rr_d16::<P_HL>)),
    /* 22 */ Some(Instruction::none("LD (HL+),A", 8, Cpu::ld_hl_step_a::<false>)),
    /* 23 */ Some(Instruction::none("INC HL", 8, Cpu::inc_rr::<P_HL>)),
    /* 24 */ Some(Instruction::none("INC H", 4, Cpu::inc_r::<R_H>)),
    /* 25 */ Some(Instruction::none("DEC H", 4, Cpu::dec_r::<R_H>)),
    /* 26 */ Some(Instruction::imm8("LD H,d8", 8, Cpu::ld_r_d8::<R_H>)),
    /* 27 */ Some(Instruction::none("DAA", 4, Cpu::daa)),
    /* 28 */ Some(Instruction::imm8("JR Z,r8", 8, Cpu::jr_cc::<CC_Z>).taken(12)),
    /* 29 */ Some(Instruction::none("ADD HL,HL", 8, Cpu::add_hl_rr::<P_HL>)),
    /* 2A */ Some(Instruction::none("LD A,(HL+)", 8, Cpu::ld_a_hl_step::<false>)),
    /* 2B */ Some(Instruction::none("DEC HL", 8, Cpu::dec_rr::<P_HL>)),
    /* 2C */ Some(Instruction::none("INC L", 4, Cpu::inc_r::<R_L>)),
    /* 2D */ Some(Instruction::none("DEC L", 4, Cpu::dec_r::<R_L>)),
    /* 2E */ Some(Instruction::imm8("LD L,d8", 8, Cpu::ld_r_d8::<R_L>)),
    /* 2F */ Some(Instruction::none("CPL", 4, Cpu::cpl)),
    /* 30 */ Some(Instruction::imm8("JR NC,r8", 8, Cpu::jr_cc::<CC_NC>).taken(12)),
    /* 31 */ Some(Instruction::imm16("LD SP,d16", 12, Cpu::ld_rr_d16::<P_SP>)),
    /* 32 */ Some(Instruction::none("LD (HL-),A", 8, Cpu::ld_hl_step_a::<true>)),
    /* 33 */ Some(Instruction::none("INC SP", 8, Cpu::inc_rr::<P_SP>)),
    /* 34 */ Some(Instruction::none("INC (HL)", 12, Cpu::inc_r::<R_HL>)),
    /* 35 */ Some(Instruction::none("DEC (HL)", 12, Cpu::dec_r::<R_HL>)),
    /* 36 */ Some(Instruction::imm8("LD (HL),d8", 12, Cpu::ld_r_d8::<R_HL>)),
    /* 37 */ Some(Instruction::none("SCF", 4, Cpu::scf)),
    /* 38 */ Some(Instruction::imm8("JR C,r8", 8, Cpu::jr_cc::<CC_C>).taken(12)),
    /* 39 */ Some(Instruction::none("ADD HL,SP", 8, Cpu::add_hl_rr::<P_SP>)),
    /* 3A */ Some(Instruction::none("LD A,(HL-)", 8, Cpu::ld_a_hl_step::<true>)),
    /* 3B */ Some(Instruction::none("DEC SP", 8, Cpu::dec_rr::<P_SP>)),
    /* 3C */ Some(Instruction::none("INC A", 4, Cpu::inc_r::<R_A>)),
    /* 3D */ Some(Instruction::none("DEC A", 4, Cpu::dec_r::<R_A>)),
    /* 3E */ Some(Instruction::imm8("LD A,d8", 8, Cpu::ld_r_d8::<R_A>)),
    /* 3F */ Some(Instruction::none("CCF", 4, Cpu::ccf)),
    // 0x40-0x7F: LD r,r' (0x76 is HALT)
    /* 40 */ Some(Instruction::none("LD B,B", 4, Cpu::ld_r_r::<R_B, R_B>)),
    /* 41 */ Some(Instruction::none("LD B,C", 4, Cpu::ld_r_r::<R_B, R_C>)),
    /* 42 */ Some(Instruction::none("LD B,D", 4, Cpu::ld_r_r::<R_B, R_D>)),
    /* 43 */ Some(Instruction::none("LD B,E", 4, Cpu::ld_r_r::<R_B, R_E>)),
    /* 44 */ Some(Instruction::none("LD B,H", 4, Cpu::ld_r_r::<R_B, R_H>)),
    /* 45 */ Some(Instruction::none("LD B,L", 4, Cpu::ld_r_r::<R_B, R_L>)),
    /* 46 */ Some(Instruction::none("LD B,(HL)", 8, Cpu::ld_r_r::<R_B, R_HL>)),
    /* 47 */ Some(Instruction::none("LD B,A", 4, Cpu::ld_r_r::<R_B, R_A>)),
    /* 48 */ Some(Instruction::none("LD C,B", 4, Cpu::ld_r_r::<R_C, R_B>)),
    /* 49 */ Some(Instruction::none("LD C,C", 4, Cpu::ld_r_r::<R_C, R_C>)),
    /* 4A */ Some(Instruction::none("LD C,D", 4, Cpu::ld_r_r::<R_C, R_D>)),
    /* 4B */ Some(Instruction::none("LD C,E", 4, Cpu::ld_r_r::<R_C, R_E>)),
    /* 4C */ Some(Instruction::none("LD C,H", 4, Cpu::ld_r_r::<R_C, R_H>)),
    /* 4D */ Some(Instruction::none("LD C,L", 4, Cpu::ld_r_r::<R_C, R_L>)),
    /* 4E */ Some(Instruction::none("LD C,(HL)", 8, Cpu::ld_r_r::<R_C, R_HL>)),
    /* 4F */ Some(Instruction::none("LD C,A", 4, Cpu::ld_r_r::<R_C, R_A>)),
    /* 50 */ Some(Instruction::none("LD D,B", 4, Cpu::ld_r_r::<R_D, R_B>)),
    /* 51 */ Some(Instruction::none("LD D,C", 4, Cpu::ld_r_r::<R_D, R_C>)),
    /* 52 */ Some(Instruction::none("LD D,D", 4, Cpu::ld_r_r::<R_D, R_D>)),
    /* 53 */ Some(Instruction::none("LD D,E", 4, Cpu::ld_r_r::<R_D, R_E>)),
    /* 54 */ Some(Instruction::none("LD D,H", 4, Cpu::ld_r_r::<R_D, R_H>)),
    /* 55 */ Some(Instruction::none("LD D,L", 4, Cpu::ld_r_r::<R_D, R_L>)),
    /* 56 */ Some(Instruction::none("LD D,(HL)", 8, Cpu::ld_r_r::<R_D, R_HL>)),
    /* 57 */ Some(Instruction::none("LD D,A", 4, Cpu::ld_r_r::<R_D, R_A>)),
    /* 58 */ Some(Instruction::none("LD E,B", 4, Cpu::ld_r_r::<R_E, R_B>)),
    /* 59 */ Some(Instruction::none("LD E,C", 4, Cpu::ld_r_r::<R_E, R_C>)),
    /* 5A */ Some(Instruction::none("LD E,D", 4, Cpu::ld_r_r::<R_E, R_D>)),
    /* 5B */ Some(Instruction::none("LD E,E", 4, Cpu::ld_r_r::<R_E, R_E>)),
    /* 5C */ Some(Instruction::none("LD E,H", 4, Cpu::ld_r_r::<R_E, R_H>)),
    /* 5D */ Some(Instruction::none("LD E,L", 4, Cpu::ld_r_r::<R_E, R_L>)),
    /* 5E */ Some(Instruction::none("LD E,(HL)", 8, Cpu::ld_r_r::<R_E, R_HL>)),
    /* 5F */ Some(Instruction::none("LD E,A", 4, Cpu::ld_r_r::<R_E, R_A>)),
    /* 60 */ Some(Instruction::none("LD H,B", 4, Cpu::ld_r_r::<R_H, R_B>)),
    /* 61 */ Some(Instruction::none("LD H,C", 4, Cpu::ld_r_r::<R_H, R_C>)),
    /* 62 */ Some(Instruction::none("LD H,D", 4, Cpu::ld_r_r::<R_H, R_D>)),
    /* 63 */ Some(Instruction::none("LD H,E", 4, Cpu::ld_r_r::<R_H, R_E>)),
    /* 64 */ Some(Instruction::none("LD H,H", 4, Cpu::ld_r_r::<R_H, R_H>)),
    /* 65 */ Some(Instruction::none("LD H,L", 4, Cpu::ld_r_r::<R_H, R_L>)),
    /* 66 */ Some(Instruction::none("LD H,(HL)", 8, Cpu::ld_r_r::<R_H, R_HL>)),
    /* 67 */ Some(Instruction::none("LD H,A", 4, Cpu::ld_r_r::<R_H, R_A>)),
    /* 68 */ Some(Instruction::none("LD L,B", 4, Cpu::ld_r_r::<R_L, R_B>)),
    /* 69 */ Some(Instruction::none("LD L,C", 4, Cpu::ld_r_r::<R_L, R_C>)),
    /* 6A */ Some(Instruction::none("LD L,D", 4, Cpu::ld_r_r::<R_L, R_D>)),
    /* 6B */ Some(Instruction::none("LD L,E", 4, Cpu::ld_r_r::<R_L, R_E>)),
    /* 6C */ Some(Instruction::none("LD L,H", 4, Cpu::ld_r_r::<R_L, R_H>)),
    /* 6D */ Some(Instruction::none("LD L,L", 4, Cpu::ld_r_r::<R_L, R_L>)),
    /* 6E */ Some(Instruction::none("LD L,(HL)", 8, Cpu::ld_r_r::<R_L, R_HL>)),
    /* 6F */ Some(Instruction::none("LD L,A", 4, Cpu::ld_r_r::<R_L, R_A>)),
    /* 70 */ Some(Instruction::none("LD (HL),B", 8, Cpu::ld_r_r::<R_HL, R_B>)),
    /* 71 */ Some(Instruction::none("LD (HL),C", 8, Cpu::ld_r_r::<R_HL, R_C>)),
    /* 72 */ Some(Instruction::none("LD (HL),D", 8, Cpu::ld_r_r::<R_HL, R_D>)),
    /* 73 */ Some(Instruction::none("LD (HL),E", 8, Cpu::ld_r_r::<R_HL, R_E>)),
    /* 74 */ Some(Instruction::none("LD (HL),H", 8, Cpu::ld_r_r::<R_HL, R_H>)),
    /* 75 */ Some(Instruction::none("LD (HL),L", 8, Cpu::ld_r_r::<R_HL, R_L>)),
    /* 76 */ Some(Instruction::none("HALT", 4, Cpu::halt)),
    /* 77 */ Some(Instruction::none("LD (HL),A", 8, Cpu::ld_r_r::<R_HL, R_A>)),
    /* 78 */ Some(Instruction::none("LD A,B", 4, Cpu::ld_r_r::<R_A, R_B>)),
    /* 79 */ Some(Instruction::none("LD A,C", 4, Cpu::ld_r_r::<R_A, R_C>)),
    /* 7A */ Some(Instruction::none("LD A,D", 4, Cpu::ld_r_r::<R_A, R_D>)),
    /* 7B */ Some(Instruction::none("LD A,E", 4, Cpu::ld_r_r::<R_A, R_E>)),
    /* 7C */ Some(Instruction::none("LD A,H", 4, Cpu::ld_r_r::<R_A, R_H>)),
    /* 7D */ Some(Instruction::none("LD A,L", 4, Cpu::ld_r_r::<R_A, R_L>)),
    /* 7E */ Some(Instruction::none("LD A,(HL)", 8, Cpu::ld_r_r::<R_A, R_HL>)),
    /* 7F */ Some(Instruction::none("LD A,A", 4, Cpu::ld_r_r::<R_A, R_A>)),
    // 0x80-0xBF: accumulator ALU group
    /* 80 */ Some(Instruction::none("ADD A,B", 4, Cpu::alu_r::<ALU_ADD, R_B>)),
    /* 81 */ Some(Instruction::none("ADD A,C", 4, Cpu::alu_r::<ALU_ADD, R_C>)),
    /* 82 */ Some(Instruction::none("ADD A,D", 4, Cpu::alu_r::<ALU_ADD, R_D>)),
    /* 83 */ Some(Instruction::none("ADD A,E", 4, Cpu::alu_r::<ALU_ADD, R_E>)),
    /* 84 */ Some(Instruction::none("ADD A,H", 4, Cpu::alu_r::<ALU_ADD, R_H>)),
    /* 85 */ Some(Instruction::none("ADD A,L", 4, Cpu::alu_r::<ALU_ADD, R_L>)),
    /* 86 */ Some(Instruction::none("ADD A,(HL)", 8, Cpu::alu_r::<ALU_ADD, R_HL>)),
    /* 87 */ Some(Instruction::none("ADD A,A", 4, Cpu::alu_r::<ALU_ADD, R_A>)),
    /* 88 */ Some(Instruction::none("ADC A,B", 4, Cpu::alu_r::<ALU_ADC, R_B>)),
    /* 89 */ Some(Instruction::none("ADC A,C", 4, Cpu::alu_r::<ALU_ADC, R_C>)),
    /* 8A */ Some(Instruction::none("ADC A,D", 4, Cpu::alu_r::<ALU_ADC, R_D>)),
    /* 8B */ Some(Instruction::none("ADC A,E", 4, Cpu::alu_r::<ALU_ADC, R_E>)),
    /* 8C */ Some(Instruction::none("ADC A,H", 4, Cpu::alu_r::<ALU_ADC, R_H>)),
    /* 8D */ Some(Instruction::none("ADC A,L", 4, Cpu::alu_r::<ALU_ADC, R_L>)),
    /* 8E */ Some(Instruction::none("ADC A,(HL)", 8, Cpu::alu_r::<ALU_ADC, R_HL>)),
    /* 8F */ Some(Instruction::none("ADC A,A", 4, Cpu::alu_r::<ALU_ADC, R_A>)),
    /* 90 */ Some(Instruction::none("SUB B", 4, Cpu::alu_r::<ALU_SUB, R_B>)),
    /* 91 */ Some(Instruction::none("SUB C", 4, Cpu::alu_r::<ALU_SUB, R_C>)),
    /* 92 */ Some(Instruction::none("SUB D", 4, Cpu::alu_r::<ALU_SUB, R_D>)),
    /* 93 */ Some(Instruction::none("SUB E", 4, Cpu::alu_r::<ALU_SUB, R_E>)),
    /* 94 */ Some(Instruction::none("SUB H", 4, Cpu::alu_r::<ALU_SUB, R_H>)),
    /* 95 */ Some(Instruction::none("SUB L", 4, Cpu::alu_r::<ALU_SUB, R_L>)),
    /* 96 */ Some(Instruction::none("SUB (HL)", 8, Cpu::alu_r::<ALU_SUB, R_HL>)),
    /* 97 */ Some(Instruction::none("SUB A", 4, Cpu::alu_r::<ALU_SUB, R_A>)),
    /* 98 */ Some(Instruction::none("SBC A,B", 4, Cpu::alu_r::<ALU_SBC, R_B>)),
    /* 99 */ Some(Instruction::none("SBC A,C", 4, Cpu::alu_r::<ALU_SBC, R_C>)),
    /* 9A */ Some(Instruction::none("SBC A,D", 4, Cpu::alu_r::<ALU_SBC, R_D>)),
    /* 9B */ Some(Instruction::none("SBC A,E", 4, Cpu::alu_r::<ALU_SBC, R_E>)),
    /* 9C */ Some(Instruction::none("SBC A,H", 4, Cpu::alu_r::<ALU_SBC, R_H>)),
    /* 9D */ Some(Instruction::none("SBC A,L", 4, Cpu::alu_r::<ALU_SBC, R_L>)),
    /* 9E */ Some(Instruction::none("SBC A,(HL)", 8, Cpu::alu_r::<ALU_SBC, R_HL>)),
    /* 9F */ Some(Instruction::none("SBC A,A", 4, Cpu::alu_r::<ALU_SBC, R_A>)),
    /* A0 */ Some(Instruction::none("AND B", 4, Cpu::alu_r::<ALU_AND, R_B>)),
    /* A1 */ Some(Instruction::none("AND C", 4, Cpu::alu_r::<ALU_AND, R_C>)),
    /* A2 */ Some(Instruction::none("AND D", 4, Cpu::alu_r::<ALU_AND, R_D>)),
    /* A3 */ Some(Instruction::none("AND E", 4, Cpu::alu_r::<ALU_AND, R_E>)),
    /* A4 */ Some(Instruction::none("AND H", 4, Cpu::alu_r::<ALU_AND, R_H>)),
    /* A5 */ Some(Instruction::none("AND L", 4, Cpu::alu_r::<ALU_AND, R_L>)),
    /* A6 */ Some(Instruction::none("AND (HL)", 8, Cpu::alu_r::<ALU_AND, R_HL>)),
    /* A7 */ Some(Instruction::none("AND A", 4, Cpu::alu_r::<ALU_AND, R_A>)),
    /* A8 */ Some(Instruction::none("XOR B", 4, Cpu::alu_r::<ALU_XOR, R_B>)),
    /* A9 */ Some(Instruction::none("XOR C", 4, Cpu::alu_r::<ALU_XOR, R_C>)),
    /* AA */ Some(Instruction::none("XOR D", 4, Cpu::alu_r::<ALU_XOR, R_D>)),
    /* AB */ Some(Instruction::none("XOR E", 4, Cpu::alu_r::<ALU_XOR, R_E>)),
    /* AC */ Some(Instruction::none("XOR H", 4, Cpu::alu_r::<ALU_XOR, R_H>)),
    /* AD */ Some(Instruction::none("XOR L", 4, Cpu::alu_r::<ALU_XOR, R_L>)),
    /* AE */ Some(Instruction::none("XOR (HL)", 8, Cpu::alu_r::<ALU_XOR, R_HL>)),
    /* AF */ Some(Instruction::none("XOR A", 4, Cpu::alu_r::<ALU_XOR, R_A>)),
    /* B0 */ Some(Instruction::none("OR B", 4, Cpu::alu_r::<ALU_OR, R_B>)),
    /* B1 */ Some(Instruction::none("OR C", 4, Cpu::alu_r::<ALU_OR, R_C>)),
    /* B2 */ Some(Instruction::none("OR D", 4, Cpu::alu_r::<ALU_OR, R_D>)),
    /* B3 */ Some(Instruction::none("OR E", 4, Cpu::alu_r::<ALU_OR, R_E>)),
    /* B4 */ Some(Instruction::none("OR H", 4, Cpu::alu_r::<ALU_OR, R_H>)),
    /* B5 */ Some(Instruction::none("OR L", 4, Cpu::alu_r::<ALU_OR, R_L>)),
    /* B6 */ Some(Instruction::none("OR (HL)", 8, Cpu::alu_r::<ALU_OR, R_HL>)),
    /* B7 */ Some(Instruction::none("OR A", 4, Cpu::alu_r::<ALU_OR, R_A>)),
    /* B8 */ Some(Instruction::none("CP B", 4, Cpu::alu_r::<ALU_CP, R_B>)),
    /* B9 */ Some(Instruction::none("CP C", 4, Cpu::alu_r::<ALU_CP, R_C>)),
    /* BA */ Some(Instruction::none("CP D", 4, Cpu::alu_r::<ALU_CP, R_D>)),
    /* BB */ Some(Instruction::none("CP E", 4, Cpu::alu_r::<ALU_CP, R_E>)),
    /* BC */ Some(Instruction::none("CP H", 4, Cpu::alu_r::<ALU_CP, R_H>)),
    /* BD */ Some(Instruction::none("CP L", 4, Cpu::alu_r::<ALU_CP, R_L>)),
    /* BE */ Some(Instruction::none("CP (HL)", 8, Cpu::alu_r::<ALU_CP, R_HL>)),
    /* BF */ Some(Instruction::none("CP A", 4, Cpu::alu_r::<ALU_CP, R_A>)),
    // 0xC0-0xFF: control flow, stack, high-page loads, immediates
    /* C0 */ Some(Instruction::none("RET NZ", 8, Cpu::ret_cc::<CC_NZ>).taken(20)),
    /* C1 */ Some(Instruction::none("POP BC", 12, Cpu::pop::<P_BC>)),
    /* C2 */ Some(Instruction::imm16("JP NZ,a16", 12, Cpu::jp_cc::<CC_NZ>).taken(16)),
    /* C3 */ Some(Instruction::imm16("JP a16", 16, Cpu::jp)),
    /* C4 */ Some(Instruction::imm16("CALL NZ,a16", 12, Cpu::call_cc::<CC_NZ>).taken(24)),
    /* C5 */ Some(Instruction::none("PUSH BC", 16, Cpu::push::<P_BC>)),
    /* C6 */ Some(Instruction::imm8("ADD A,d8", 8, Cpu::alu_d8::<ALU_ADD>)),
    /* C7 */ Some(Instruction::none("RST 00H", 16, Cpu::rst::<0x0000>)),
    /* C8 */ Some(Instruction::none("RET Z", 8, Cpu::ret_cc::<CC_Z>).taken(20)),
    /* C9 */ Some(Instruction::none("RET", 16, Cpu::ret)),
    /* CA */ Some(Instruction::imm16("JP Z,a16", 12, Cpu::jp_cc::<CC_Z>).taken(16)),
    /* CB */ Some(Instruction::imm8("PREFIX CB", 4, Cpu::prefixed)),
    /* CC */ Some(Instruction::imm16("CALL Z,a16", 12, Cpu::call_cc::<CC_Z>).taken(24)),
    /* CD */ Some(Instruction::imm16("CALL a16", 24, Cpu::call)),
    /* CE */ Some(Instruction::imm8("ADC A,d8", 8, Cpu::alu_d8::<ALU_ADC>)),
    /* CF */ Some(Instruction::none("RST 08H", 16, Cpu::rst::<0x0008>)),
    /* D0 */ Some(Instruction::none("RET NC", 8, Cpu::ret_cc::<CC_NC>).taken(20)),
    /* D1 */ Some(Instruction::none("POP DE", 12, Cpu::pop::<P_DE>)),
    /* D2 */ Some(Instruction::imm16("JP NC,a16", 12, Cpu::jp_cc::<CC_NC>).taken(16)),
    /* D3 */ None,
    /* D4 */ Some(Instruction::imm16("CALL NC,a16", 12, Cpu::call_cc::<CC_NC>).taken(24)),
    /* D5 */ Some(Instruction::none("PUSH DE", 16, Cpu::push::<P_DE>)),
    /* D6 */ Some(Instruction::imm8("SUB d8", 8, Cpu::alu_d8::<ALU_SUB>)),
    /* D7 */ Some(Instruction::none("RST 10H", 16, Cpu::rst::<0x0010>)),
    /* D8 */ Some(Instruction::none("RET C", 8, Cpu::ret_cc::<CC_C>).taken(20)),
    /* D9 */ Some(Instruction::none("RETI", 16, Cpu::reti)),
    /* DA */ Some(Instruction::imm16("JP C,a16", 12, Cpu::jp_cc::<CC_C>).taken(16)),
    /* DB */ None,
    /* DC */ Some(Instruction::imm16("CALL C,a16", 12, Cpu::call_cc::<CC_C>).taken(24)),
    /* DD */ None,
    /* DE */ Some(Instruction::imm8("SBC A,d8", 8, Cpu::alu_d8::<ALU_SBC>)),
    /* DF */ Some(Instruction::none("RST 18H", 16, Cpu::rst::<0x0018>)),
    /* E0 */ Some(Instruction::imm8("LDH (a8),A", 12, Cpu::ldh_a8_a)),
    /* E1 */ Some(Instruction::none("POP HL", 12, Cpu::pop::<P_HL>)),
    /* E2 */ Some(Instruction::none("LD (C),A", 8, Cpu::ldh_c_a)),
    /* E3 */ None,
    /* E4 */ None,
    /* E5 */ Some(Instruction::none("PUSH HL", 16, Cpu::push::<P_HL>)),
    /* E6 */ Some(Instruction::imm8("AND d8", 8, Cpu::alu_d8::<ALU_AND>)),
    /* E7 */ Some(Instruction::none("RST 20H", 16, Cpu::rst::<0x0020>)),
    /* E8 */ Some(Instruction::imm8("ADD SP,r8", 16, Cpu::add_sp_r8)),
    /* E9 */ Some(Instruction::none("JP HL", 4, Cpu::jp_hl)),
    /* EA */ Some(Instruction::imm16("LD (a16),A", 16, Cpu::ld_a16_a)),
    /* EB */ None,
    /* EC */ None,
    /* ED */ None,
    /* EE */ Some(Instruction::imm8("XOR d8", 8, Cpu::alu_d8::<ALU_XOR>)),
    /* EF */ Some(Instruction::none("RST 28H", 16, Cpu::rst::<0x0028>)),
    /* F0 */ Some(Instruction::imm8("LDH A,(a8)", 12, Cpu::ldh_a_a8)),
    /* F1 */ Some(Instruction::none("POP AF", 12, Cpu::pop::<P_AF>)),
    /* F2 */ Some(Instruction::none("LD A,(C)", 8, Cpu::ldh_a_c)),
    /* F3 */ Some(Instruction::none("DI", 4, Cpu::di)),
    /* F4 */ None,
    /* F5 */ Some(Instruction::none("PUSH AF", 16, Cpu::push::<P_AF>)),
    /* F6 */ Some(Instruction::imm8("OR d8", 8, Cpu::alu_d8::<ALU_OR>)),
    /* F7 */ Some(Instruction::none("RST 30H", 16, Cpu::rst::<0x0030>)),
    /* F8 */ Some(Instruction::imm8("LD HL,SP+r8", 12, Cpu::ld_hl_sp_r8)),
    /* F9 */ Some(Instruction::none("LD SP,HL", 8, Cpu::ld_sp_hl)),
    /* FA */ Some(Instruction::imm16("LD A,(a16)", 16, Cpu::ld_a_a16)),
    /* FB */ Some(Instruction::none("EI", 4, Cpu::ei)),
    /* FC */ None,
    /* FD */ None,
    /* FE */ Some(Instruction::imm8("CP d8", 8, Cpu::alu_d8::<ALU_CP>)),
    /* FF */ Some(Instruction::none("RST 38H", 16, Cpu::rst::<0x0038>)),
];
