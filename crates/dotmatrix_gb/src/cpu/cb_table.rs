use super::decode::{CbInstruction, R_A, R_B, R_C, R_D, R_E, R_H, R_HL, R_L};
use super::Cpu;

/// Expands one row per operation into the eight register forms, in opcode
/// order B, C, D, E, H, L, (HL), A. `$generics` are the leading const
/// arguments (the bit index for BIT/RES/SET).
macro_rules! cb_rows {
    ($($handler:ident [$($generics:tt)*] $name:literal $hl_ticks:literal,)*) => {
        [$(
            CbInstruction::new(concat!($name, "B"), 4, Cpu::$handler::<$($generics)* R_B>),
            CbInstruction::new(concat!($name, "C"), 4, Cpu::$handler::<$($generics)* R_C>),
            CbInstruction::new(concat!($name, "D"), 4, Cpu::$handler::<$($generics)* R_D>),
            CbInstruction::new(concat!($name, "E"), 4, Cpu::$handler::<$($generics)* R_E>),
            CbInstruction::new(concat!($name, "H"), 4, Cpu::$handler::<$($generics)* R_H>),
            CbInstruction::new(concat!($name, "L"), 4, Cpu::$handler::<$($generics)* R_L>),
            CbInstruction::new(concat!($name, "(HL)"), $hl_ticks, Cpu::$handler::<$($generics)* R_HL>),
            CbInstruction::new(concat!($name, "A"), 4, Cpu::$handler::<$($generics)* R_A>),
        )*]
    };
}

/// CB-prefixed opcode table.
///
/// Costs are charged on top of the 4 ticks of the 0xCB prefix entry:
/// register forms total 8, read-modify-write (HL) forms 16 and BIT (HL) 12.
pub(super) static CB_TABLE: [CbInstruction; 256] = cb_rows![
    rlc [] "RLC " 12,
    rrc [] "RRC " 12,
    rl [] "RL " 12,
    rr [] "RR " 12,
    sla [] "SLA " 12,
    sra [] "SRA " 12,
    swap [] "SWAP " 12,
    srl [] "SRL " 12,
    bit [0,] "BIT 0," 8,
    bit [1,] "BIT 1," 8,
    bit [2,] "BIT 2," 8,
    bit [3,] "BIT 3," 8,
    bit [4,] "BIT 4," 8,
    bit [5,] "BIT 5," 8,
    bit [6,] "BIT 6," 8,
    bit [7,] "BIT 7," 8,
    res [0,] "RES 0," 12,
    res [1,] "RES 1," 12,
    res [2,] "RES 2," 12,
    res [3,] "RES 3," 12,
    res [4,] "RES 4," 12,
    res [5,] "RES 5," 12,
    res [6,] "RES 6," 12,
    res [7,] "RES 7," 12,
    set [0,] "SET 0," 12,
    set [1,] "SET 1," 12,
    set [2,] "SET 2," 12,
    set [3,] "SET 3," 12,
    set [4,] "SET 4," 12,
    set [5,] "SET 5," 12,
    set [6,] "SET 6," 12,
    set [7,] "SET 7," 12,
];
