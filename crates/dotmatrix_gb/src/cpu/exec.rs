//! Opcode handlers bound into the descriptor tables.
//!
//! Register and pair operands are const generic indices (see `decode`), so
//! one handler body covers a whole row of the opcode map while each table
//! entry still points at its own monomorphised function.

mod alu;
mod cb;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;
