//! The DMG machine: memory bus, PPU, timer, serial port, joypad and the
//! cartridge loader, tied together with the CPU by `GameBoy`.

mod bus;
mod cartridge;
mod gameboy;
mod ppu;
mod serial;
mod timer;

pub(crate) use bus::GameBoyBus;
pub use bus::Button;
pub use cartridge::{header_checksum, Cartridge, HeaderWarning, NINTENDO_LOGO};
pub use gameboy::GameBoy;
pub use ppu::{Mode, FRAME_TICKS, LINE_TICKS};

#[cfg(test)]
mod tests;
