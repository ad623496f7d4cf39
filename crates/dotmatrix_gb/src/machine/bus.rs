use crate::interrupt::InterruptController;

use super::{ppu::Ppu, serial::Serial, timer::Timer};

mod dma;
mod init;
mod joypad;
mod mmio;
mod traits;

pub use joypad::Button;
use joypad::Joypad;

pub(crate) const ROM_SIZE: usize = 0x8000;
const VRAM_SIZE: usize = 0x2000;
const ERAM_SIZE: usize = 0x2000;
const WRAM_SIZE: usize = 0x2000;
/// OAM proper is 160 bytes; the unusable 0xFEA0..=0xFEFF tail shares the buffer.
const OAM_SIZE: usize = 0x100;
const IO_SIZE: usize = 0x80;
const HRAM_SIZE: usize = 0x80;

/// Memory bus: every region of the DMG address space plus the devices
/// whose registers live in the I/O window.
pub(crate) struct GameBoyBus {
    rom: Box<[u8; ROM_SIZE]>,
    vram: Box<[u8; VRAM_SIZE]>,
    eram: Box<[u8; ERAM_SIZE]>,
    wram: Box<[u8; WRAM_SIZE]>,
    oam: [u8; OAM_SIZE],
    /// Backing store for I/O registers without a dedicated device.
    io: [u8; IO_SIZE],
    hram: [u8; HRAM_SIZE],
    pub(crate) ppu: Ppu,
    pub(crate) interrupts: InterruptController,
    timer: Timer,
    pub(crate) serial: Serial,
    joypad: Joypad,
}

impl Default for GameBoyBus {
    fn default() -> Self {
        let mut bus = Self {
            rom: Box::new([0; ROM_SIZE]),
            vram: Box::new([0; VRAM_SIZE]),
            eram: Box::new([0; ERAM_SIZE]),
            wram: Box::new([0; WRAM_SIZE]),
            oam: [0; OAM_SIZE],
            io: [0; IO_SIZE],
            hram: [0; HRAM_SIZE],
            ppu: Ppu::new(),
            interrupts: InterruptController::new(),
            timer: Timer::new(),
            serial: Serial::default(),
            joypad: Joypad::default(),
        };
        bus.apply_dmg_initial_io_state();
        bus
    }
}

impl GameBoyBus {
    /// Copy a 32 KiB image into the ROM region.
    pub(super) fn load_rom(&mut self, rom: &[u8]) {
        let len = rom.len().min(ROM_SIZE);
        self.rom[..len].copy_from_slice(&rom[..len]);
        self.rom[len..].fill(0);
    }

    /// Power-on state for everything except the ROM image.
    pub(super) fn reset(&mut self) {
        let rom = std::mem::replace(&mut self.rom, Box::new([0; ROM_SIZE]));
        *self = Self::default();
        self.rom = rom;
    }

    /// Advance the devices after a CPU step of `ticks`, with `total` the
    /// machine's cumulative tick count including that step.
    pub(super) fn advance(&mut self, ticks: u32, total: u64) {
        self.timer.tick(ticks, &mut self.interrupts);
        self.ppu
            .step(total, &self.vram[..], &self.oam, &mut self.interrupts);
    }
}
