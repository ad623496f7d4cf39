//! DMG picture processing unit.
//!
//! The PPU is a small state machine driven by the machine's cumulative tick
//! counter (see `Ppu::step`). It keeps its own decoded copy of the tile
//! data in VRAM, updated on every write to 0x8000..=0x97FF, and composes
//! one framebuffer row each time a visible line leaves `VramRead`.

use dotmatrix_common::Color;

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

mod registers;
mod render;
mod tiles;
mod timing;

/// Number of 8x8 tiles addressable through 0x8000..=0x97FF.
pub(crate) const TILE_COUNT: usize = 384;

/// One decoded tile: `[row][column]` colour indices in 0..=3.
pub(crate) type Tile = [[u8; 8]; 8];

/// DMG grey shades, lightest first.
const SHADES: [Color; 4] = [
    Color::gray(0xFF),
    Color::gray(0xAA),
    Color::gray(0x55),
    Color::gray(0x00),
];

/// PPU mode as reported in STAT bits 0-1.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    HBlank = 0,
    VBlank = 1,
    OamScan = 2,
    VramRead = 3,
}

impl Mode {
    /// Ticks spent in this mode before the next transition.
    pub const fn budget(self) -> u64 {
        match self {
            Mode::OamScan => 80,
            Mode::VramRead => 172,
            Mode::HBlank => 204,
            Mode::VBlank => 456,
        }
    }
}

/// Ticks per scanline, visible or not.
pub const LINE_TICKS: u64 = 456;
/// Ticks per complete frame (154 lines).
pub const FRAME_TICKS: u64 = LINE_TICKS * 154;

pub(crate) struct Ppu {
    pub(crate) mode: Mode,
    /// LY.
    pub(crate) scanline: u8,
    /// Cumulative tick count seen by the last `step`.
    last_ticks: u64,
    /// Ticks accumulated in the current mode.
    residue: u64,

    pub(crate) lcdc: u8,
    /// STAT bits 3-6 (interrupt source selects).
    stat_select: u8,
    pub(crate) scy: u8,
    pub(crate) scx: u8,
    pub(crate) lyc: u8,
    pub(crate) wy: u8,
    pub(crate) wx: u8,

    bg_palette: [Color; 4],
    obj_palettes: [[Color; 4]; 2],

    tiles: Box<[Tile; TILE_COUNT]>,
    framebuffer: Vec<u8>,
    /// Set on VBlank entry, cleared by `take_frame`.
    frame_ready: bool,
    /// Internal window line counter, advanced only on lines that draw the window.
    window_line: u8,
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}

impl Ppu {
    pub(crate) fn new() -> Self {
        let mut ppu = Self {
            mode: Mode::OamScan,
            scanline: 0,
            last_ticks: 0,
            residue: 0,
            lcdc: 0,
            stat_select: 0,
            scy: 0,
            scx: 0,
            lyc: 0,
            wy: 0,
            wx: 0,
            bg_palette: SHADES,
            obj_palettes: [SHADES; 2],
            tiles: Box::new([[[0; 8]; 8]; TILE_COUNT]),
            framebuffer: vec![0xFF; SCREEN_WIDTH * SCREEN_HEIGHT * 3],
            frame_ready: false,
            window_line: 0,
        };
        ppu.apply_dmg_boot_state();
        ppu
    }

    /// Register values left behind by the DMG boot ROM.
    fn apply_dmg_boot_state(&mut self) {
        self.lcdc = 0x91;
        self.write_palette(0xFF47, 0xFC);
        self.write_palette(0xFF48, 0xFF);
        self.write_palette(0xFF49, 0xFF);
    }

    /// RGB24 framebuffer, `SCREEN_WIDTH * SCREEN_HEIGHT * 3` bytes.
    pub(crate) fn framebuffer(&self) -> &[u8] {
        &self.framebuffer
    }

    /// Return and clear the "frame completed" latch.
    pub(crate) fn take_frame(&mut self) -> bool {
        std::mem::take(&mut self.frame_ready)
    }

    #[inline]
    pub(crate) fn lcd_enabled(&self) -> bool {
        (self.lcdc & 0x80) != 0
    }

    #[cfg(test)]
    pub(crate) fn tile(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }
}

#[cfg(test)]
mod tests;
