use crate::interrupt::{Interrupt, InterruptController};

use super::{Mode, Ppu};

/// First scanline of the vertical blanking period.
const VBLANK_LINE: u8 = 144;
/// Last scanline of a frame.
const LAST_LINE: u8 = 153;

impl Ppu {
    /// Advance the state machine up to the machine's cumulative tick count.
    ///
    /// `ticks` is the running total since power-on (or the last reset),
    /// never a delta. Several transitions may fire in one call; whatever
    /// is left over stays in `residue` for the next one.
    pub(crate) fn step(
        &mut self,
        ticks: u64,
        vram: &[u8],
        oam: &[u8],
        interrupts: &mut InterruptController,
    ) {
        let elapsed = ticks.saturating_sub(self.last_ticks);
        self.last_ticks = self.last_ticks.max(ticks);
        self.residue += elapsed;

        while self.residue >= self.mode.budget() {
            self.residue -= self.mode.budget();
            self.advance(vram, oam, interrupts);
        }
    }

    fn advance(&mut self, vram: &[u8], oam: &[u8], interrupts: &mut InterruptController) {
        match self.mode {
            Mode::OamScan => self.enter(Mode::VramRead, interrupts),
            Mode::VramRead => {
                self.render_scanline(vram, oam);
                self.enter(Mode::HBlank, interrupts);
            }
            Mode::HBlank => {
                self.set_scanline(self.scanline + 1, interrupts);
                if self.scanline == VBLANK_LINE {
                    self.enter(Mode::VBlank, interrupts);
                } else {
                    self.enter(Mode::OamScan, interrupts);
                }
            }
            Mode::VBlank => {
                if self.scanline >= LAST_LINE {
                    self.window_line = 0;
                    self.set_scanline(0, interrupts);
                    self.enter(Mode::OamScan, interrupts);
                } else {
                    self.set_scanline(self.scanline + 1, interrupts);
                }
            }
        }
    }

    fn enter(&mut self, mode: Mode, interrupts: &mut InterruptController) {
        self.mode = mode;

        let select_bit = match mode {
            Mode::HBlank => Some(3),
            Mode::VBlank => Some(4),
            Mode::OamScan => Some(5),
            Mode::VramRead => None,
        };

        if mode == Mode::VBlank {
            self.frame_ready = true;
            let latched = interrupts.request_if_enabled(Interrupt::VBlank);
            log::debug!("PPU: VBlank entry, IF latched={}", latched);
        }

        if let Some(bit) = select_bit {
            if self.stat_selected(bit) && interrupts.request_if_enabled(Interrupt::LcdStat) {
                log::debug!("PPU: STAT request on {:?} entry (LY={})", mode, self.scanline);
            }
        }
    }

    fn set_scanline(&mut self, line: u8, interrupts: &mut InterruptController) {
        self.scanline = line;
        if self.scanline == self.lyc
            && self.stat_selected(6)
            && interrupts.request_if_enabled(Interrupt::LcdStat)
        {
            log::debug!("PPU: STAT request on LY==LYC ({})", self.lyc);
        }
    }
}
