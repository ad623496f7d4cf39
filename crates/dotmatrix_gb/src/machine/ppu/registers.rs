use super::{Ppu, SHADES};

impl Ppu {
    /// Read one of the LCD registers in 0xFF40..=0xFF4B (DMA excluded).
    pub(crate) fn read_register(&self, addr: u16) -> u8 {
        match addr {
            0xFF40 => self.lcdc,
            0xFF41 => self.read_stat(),
            0xFF42 => self.scy,
            0xFF43 => self.scx,
            0xFF44 => self.scanline,
            0xFF45 => self.lyc,
            // Palettes are write-only: the bus keeps only the decoded colours.
            0xFF47..=0xFF49 => 0xFF,
            0xFF4A => self.wy,
            0xFF4B => self.wx,
            _ => 0xFF,
        }
    }

    pub(crate) fn write_register(&mut self, addr: u16, value: u8) {
        match addr {
            0xFF40 => {
                if (self.lcdc ^ value) & 0x80 != 0 {
                    log::debug!("PPU: LCD {}", if value & 0x80 != 0 { "on" } else { "off" });
                }
                self.lcdc = value;
            }
            0xFF41 => self.stat_select = value & 0x78,
            0xFF42 => self.scy = value,
            0xFF43 => self.scx = value,
            // LY is read-only.
            0xFF44 => {}
            0xFF45 => self.lyc = value,
            0xFF47..=0xFF49 => self.write_palette(addr, value),
            0xFF4A => self.wy = value,
            0xFF4B => self.wx = value,
            _ => {}
        }
    }

    /// STAT: bit 7 reads as 1, bits 3-6 are the selects, bit 2 the LY==LYC
    /// coincidence and bits 0-1 the current mode.
    pub(crate) fn read_stat(&self) -> u8 {
        let coincidence = if self.scanline == self.lyc { 0x04 } else { 0 };
        0x80 | self.stat_select | coincidence | self.mode as u8
    }

    #[inline]
    pub(super) fn stat_selected(&self, bit: u8) -> bool {
        (self.stat_select & (1 << bit)) != 0
    }

    /// Remap a palette from its register encoding: two bits per colour
    /// index, index 0 in bits 0-1.
    pub(super) fn write_palette(&mut self, addr: u16, value: u8) {
        let palette = match addr {
            0xFF47 => &mut self.bg_palette,
            0xFF48 => &mut self.obj_palettes[0],
            _ => &mut self.obj_palettes[1],
        };
        for (i, color) in palette.iter_mut().enumerate() {
            *color = SHADES[((value >> (i * 2)) & 0x03) as usize];
        }
    }
}
