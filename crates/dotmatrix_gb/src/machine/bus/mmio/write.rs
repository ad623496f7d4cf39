use super::super::GameBoyBus;

/// End of the tile-data window inside VRAM (0x97FF).
const TILE_DATA_END: u16 = 0x17FF;

impl GameBoyBus {
    pub(in crate::machine::bus) fn write8_mmio(&mut self, addr: u16, value: u8) {
        match addr {
            // ROM is read-only; without a mapper there is nothing to latch.
            0x0000..=0x7FFF => {
                log::trace!("ignored ROM write 0x{:02X} to 0x{:04X}", value, addr);
            }
            0x8000..=0x9FFF => {
                let offset = addr - 0x8000;
                self.vram[offset as usize] = value;
                if offset <= TILE_DATA_END {
                    self.ppu.update_tile(offset, &self.vram[..]);
                }
            }
            0xA000..=0xBFFF => self.eram[(addr - 0xA000) as usize] = value,
            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize] = value,
            0xE000..=0xFDFF => self.wram[(addr - 0xE000) as usize] = value,
            0xFE00..=0xFEFF => self.oam[(addr - 0xFE00) as usize] = value,

            0xFF00 => self.write_joyp(value),
            0xFF01 | 0xFF02 => self.serial.write(addr, value, &mut self.interrupts),
            0xFF04..=0xFF07 => self.timer.write(addr, value),
            0xFF0F => self.interrupts.write_if(value),
            0xFF46 => self.do_oam_dma(value),
            0xFF40..=0xFF4B => self.ppu.write_register(addr, value),
            0xFF00..=0xFF7F => self.io[(addr - 0xFF00) as usize] = value,

            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize] = value,
            0xFFFF => self.interrupts.write_ie(value),
        }
    }
}
