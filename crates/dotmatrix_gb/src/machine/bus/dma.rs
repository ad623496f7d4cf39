use super::GameBoyBus;

/// Bytes copied by one OAM DMA transfer.
const DMA_LENGTH: u16 = 0xA0;

impl GameBoyBus {
    /// OAM DMA: copy 160 bytes from `value << 8` into 0xFE00..=0xFE9F.
    ///
    /// The transfer happens at once; the 160 M-cycle duration and the bus
    /// conflicts it causes on hardware are not modelled.
    pub(super) fn do_oam_dma(&mut self, value: u8) {
        let base = (value as u16) << 8;
        log::debug!("OAM DMA from 0x{:04X}", base);
        for i in 0..DMA_LENGTH {
            let byte = self.read8_mmio(base.wrapping_add(i));
            self.oam[i as usize] = byte;
        }
        self.io[0x46] = value;
    }
}
