use super::Ppu;

impl Ppu {
    /// Re-decode the tile row touched by a VRAM write.
    ///
    /// `offset` is relative to 0x8000 and must lie in the tile-data window
    /// (0x0000..0x1800). Each tile row is two bytes: bit 7 of the low byte
    /// is the low colour bit of the leftmost pixel, the high byte supplies
    /// the upper bits.
    pub(crate) fn update_tile(&mut self, offset: u16, vram: &[u8]) {
        let base = (offset & 0x1FFE) as usize;
        let tile = (base >> 4) & 0x1FF;
        let row = (base >> 1) & 7;
        let (Some(&low), Some(&high)) = (vram.get(base), vram.get(base + 1)) else {
            return;
        };

        let decoded = &mut self.tiles[tile][row];
        for (x, pixel) in decoded.iter_mut().enumerate() {
            let bit = 7 - x;
            *pixel = ((low >> bit) & 1) | (((high >> bit) & 1) << 1);
        }
    }

    /// Resolve a background/window tile-map entry to a cache index.
    ///
    /// LCDC bit 4 set: unsigned indices from 0x8000. Clear: signed indices
    /// around 0x9000, which lands indices 0..=127 on cache tiles 256..=383.
    #[inline]
    pub(super) fn bg_tile_index(&self, map_entry: u8) -> usize {
        if (self.lcdc & 0x10) != 0 {
            map_entry as usize
        } else {
            (256 + map_entry as i8 as i16) as usize
        }
    }
}
