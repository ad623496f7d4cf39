use dotmatrix_common::Color;

use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

use super::Ppu;

/// Tile map offsets inside VRAM (0x9800 and 0x9C00).
const LOW_MAP: usize = 0x1800;
const HIGH_MAP: usize = 0x1C00;

const SPRITE_COUNT: usize = 40;

impl Ppu {
    /// Compose the current scanline into the framebuffer.
    ///
    /// Background first (with the window drawn over it), then sprites.
    /// `bg_index` keeps the raw background colour index per pixel so the
    /// sprite priority flag can be resolved afterwards.
    pub(super) fn render_scanline(&mut self, vram: &[u8], oam: &[u8]) {
        let line = self.scanline as usize;
        if line >= SCREEN_HEIGHT {
            return;
        }

        let mut row = [self.bg_palette[0]; SCREEN_WIDTH];
        let mut bg_index = [0u8; SCREEN_WIDTH];

        if !self.lcd_enabled() {
            self.write_row(line, &row);
            return;
        }

        if (self.lcdc & 0x01) != 0 {
            self.render_background(vram, &mut row, &mut bg_index);
            self.render_window(vram, &mut row, &mut bg_index);
        }

        if (self.lcdc & 0x02) != 0 {
            self.render_sprites(oam, &bg_index, &mut row);
        }

        self.write_row(line, &row);
    }

    fn render_background(
        &self,
        vram: &[u8],
        row: &mut [Color; SCREEN_WIDTH],
        bg_index: &mut [u8; SCREEN_WIDTH],
    ) {
        let map = if (self.lcdc & 0x08) != 0 { HIGH_MAP } else { LOW_MAP };
        let y = self.scanline.wrapping_add(self.scy);

        for x in 0..SCREEN_WIDTH {
            let color = self.map_pixel(vram, map, (x as u8).wrapping_add(self.scx), y);
            bg_index[x] = color;
            row[x] = self.bg_palette[color as usize];
        }
    }

    fn render_window(
        &mut self,
        vram: &[u8],
        row: &mut [Color; SCREEN_WIDTH],
        bg_index: &mut [u8; SCREEN_WIDTH],
    ) {
        if (self.lcdc & 0x20) == 0 || self.scanline < self.wy || self.wx > 166 {
            return;
        }

        let map = if (self.lcdc & 0x40) != 0 { HIGH_MAP } else { LOW_MAP };
        let origin = self.wx as i16 - 7;
        let y = self.window_line;

        for x in origin.max(0) as usize..SCREEN_WIDTH {
            let color = self.map_pixel(vram, map, (x as i16 - origin) as u8, y);
            bg_index[x] = color;
            row[x] = self.bg_palette[color as usize];
        }
        self.window_line = self.window_line.wrapping_add(1);
    }

    fn render_sprites(&self, oam: &[u8], bg_index: &[u8; SCREEN_WIDTH], row: &mut [Color; SCREEN_WIDTH]) {
        let line = self.scanline as i16;
        let height: i16 = if (self.lcdc & 0x04) != 0 { 16 } else { 8 };

        // Lower OAM indices win, so draw them last.
        for entry in oam.chunks_exact(4).take(SPRITE_COUNT).rev() {
            let top = entry[0] as i16 - 16;
            let left = entry[1] as i16 - 8;
            let attrs = entry[3];

            if line < top || line >= top + height {
                continue;
            }

            let mut tile_row = line - top;
            if (attrs & 0x40) != 0 {
                tile_row = height - 1 - tile_row;
            }
            let tile = if height == 16 {
                (entry[2] & 0xFE) as usize + (tile_row / 8) as usize
            } else {
                entry[2] as usize
            };
            let pixels = &self.tiles[tile][(tile_row % 8) as usize];
            let palette = &self.obj_palettes[((attrs >> 4) & 1) as usize];
            let behind_bg = (attrs & 0x80) != 0;

            for px in 0..8i16 {
                let x = left + px;
                if !(0..SCREEN_WIDTH as i16).contains(&x) {
                    continue;
                }
                let x = x as usize;
                let column = if (attrs & 0x20) != 0 { 7 - px } else { px };
                let color = pixels[column as usize];
                if color == 0 || (behind_bg && bg_index[x] != 0) {
                    continue;
                }
                row[x] = palette[color as usize];
            }
        }
    }

    /// Colour index at `(x, y)` of a 256x256 tile map.
    #[inline]
    fn map_pixel(&self, vram: &[u8], map: usize, x: u8, y: u8) -> u8 {
        let entry = vram[map + (y as usize / 8) * 32 + x as usize / 8];
        let tile = self.bg_tile_index(entry);
        self.tiles[tile][(y & 7) as usize][(x & 7) as usize]
    }

    fn write_row(&mut self, line: usize, row: &[Color; SCREEN_WIDTH]) {
        let start = line * SCREEN_WIDTH * 3;
        let dst = &mut self.framebuffer[start..start + SCREEN_WIDTH * 3];
        for (pixel, color) in dst.chunks_exact_mut(3).zip(row.iter()) {
            let (r, g, b) = color.rgb();
            pixel[0] = r;
            pixel[1] = g;
            pixel[2] = b;
        }
    }
}
