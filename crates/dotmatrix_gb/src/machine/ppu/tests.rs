use super::{Mode, Ppu, FRAME_TICKS, LINE_TICKS};
use crate::interrupt::{InterruptController, InterruptFlags};
use crate::SCREEN_WIDTH;

struct Rig {
    ppu: Ppu,
    vram: Vec<u8>,
    oam: Vec<u8>,
    interrupts: InterruptController,
    ticks: u64,
}

impl Rig {
    fn new() -> Self {
        Self {
            ppu: Ppu::new(),
            vram: vec![0; 0x2000],
            oam: vec![0; 0x100],
            interrupts: InterruptController::new(),
            ticks: 0,
        }
    }

    /// Advance by `total` ticks in instruction-sized increments.
    fn run(&mut self, total: u64) {
        let target = self.ticks + total;
        while self.ticks < target {
            self.ticks = (self.ticks + 4).min(target);
            self.ppu
                .step(self.ticks, &self.vram, &self.oam, &mut self.interrupts);
        }
    }

    /// Advance by `delta` ticks in a single call.
    fn jump(&mut self, delta: u64) {
        self.ticks += delta;
        self.ppu
            .step(self.ticks, &self.vram, &self.oam, &mut self.interrupts);
    }

    fn write_vram(&mut self, offset: u16, value: u8) {
        self.vram[offset as usize] = value;
        if offset < 0x1800 {
            self.ppu.update_tile(offset, &self.vram);
        }
    }

    fn pixel(&self, x: usize, y: usize) -> (u8, u8, u8) {
        let i = (y * SCREEN_WIDTH + x) * 3;
        let fb = self.ppu.framebuffer();
        (fb[i], fb[i + 1], fb[i + 2])
    }
}

const WHITE: (u8, u8, u8) = (0xFF, 0xFF, 0xFF);
const LIGHT: (u8, u8, u8) = (0xAA, 0xAA, 0xAA);
const DARK: (u8, u8, u8) = (0x55, 0x55, 0x55);
const BLACK: (u8, u8, u8) = (0x00, 0x00, 0x00);

#[test]
fn power_on_state() {
    let ppu = Ppu::new();
    assert_eq!(ppu.mode, Mode::OamScan);
    assert_eq!(ppu.scanline, 0);
    assert_eq!(ppu.lcdc, 0x91);
    assert_eq!(ppu.read_stat() & 0x03, Mode::OamScan as u8);
}

#[test]
fn visible_line_walks_through_modes() {
    let mut rig = Rig::new();
    rig.run(80);
    assert_eq!(rig.ppu.mode, Mode::VramRead);
    rig.run(172);
    assert_eq!(rig.ppu.mode, Mode::HBlank);
    assert_eq!(rig.ppu.scanline, 0);
    rig.run(204);
    assert_eq!(rig.ppu.mode, Mode::OamScan);
    assert_eq!(rig.ppu.scanline, 1);
}

#[test]
fn line_from_hblank_entry_advances_scanline() {
    let mut rig = Rig::new();
    rig.run(80 + 172);
    assert_eq!(rig.ppu.mode, Mode::HBlank);

    rig.run(204);
    assert_eq!(rig.ppu.scanline, 1);
    assert_eq!(rig.ppu.mode, Mode::OamScan);

    // Leftover ticks carry into the next mode, so the rest of the 456-tick
    // line walks through OamScan and VramRead and lands back on HBlank one
    // line further down. OamScan on line+1 is the state at the 204 mark.
    rig.run(LINE_TICKS - 204);
    assert_eq!(rig.ppu.scanline, 1);
    assert_eq!(rig.ppu.mode, Mode::HBlank);
}

#[test]
fn single_call_from_hblank_entry_matches_incremental_steps() {
    let mut rig = Rig::new();
    rig.jump(80 + 172);
    assert_eq!(rig.ppu.mode, Mode::HBlank);

    rig.jump(204);
    assert_eq!((rig.ppu.scanline, rig.ppu.mode), (1, Mode::OamScan));

    rig.jump(LINE_TICKS - 204);
    assert_eq!((rig.ppu.scanline, rig.ppu.mode), (1, Mode::HBlank));
}

#[test]
fn last_visible_hblank_enters_vblank() {
    let mut rig = Rig::new();
    rig.run(143 * LINE_TICKS + 80 + 172);
    assert_eq!(rig.ppu.scanline, 143);
    assert_eq!(rig.ppu.mode, Mode::HBlank);

    rig.run(204);
    assert_eq!(rig.ppu.scanline, 144);
    assert_eq!(rig.ppu.mode, Mode::VBlank);
    assert!(rig.ppu.take_frame());
    assert!(!rig.ppu.take_frame());
}

#[test]
fn full_frame_wraps_to_initial_state() {
    let mut rig = Rig::new();
    rig.run(FRAME_TICKS - 4);
    assert_eq!(rig.ppu.scanline, 153);
    assert_eq!(rig.ppu.mode, Mode::VBlank);

    rig.run(4);
    assert_eq!(rig.ppu.scanline, 0);
    assert_eq!(rig.ppu.mode, Mode::OamScan);
}

#[test]
fn large_jump_matches_incremental_drive() {
    let mut stepped = Rig::new();
    let mut jumped = Rig::new();
    let total = 3 * FRAME_TICKS + 12_345;

    stepped.run(total);
    jumped.jump(total);

    assert_eq!(stepped.ppu.scanline, jumped.ppu.scanline);
    assert_eq!(stepped.ppu.mode, jumped.ppu.mode);
    assert_eq!(stepped.ppu.residue, jumped.ppu.residue);
}

#[test]
fn residue_carries_over_between_steps() {
    let mut rig = Rig::new();
    rig.jump(100);
    assert_eq!(rig.ppu.mode, Mode::VramRead);
    assert_eq!(rig.ppu.residue, 20);

    rig.jump(151);
    assert_eq!(rig.ppu.mode, Mode::VramRead);
    rig.jump(1);
    assert_eq!(rig.ppu.mode, Mode::HBlank);
    assert_eq!(rig.ppu.residue, 0);
}

#[test]
fn stale_tick_count_is_ignored() {
    let mut rig = Rig::new();
    rig.jump(200);
    let mode = rig.ppu.mode;
    rig.ppu.step(50, &rig.vram, &rig.oam, &mut rig.interrupts);
    assert_eq!(rig.ppu.mode, mode);
}

#[test]
fn vblank_request_requires_ie() {
    let mut rig = Rig::new();
    rig.run(144 * LINE_TICKS);
    assert_eq!(rig.ppu.mode, Mode::VBlank);
    assert!(!rig.interrupts.flags.contains(InterruptFlags::VBLANK));

    let mut rig = Rig::new();
    rig.interrupts.enable = InterruptFlags::VBLANK.bits();
    rig.run(144 * LINE_TICKS);
    assert!(rig.interrupts.flags.contains(InterruptFlags::VBLANK));
}

#[test]
fn lyc_coincidence_requests_stat() {
    let mut rig = Rig::new();
    rig.interrupts.enable = InterruptFlags::LCD_STAT.bits();
    rig.ppu.write_register(0xFF45, 3);
    rig.ppu.write_register(0xFF41, 0x40);

    rig.run(2 * LINE_TICKS);
    assert!(!rig.interrupts.flags.contains(InterruptFlags::LCD_STAT));
    assert_eq!(rig.ppu.read_stat() & 0x04, 0);

    rig.run(LINE_TICKS);
    assert_eq!(rig.ppu.scanline, 3);
    assert!(rig.interrupts.flags.contains(InterruptFlags::LCD_STAT));
    assert_eq!(rig.ppu.read_stat() & 0x04, 0x04);
}

#[test]
fn hblank_select_requests_stat() {
    let mut rig = Rig::new();
    rig.interrupts.enable = InterruptFlags::LCD_STAT.bits();
    rig.ppu.write_register(0xFF41, 0x08);
    rig.run(80);
    assert!(rig.interrupts.flags.is_empty());
    rig.run(172);
    assert!(rig.interrupts.flags.contains(InterruptFlags::LCD_STAT));
}

#[test]
fn stat_and_ly_registers() {
    let mut rig = Rig::new();
    rig.ppu.write_register(0xFF41, 0xFF);
    assert_eq!(rig.ppu.read_register(0xFF41) & 0x78, 0x78);
    assert_eq!(rig.ppu.read_register(0xFF41) & 0x80, 0x80);

    rig.run(LINE_TICKS * 5);
    rig.ppu.write_register(0xFF44, 0x42);
    assert_eq!(rig.ppu.read_register(0xFF44), 5);
}

#[test]
fn palettes_are_write_only() {
    let mut ppu = Ppu::new();
    ppu.write_register(0xFF47, 0x1B);
    assert_eq!(ppu.read_register(0xFF47), 0xFF);
    assert_eq!(ppu.bg_palette[0].rgb(), BLACK);
    assert_eq!(ppu.bg_palette[1].rgb(), DARK);
    assert_eq!(ppu.bg_palette[2].rgb(), LIGHT);
    assert_eq!(ppu.bg_palette[3].rgb(), WHITE);
}

#[test]
fn tile_row_decodes_from_both_bytes() {
    let mut rig = Rig::new();
    rig.write_vram(0x0000, 0x3C);
    rig.write_vram(0x0001, 0x7E);
    assert_eq!(rig.ppu.tile(0)[0], [0, 2, 3, 3, 3, 3, 2, 0]);

    // Row 7 of the last tile.
    rig.write_vram(0x17FE, 0x80);
    rig.write_vram(0x17FF, 0x01);
    assert_eq!(rig.ppu.tile(383)[7], [1, 0, 0, 0, 0, 0, 0, 2]);
}

#[test]
fn tile_cache_tracks_latest_write() {
    let mut rig = Rig::new();
    rig.write_vram(0x0012, 0xFF);
    assert_eq!(rig.ppu.tile(1)[1], [1; 8]);
    rig.write_vram(0x0012, 0x00);
    assert_eq!(rig.ppu.tile(1)[1], [0; 8]);
}

#[test]
fn signed_tile_addressing() {
    let mut ppu = Ppu::new();
    ppu.lcdc = 0x81;
    assert_eq!(ppu.bg_tile_index(0x00), 256);
    assert_eq!(ppu.bg_tile_index(0x7F), 383);
    assert_eq!(ppu.bg_tile_index(0x80), 128);
    assert_eq!(ppu.bg_tile_index(0xFF), 255);
    ppu.lcdc = 0x91;
    assert_eq!(ppu.bg_tile_index(0x80), 128);
    assert_eq!(ppu.bg_tile_index(0x00), 0);
}

fn fill_tile(rig: &mut Rig, tile: u16, low: u8, high: u8) {
    for row in 0..8 {
        rig.write_vram(tile * 16 + row * 2, low);
        rig.write_vram(tile * 16 + row * 2 + 1, high);
    }
}

fn render_line(rig: &mut Rig, line: u8) {
    rig.ppu.scanline = line;
    rig.ppu.render_scanline(&rig.vram, &rig.oam);
}

#[test]
fn background_uses_map_and_scroll() {
    let mut rig = Rig::new();
    rig.ppu.write_register(0xFF47, 0xE4);
    fill_tile(&mut rig, 1, 0xFF, 0xFF);
    // Map entry (0, 1) points at the black tile.
    rig.vram[0x1801] = 1;

    render_line(&mut rig, 0);
    assert_eq!(rig.pixel(0, 0), WHITE);
    assert_eq!(rig.pixel(8, 0), BLACK);
    assert_eq!(rig.pixel(15, 0), BLACK);
    assert_eq!(rig.pixel(16, 0), WHITE);

    rig.ppu.write_register(0xFF43, 4);
    render_line(&mut rig, 0);
    assert_eq!(rig.pixel(4, 0), BLACK);
    assert_eq!(rig.pixel(12, 0), WHITE);

    // Vertical scroll wraps around the 256-pixel map.
    rig.ppu.write_register(0xFF43, 0);
    rig.ppu.write_register(0xFF42, 0xF8);
    render_line(&mut rig, 8);
    assert_eq!(rig.pixel(8, 8), BLACK);
}

#[test]
fn high_map_select() {
    let mut rig = Rig::new();
    rig.ppu.write_register(0xFF47, 0xE4);
    fill_tile(&mut rig, 1, 0xFF, 0x00);
    rig.vram[0x1C00] = 1;

    render_line(&mut rig, 0);
    assert_eq!(rig.pixel(0, 0), WHITE);

    rig.ppu.write_register(0xFF40, 0x99);
    render_line(&mut rig, 0);
    assert_eq!(rig.pixel(0, 0), LIGHT);
}

#[test]
fn lcd_off_blanks_to_palette_colour_zero() {
    let mut rig = Rig::new();
    rig.ppu.write_register(0xFF47, 0xE7);
    fill_tile(&mut rig, 0, 0xFF, 0xFF);
    rig.ppu.write_register(0xFF40, 0x11);
    render_line(&mut rig, 10);
    assert_eq!(rig.pixel(0, 10), BLACK);
    assert_eq!(rig.pixel(159, 10), BLACK);
}

#[test]
fn window_covers_background() {
    let mut rig = Rig::new();
    rig.ppu.write_register(0xFF47, 0xE4);
    fill_tile(&mut rig, 1, 0x00, 0xFF);
    // Window uses the 0x9C00 map, filled with tile 1.
    for entry in &mut rig.vram[0x1C00..0x2000] {
        *entry = 1;
    }
    rig.ppu.write_register(0xFF40, 0xF1);
    rig.ppu.write_register(0xFF4A, 10);
    rig.ppu.write_register(0xFF4B, 7 + 80);

    render_line(&mut rig, 9);
    assert_eq!(rig.pixel(100, 9), WHITE);

    render_line(&mut rig, 10);
    assert_eq!(rig.pixel(79, 10), WHITE);
    assert_eq!(rig.pixel(80, 10), DARK);
    assert_eq!(rig.ppu.window_line, 1);
}

fn place_sprite(rig: &mut Rig, index: usize, y: u8, x: u8, tile: u8, attrs: u8) {
    let base = index * 4;
    rig.oam[base..base + 4].copy_from_slice(&[y, x, tile, attrs]);
}

#[test]
fn sprites_are_transparent_on_index_zero() {
    let mut rig = Rig::new();
    rig.ppu.write_register(0xFF47, 0xE4);
    rig.ppu.write_register(0xFF48, 0xE4);
    rig.ppu.write_register(0xFF40, 0x93);
    // Left half colour 1, right half transparent.
    fill_tile(&mut rig, 2, 0xF0, 0x00);
    place_sprite(&mut rig, 0, 16 + 4, 8 + 20, 2, 0);

    render_line(&mut rig, 3);
    assert_eq!(rig.pixel(20, 3), WHITE);

    render_line(&mut rig, 4);
    assert_eq!(rig.pixel(20, 4), LIGHT);
    assert_eq!(rig.pixel(23, 4), LIGHT);
    assert_eq!(rig.pixel(24, 4), WHITE);

    render_line(&mut rig, 12);
    assert_eq!(rig.pixel(20, 12), WHITE);
}

#[test]
fn sprite_flip_and_palette_select() {
    let mut rig = Rig::new();
    rig.ppu.write_register(0xFF48, 0xE4);
    rig.ppu.write_register(0xFF49, 0x1B);
    rig.ppu.write_register(0xFF40, 0x93);
    // Only the leftmost pixel of row 0 is set (colour 1).
    rig.write_vram(3 * 16, 0x80);
    place_sprite(&mut rig, 0, 16, 8, 3, 0x20);
    place_sprite(&mut rig, 1, 16, 40, 3, 0x10);
    place_sprite(&mut rig, 2, 16 - 7, 80, 3, 0x40);

    render_line(&mut rig, 0);
    assert_eq!(rig.pixel(0, 0), WHITE);
    assert_eq!(rig.pixel(7, 0), LIGHT);
    // OBP1 maps colour 1 to dark grey.
    assert_eq!(rig.pixel(32, 0), DARK);
    // Vertically flipped: row 0 of the tile lands on the sprite's last row.
    assert_eq!(rig.pixel(72, 0), LIGHT);
}

#[test]
fn background_priority_flag() {
    let mut rig = Rig::new();
    rig.ppu.write_register(0xFF47, 0xE4);
    rig.ppu.write_register(0xFF48, 0xE4);
    rig.ppu.write_register(0xFF40, 0x93);
    // Background tile 0: left half colour 2, right half colour 0.
    fill_tile(&mut rig, 0, 0x00, 0xF0);
    fill_tile(&mut rig, 1, 0xFF, 0xFF);
    place_sprite(&mut rig, 0, 16, 8, 1, 0x80);

    render_line(&mut rig, 0);
    assert_eq!(rig.pixel(0, 0), DARK);
    assert_eq!(rig.pixel(4, 0), BLACK);
}

#[test]
fn lower_oam_index_wins_overlap() {
    let mut rig = Rig::new();
    rig.ppu.write_register(0xFF48, 0xE4);
    rig.ppu.write_register(0xFF40, 0x93);
    fill_tile(&mut rig, 1, 0xFF, 0x00);
    fill_tile(&mut rig, 2, 0xFF, 0xFF);
    place_sprite(&mut rig, 5, 16, 8, 1, 0);
    place_sprite(&mut rig, 9, 16, 8, 2, 0);

    render_line(&mut rig, 0);
    assert_eq!(rig.pixel(0, 0), LIGHT);
}

#[test]
fn sprites_disabled_by_lcdc() {
    let mut rig = Rig::new();
    rig.ppu.write_register(0xFF48, 0xE4);
    fill_tile(&mut rig, 1, 0xFF, 0xFF);
    place_sprite(&mut rig, 0, 16, 8, 1, 0);

    rig.ppu.write_register(0xFF40, 0x91);
    render_line(&mut rig, 0);
    assert_eq!(rig.pixel(0, 0), WHITE);
}

#[test]
fn tall_sprites_use_tile_pair() {
    let mut rig = Rig::new();
    rig.ppu.write_register(0xFF48, 0xE4);
    rig.ppu.write_register(0xFF40, 0x97);
    fill_tile(&mut rig, 4, 0xFF, 0x00);
    fill_tile(&mut rig, 5, 0x00, 0xFF);
    place_sprite(&mut rig, 0, 16, 8, 5, 0);

    render_line(&mut rig, 0);
    assert_eq!(rig.pixel(0, 0), LIGHT);
    render_line(&mut rig, 8);
    assert_eq!(rig.pixel(0, 8), DARK);
    render_line(&mut rig, 16);
    assert_eq!(rig.pixel(0, 16), WHITE);
}
