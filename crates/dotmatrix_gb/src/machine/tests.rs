use dotmatrix_common::key::Key;

use super::{header_checksum, Button, GameBoy, FRAME_TICKS, LINE_TICKS, NINTENDO_LOGO};
use crate::cpu::Bus;
use crate::error::GbError;
use crate::interrupt::InterruptFlags;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Build a valid 32 KiB ROM image whose entry point jumps to `program`
/// placed at 0x0150.
pub(super) fn rom_image(program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    // 0x0100: NOP; JP 0x0150
    rom[0x100..0x104].copy_from_slice(&[0x00, 0xC3, 0x50, 0x01]);
    rom[0x104..0x134].copy_from_slice(&NINTENDO_LOGO);
    rom[0x134..0x134 + 9].copy_from_slice(b"DOTMATRIX");
    rom[0x150..0x150 + program.len()].copy_from_slice(program);
    rom[0x14D] = header_checksum(&rom);
    rom
}

fn machine(program: &[u8]) -> GameBoy {
    let mut gb = GameBoy::new();
    gb.load_rom(&rom_image(program)).unwrap();
    gb
}

/// Step until PC reaches `pc` (bounded).
fn run_to(gb: &mut GameBoy, pc: u16) {
    for _ in 0..10_000 {
        if gb.cpu.regs.pc == pc {
            return;
        }
        gb.step().unwrap();
    }
    panic!("PC never reached 0x{pc:04X}");
}

#[test]
fn reset_matches_power_on_state() {
    let mut gb = machine(&[]);
    let regs = *gb.registers();
    assert_eq!(regs.a, 0x01);
    assert_eq!(regs.f, 0xB0);
    assert_eq!(regs.b, 0x00);
    assert_eq!(regs.c, 0x13);
    assert_eq!(regs.d, 0x00);
    assert_eq!(regs.e, 0xD8);
    assert_eq!(regs.h, 0x01);
    assert_eq!(regs.l, 0x4D);
    assert_eq!(regs.sp, 0xFFFE);
    assert_eq!(regs.pc, 0x0100);
    assert!(gb.interrupts().ime);
    assert_eq!(gb.read8(0xFFFF), 0x00);
    assert_eq!(gb.read8(0xFF0F) & 0x1F, 0x00);
    assert_eq!(gb.read8(0xFF40), 0x91);
    assert_eq!(gb.ticks(), 0);
}

#[test]
fn reset_restores_state_and_keeps_rom() {
    // LD A,0x42; LD (0xC000),A; DI
    let mut gb = machine(&[0x3E, 0x42, 0xEA, 0x00, 0xC0, 0xF3]);
    run_to(&mut gb, 0x0156);
    gb.write8(0xFFFF, 0x1F);
    gb.write8(0xFF80, 0x99);
    assert_eq!(gb.read8(0xC000), 0x42);
    assert!(!gb.interrupts().ime);

    gb.reset();
    assert_eq!(gb.read8(0xC000), 0x00);
    assert_eq!(gb.read8(0xFF80), 0x00);
    assert_eq!(gb.read8(0xFFFF), 0x00);
    assert!(gb.interrupts().ime);
    assert_eq!(gb.registers().pc, 0x0100);
    assert_eq!(gb.registers().a, 0x01);
    assert_eq!(gb.ticks(), 0);
    assert_eq!(gb.read8(0x0150), 0x3E);
}

#[test]
fn write16_read16_little_endian() {
    let mut gb = machine(&[]);
    for addr in [0xA000u16, 0xC000, 0xC123, 0xDFFE, 0xFF80, 0xFFFD] {
        let value = addr ^ 0xA55A;
        gb.bus.write16(addr, value);
        assert_eq!(gb.bus.read16(addr), value, "addr=0x{addr:04X}");
        assert_eq!(gb.read8(addr), value as u8);
        assert_eq!(gb.read8(addr + 1), (value >> 8) as u8);
    }
}

#[test]
fn echo_ram_mirrors_wram_both_ways() {
    let mut gb = machine(&[]);
    for k in 0..0x1E00u16 {
        let value = (k as u8).wrapping_mul(7) ^ 0x5A;
        gb.write8(0xC000 + k, value);
        assert_eq!(gb.read8(0xE000 + k), value);
    }
    for k in 0..0x1E00u16 {
        let value = (k as u8).wrapping_mul(13) ^ 0xC3;
        gb.write8(0xE000 + k, value);
        assert_eq!(gb.read8(0xC000 + k), value);
    }
}

#[test]
fn rom_is_read_only() {
    let mut gb = machine(&[0xAB]);
    gb.write8(0x0150, 0x00);
    gb.write8(0x2000, 0x01);
    assert_eq!(gb.read8(0x0150), 0xAB);
    assert_eq!(gb.read8(0x2000), 0x00);
}

#[test]
fn oam_dma_copies_160_bytes() {
    let mut gb = machine(&[]);
    for i in 0..0xA0u16 {
        gb.write8(0xC100 + i, i as u8 ^ 0xFF);
    }
    gb.write8(0xFF46, 0xC1);
    for i in 0..0xA0u16 {
        assert_eq!(gb.read8(0xFE00 + i), i as u8 ^ 0xFF);
    }
    assert_eq!(gb.read8(0xFF46), 0xC1);
}

#[test]
fn unusable_region_is_backed_by_oam_tail() {
    let mut gb = machine(&[]);
    gb.write8(0xFEA0, 0x12);
    gb.write8(0xFEFF, 0x34);
    assert_eq!(gb.read8(0xFEA0), 0x12);
    assert_eq!(gb.read8(0xFEFF), 0x34);
}

#[test]
fn vram_tile_writes_update_cache() {
    let mut gb = machine(&[]);
    gb.write8(0x8010, 0xFF);
    gb.write8(0x8011, 0xFF);
    assert_eq!(gb.bus.ppu.tile(1)[0], [3; 8]);

    gb.write8(0x97FE, 0x01);
    assert_eq!(gb.bus.ppu.tile(383)[7], [0, 0, 0, 0, 0, 0, 0, 1]);

    // Tile maps are plain storage.
    gb.write8(0x9800, 0xFF);
    assert_eq!(gb.read8(0x9800), 0xFF);
    assert_eq!(gb.bus.ppu.tile(0)[0], [0; 8]);
}

#[test]
fn interrupt_registers_route_to_controller() {
    let mut gb = machine(&[]);
    gb.write8(0xFFFF, 0x1F);
    gb.write8(0xFF0F, 0x05);
    assert_eq!(gb.interrupts().enable, 0x1F);
    assert_eq!(
        gb.interrupts().flags,
        InterruptFlags::VBLANK | InterruptFlags::TIMER
    );
    assert_eq!(gb.read8(0xFF0F), 0xE5);
    assert_eq!(gb.read8(0xFFFF), 0x1F);
}

#[test]
fn joypad_select_logic() {
    let mut gb = machine(&[]);
    gb.set_button(Button::Right, true);
    gb.set_button(Button::Start, true);

    // Nothing selected: all released.
    gb.write8(0xFF00, 0x30);
    assert_eq!(gb.read8(0xFF00), 0xFF);

    // D-pad selected (bit 4 low).
    gb.write8(0xFF00, 0x20);
    assert_eq!(gb.read8(0xFF00), 0xEE);

    // Buttons selected (bit 5 low).
    gb.write8(0xFF00, 0x10);
    assert_eq!(gb.read8(0xFF00), 0xD7);

    gb.set_button(Button::Start, false);
    assert_eq!(gb.read8(0xFF00), 0xDF);
}

#[test]
fn joypad_interrupt_on_press_only() {
    let mut gb = machine(&[]);
    gb.set_button(Button::A, true);
    assert!(gb.interrupts().flags.contains(InterruptFlags::JOYPAD));

    gb.write8(0xFF0F, 0x00);
    gb.set_button(Button::A, true);
    gb.set_button(Button::A, false);
    assert!(gb.interrupts().flags.is_empty());
}

#[test]
fn keys_map_to_buttons() {
    let mut gb = machine(&[]);
    gb.write8(0xFF00, 0x10);
    gb.handle_key(Key::Z, true);
    assert_eq!(gb.read8(0xFF00) & 0x0F, 0x0E);
    gb.handle_key(Key::Z, false);
    gb.handle_key(Key::S, true);
    assert_eq!(gb.read8(0xFF00) & 0x0F, 0x07);

    // Unmapped keys are ignored.
    gb.handle_key(Key::Backspace, true);
    gb.handle_key(Key::None, true);
    assert_eq!(gb.read8(0xFF00) & 0x0F, 0x07);
}

#[test]
fn div_is_driven_by_cpu_ticks() {
    let mut gb = machine(&[]);
    assert_eq!(gb.read8(0xFF04), 0xAB);
    while gb.ticks() < 256 {
        gb.step().unwrap();
    }
    assert_eq!(gb.ticks(), 256);
    assert_eq!(gb.read8(0xFF04), 0xAC);

    gb.write8(0xFF04, 0x12);
    assert_eq!(gb.read8(0xFF04), 0x00);
}

#[test]
fn timer_overflow_requests_interrupt() {
    // LD A,0x05; LDH (0x07),A; LD A,0xFF; LDH (0x05),A
    let mut gb = machine(&[0x3E, 0x05, 0xE0, 0x07, 0x3E, 0xFF, 0xE0, 0x05]);
    run_to(&mut gb, 0x0158);
    for _ in 0..16 {
        gb.step().unwrap();
    }
    assert!(gb.interrupts().flags.contains(InterruptFlags::TIMER));
}

#[test]
fn serial_transfer_is_captured() {
    // LD A,'H'; LDH (0x01),A; LD A,0x81; LDH (0x02),A
    let mut gb = machine(&[0x3E, b'H', 0xE0, 0x01, 0x3E, 0x81, 0xE0, 0x02]);
    run_to(&mut gb, 0x0158);
    assert_eq!(gb.serial_output(), b"H");
    assert_eq!(gb.read8(0xFF01), 0xFF);
    assert_eq!(gb.read8(0xFF02) & 0x80, 0);
    assert!(gb.interrupts().flags.contains(InterruptFlags::SERIAL));
}

#[test]
fn ly_reads_scanline_and_ignores_writes() {
    let mut gb = machine(&[]);
    while gb.ticks() < 3 * LINE_TICKS {
        gb.step().unwrap();
    }
    assert_eq!(gb.read8(0xFF44), 3);
    gb.write8(0xFF44, 0x80);
    assert_eq!(gb.read8(0xFF44), 3);
}

#[test]
fn step_frame_stops_at_vblank_entry() {
    let mut gb = machine(&[]);
    gb.step_frame().unwrap();
    let first = gb.ticks();
    assert!((144 * LINE_TICKS..144 * LINE_TICKS + 16).contains(&first));
    assert_eq!(gb.read8(0xFF44), 144);

    gb.step_frame().unwrap();
    let second = gb.ticks();
    assert!((first + FRAME_TICKS - 16..first + FRAME_TICKS + 16).contains(&second));
}

#[test]
fn vblank_interrupt_is_serviced() {
    // LD A,0x01; LDH (0xFF),A
    let mut gb = machine(&[0x3E, 0x01, 0xE0, 0xFF]);
    gb.step_frame().unwrap();
    assert!(gb.interrupts().flags.contains(InterruptFlags::VBLANK));

    let ticks = gb.step().unwrap();
    assert_eq!(ticks, 12);
    assert_eq!(gb.registers().pc, 0x0040);
    assert_eq!(gb.registers().sp, 0xFFFC);
    assert!(!gb.interrupts().ime);
    assert!(!gb.interrupts().flags.contains(InterruptFlags::VBLANK));
}

#[test]
fn framebuffer_reaches_front_end() {
    let mut gb = machine(&[]);
    gb.step_frame().unwrap();
    let mut buffer = vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT * 3];
    gb.video_frame(&mut buffer);
    assert_eq!(buffer.as_slice(), gb.framebuffer());
    // Blank VRAM with BGP 0xFC draws colour 0 (white) everywhere.
    assert!(buffer.iter().all(|&b| b == 0xFF));
}

#[test]
fn stop_ends_frame() {
    let mut gb = machine(&[0x10, 0x00]);
    gb.step_frame().unwrap();
    assert!(gb.is_stopped());
    assert_eq!(gb.registers().pc, 0x0152);
    assert!(gb.ticks() < 100);
}

#[test]
fn invalid_opcode_locks_machine() {
    let mut gb = machine(&[0xD3]);
    let err = gb.step_frame().unwrap_err();
    assert!(matches!(err, GbError::FatalDecode { opcode: 0xD3, pc: 0x0150 }));
    assert!(gb.is_locked());

    let ticks = gb.ticks();
    assert!(gb.step().is_err());
    assert_eq!(gb.ticks(), ticks);
    assert_eq!(gb.registers().pc, 0x0150);
}

#[test]
fn load_rom_rejects_unsupported_images() {
    let mut gb = GameBoy::new();
    let mut rom = rom_image(&[]);
    rom[0x147] = 0x03;
    assert!(matches!(
        gb.load_rom(&rom),
        Err(GbError::UnsupportedCartridge { cart_type: 0x03 })
    ));
    assert!(matches!(
        gb.load_rom(&[0u8; 0x100]),
        Err(GbError::MalformedRom { .. })
    ));
}
