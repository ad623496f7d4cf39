use dotmatrix_common::key::Key;

use crate::cpu::{Bus, Cpu, Registers};
use crate::error::Result;
use crate::interrupt::InterruptController;

use super::{ppu::FRAME_TICKS, Button, Cartridge, GameBoyBus};

/// High-level Game Boy machine.
///
/// Holds the CPU core and the bus. This is the main entry point used by the
/// `GameBoyApp` wrapper and by headless tools.
pub struct GameBoy {
    pub cpu: Cpu,
    pub(crate) bus: GameBoyBus,
    /// Cumulative ticks since power-on or the last reset.
    ticks: u64,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoy {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            bus: GameBoyBus::default(),
            ticks: 0,
        }
    }

    /// Return every register and buffer to its power-on value. The loaded
    /// ROM image is kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.bus.reset();
        self.ticks = 0;
        log::info!("Game Boy reset");
    }

    /// Validate `rom` as a cartridge image and load it.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        let cartridge = Cartridge::from_bytes(rom.to_vec())?;
        self.load_cartridge(&cartridge);
        Ok(())
    }

    /// Load an already validated cartridge and reset the machine.
    pub fn load_cartridge(&mut self, cartridge: &Cartridge) {
        self.bus.load_rom(cartridge.rom());
        self.reset();
    }

    /// Execute one CPU step and advance the timer and PPU by its cost.
    pub fn step(&mut self) -> Result<u32> {
        let ticks = self.cpu.step(&mut self.bus)?;
        self.ticks += u64::from(ticks);
        self.bus.advance(ticks, self.ticks);
        Ok(ticks)
    }

    /// Run until the PPU completes a frame (VBlank entry), the CPU stops,
    /// or one frame's worth of ticks has elapsed.
    pub fn step_frame(&mut self) -> Result<()> {
        let deadline = self.ticks + FRAME_TICKS;
        while self.ticks < deadline && !self.cpu.is_stopped() {
            self.step()?;
            if self.bus.ppu.take_frame() {
                break;
            }
        }
        Ok(())
    }

    /// Update joypad state from a frontend key event.
    ///
    /// - Z => A, X => B
    /// - A => Select, S => Start
    /// - Arrow keys => D-pad
    pub fn handle_key(&mut self, key: Key, pressed: bool) {
        let button = match key {
            Key::Right => Button::Right,
            Key::Left => Button::Left,
            Key::Up => Button::Up,
            Key::Down => Button::Down,
            Key::Z => Button::A,
            Key::X => Button::B,
            Key::A => Button::Select,
            Key::S => Button::Start,
            _ => return,
        };
        self.set_button(button, pressed);
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.bus.set_button(button, pressed);
    }

    /// RGB24 framebuffer (`SCREEN_WIDTH * SCREEN_HEIGHT * 3` bytes).
    pub fn framebuffer(&self) -> &[u8] {
        self.bus.ppu.framebuffer()
    }

    /// Copy the framebuffer into a front-end buffer of the same layout.
    pub fn video_frame(&self, buffer: &mut [u8]) {
        let frame = self.framebuffer();
        let len = frame.len().min(buffer.len());
        buffer[..len].copy_from_slice(&frame[..len]);
    }

    /// Bytes sent over the serial port so far.
    pub fn serial_output(&self) -> &[u8] {
        &self.bus.serial.output
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn registers(&self) -> &Registers {
        &self.cpu.regs
    }

    pub fn interrupts(&self) -> &InterruptController {
        &self.bus.interrupts
    }

    pub fn is_stopped(&self) -> bool {
        self.cpu.is_stopped()
    }

    pub fn is_locked(&self) -> bool {
        self.cpu.is_locked()
    }

    /// Read a byte through the bus, with the same side effects as a CPU read.
    pub fn read8(&mut self, addr: u16) -> u8 {
        self.bus.read8(addr)
    }

    /// Write a byte through the bus, with the same side effects as a CPU write.
    pub fn write8(&mut self, addr: u16, value: u8) {
        self.bus.write8(addr, value)
    }
}
