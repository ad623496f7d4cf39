use dotmatrix_common::app::App;
use dotmatrix_common::key::Key;

use crate::{GameBoy, SCREEN_HEIGHT, SCREEN_SCALE, SCREEN_WIDTH};

/// Frames between periodic machine summaries (about one second).
const SUMMARY_INTERVAL: u64 = 60;
/// Frames with an unchanged PC before we warn about a stall.
const STALL_FRAMES: u32 = 600;

/// SDL-facing application wrapper for the Game Boy machine.
///
/// This type implements the shared `App` trait so that any front-end can
/// drive the emulator one frame at a time.
pub struct GameBoyApp {
    pub gb: GameBoy,
    should_exit: bool,
    scale: u32,
    frame_counter: u64,
    last_pc: u16,
    pc_stagnant_frames: u32,
    last_lcdc: u8,
}

impl Default for GameBoyApp {
    fn default() -> Self {
        Self::new(GameBoy::new())
    }
}

impl GameBoyApp {
    pub fn new(gb: GameBoy) -> Self {
        Self {
            gb,
            should_exit: false,
            scale: SCREEN_SCALE,
            frame_counter: 0,
            last_pc: 0,
            pc_stagnant_frames: 0,
            last_lcdc: 0,
        }
    }

    /// Override the window scale factor.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    fn log_summary(&mut self) {
        let regs = *self.gb.registers();
        let lcdc = self.gb.read8(0xFF40);
        let ly = self.gb.read8(0xFF44);
        let interrupts = self.gb.interrupts();
        log::info!(
            "GB: frame={} pc=0x{:04X} sp=0x{:04X} af=0x{:04X} bc=0x{:04X} de=0x{:04X} hl=0x{:04X} ime={} halted={} IF=0x{:02X} IE=0x{:02X} LCDC=0x{:02X} LY={}",
            self.frame_counter,
            regs.pc,
            regs.sp,
            regs.af(),
            regs.bc(),
            regs.de(),
            regs.hl(),
            interrupts.ime,
            self.gb.cpu.halted,
            interrupts.read_if(),
            interrupts.read_ie(),
            lcdc,
            ly,
        );
    }

    fn track_stall(&mut self) {
        let pc = self.gb.registers().pc;
        if pc == self.last_pc {
            self.pc_stagnant_frames = self.pc_stagnant_frames.saturating_add(1);
        } else {
            self.pc_stagnant_frames = 0;
            self.last_pc = pc;
        }

        if self.pc_stagnant_frames == STALL_FRAMES {
            log::warn!(
                "GB: PC unchanged for ~{} frames at 0x{:04X} (halted={})",
                STALL_FRAMES,
                pc,
                self.gb.cpu.halted,
            );
        }

        let lcdc = self.gb.read8(0xFF40);
        if lcdc != self.last_lcdc {
            log::debug!("GB LCDC changed: 0x{:02X} -> 0x{:02X}", self.last_lcdc, lcdc);
            self.last_lcdc = lcdc;
        }
    }
}

impl App for GameBoyApp {
    fn init(&mut self) {
        log::info!("Game Boy init");
        self.last_pc = self.gb.registers().pc;
        self.last_lcdc = self.gb.read8(0xFF40);
    }

    fn update(&mut self, screen_state: &mut [u8]) {
        if self.should_exit {
            return;
        }

        if let Err(err) = self.gb.step_frame() {
            log::error!("GB: emulation halted: {}", err);
            self.should_exit = true;
        }
        self.gb.video_frame(screen_state);
        self.frame_counter = self.frame_counter.wrapping_add(1);

        if self.gb.is_stopped() {
            log::info!("GB: CPU executed STOP, ending session");
            self.should_exit = true;
        }

        self.track_stall();
        if self.frame_counter == 1 || self.frame_counter % SUMMARY_INTERVAL == 0 {
            self.log_summary();
        }
    }

    fn handle_key_event(&mut self, key: Key, is_pressed: bool) {
        log::debug!("GB key event: {:?} pressed={}", key, is_pressed);
        match key {
            Key::Backspace if is_pressed => self.gb.reset(),
            Key::Escape if is_pressed => self.should_exit = true,
            _ => self.gb.handle_key(key, is_pressed),
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Game Boy exit after {} frames", self.frame_counter);
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn scale(&self) -> u32 {
        self.scale
    }

    fn title(&self) -> String {
        "dotmatrix".to_string()
    }
}
