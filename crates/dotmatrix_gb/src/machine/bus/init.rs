use super::GameBoyBus;

impl GameBoyBus {
    /// I/O registers as the DMG boot ROM leaves them at PC=0x0100.
    ///
    /// RAM regions stay zeroed so runs are reproducible. IF and IE are
    /// both cleared; the interrupt controller starts with IME set.
    pub(super) fn apply_dmg_initial_io_state(&mut self) {
        self.joypad = Default::default();
        self.serial = Default::default();
        self.timer.init_dmg();
        self.interrupts.reset();

        // Sound registers: no APU, but software may read the defaults.
        const SOUND_DEFAULTS: [(u16, u8); 21] = [
            (0xFF10, 0x80),
            (0xFF11, 0xBF),
            (0xFF12, 0xF3),
            (0xFF13, 0xFF),
            (0xFF14, 0xBF),
            (0xFF16, 0x3F),
            (0xFF17, 0x00),
            (0xFF18, 0xFF),
            (0xFF19, 0xBF),
            (0xFF1A, 0x7F),
            (0xFF1B, 0xFF),
            (0xFF1C, 0x9F),
            (0xFF1D, 0xFF),
            (0xFF1E, 0xBF),
            (0xFF20, 0xFF),
            (0xFF21, 0x00),
            (0xFF22, 0x00),
            (0xFF23, 0xBF),
            (0xFF24, 0x77),
            (0xFF25, 0xF3),
            (0xFF26, 0xF1),
        ];
        for (addr, value) in SOUND_DEFAULTS {
            self.io[(addr - 0xFF00) as usize] = value;
        }

        // LCDC 0x91, BGP 0xFC and OBP0/OBP1 0xFF are set by `Ppu::new`.
        self.io[0x46] = 0xFF;
    }
}
