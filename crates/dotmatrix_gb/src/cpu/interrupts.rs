use super::{Bus, Cpu, INTERRUPT_TICKS};

impl Cpu {
    /// Service at most one interrupt at a step boundary.
    ///
    /// Returns `Some(ticks)` if an interrupt was taken: IME and the
    /// source's IF bit are cleared, PC is pushed and control moves to the
    /// source's vector.
    ///
    /// An interrupt taken while the HALT bug is armed (`EI ; HALT` with a
    /// request already pending) returns to the HALT itself, and the bug
    /// never reaches the handler's first fetch.
    pub(crate) fn handle_interrupts(&mut self, bus: &mut dyn Bus) -> Option<u32> {
        let interrupt = bus.interrupts().take_pending()?;

        let pc = if std::mem::take(&mut self.halt_bug) {
            self.regs.pc.wrapping_sub(1)
        } else {
            self.regs.pc
        };
        self.push_u16(bus, pc);
        self.regs.pc = interrupt.vector();

        let interrupts = bus.interrupts();
        log::debug!(
            "GB CPU interrupt: {:?} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X} IF=0x{:02X} IE=0x{:02X}",
            interrupt,
            interrupt.vector(),
            pc,
            self.regs.sp,
            interrupts.read_if(),
            interrupts.read_ie(),
        );

        Some(INTERRUPT_TICKS)
    }

    /// Apply delayed IME change requested by EI.
    #[inline]
    pub(super) fn apply_ime_delay(&mut self, bus: &mut dyn Bus) {
        if self.ime_enable_delay {
            // Second step after EI: actually enable IME.
            bus.interrupts().ime = true;
            self.ime_enable_delay = false;
        } else if self.ime_enable_pending {
            // First step after EI: arm the delayed enable.
            self.ime_enable_pending = false;
            self.ime_enable_delay = true;
        }
    }
}
