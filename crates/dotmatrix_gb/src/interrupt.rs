use bitflags::bitflags;

bitflags! {
    /// Interrupt source bits as they appear in IE (0xFFFF) and IF (0xFF0F).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 0x01;
        const LCD_STAT = 0x02;
        const TIMER = 0x04;
        const SERIAL = 0x08;
        const JOYPAD = 0x10;
    }
}

/// A single interrupt source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl Interrupt {
    /// All sources, highest priority first.
    pub const PRIORITY: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    #[inline]
    pub const fn flag(self) -> InterruptFlags {
        match self {
            Interrupt::VBlank => InterruptFlags::VBLANK,
            Interrupt::LcdStat => InterruptFlags::LCD_STAT,
            Interrupt::Timer => InterruptFlags::TIMER,
            Interrupt::Serial => InterruptFlags::SERIAL,
            Interrupt::Joypad => InterruptFlags::JOYPAD,
        }
    }

    /// Restart address the CPU jumps to when servicing this source.
    #[inline]
    pub const fn vector(self) -> u16 {
        match self {
            Interrupt::VBlank => 0x0040,
            Interrupt::LcdStat => 0x0048,
            Interrupt::Timer => 0x0050,
            Interrupt::Serial => 0x0058,
            Interrupt::Joypad => 0x0060,
        }
    }
}

/// IME / IE / IF state.
///
/// The controller only tracks and selects interrupts. Pushing PC and
/// jumping to the vector is done by the CPU at a step boundary (see
/// `Cpu::handle_interrupts`), so the ordering is fixed by `PRIORITY`
/// rather than by whoever raised the request first.
#[derive(Clone, Debug)]
pub struct InterruptController {
    pub ime: bool,
    /// IE is a full 8-bit register; only the low five bits select sources.
    pub enable: u8,
    pub flags: InterruptFlags,
}

impl Default for InterruptController {
    fn default() -> Self {
        Self::new()
    }
}

impl InterruptController {
    pub const fn new() -> Self {
        Self {
            ime: true,
            enable: 0,
            flags: InterruptFlags::empty(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Set the IF bit for `interrupt` unconditionally.
    #[inline]
    pub fn request(&mut self, interrupt: Interrupt) {
        self.flags |= interrupt.flag();
    }

    /// Set the IF bit for `interrupt` only when it is enabled in IE.
    ///
    /// Returns whether the request was latched.
    #[inline]
    pub fn request_if_enabled(&mut self, interrupt: Interrupt) -> bool {
        if self.enabled().contains(interrupt.flag()) {
            self.request(interrupt);
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn enabled(&self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(self.enable)
    }

    /// Sources that are both requested and enabled, regardless of IME.
    #[inline]
    pub fn pending(&self) -> InterruptFlags {
        self.flags & self.enabled()
    }

    pub fn highest_pending(&self) -> Option<Interrupt> {
        let pending = self.pending();
        Interrupt::PRIORITY
            .into_iter()
            .find(|interrupt| pending.contains(interrupt.flag()))
    }

    /// Select the interrupt to service at this step boundary.
    ///
    /// When IME is set and something is pending, the highest priority
    /// source is acknowledged (its IF bit cleared), IME is cleared and the
    /// source is returned. Lower priority sources stay pending.
    pub fn take_pending(&mut self) -> Option<Interrupt> {
        if !self.ime {
            return None;
        }
        let interrupt = self.highest_pending()?;
        self.flags.remove(interrupt.flag());
        self.ime = false;
        Some(interrupt)
    }

    /// IF as seen on the bus; the three unused bits read back as 1.
    #[inline]
    pub fn read_if(&self) -> u8 {
        0xE0 | self.flags.bits()
    }

    #[inline]
    pub fn write_if(&mut self, value: u8) {
        self.flags = InterruptFlags::from_bits_truncate(value);
    }

    #[inline]
    pub fn read_ie(&self) -> u8 {
        self.enable
    }

    #[inline]
    pub fn write_ie(&mut self, value: u8) {
        self.enable = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_on_state() {
        let ic = InterruptController::new();
        assert!(ic.ime);
        assert_eq!(ic.enable, 0);
        assert!(ic.flags.is_empty());
        assert_eq!(ic.read_if(), 0xE0);
    }

    #[test]
    fn vectors_follow_priority_order() {
        let vectors: Vec<u16> = Interrupt::PRIORITY.iter().map(|i| i.vector()).collect();
        assert_eq!(vectors, vec![0x40, 0x48, 0x50, 0x58, 0x60]);
    }

    #[test]
    fn take_pending_services_one_source_at_a_time() {
        let mut ic = InterruptController::new();
        ic.write_ie(0b0000_0011);
        ic.write_if(0b0000_0011);

        assert_eq!(ic.take_pending(), Some(Interrupt::VBlank));
        assert_eq!(ic.flags, InterruptFlags::LCD_STAT);
        assert!(!ic.ime);

        // Nothing is taken while IME is clear.
        assert_eq!(ic.take_pending(), None);

        ic.ime = true;
        assert_eq!(ic.take_pending(), Some(Interrupt::LcdStat));
        assert!(ic.flags.is_empty());
    }

    #[test]
    fn disabled_sources_are_not_pending() {
        let mut ic = InterruptController::new();
        ic.request(Interrupt::Timer);
        assert_eq!(ic.highest_pending(), None);
        assert_eq!(ic.take_pending(), None);
        assert!(ic.ime);

        ic.write_ie(InterruptFlags::TIMER.bits());
        assert_eq!(ic.highest_pending(), Some(Interrupt::Timer));
    }

    #[test]
    fn request_if_enabled_respects_ie() {
        let mut ic = InterruptController::new();
        assert!(!ic.request_if_enabled(Interrupt::VBlank));
        assert!(ic.flags.is_empty());

        ic.write_ie(0x01);
        assert!(ic.request_if_enabled(Interrupt::VBlank));
        assert_eq!(ic.flags, InterruptFlags::VBLANK);
    }

    #[test]
    fn if_write_keeps_only_source_bits() {
        let mut ic = InterruptController::new();
        ic.write_if(0xFF);
        assert_eq!(ic.flags.bits(), 0x1F);
        assert_eq!(ic.read_if(), 0xFF);
    }
}
