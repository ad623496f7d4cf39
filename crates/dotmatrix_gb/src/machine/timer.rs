//! Divider and timer unit (0xFF04..=0xFF07).
//!
//! A hidden counter advances once per machine cycle (4 ticks); DIV
//! exposes its bits 13:6, which is the upper byte of the equivalent
//! tick counter. TIMA counts falling edges of the counter bit selected
//! by TAC, so writes to DIV or TAC can produce an extra increment just
//! like on hardware.

use crate::interrupt::{Interrupt, InterruptController};

/// Ticks per timer step.
const TICKS_PER_CYCLE: u32 = 4;

pub(crate) struct Timer {
    /// Hidden system counter, one increment per machine cycle.
    internal_counter: u16,
    tima: u8,
    tma: u8,
    /// TAC, lower 3 bits.
    tac: u8,
    /// TIMA overflowed on the previous cycle; the reload from TMA and the
    /// interrupt request happen on the next one.
    overflow: bool,
    /// Ticks not yet folded into a whole machine cycle.
    pending_ticks: u32,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    pub(crate) fn new() -> Self {
        Self {
            internal_counter: 0,
            tima: 0,
            tma: 0,
            tac: 0,
            overflow: false,
            pending_ticks: 0,
        }
    }

    /// DMG power-on state: DIV reads 0xAB at PC=0x0100.
    pub(crate) fn init_dmg(&mut self) {
        *self = Self::new();
        self.internal_counter = 0x2AC0;
    }

    #[inline]
    fn enabled(&self) -> bool {
        (self.tac & 0x04) != 0
    }

    /// Counter bit watched by TIMA for the rate selected in TAC[1:0]:
    /// 00 → every 1024 ticks, 01 → 16, 10 → 64, 11 → 256.
    #[inline]
    fn counter_bit(&self) -> bool {
        let mask = match self.tac & 0x03 {
            0x01 => 1u16 << 1,
            0x02 => 1u16 << 3,
            0x03 => 1u16 << 5,
            _ => 1u16 << 7,
        };
        (self.internal_counter & mask) != 0
    }

    fn increment_tima(&mut self) {
        let (next, overflow) = self.tima.overflowing_add(1);
        self.tima = next;
        if overflow {
            self.overflow = true;
        }
    }

    /// Advance by `ticks` CPU ticks.
    pub(crate) fn tick(&mut self, ticks: u32, interrupts: &mut InterruptController) {
        self.pending_ticks += ticks;
        while self.pending_ticks >= TICKS_PER_CYCLE {
            self.pending_ticks -= TICKS_PER_CYCLE;
            self.tick_cycle(interrupts);
        }
    }

    fn tick_cycle(&mut self, interrupts: &mut InterruptController) {
        if self.overflow {
            self.tima = self.tma;
            self.overflow = false;
            interrupts.request(Interrupt::Timer);
        }

        let before = self.enabled() && self.counter_bit();
        self.internal_counter = self.internal_counter.wrapping_add(1);
        if before && !self.counter_bit() {
            self.increment_tima();
        }
    }

    pub(crate) fn read(&self, addr: u16) -> u8 {
        match addr {
            0xFF04 => (self.internal_counter >> 6) as u8,
            0xFF05 => self.tima,
            0xFF06 => self.tma,
            0xFF07 => 0xF8 | self.tac,
            _ => 0xFF,
        }
    }

    pub(crate) fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0xFF04 => {
                // Resetting the counter is a falling edge if the watched bit was high.
                if self.enabled() && self.counter_bit() {
                    self.increment_tima();
                }
                self.internal_counter = 0;
            }
            0xFF05 => {
                // A write in the overflow cycle cancels the pending reload.
                self.tima = value;
                self.overflow = false;
            }
            0xFF06 => self.tma = value,
            0xFF07 => {
                let before = self.enabled() && self.counter_bit();
                self.tac = value & 0x07;
                if before && !(self.enabled() && self.counter_bit()) {
                    self.increment_tima();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests;
