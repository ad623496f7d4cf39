use crate::interrupt::Interrupt;

use super::GameBoyBus;

/// The eight DMG buttons.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

impl Button {
    /// Whether the button sits in the d-pad group (P1 bit 4) or the
    /// action group (P1 bit 5), and its bit within the low nibble.
    const fn position(self) -> (bool, u8) {
        match self {
            Button::Right => (true, 0),
            Button::Left => (true, 1),
            Button::Up => (true, 2),
            Button::Down => (true, 3),
            Button::A => (false, 0),
            Button::B => (false, 1),
            Button::Select => (false, 2),
            Button::Start => (false, 3),
        }
    }
}

/// P1 (0xFF00) state. Button masks use bit=1 for "pressed".
pub(crate) struct Joypad {
    /// P1 bits 5 (buttons) and 4 (d-pad); 0 selects the group.
    select: u8,
    buttons: u8,
    dpad: u8,
}

impl Default for Joypad {
    fn default() -> Self {
        Self {
            select: 0x30,
            buttons: 0,
            dpad: 0,
        }
    }
}

impl Joypad {
    /// Update a button. Returns true on a released → pressed transition.
    pub(crate) fn set(&mut self, button: Button, pressed: bool) -> bool {
        let (dpad, bit) = button.position();
        let mask = if dpad { &mut self.dpad } else { &mut self.buttons };
        let was_pressed = (*mask & (1 << bit)) != 0;
        if pressed {
            *mask |= 1 << bit;
        } else {
            *mask &= !(1 << bit);
        }
        pressed && !was_pressed
    }
}

impl GameBoyBus {
    pub(super) fn read_joyp(&self) -> u8 {
        // Bits 7-6 always read as 1.
        let select = self.joypad.select & 0x30;
        let mut low = 0x0F;
        if (select & 0x10) == 0 {
            low &= !self.joypad.dpad & 0x0F;
        }
        if (select & 0x20) == 0 {
            low &= !self.joypad.buttons & 0x0F;
        }
        0xC0 | select | low
    }

    pub(super) fn write_joyp(&mut self, value: u8) {
        // Only the select bits are writable.
        self.joypad.select = value & 0x30;
    }

    pub(crate) fn set_button(&mut self, button: Button, pressed: bool) {
        if self.joypad.set(button, pressed) {
            self.interrupts.request(Interrupt::Joypad);
            log::debug!("joypad: {:?} pressed, requesting interrupt", button);
        }
    }
}
