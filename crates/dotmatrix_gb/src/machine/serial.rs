use crate::interrupt::{Interrupt, InterruptController};

/// Serial port modelled via SB/SC with no link partner attached.
///
/// Starting an internal-clock transfer (SC bits 7 and 0 set) completes it
/// immediately: the outgoing byte is appended to `output`, SB receives
/// 0xFF from the idle line, the start bit clears and the Serial interrupt
/// is requested. Test ROMs use this to print their results.
pub(crate) struct Serial {
    pub(crate) sb: u8,
    pub(crate) sc: u8,
    pub(crate) output: Vec<u8>,
}

impl Default for Serial {
    fn default() -> Self {
        Self {
            sb: 0x00,
            sc: 0x7E,
            output: Vec::new(),
        }
    }
}

impl Serial {
    pub(crate) fn read(&self, addr: u16) -> u8 {
        match addr {
            0xFF01 => self.sb,
            // Unused bits read as 1.
            _ => self.sc | 0x7E,
        }
    }

    pub(crate) fn write(&mut self, addr: u16, value: u8, interrupts: &mut InterruptController) {
        match addr {
            0xFF01 => self.sb = value,
            _ => {
                self.sc = value;
                if (self.sc & 0x81) == 0x81 {
                    self.output.push(self.sb);
                    self.sb = 0xFF;
                    self.sc &= !0x80;
                    interrupts.request(Interrupt::Serial);
                }
            }
        }
    }
}
