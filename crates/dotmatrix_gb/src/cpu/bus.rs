use crate::interrupt::InterruptController;

/// Abstraction over the Game Boy address space as seen by the CPU.
///
/// 16-bit accesses are little-endian and always decompose into two 8-bit
/// accesses, so every side effect of `write8` also applies to `write16`.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }

    /// The interrupt controller backing IE/IF and IME.
    fn interrupts(&mut self) -> &mut InterruptController;
}
