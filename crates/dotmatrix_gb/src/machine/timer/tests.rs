use super::Timer;
use crate::interrupt::{InterruptController, InterruptFlags};

fn timer_with_tac(tac: u8) -> (Timer, InterruptController) {
    let mut timer = Timer::new();
    timer.init_dmg();
    // Reset DIV before enabling so the write cannot produce an edge.
    timer.write(0xFF04, 0);
    timer.write(0xFF07, tac);
    (timer, InterruptController::new())
}

#[test]
fn power_on_div() {
    let mut timer = Timer::new();
    timer.init_dmg();
    assert_eq!(timer.read(0xFF04), 0xAB);
    assert_eq!(timer.read(0xFF07), 0xF8);
}

#[test]
fn div_advances_every_256_ticks() {
    let mut timer = Timer::new();
    timer.init_dmg();
    let mut interrupts = InterruptController::new();

    timer.tick(252, &mut interrupts);
    assert_eq!(timer.read(0xFF04), 0xAB);
    timer.tick(4, &mut interrupts);
    assert_eq!(timer.read(0xFF04), 0xAC);
}

#[test]
fn div_write_resets_counter() {
    let mut timer = Timer::new();
    timer.init_dmg();
    timer.write(0xFF04, 0x77);
    assert_eq!(timer.read(0xFF04), 0);
}

#[test]
fn partial_cycles_accumulate() {
    let (mut timer, mut interrupts) = timer_with_tac(0x05);
    for _ in 0..8 {
        timer.tick(2, &mut interrupts);
    }
    assert_eq!(timer.read(0xFF05), 1);
}

#[test]
fn tima_rates_follow_tac() {
    for (tac, period) in [(0x04u8, 1024u32), (0x05, 16), (0x06, 64), (0x07, 256)] {
        let (mut timer, mut interrupts) = timer_with_tac(tac);
        timer.tick(period - 4, &mut interrupts);
        assert_eq!(timer.read(0xFF05), 0, "TAC=0x{tac:02X}");
        timer.tick(4, &mut interrupts);
        assert_eq!(timer.read(0xFF05), 1, "TAC=0x{tac:02X}");
        timer.tick(period * 3, &mut interrupts);
        assert_eq!(timer.read(0xFF05), 4, "TAC=0x{tac:02X}");
    }
}

#[test]
fn disabled_timer_does_not_count() {
    let (mut timer, mut interrupts) = timer_with_tac(0x01);
    timer.tick(4096, &mut interrupts);
    assert_eq!(timer.read(0xFF05), 0);
}

#[test]
fn overflow_reloads_tma_and_requests_interrupt() {
    let (mut timer, mut interrupts) = timer_with_tac(0x05);
    timer.write(0xFF06, 0x42);
    timer.write(0xFF05, 0xFF);

    timer.tick(16, &mut interrupts);
    assert_eq!(timer.read(0xFF05), 0x00);
    assert!(!interrupts.flags.contains(InterruptFlags::TIMER));

    timer.tick(4, &mut interrupts);
    assert_eq!(timer.read(0xFF05), 0x42);
    assert!(interrupts.flags.contains(InterruptFlags::TIMER));
}

#[test]
fn tima_write_cancels_pending_reload() {
    let (mut timer, mut interrupts) = timer_with_tac(0x05);
    timer.write(0xFF06, 0x42);
    timer.write(0xFF05, 0xFF);
    timer.tick(16, &mut interrupts);

    timer.write(0xFF05, 0x10);
    timer.tick(4, &mut interrupts);
    assert_eq!(timer.read(0xFF05), 0x10);
    assert!(interrupts.flags.is_empty());
}

#[test]
fn div_write_on_high_bit_increments_tima() {
    let (mut timer, mut interrupts) = timer_with_tac(0x05);
    // Counter 2: bit 1 high.
    timer.tick(8, &mut interrupts);
    assert_eq!(timer.read(0xFF05), 0);
    timer.write(0xFF04, 0);
    assert_eq!(timer.read(0xFF05), 1);
}
