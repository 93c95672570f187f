use std::thread;
use std::time::{Duration, Instant};

use crate::cartridge::{Cartridge, CartridgeError};
use crate::cpu::{Bus, Cpu};
use crate::joypad::Button;
use crate::memory::Memory;
use crate::ppu::Ppu;
use crate::timer::Timer;
use crate::{FRAME_TICKS, NS_PER_TICK};

/// The assembled machine: CPU plus the tick-driven units, all sharing the
/// memory unit. Each iteration runs one CPU dispatch and forwards its
/// tick cost to the timer and the LCD sequencer.
pub struct Machine {
    pub cpu: Cpu,
    pub mem: Memory,
    timer: Timer,
    ppu: Ppu,
    global_ticks: u64,
    pacing: bool,
    pacer: Option<Pacer>,
}

impl Machine {
    /// Build a machine without a boot ROM: registers and a few IO
    /// defaults are set to the state the DMG boot ROM leaves behind.
    pub fn new(rom: Vec<u8>) -> Result<Self, CartridgeError> {
        let mut machine = Self::from_cartridge(Cartridge::new(rom)?);
        machine.cpu.skip_boot();
        machine.mem.write8_privileged(0xFF40, 0x91); // LCDC: display on
        machine.mem.write8_privileged(0xFF47, 0xFC); // BGP
        Ok(machine)
    }

    /// Build a machine that starts executing the given boot ROM at 0x0000.
    pub fn with_boot(rom: Vec<u8>, boot: &[u8; 0x100]) -> Result<Self, CartridgeError> {
        let mut machine = Self::from_cartridge(Cartridge::new(rom)?);
        machine.mem.load_boot(boot);
        Ok(machine)
    }

    fn from_cartridge(cart: Cartridge) -> Self {
        Self {
            cpu: Cpu::new(),
            mem: Memory::new(cart),
            timer: Timer::default(),
            ppu: Ppu::default(),
            global_ticks: 0,
            pacing: false,
            pacer: None,
        }
    }

    /// Throttle execution to real hardware speed. Off by default, which
    /// runs as fast as the host allows.
    pub fn set_pacing(&mut self, on: bool) {
        self.pacing = on;
        if !on {
            self.pacer = None;
        }
    }

    pub fn global_ticks(&self) -> u64 {
        self.global_ticks
    }

    pub fn press_button(&mut self, button: Button) {
        self.mem.press_button(button);
    }

    pub fn release_button(&mut self, button: Button) {
        self.mem.release_button(button);
    }

    /// One machine iteration; returns the T-cycles it consumed.
    pub fn step(&mut self) -> u32 {
        let ticks = self.cpu.step(&mut self.mem);
        self.timer.update(ticks, &mut self.mem);
        self.ppu.update(ticks, &mut self.mem);
        self.global_ticks += ticks as u64;
        if self.pacing {
            let pacer = self.pacer.get_or_insert_with(Pacer::new);
            pacer.wait(self.global_ticks);
        }
        ticks
    }

    /// Run until at least `ticks` more T-cycles have elapsed. Undefined
    /// opcodes cost zero T-cycles; they count as four against the budget
    /// here so the loop terminates on a ROM full of them.
    pub fn step_ticks(&mut self, ticks: u64) {
        let mut remaining = ticks;
        while remaining > 0 {
            remaining = remaining.saturating_sub(self.step().max(4) as u64);
        }
    }

    pub fn step_frame(&mut self) {
        self.step_ticks(FRAME_TICKS as u64);
    }
}

/// Wall-clock governor. The deadline for N global ticks is the start
/// instant plus N x 238 ns; a sleep covers all but the last millisecond
/// and a spin loop the tail, so elapsed time never falls behind the
/// emulated clock.
struct Pacer {
    start: Instant,
}

impl Pacer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    fn wait(&self, global_ticks: u64) {
        let deadline = self.start + Duration::from_nanos(global_ticks * NS_PER_TICK);
        loop {
            let now = Instant::now();
            if now >= deadline {
                return;
            }
            let remaining = deadline - now;
            if remaining > Duration::from_millis(1) {
                thread::sleep(remaining - Duration::from_millis(1));
            } else {
                std::hint::spin_loop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::{IntLine, INT_REQUEST};
    use once_cell::sync::Lazy;

    // Flat 32 KiB ROM whose entry point spins in a tight JR loop.
    static LOOP_ROM: Lazy<Vec<u8>> = Lazy::new(|| {
        let mut rom = vec![0u8; 0x8000];
        rom[0x100] = 0x18; // JR -2
        rom[0x101] = 0xFE;
        rom
    });

    #[test]
    fn boots_to_the_post_boot_register_state() {
        let machine = Machine::new(LOOP_ROM.clone()).unwrap();
        assert_eq!(machine.cpu.regs.pc, 0x0100);
        assert_eq!(machine.cpu.regs.af(), 0x01B0);
        assert_eq!(machine.cpu.regs.sp, 0xFFFE);
    }

    #[test]
    fn step_ticks_advances_the_global_clock() {
        let mut machine = Machine::new(LOOP_ROM.clone()).unwrap();
        machine.step_frame();
        assert!(machine.global_ticks() >= FRAME_TICKS as u64);
    }

    #[test]
    fn vblank_is_requested_once_per_frame() {
        let mut machine = Machine::new(LOOP_ROM.clone()).unwrap();
        machine.step_frame();
        assert_ne!(
            machine.mem.read8(INT_REQUEST) & IntLine::VBLANK.bits(),
            0
        );
    }

    #[test]
    fn button_press_requests_the_joypad_line() {
        let mut machine = Machine::new(LOOP_ROM.clone()).unwrap();
        machine.press_button(Button::B);
        assert_ne!(
            machine.mem.read8(INT_REQUEST) & IntLine::JOYPAD.bits(),
            0
        );
    }

    #[test]
    fn step_frame_terminates_on_zero_cost_opcodes() {
        let mut rom = vec![0u8; 0x8000];
        // JP into a sea of undefined (zero-cost) opcodes.
        rom[0x100..0x103].copy_from_slice(&[0xC3, 0x50, 0x01]);
        rom[0x150..].fill(0xD3);
        let mut machine = Machine::new(rom).unwrap();
        machine.step_frame();
        assert!(machine.cpu.regs.pc > 0x0150);
    }

    #[test]
    fn pacing_holds_execution_to_the_wall_clock() {
        let mut machine = Machine::new(LOOP_ROM.clone()).unwrap();
        machine.set_pacing(true);
        let start = Instant::now();
        machine.step_ticks(10_000);
        // 10_000 ticks may not finish before 10_000 x 238 ns of real time.
        assert!(start.elapsed() >= Duration::from_nanos(10_000 * NS_PER_TICK - 100_000));
    }
}
