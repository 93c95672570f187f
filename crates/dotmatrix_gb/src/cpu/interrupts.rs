use bitflags::bitflags;

use super::{Bus, Cpu};

/// Interrupt enable mask register.
pub const INT_ENABLE: u16 = 0xFFFF;
/// Interrupt request flags register.
pub const INT_REQUEST: u16 = 0xFF0F;

bitflags! {
    /// The five interrupt lines as they appear in IE (0xFFFF) and
    /// IF (0xFF0F). Both registers live on the bus, not in the CPU.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct IntLine: u8 {
        const VBLANK = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

impl IntLine {
    /// Service order, highest priority first.
    pub const PRIORITY: [IntLine; 5] = [
        IntLine::VBLANK,
        IntLine::LCD_STAT,
        IntLine::TIMER,
        IntLine::SERIAL,
        IntLine::JOYPAD,
    ];

    /// Fixed service vector: 0x40 for VBlank, then every 8 bytes.
    pub fn vector(self) -> u16 {
        0x0040 + self.bits().trailing_zeros() as u16 * 8
    }
}

impl Cpu {
    pub fn interrupt_enabled(&self, bus: &dyn Bus, line: IntLine) -> bool {
        IntLine::from_bits_truncate(bus.read8(INT_ENABLE)).contains(line)
    }

    pub fn interrupt_requested(&self, bus: &dyn Bus, line: IntLine) -> bool {
        IntLine::from_bits_truncate(bus.read8(INT_REQUEST)).contains(line)
    }

    /// True when any line is requested, regardless of IE and IME. This is
    /// the halt wake condition.
    pub fn any_interrupt_requested(&self, bus: &dyn Bus) -> bool {
        !IntLine::from_bits_truncate(bus.read8(INT_REQUEST)).is_empty()
    }

    pub fn enable_interrupt(&mut self, bus: &mut dyn Bus, line: IntLine) {
        let mask = bus.read8(INT_ENABLE);
        bus.write8(INT_ENABLE, mask | line.bits());
    }

    pub fn disable_interrupt(&mut self, bus: &mut dyn Bus, line: IntLine) {
        let mask = bus.read8(INT_ENABLE);
        bus.write8(INT_ENABLE, mask & !line.bits());
    }

    pub fn request_interrupt(&mut self, bus: &mut dyn Bus, line: IntLine) {
        let flags = bus.read8(INT_REQUEST);
        bus.write8(INT_REQUEST, flags | line.bits());
    }

    pub fn clear_interrupt(&mut self, bus: &mut dyn Bus, line: IntLine) {
        let flags = bus.read8(INT_REQUEST);
        bus.write8(INT_REQUEST, flags & !line.bits());
    }

    /// Service at most one pending interrupt: drop IME, acknowledge the
    /// request bit, push PC and jump to the vector. Runs once per
    /// dispatcher iteration, before the fetch.
    pub(super) fn service_interrupts(&mut self, bus: &mut dyn Bus) {
        if !self.ime {
            return;
        }
        let enabled = IntLine::from_bits_truncate(bus.read8(INT_ENABLE));
        let requested = IntLine::from_bits_truncate(bus.read8(INT_REQUEST));
        let pending = enabled & requested;
        if pending.is_empty() {
            return;
        }
        for line in IntLine::PRIORITY {
            if pending.contains(line) {
                log::trace!("servicing {line:?} interrupt at pc {:#06X}", self.regs.pc);
                self.ime = false;
                self.clear_interrupt(bus, line);
                let pc = self.regs.pc;
                self.push16(bus, pc);
                self.regs.pc = line.vector();
                break;
            }
        }
    }
}
