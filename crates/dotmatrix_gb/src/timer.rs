use crate::cpu::{Bus, IntLine};
use crate::memory::Memory;

pub const DIV: u16 = 0xFF04;
pub const TIMA: u16 = 0xFF05;
pub const TMA: u16 = 0xFF06;
pub const TAC: u16 = 0xFF07;

/// Divider and timer counters. The unit consumes the tick count of every
/// CPU iteration; its registers live in the memory unit and are bumped
/// through privileged writes so the DIV write-resets-to-zero interception
/// is not triggered from inside.
#[derive(Default)]
pub struct Timer {
    div_ticks: u32,
    tima_ticks: u32,
}

impl Timer {
    pub fn update(&mut self, ticks: u32, mem: &mut Memory) {
        self.div_ticks += ticks;
        while self.div_ticks >= 256 {
            self.div_ticks -= 256;
            let div = mem.read8(DIV);
            mem.write8_privileged(DIV, div.wrapping_add(1));
        }

        let tac = mem.read8(TAC);
        if tac & 0x04 == 0 {
            return;
        }
        // TAC frequency select, in T-cycles per TIMA increment.
        let period = match tac & 0x03 {
            0 => 1024,
            1 => 16,
            2 => 64,
            _ => 256,
        };
        self.tima_ticks += ticks;
        while self.tima_ticks >= period {
            self.tima_ticks -= period;
            let tima = mem.read8(TIMA);
            if tima == 0xFF {
                let tma = mem.read8(TMA);
                mem.write8_privileged(TIMA, tma);
                mem.request_interrupt(IntLine::TIMER);
            } else {
                mem.write8_privileged(TIMA, tima + 1);
            }
        }
    }
}
