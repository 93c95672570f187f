use crate::cpu::{Bus, IntLine};
use crate::memory::Memory;

pub const LCDC: u16 = 0xFF40;
pub const STAT: u16 = 0xFF41;
pub const LY: u16 = 0xFF44;
pub const LYC: u16 = 0xFF45;

const OAM_END: u32 = 80;
const TRANSFER_END: u32 = 252;
const LINE_TICKS: u32 = 456;
const VBLANK_START: u8 = 144;
const LINE_COUNT: u8 = 154;

/// LCD mode sequencer. Only the timing side of the PPU is modelled:
/// scanline and mode progression through STAT/LY/LYC and the interrupts
/// they raise. Nothing is rendered.
#[derive(Default)]
pub struct Ppu {
    line_ticks: u32,
}

impl Ppu {
    pub fn update(&mut self, ticks: u32, mem: &mut Memory) {
        if mem.read8(LCDC) & 0x80 == 0 {
            // Display disabled: park on line 0 in HBlank.
            self.line_ticks = 0;
            mem.write8_privileged(LY, 0);
            self.set_mode(mem, 0);
            return;
        }

        self.line_ticks += ticks;
        while self.line_ticks >= LINE_TICKS {
            self.line_ticks -= LINE_TICKS;
            let ly = (mem.read8(LY) + 1) % LINE_COUNT;
            mem.write8_privileged(LY, ly);
            if ly == VBLANK_START {
                mem.request_interrupt(IntLine::VBLANK);
            }
            self.check_lyc(mem, ly);
        }

        let mode = if mem.read8(LY) >= VBLANK_START {
            1
        } else if self.line_ticks <= OAM_END {
            2
        } else if self.line_ticks <= TRANSFER_END {
            3
        } else {
            0
        };
        if mem.read8(STAT) & 0x03 != mode {
            self.set_mode(mem, mode);
            // STAT interrupt enable bits: 3 HBlank, 4 VBlank, 5 OAM.
            let enable = match mode {
                0 => 0x08,
                1 => 0x10,
                2 => 0x20,
                _ => 0,
            };
            if enable != 0 && mem.read8(STAT) & enable != 0 {
                mem.request_interrupt(IntLine::LCD_STAT);
            }
        }
    }

    fn set_mode(&self, mem: &mut Memory, mode: u8) {
        let stat = mem.read8(STAT);
        mem.write8_privileged(STAT, (stat & !0x03) | mode);
    }

    fn check_lyc(&self, mem: &mut Memory, ly: u8) {
        let stat = mem.read8(STAT);
        let coincident = ly == mem.read8(LYC);
        let updated = if coincident { stat | 0x04 } else { stat & !0x04 };
        mem.write8_privileged(STAT, updated);
        if coincident && stat & 0x40 != 0 {
            mem.request_interrupt(IntLine::LCD_STAT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::Cartridge;
    use crate::cpu::INT_REQUEST;

    fn test_mem() -> Memory {
        let mut rom = vec![0u8; 0x8000];
        rom[0x147] = 0x00;
        let mut mem = Memory::new(Cartridge::new(rom).unwrap());
        mem.write8_privileged(LCDC, 0x80);
        mem
    }

    #[test]
    fn modes_progress_across_a_scanline() {
        let mut ppu = Ppu::default();
        let mut mem = test_mem();
        ppu.update(10, &mut mem);
        assert_eq!(mem.read8(STAT) & 0x03, 2); // OAM scan
        ppu.update(100, &mut mem);
        assert_eq!(mem.read8(STAT) & 0x03, 3); // transfer
        ppu.update(200, &mut mem);
        assert_eq!(mem.read8(STAT) & 0x03, 0); // HBlank
        ppu.update(150, &mut mem);
        assert_eq!(mem.read8(LY), 1);
        assert_eq!(mem.read8(STAT) & 0x03, 2);
    }

    #[test]
    fn vblank_starts_at_line_144() {
        let mut ppu = Ppu::default();
        let mut mem = test_mem();
        for _ in 0..144 {
            ppu.update(LINE_TICKS, &mut mem);
        }
        assert_eq!(mem.read8(LY), 144);
        assert_eq!(mem.read8(STAT) & 0x03, 1);
        assert_ne!(mem.read8(INT_REQUEST) & IntLine::VBLANK.bits(), 0);
    }

    #[test]
    fn scanlines_wrap_after_153() {
        let mut ppu = Ppu::default();
        let mut mem = test_mem();
        for _ in 0..154 {
            ppu.update(LINE_TICKS, &mut mem);
        }
        assert_eq!(mem.read8(LY), 0);
    }

    #[test]
    fn lyc_coincidence_flags_stat_and_interrupts() {
        let mut ppu = Ppu::default();
        let mut mem = test_mem();
        mem.write8(LYC, 1);
        mem.write8_privileged(STAT, 0x40); // coincidence interrupt enable
        ppu.update(LINE_TICKS, &mut mem);
        assert_ne!(mem.read8(STAT) & 0x04, 0);
        assert_ne!(mem.read8(INT_REQUEST) & IntLine::LCD_STAT.bits(), 0);

        ppu.update(LINE_TICKS, &mut mem);
        assert_eq!(mem.read8(STAT) & 0x04, 0);
    }

    #[test]
    fn disabled_display_parks_on_line_zero() {
        let mut ppu = Ppu::default();
        let mut mem = test_mem();
        ppu.update(LINE_TICKS * 3, &mut mem);
        mem.write8(LCDC, 0x00);
        ppu.update(100, &mut mem);
        assert_eq!(mem.read8(LY), 0);
        assert_eq!(mem.read8(STAT) & 0x03, 0);
    }
}
