use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Immediate byte operand. PC still points at the opcode when a
    /// handler runs; the table's advance field moves it afterwards.
    #[inline]
    pub(super) fn imm8(&self, bus: &dyn Bus) -> u8 {
        bus.read8(self.regs.pc.wrapping_add(1))
    }

    #[inline]
    pub(super) fn imm8s(&self, bus: &dyn Bus) -> i8 {
        bus.read8_signed(self.regs.pc.wrapping_add(1))
    }

    #[inline]
    pub(super) fn imm16(&self, bus: &dyn Bus) -> u16 {
        bus.read16(self.regs.pc.wrapping_add(1))
    }

    /// Operand index decode used across the regular opcode grid:
    /// 0..=5 are B,C,D,E,H,L, 6 is the byte at (HL), 7 is A.
    pub(super) fn read_reg8(&self, bus: &dyn Bus, index: u8) -> u8 {
        match index & 0x07 {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => bus.read8(self.regs.hl()),
            _ => self.regs.a,
        }
    }

    pub(super) fn write_reg8(&mut self, bus: &mut dyn Bus, index: u8, value: u8) {
        match index & 0x07 {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => bus.write8(self.regs.hl(), value),
            _ => self.regs.a = value,
        }
    }

    /// Pair decode for the 0x01/0x11/0x21/0x31 column: BC, DE, HL, SP.
    pub(super) fn read_reg16(&self, index: u8) -> u16 {
        match index & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.sp,
        }
    }

    pub(super) fn write_reg16(&mut self, index: u8, value: u16) {
        match index & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.sp = value,
        }
    }

    pub(super) fn push16(&mut self, bus: &mut dyn Bus, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    pub(super) fn pop16(&mut self, bus: &dyn Bus) -> u16 {
        let lo = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from_be_bytes([hi, lo])
    }

    /// Condition-code decode shared by the JR/JP/CALL/RET families:
    /// 0 NZ, 1 Z, 2 NC, 3 C.
    pub(super) fn cc_condition(&self, cc: u8) -> bool {
        match cc & 0x03 {
            0 => !self.get_flag(Flag::Z),
            1 => self.get_flag(Flag::Z),
            2 => !self.get_flag(Flag::C),
            _ => self.get_flag(Flag::C),
        }
    }
}
