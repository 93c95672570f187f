use super::{Cpu, Flag};

impl Cpu {
    /// ADD/ADC into A. Nibble overflow drives H, byte overflow drives C.
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let carry = (use_carry && self.get_flag(Flag::C)) as u8;
        let a = self.regs.a;
        let result = a.wrapping_add(value).wrapping_add(carry);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (a & 0x0F) + (value & 0x0F) + carry > 0x0F);
        self.set_flag(Flag::C, a as u16 + value as u16 + carry as u16 > 0xFF);
        self.regs.a = result;
    }

    /// Borrow detection is done at full precision: the subtraction going
    /// negative sets C, the low-nibble subtraction going negative sets H.
    fn sub_flags(&mut self, value: u8, use_carry: bool) -> u8 {
        let carry = (use_carry && self.get_flag(Flag::C)) as u8;
        let a = self.regs.a;
        let result = a.wrapping_sub(value).wrapping_sub(carry);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(
            Flag::H,
            (a & 0x0F) as i16 - (value & 0x0F) as i16 - (carry as i16) < 0,
        );
        self.set_flag(Flag::C, (a as i16) - (value as i16) - (carry as i16) < 0);
        result
    }

    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        self.regs.a = self.sub_flags(value, use_carry);
    }

    /// CP is SUB with the result discarded.
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.sub_flags(value, false);
    }

    pub(super) fn alu_and(&mut self, value: u8) {
        self.regs.a &= value;
        self.set_flag(Flag::Z, self.regs.a == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, true);
        self.set_flag(Flag::C, false);
    }

    pub(super) fn alu_or(&mut self, value: u8) {
        self.regs.a |= value;
        self.set_flag(Flag::Z, self.regs.a == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, false);
    }

    pub(super) fn alu_xor(&mut self, value: u8) {
        self.regs.a ^= value;
        self.set_flag(Flag::Z, self.regs.a == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, false);
    }

    /// 8-bit increment. C is left untouched.
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, value & 0x0F == 0x0F);
        result
    }

    /// 8-bit decrement. C is left untouched.
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, value & 0x0F == 0);
        result
    }

    /// 16-bit add into HL. Z is untouched; H carries out of bit 11.
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let result = hl.wrapping_add(value);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, hl as u32 + value as u32 > 0xFFFF);
        self.regs.set_hl(result);
    }

    /// SP plus a signed byte, shared by ADD SP,r8 and LD HL,SP+r8. The
    /// carries come from the byte-level XOR overflow test; Z and N are
    /// always cleared.
    pub(super) fn alu_add16_signed(&mut self, base: u16, offset: i8) -> u16 {
        let value = offset as i16 as u16;
        let result = base.wrapping_add(value);
        self.set_flag(Flag::Z, false);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (base ^ value ^ result) & 0x0010 != 0);
        self.set_flag(Flag::C, (base ^ value ^ result) & 0x0100 != 0);
        result
    }

    /// BCD adjust after an addition or subtraction, steered by N/H/C.
    /// C is set when the adjusted value overflows 8 bits and is never
    /// cleared here; H is always cleared; Z is recomputed.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a as u16;
        if !self.get_flag(Flag::N) {
            if self.get_flag(Flag::H) || a & 0x0F > 0x09 {
                a = a.wrapping_add(0x06);
            }
            if self.get_flag(Flag::C) || a > 0x9F {
                a = a.wrapping_add(0x60);
            }
        } else {
            if self.get_flag(Flag::H) {
                a = a.wrapping_sub(0x06) & 0xFF;
            }
            if self.get_flag(Flag::C) {
                a = a.wrapping_sub(0x60);
            }
        }
        self.set_flag(Flag::H, false);
        if a & 0x100 != 0 {
            self.set_flag(Flag::C, true);
        }
        a &= 0xFF;
        self.set_flag(Flag::Z, a == 0);
        self.regs.a = a as u8;
    }
}
