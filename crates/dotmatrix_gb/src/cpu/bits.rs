use super::{Cpu, Flag};

/// Rotate, shift and bit-test primitives shared by the extended opcodes
/// and the four accumulator rotates. All of them take the input value and
/// return the result; the caller decides where it goes. Z reflects the
/// result here; the accumulator rotates clear it afterwards.
impl Cpu {
    pub(super) fn rlc(&mut self, value: u8) -> u8 {
        let result = value.rotate_left(1);
        self.set_rot_flags(result, value & 0x80 != 0);
        result
    }

    pub(super) fn rrc(&mut self, value: u8) -> u8 {
        let result = value.rotate_right(1);
        self.set_rot_flags(result, value & 0x01 != 0);
        result
    }

    /// Rotate left through carry.
    pub(super) fn rl(&mut self, value: u8) -> u8 {
        let result = (value << 1) | self.get_flag(Flag::C) as u8;
        self.set_rot_flags(result, value & 0x80 != 0);
        result
    }

    /// Rotate right through carry.
    pub(super) fn rr(&mut self, value: u8) -> u8 {
        let result = (value >> 1) | ((self.get_flag(Flag::C) as u8) << 7);
        self.set_rot_flags(result, value & 0x01 != 0);
        result
    }

    pub(super) fn sla(&mut self, value: u8) -> u8 {
        let result = value << 1;
        self.set_rot_flags(result, value & 0x80 != 0);
        result
    }

    /// Arithmetic shift right, bit 7 sticks.
    pub(super) fn sra(&mut self, value: u8) -> u8 {
        let result = (value >> 1) | (value & 0x80);
        self.set_rot_flags(result, value & 0x01 != 0);
        result
    }

    pub(super) fn srl(&mut self, value: u8) -> u8 {
        let result = value >> 1;
        self.set_rot_flags(result, value & 0x01 != 0);
        result
    }

    pub(super) fn swap(&mut self, value: u8) -> u8 {
        let result = value.rotate_left(4);
        self.set_rot_flags(result, false);
        result
    }

    /// BIT b: Z mirrors the inverted bit, H is set, C is untouched.
    pub(super) fn bit_test(&mut self, bit: u8, value: u8) {
        self.set_flag(Flag::Z, value & (1 << bit) == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, true);
    }

    fn set_rot_flags(&mut self, result: u8, carry: bool) {
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, carry);
    }
}
