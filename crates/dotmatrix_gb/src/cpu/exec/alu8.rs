use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    /// ALU operation select for the 0x80..=0xBF grid and the d8 column:
    /// ADD, ADC, SUB, SBC, AND, XOR, OR, CP in bits 5..3.
    fn alu_dispatch(&mut self, select: u8, value: u8) {
        match select & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }
}

pub(crate) fn alu_a_r(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let value = cpu.read_reg8(bus, opcode & 0x07);
    cpu.alu_dispatch((opcode >> 3) & 0x07, value);
    0
}

pub(crate) fn alu_a_d8(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let value = cpu.imm8(bus);
    cpu.alu_dispatch((opcode >> 3) & 0x07, value);
    0
}

pub(crate) fn add_hl_rr(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) -> u32 {
    let value = cpu.read_reg16((opcode >> 4) & 0x03);
    cpu.alu_add16_hl(value);
    0
}

pub(crate) fn add_sp_r8(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let offset = cpu.imm8s(bus);
    cpu.regs.sp = cpu.alu_add16_signed(cpu.regs.sp, offset);
    0
}

pub(crate) fn daa(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.alu_daa();
    0
}

pub(crate) fn cpl(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.regs.a = !cpu.regs.a;
    cpu.set_flag(Flag::N, true);
    cpu.set_flag(Flag::H, true);
    0
}

pub(crate) fn scf(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.set_flag(Flag::N, false);
    cpu.set_flag(Flag::H, false);
    cpu.set_flag(Flag::C, true);
    0
}

pub(crate) fn ccf(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let carry = cpu.get_flag(Flag::C);
    cpu.set_flag(Flag::N, false);
    cpu.set_flag(Flag::H, false);
    cpu.set_flag(Flag::C, !carry);
    0
}
