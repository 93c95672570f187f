use crate::cpu::{Bus, Cpu};

pub(crate) fn inc_r(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let index = (opcode >> 3) & 0x07;
    let value = cpu.read_reg8(bus, index);
    let result = cpu.alu_inc8(value);
    cpu.write_reg8(bus, index, result);
    0
}

pub(crate) fn dec_r(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let index = (opcode >> 3) & 0x07;
    let value = cpu.read_reg8(bus, index);
    let result = cpu.alu_dec8(value);
    cpu.write_reg8(bus, index, result);
    0
}

/// 16-bit INC/DEC never touch flags.
pub(crate) fn inc_rr(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) -> u32 {
    let index = (opcode >> 4) & 0x03;
    cpu.write_reg16(index, cpu.read_reg16(index).wrapping_add(1));
    0
}

pub(crate) fn dec_rr(cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) -> u32 {
    let index = (opcode >> 4) & 0x03;
    cpu.write_reg16(index, cpu.read_reg16(index).wrapping_sub(1));
    0
}
