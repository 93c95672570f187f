//! Extended-table handlers. The operand register sits in bits 2..0 and,
//! for BIT/RES/SET, the bit number in bits 5..3. Per-entry tick costs
//! (4 for registers, 12 for (HL)) live in the table.

use crate::cpu::{Bus, Cpu};

macro_rules! cb_unary {
    ($name:ident, $method:ident) => {
        pub(crate) fn $name(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
            let index = opcode & 0x07;
            let value = cpu.read_reg8(bus, index);
            let result = cpu.$method(value);
            cpu.write_reg8(bus, index, result);
            0
        }
    };
}

cb_unary!(cb_rlc, rlc);
cb_unary!(cb_rrc, rrc);
cb_unary!(cb_rl, rl);
cb_unary!(cb_rr, rr);
cb_unary!(cb_sla, sla);
cb_unary!(cb_sra, sra);
cb_unary!(cb_swap, swap);
cb_unary!(cb_srl, srl);

pub(crate) fn cb_bit(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let value = cpu.read_reg8(bus, opcode & 0x07);
    cpu.bit_test((opcode >> 3) & 0x07, value);
    0
}

pub(crate) fn cb_res(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let index = opcode & 0x07;
    let value = cpu.read_reg8(bus, index);
    cpu.write_reg8(bus, index, value & !(1 << ((opcode >> 3) & 0x07)));
    0
}

pub(crate) fn cb_set(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let index = opcode & 0x07;
    let value = cpu.read_reg8(bus, index);
    cpu.write_reg8(bus, index, value | (1 << ((opcode >> 3) & 0x07)));
    0
}
