use crate::cpu::{Bus, Cpu};

/// Unconditional JR. The offset is relative to the following
/// instruction; the table's advance field contributes the +2.
pub(crate) fn jr_r8(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let offset = cpu.imm8s(bus);
    cpu.regs.pc = cpu.regs.pc.wrapping_add(offset as u16);
    0
}

/// Conditional JR: 12 ticks taken, 8 not taken. PC advances by the
/// encoded size either way through the table.
pub(crate) fn jr_cc(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    if cpu.cc_condition((opcode >> 3) & 0x03) {
        let offset = cpu.imm8s(bus);
        cpu.regs.pc = cpu.regs.pc.wrapping_add(offset as u16);
        12
    } else {
        8
    }
}

pub(crate) fn jp_a16(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.regs.pc = cpu.imm16(bus);
    0
}

/// Conditional JP: 16 taken, 12 not. The handler owns PC in both arms.
pub(crate) fn jp_cc(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    if cpu.cc_condition((opcode >> 3) & 0x03) {
        cpu.regs.pc = cpu.imm16(bus);
        16
    } else {
        cpu.regs.pc = cpu.regs.pc.wrapping_add(3);
        12
    }
}

pub(crate) fn jp_hl(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.regs.pc = cpu.regs.hl();
    0
}

pub(crate) fn call_a16(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let target = cpu.imm16(bus);
    let ret = cpu.regs.pc.wrapping_add(3);
    cpu.push16(bus, ret);
    cpu.regs.pc = target;
    0
}

/// Conditional CALL: 24 taken, 12 not.
pub(crate) fn call_cc(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    if cpu.cc_condition((opcode >> 3) & 0x03) {
        let target = cpu.imm16(bus);
        let ret = cpu.regs.pc.wrapping_add(3);
        cpu.push16(bus, ret);
        cpu.regs.pc = target;
        24
    } else {
        cpu.regs.pc = cpu.regs.pc.wrapping_add(3);
        12
    }
}

pub(crate) fn ret(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.regs.pc = cpu.pop16(bus);
    0
}

/// Conditional RET: 20 taken, 8 not.
pub(crate) fn ret_cc(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    if cpu.cc_condition((opcode >> 3) & 0x03) {
        cpu.regs.pc = cpu.pop16(bus);
        20
    } else {
        cpu.regs.pc = cpu.regs.pc.wrapping_add(1);
        8
    }
}

/// RETI re-enables the master interrupt flag on the way out.
pub(crate) fn reti(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.regs.pc = cpu.pop16(bus);
    cpu.ime = true;
    0
}

/// RST: the target vector is encoded in bits 5..3 of the opcode.
pub(crate) fn rst(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let ret = cpu.regs.pc.wrapping_add(1);
    cpu.push16(bus, ret);
    cpu.regs.pc = (opcode & 0x38) as u16;
    0
}
