use crate::cpu::{Bus, Cpu};

/// LD r,r' for the whole 0x40..=0x7F grid (minus HALT). Destination in
/// bits 5..3, source in bits 2..0.
pub(crate) fn ld_r_r(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let value = cpu.read_reg8(bus, opcode & 0x07);
    cpu.write_reg8(bus, (opcode >> 3) & 0x07, value);
    0
}

pub(crate) fn ld_r_d8(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let value = cpu.imm8(bus);
    cpu.write_reg8(bus, (opcode >> 3) & 0x07, value);
    0
}

pub(crate) fn ld_rr_d16(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let value = cpu.imm16(bus);
    cpu.write_reg16((opcode >> 4) & 0x03, value);
    0
}

/// LD (BC),A / LD (DE),A.
pub(crate) fn ld_at_rr_a(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let addr = cpu.read_reg16((opcode >> 4) & 0x03);
    bus.write8(addr, cpu.regs.a);
    0
}

/// LD A,(BC) / LD A,(DE).
pub(crate) fn ld_a_at_rr(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let addr = cpu.read_reg16((opcode >> 4) & 0x03);
    cpu.regs.a = bus.read8(addr);
    0
}

pub(crate) fn ldi_at_hl_a(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let hl = cpu.regs.hl();
    bus.write8(hl, cpu.regs.a);
    cpu.regs.set_hl(hl.wrapping_add(1));
    0
}

pub(crate) fn ldi_a_at_hl(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let hl = cpu.regs.hl();
    cpu.regs.a = bus.read8(hl);
    cpu.regs.set_hl(hl.wrapping_add(1));
    0
}

pub(crate) fn ldd_at_hl_a(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let hl = cpu.regs.hl();
    bus.write8(hl, cpu.regs.a);
    cpu.regs.set_hl(hl.wrapping_sub(1));
    0
}

pub(crate) fn ldd_a_at_hl(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let hl = cpu.regs.hl();
    cpu.regs.a = bus.read8(hl);
    cpu.regs.set_hl(hl.wrapping_sub(1));
    0
}

pub(crate) fn ld_a16_sp(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let addr = cpu.imm16(bus);
    bus.write16(addr, cpu.regs.sp);
    0
}

/// LDH (a8),A: high-page store at 0xFF00 + a8.
pub(crate) fn ldh_a8_a(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let addr = 0xFF00 | cpu.imm8(bus) as u16;
    bus.write8(addr, cpu.regs.a);
    0
}

pub(crate) fn ldh_a_a8(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let addr = 0xFF00 | cpu.imm8(bus) as u16;
    cpu.regs.a = bus.read8(addr);
    0
}

pub(crate) fn ld_at_c_a(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    bus.write8(0xFF00 | cpu.regs.c as u16, cpu.regs.a);
    0
}

pub(crate) fn ld_a_at_c(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.regs.a = bus.read8(0xFF00 | cpu.regs.c as u16);
    0
}

pub(crate) fn ld_a16_a(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let addr = cpu.imm16(bus);
    bus.write8(addr, cpu.regs.a);
    0
}

pub(crate) fn ld_a_a16(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let addr = cpu.imm16(bus);
    cpu.regs.a = bus.read8(addr);
    0
}

pub(crate) fn ld_sp_hl(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.regs.sp = cpu.regs.hl();
    0
}

/// LD HL,SP+r8 shares the signed-offset flag rules with ADD SP,r8.
pub(crate) fn ld_hl_sp_r8(cpu: &mut Cpu, bus: &mut dyn Bus, _opcode: u8) -> u32 {
    let offset = cpu.imm8s(bus);
    let result = cpu.alu_add16_signed(cpu.regs.sp, offset);
    cpu.regs.set_hl(result);
    0
}

/// PUSH for the 0xC5 column: BC, DE, HL, AF.
pub(crate) fn push_rr(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let value = match (opcode >> 4) & 0x03 {
        0 => cpu.regs.bc(),
        1 => cpu.regs.de(),
        2 => cpu.regs.hl(),
        _ => cpu.regs.af(),
    };
    cpu.push16(bus, value);
    0
}

/// POP for the 0xC1 column. POP AF goes through the pair accessor, which
/// keeps the low nibble of F zero.
pub(crate) fn pop_rr(cpu: &mut Cpu, bus: &mut dyn Bus, opcode: u8) -> u32 {
    let value = cpu.pop16(bus);
    match (opcode >> 4) & 0x03 {
        0 => cpu.regs.set_bc(value),
        1 => cpu.regs.set_de(value),
        2 => cpu.regs.set_hl(value),
        _ => cpu.regs.set_af(value),
    }
    0
}
