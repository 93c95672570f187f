use crate::cpu::{Bus, Cpu, Flag};

pub(crate) fn nop(_cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    0
}

/// STOP is treated as a two-byte NOP; low-power mode has no observable
/// effect without an LCD or speed switch.
pub(crate) fn stop(_cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    0
}

pub(crate) fn halt(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.halted = true;
    0
}

pub(crate) fn di(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.ime = false;
    0
}

pub(crate) fn ei(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.ime = true;
    0
}

/// 0xCB: arm the one-shot extended-table latch.
pub(crate) fn prefix_cb(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.ext_prefix = true;
    0
}

/// Holes in the opcode map execute as harmless one-byte no-ops.
pub(crate) fn undefined(_cpu: &mut Cpu, _bus: &mut dyn Bus, opcode: u8) -> u32 {
    log::debug!("undefined opcode {opcode:#04X} executed as a no-op");
    0
}

/// The four accumulator rotates clear Z unconditionally, unlike their
/// extended-table counterparts.
pub(crate) fn rlca(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.regs.a = cpu.rlc(cpu.regs.a);
    cpu.set_flag(Flag::Z, false);
    0
}

pub(crate) fn rrca(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.regs.a = cpu.rrc(cpu.regs.a);
    cpu.set_flag(Flag::Z, false);
    0
}

pub(crate) fn rla(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.regs.a = cpu.rl(cpu.regs.a);
    cpu.set_flag(Flag::Z, false);
    0
}

pub(crate) fn rra(cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    cpu.regs.a = cpu.rr(cpu.regs.a);
    cpu.set_flag(Flag::Z, false);
    0
}
