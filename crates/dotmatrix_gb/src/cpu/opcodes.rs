//! The two immutable 256-entry dispatch tables. Dispatch indexes straight
//! into the array with the fetched opcode byte; there is no secondary
//! decode step outside the handlers.

mod cb;

pub use cb::OPCODES_CB;

use super::{exec, Bus, Cpu};

/// Handler shape shared by every table entry: CPU, bus, and the opcode
/// byte that selected the entry. Returns T-cycles to add to the
/// descriptor's base cost.
pub type OpHandler = fn(&mut Cpu, &mut dyn Bus, u8) -> u32;

/// One dispatch-table entry.
pub struct Opcode {
    /// Display template for the disassembler; `d8`, `a8`, `r8`, `d16` and
    /// `a16` mark immediate operands.
    pub template: &'static str,
    /// Total encoded size in bytes, immediates included.
    pub size: u8,
    /// Bytes added to PC after the handler runs. Zero means the handler
    /// controls PC itself.
    pub advance: u8,
    /// Base T-cycle cost added to the handler's return value. Zero marks
    /// a variable-cost instruction whose handler returns the full cost.
    pub ticks: u32,
    pub exec: OpHandler,
}

const fn op(template: &'static str, size: u8, advance: u8, ticks: u32, exec: OpHandler) -> Opcode {
    Opcode {
        template,
        size,
        advance,
        ticks,
        exec,
    }
}

pub static OPCODES: [Opcode; 256] = [
    // 0x00
    op("NOP", 1, 1, 4, exec::nop),
    op("LD BC, d16", 3, 3, 12, exec::ld_rr_d16),
    op("LD (BC), A", 1, 1, 8, exec::ld_at_rr_a),
    op("INC BC", 1, 1, 8, exec::inc_rr),
    op("INC B", 1, 1, 4, exec::inc_r),
    op("DEC B", 1, 1, 4, exec::dec_r),
    op("LD B, d8", 2, 2, 8, exec::ld_r_d8),
    op("RLCA", 1, 1, 4, exec::rlca),
    op("LD (a16), SP", 3, 3, 20, exec::ld_a16_sp),
    op("ADD HL, BC", 1, 1, 8, exec::add_hl_rr),
    op("LD A, (BC)", 1, 1, 8, exec::ld_a_at_rr),
    op("DEC BC", 1, 1, 8, exec::dec_rr),
    op("INC C", 1, 1, 4, exec::inc_r),
    op("DEC C", 1, 1, 4, exec::dec_r),
    op("LD C, d8", 2, 2, 8, exec::ld_r_d8),
    op("RRCA", 1, 1, 4, exec::rrca),
    // 0x10
    op("STOP", 2, 2, 4, exec::stop),
    op("LD DE, d16", 3, 3, 12, exec::ld_rr_d16),
    op("LD (DE), A", 1, 1, 8, exec::ld_at_rr_a),
    op("INC DE", 1, 1, 8, exec::inc_rr),
    op("INC D", 1, 1, 4, exec::inc_r),
    op("DEC D", 1, 1, 4, exec::dec_r),
    op("LD D, d8", 2, 2, 8, exec::ld_r_d8),
    op("RLA", 1, 1, 4, exec::rla),
    op("JR r8", 2, 2, 12, exec::jr_r8),
    op("ADD HL, DE", 1, 1, 8, exec::add_hl_rr),
    op("LD A, (DE)", 1, 1, 8, exec::ld_a_at_rr),
    op("DEC DE", 1, 1, 8, exec::dec_rr),
    op("INC E", 1, 1, 4, exec::inc_r),
    op("DEC E", 1, 1, 4, exec::dec_r),
    op("LD E, d8", 2, 2, 8, exec::ld_r_d8),
    op("RRA", 1, 1, 4, exec::rra),
    // 0x20
    op("JR NZ, r8", 2, 2, 0, exec::jr_cc),
    op("LD HL, d16", 3, 3, 12, exec::ld_rr_d16),
    op("LD (HL+), A", 1, 1, 8, exec::ldi_at_hl_a),
    op("INC HL", 1, 1, 8, exec::inc_rr),
    op("INC H", 1, 1, 4, exec::inc_r),
    op("DEC H", 1, 1, 4, exec::dec_r),
    op("LD H, d8", 2, 2, 8, exec::ld_r_d8),
    op("DAA", 1, 1, 4, exec::daa),
    op("JR Z, r8", 2, 2, 0, exec::jr_cc),
    op("ADD HL, HL", 1, 1, 8, exec::add_hl_rr),
    op("LD A, (HL+)", 1, 1, 8, exec::ldi_a_at_hl),
    op("DEC HL", 1, 1, 8, exec::dec_rr),
    op("INC L", 1, 1, 4, exec::inc_r),
    op("DEC L", 1, 1, 4, exec::dec_r),
    op("LD L, d8", 2, 2, 8, exec::ld_r_d8),
    op("CPL", 1, 1, 4, exec::cpl),
    // 0x30
    op("JR NC, r8", 2, 2, 0, exec::jr_cc),
    op("LD SP, d16", 3, 3, 12, exec::ld_rr_d16),
    op("LD (HL-), A", 1, 1, 8, exec::ldd_at_hl_a),
    op("INC SP", 1, 1, 8, exec::inc_rr),
    op("INC (HL)", 1, 1, 12, exec::inc_r),
    op("DEC (HL)", 1, 1, 12, exec::dec_r),
    op("LD (HL), d8", 2, 2, 12, exec::ld_r_d8),
    op("SCF", 1, 1, 4, exec::scf),
    op("JR C, r8", 2, 2, 0, exec::jr_cc),
    op("ADD HL, SP", 1, 1, 8, exec::add_hl_rr),
    op("LD A, (HL-)", 1, 1, 8, exec::ldd_a_at_hl),
    op("DEC SP", 1, 1, 8, exec::dec_rr),
    op("INC A", 1, 1, 4, exec::inc_r),
    op("DEC A", 1, 1, 4, exec::dec_r),
    op("LD A, d8", 2, 2, 8, exec::ld_r_d8),
    op("CCF", 1, 1, 4, exec::ccf),
    // 0x40
    op("LD B, B", 1, 1, 4, exec::ld_r_r),
    op("LD B, C", 1, 1, 4, exec::ld_r_r),
    op("LD B, D", 1, 1, 4, exec::ld_r_r),
    op("LD B, E", 1, 1, 4, exec::ld_r_r),
    op("LD B, H", 1, 1, 4, exec::ld_r_r),
    op("LD B, L", 1, 1, 4, exec::ld_r_r),
    op("LD B, (HL)", 1, 1, 8, exec::ld_r_r),
    op("LD B, A", 1, 1, 4, exec::ld_r_r),
    op("LD C, B", 1, 1, 4, exec::ld_r_r),
    op("LD C, C", 1, 1, 4, exec::ld_r_r),
    op("LD C, D", 1, 1, 4, exec::ld_r_r),
    op("LD C, E", 1, 1, 4, exec::ld_r_r),
    op("LD C, H", 1, 1, 4, exec::ld_r_r),
    op("LD C, L", 1, 1, 4, exec::ld_r_r),
    op("LD C, (HL)", 1, 1, 8, exec::ld_r_r),
    op("LD C, A", 1, 1, 4, exec::ld_r_r),
    // 0x50
    op("LD D, B", 1, 1, 4, exec::ld_r_r),
    op("LD D, C", 1, 1, 4, exec::ld_r_r),
    op("LD D, D", 1, 1, 4, exec::ld_r_r),
    op("LD D, E", 1, 1, 4, exec::ld_r_r),
    op("LD D, H", 1, 1, 4, exec::ld_r_r),
    op("LD D, L", 1, 1, 4, exec::ld_r_r),
    op("LD D, (HL)", 1, 1, 8, exec::ld_r_r),
    op("LD D, A", 1, 1, 4, exec::ld_r_r),
    op("LD E, B", 1, 1, 4, exec::ld_r_r),
    op("LD E, C", 1, 1, 4, exec::ld_r_r),
    op("LD E, D", 1, 1, 4, exec::ld_r_r),
    op("LD E, E", 1, 1, 4, exec::ld_r_r),
    op("LD E, H", 1, 1, 4, exec::ld_r_r),
    op("LD E, L", 1, 1, 4, exec::ld_r_r),
    op("LD E, (HL)", 1, 1, 8, exec::ld_r_r),
    op("LD E, A", 1, 1, 4, exec::ld_r_r),
    // 0x60
    op("LD H, B", 1, 1, 4, exec::ld_r_r),
    op("LD H, C", 1, 1, 4, exec::ld_r_r),
    op("LD H, D", 1, 1, 4, exec::ld_r_r),
    op("LD H, E", 1, 1, 4, exec::ld_r_r),
    op("LD H, H", 1, 1, 4, exec::ld_r_r),
    op("LD H, L", 1, 1, 4, exec::ld_r_r),
    op("LD H, (HL)", 1, 1, 8, exec::ld_r_r),
    op("LD H, A", 1, 1, 4, exec::ld_r_r),
    op("LD L, B", 1, 1, 4, exec::ld_r_r),
    op("LD L, C", 1, 1, 4, exec::ld_r_r),
    op("LD L, D", 1, 1, 4, exec::ld_r_r),
    op("LD L, E", 1, 1, 4, exec::ld_r_r),
    op("LD L, H", 1, 1, 4, exec::ld_r_r),
    op("LD L, L", 1, 1, 4, exec::ld_r_r),
    op("LD L, (HL)", 1, 1, 8, exec::ld_r_r),
    op("LD L, A", 1, 1, 4, exec::ld_r_r),
    // 0x70
    op("LD (HL), B", 1, 1, 8, exec::ld_r_r),
    op("LD (HL), C", 1, 1, 8, exec::ld_r_r),
    op("LD (HL), D", 1, 1, 8, exec::ld_r_r),
    op("LD (HL), E", 1, 1, 8, exec::ld_r_r),
    op("LD (HL), H", 1, 1, 8, exec::ld_r_r),
    op("LD (HL), L", 1, 1, 8, exec::ld_r_r),
    op("HALT", 1, 1, 4, exec::halt),
    op("LD (HL), A", 1, 1, 8, exec::ld_r_r),
    op("LD A, B", 1, 1, 4, exec::ld_r_r),
    op("LD A, C", 1, 1, 4, exec::ld_r_r),
    op("LD A, D", 1, 1, 4, exec::ld_r_r),
    op("LD A, E", 1, 1, 4, exec::ld_r_r),
    op("LD A, H", 1, 1, 4, exec::ld_r_r),
    op("LD A, L", 1, 1, 4, exec::ld_r_r),
    op("LD A, (HL)", 1, 1, 8, exec::ld_r_r),
    op("LD A, A", 1, 1, 4, exec::ld_r_r),
    // 0x80
    op("ADD A, B", 1, 1, 4, exec::alu_a_r),
    op("ADD A, C", 1, 1, 4, exec::alu_a_r),
    op("ADD A, D", 1, 1, 4, exec::alu_a_r),
    op("ADD A, E", 1, 1, 4, exec::alu_a_r),
    op("ADD A, H", 1, 1, 4, exec::alu_a_r),
    op("ADD A, L", 1, 1, 4, exec::alu_a_r),
    op("ADD A, (HL)", 1, 1, 8, exec::alu_a_r),
    op("ADD A, A", 1, 1, 4, exec::alu_a_r),
    op("ADC A, B", 1, 1, 4, exec::alu_a_r),
    op("ADC A, C", 1, 1, 4, exec::alu_a_r),
    op("ADC A, D", 1, 1, 4, exec::alu_a_r),
    op("ADC A, E", 1, 1, 4, exec::alu_a_r),
    op("ADC A, H", 1, 1, 4, exec::alu_a_r),
    op("ADC A, L", 1, 1, 4, exec::alu_a_r),
    op("ADC A, (HL)", 1, 1, 8, exec::alu_a_r),
    op("ADC A, A", 1, 1, 4, exec::alu_a_r),
    // 0x90
    op("SUB B", 1, 1, 4, exec::alu_a_r),
    op("SUB C", 1, 1, 4, exec::alu_a_r),
    op("SUB D", 1, 1, 4, exec::alu_a_r),
    op("SUB E", 1, 1, 4, exec::alu_a_r),
    op("SUB H", 1, 1, 4, exec::alu_a_r),
    op("SUB L", 1, 1, 4, exec::alu_a_r),
    op("SUB (HL)", 1, 1, 8, exec::alu_a_r),
    op("SUB A", 1, 1, 4, exec::alu_a_r),
    op("SBC A, B", 1, 1, 4, exec::alu_a_r),
    op("SBC A, C", 1, 1, 4, exec::alu_a_r),
    op("SBC A, D", 1, 1, 4, exec::alu_a_r),
    op("SBC A, E", 1, 1, 4, exec::alu_a_r),
    op("SBC A, H", 1, 1, 4, exec::alu_a_r),
    op("SBC A, L", 1, 1, 4, exec::alu_a_r),
    op("SBC A, (HL)", 1, 1, 8, exec::alu_a_r),
    op("SBC A, A", 1, 1, 4, exec::alu_a_r),
    // 0xA0
    op("AND B", 1, 1, 4, exec::alu_a_r),
    op("AND C", 1, 1, 4, exec::alu_a_r),
    op("AND D", 1, 1, 4, exec::alu_a_r),
    op("AND E", 1, 1, 4, exec::alu_a_r),
    op("AND H", 1, 1, 4, exec::alu_a_r),
    op("AND L", 1, 1, 4, exec::alu_a_r),
    op("AND (HL)", 1, 1, 8, exec::alu_a_r),
    op("AND A", 1, 1, 4, exec::alu_a_r),
    op("XOR B", 1, 1, 4, exec::alu_a_r),
    op("XOR C", 1, 1, 4, exec::alu_a_r),
    op("XOR D", 1, 1, 4, exec::alu_a_r),
    op("XOR E", 1, 1, 4, exec::alu_a_r),
    op("XOR H", 1, 1, 4, exec::alu_a_r),
    op("XOR L", 1, 1, 4, exec::alu_a_r),
    op("XOR (HL)", 1, 1, 8, exec::alu_a_r),
    op("XOR A", 1, 1, 4, exec::alu_a_r),
    // 0xB0
    op("OR B", 1, 1, 4, exec::alu_a_r),
    op("OR C", 1, 1, 4, exec::alu_a_r),
    op("OR D", 1, 1, 4, exec::alu_a_r),
    op("OR E", 1, 1, 4, exec::alu_a_r),
    op("OR H", 1, 1, 4, exec::alu_a_r),
    op("OR L", 1, 1, 4, exec::alu_a_r),
    op("OR (HL)", 1, 1, 8, exec::alu_a_r),
    op("OR A", 1, 1, 4, exec::alu_a_r),
    op("CP B", 1, 1, 4, exec::alu_a_r),
    op("CP C", 1, 1, 4, exec::alu_a_r),
    op("CP D", 1, 1, 4, exec::alu_a_r),
    op("CP E", 1, 1, 4, exec::alu_a_r),
    op("CP H", 1, 1, 4, exec::alu_a_r),
    op("CP L", 1, 1, 4, exec::alu_a_r),
    op("CP (HL)", 1, 1, 8, exec::alu_a_r),
    op("CP A", 1, 1, 4, exec::alu_a_r),
    // 0xC0
    op("RET NZ", 1, 0, 0, exec::ret_cc),
    op("POP BC", 1, 1, 12, exec::pop_rr),
    op("JP NZ, a16", 3, 0, 0, exec::jp_cc),
    op("JP a16", 3, 0, 16, exec::jp_a16),
    op("CALL NZ, a16", 3, 0, 0, exec::call_cc),
    op("PUSH BC", 1, 1, 16, exec::push_rr),
    op("ADD A, d8", 2, 2, 8, exec::alu_a_d8),
    op("RST 00H", 1, 0, 16, exec::rst),
    op("RET Z", 1, 0, 0, exec::ret_cc),
    op("RET", 1, 0, 16, exec::ret),
    op("JP Z, a16", 3, 0, 0, exec::jp_cc),
    op("PREFIX CB", 1, 1, 4, exec::prefix_cb),
    op("CALL Z, a16", 3, 0, 0, exec::call_cc),
    op("CALL a16", 3, 0, 24, exec::call_a16),
    op("ADC A, d8", 2, 2, 8, exec::alu_a_d8),
    op("RST 08H", 1, 0, 16, exec::rst),
    // 0xD0
    op("RET NC", 1, 0, 0, exec::ret_cc),
    op("POP DE", 1, 1, 12, exec::pop_rr),
    op("JP NC, a16", 3, 0, 0, exec::jp_cc),
    op("UNDEF", 1, 1, 0, exec::undefined),
    op("CALL NC, a16", 3, 0, 0, exec::call_cc),
    op("PUSH DE", 1, 1, 16, exec::push_rr),
    op("SUB d8", 2, 2, 8, exec::alu_a_d8),
    op("RST 10H", 1, 0, 16, exec::rst),
    op("RET C", 1, 0, 0, exec::ret_cc),
    op("RETI", 1, 0, 16, exec::reti),
    op("JP C, a16", 3, 0, 0, exec::jp_cc),
    op("UNDEF", 1, 1, 0, exec::undefined),
    op("CALL C, a16", 3, 0, 0, exec::call_cc),
    op("UNDEF", 1, 1, 0, exec::undefined),
    op("SBC A, d8", 2, 2, 8, exec::alu_a_d8),
    op("RST 18H", 1, 0, 16, exec::rst),
    // 0xE0
    op("LDH (a8), A", 2, 2, 12, exec::ldh_a8_a),
    op("POP HL", 1, 1, 12, exec::pop_rr),
    op("LD (C), A", 1, 1, 8, exec::ld_at_c_a),
    op("UNDEF", 1, 1, 0, exec::undefined),
    op("UNDEF", 1, 1, 0, exec::undefined),
    op("PUSH HL", 1, 1, 16, exec::push_rr),
    op("AND d8", 2, 2, 8, exec::alu_a_d8),
    op("RST 20H", 1, 0, 16, exec::rst),
    op("ADD SP, r8", 2, 2, 16, exec::add_sp_r8),
    op("JP (HL)", 1, 0, 4, exec::jp_hl),
    op("LD (a16), A", 3, 3, 16, exec::ld_a16_a),
    op("UNDEF", 1, 1, 0, exec::undefined),
    op("UNDEF", 1, 1, 0, exec::undefined),
    op("UNDEF", 1, 1, 0, exec::undefined),
    op("XOR d8", 2, 2, 8, exec::alu_a_d8),
    op("RST 28H", 1, 0, 16, exec::rst),
    // 0xF0
    op("LDH A, (a8)", 2, 2, 12, exec::ldh_a_a8),
    op("POP AF", 1, 1, 12, exec::pop_rr),
    op("LD A, (C)", 1, 1, 8, exec::ld_a_at_c),
    op("DI", 1, 1, 4, exec::di),
    op("UNDEF", 1, 1, 0, exec::undefined),
    op("PUSH AF", 1, 1, 16, exec::push_rr),
    op("OR d8", 2, 2, 8, exec::alu_a_d8),
    op("RST 30H", 1, 0, 16, exec::rst),
    op("LD HL, SP+r8", 2, 2, 12, exec::ld_hl_sp_r8),
    op("LD SP, HL", 1, 1, 8, exec::ld_sp_hl),
    op("LD A, (a16)", 3, 3, 16, exec::ld_a_a16),
    op("EI", 1, 1, 4, exec::ei),
    op("UNDEF", 1, 1, 0, exec::undefined),
    op("UNDEF", 1, 1, 0, exec::undefined),
    op("CP d8", 2, 2, 8, exec::alu_a_d8),
    op("RST 38H", 1, 0, 16, exec::rst),
];
