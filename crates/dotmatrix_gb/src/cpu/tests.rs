use super::*;

struct TestBus {
    memory: [u8; 0x10000],
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
        }
    }
}

impl Bus for TestBus {
    fn read8(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}

/// CPU at 0x0100 with the program bytes in place, clear of the interrupt
/// vectors.
fn with_program(program: &[u8]) -> (Cpu, TestBus) {
    let mut cpu = Cpu::new();
    cpu.regs.pc = 0x0100;
    cpu.regs.sp = 0xFFFE;
    let mut bus = TestBus::default();
    bus.memory[0x0100..0x0100 + program.len()].copy_from_slice(program);
    (cpu, bus)
}

fn bcd(value: u8) -> u8 {
    (value / 10) << 4 | (value % 10)
}

#[test]
fn nop_advances_pc_and_costs_four() {
    let (mut cpu, mut bus) = with_program(&[0x00]);
    let before = cpu.regs;
    let ticks = cpu.step(&mut bus);
    assert_eq!(ticks, 4);
    assert_eq!(cpu.regs.pc, 0x0101);
    assert_eq!(cpu.regs.a, before.a);
    assert_eq!(cpu.regs.f, before.f);
    assert_eq!(cpu.regs.sp, before.sp);
}

#[test]
fn ld_rr_d16_loads_pair_little_endian() {
    let (mut cpu, mut bus) = with_program(&[0x21, 0x34, 0x12]);
    let ticks = cpu.step(&mut bus);
    assert_eq!(ticks, 12);
    assert_eq!(cpu.regs.hl(), 0x1234);
    assert_eq!(cpu.regs.pc, 0x0103);
}

#[test]
fn add_a_a_sets_half_carry_from_nibble_overflow() {
    let (mut cpu, mut bus) = with_program(&[0x87]);
    cpu.regs.a = 0x0F;
    let ticks = cpu.step(&mut bus);
    assert_eq!(ticks, 4);
    assert_eq!(cpu.regs.a, 0x1E);
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::Z));
    assert!(!cpu.get_flag(Flag::N));
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn inc_then_dec_restores_value_and_never_touches_carry() {
    for value in 0..=255u8 {
        for carry in [false, true] {
            let (mut cpu, mut bus) = with_program(&[0x04, 0x05]);
            cpu.regs.b = value;
            cpu.set_flag(Flag::C, carry);
            cpu.step(&mut bus);
            assert_eq!(cpu.regs.b, value.wrapping_add(1));
            assert_eq!(cpu.get_flag(Flag::C), carry);
            cpu.step(&mut bus);
            assert_eq!(cpu.regs.b, value);
            assert_eq!(cpu.get_flag(Flag::C), carry);
        }
    }
}

#[test]
fn daa_produces_valid_bcd_for_every_bcd_addition() {
    for x in 0..=99u8 {
        for y in 0..=99u8 {
            let (mut cpu, mut bus) = with_program(&[0xC6, bcd(y), 0x27]);
            cpu.regs.a = bcd(x);
            cpu.step(&mut bus);
            cpu.step(&mut bus);
            let sum = x as u16 + y as u16;
            assert_eq!(
                cpu.regs.a,
                bcd((sum % 100) as u8),
                "DAA after {x} + {y}"
            );
            assert_eq!(cpu.get_flag(Flag::C), sum > 99, "carry after {x} + {y}");
            assert_eq!(cpu.get_flag(Flag::Z), sum % 100 == 0);
            assert!(!cpu.get_flag(Flag::H));
        }
    }
}

#[test]
fn f_low_nibble_is_always_zero() {
    // POP AF is the one path that could smuggle bits into the low nibble.
    let (mut cpu, mut bus) = with_program(&[0xF1]);
    cpu.regs.sp = 0xC000;
    bus.memory[0xC000] = 0xFF;
    bus.memory[0xC001] = 0xFF;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.f, 0xF0);
    assert_eq!(cpu.regs.a, 0xFF);

    cpu.regs.set_af(0xABCD);
    assert_eq!(cpu.regs.f, 0xC0);
}

#[test]
fn jr_nz_taken_when_zero_clear() {
    let (mut cpu, mut bus) = with_program(&[0x20, 0x10]);
    cpu.set_flag(Flag::Z, false);
    let ticks = cpu.step(&mut bus);
    assert_eq!(ticks, 12);
    // Offset is relative to the next instruction.
    assert_eq!(cpu.regs.pc, 0x0112);
}

#[test]
fn jr_nz_falls_through_when_zero_set() {
    let (mut cpu, mut bus) = with_program(&[0x20, 0x10]);
    cpu.set_flag(Flag::Z, true);
    let ticks = cpu.step(&mut bus);
    assert_eq!(ticks, 8);
    assert_eq!(cpu.regs.pc, 0x0102);
}

#[test]
fn jr_backward_offset_wraps_correctly() {
    let (mut cpu, mut bus) = with_program(&[0x18, 0xFE]);
    let ticks = cpu.step(&mut bus);
    assert_eq!(ticks, 12);
    // -2 from the following instruction lands back on the JR itself.
    assert_eq!(cpu.regs.pc, 0x0100);
}

#[test]
fn prefix_routes_next_fetch_through_extended_table() {
    let (mut cpu, mut bus) = with_program(&[0xCB, 0x37]);
    cpu.regs.a = 0xF0;
    let prefix_ticks = cpu.step(&mut bus);
    assert_eq!(prefix_ticks, 4);
    assert!(cpu.ext_prefix);
    let op_ticks = cpu.step(&mut bus);
    assert_eq!(op_ticks, 4);
    assert!(!cpu.ext_prefix);
    assert_eq!(cpu.regs.a, 0x0F);
    assert_eq!(cpu.regs.pc, 0x0102);
}

#[test]
fn extended_hl_operand_costs_twelve() {
    let (mut cpu, mut bus) = with_program(&[0xCB, 0xFE]);
    cpu.regs.set_hl(0xC123);
    cpu.step(&mut bus);
    let ticks = cpu.step(&mut bus);
    assert_eq!(ticks, 12);
    assert_eq!(bus.memory[0xC123], 0x80); // SET 7, (HL)
}

#[test]
fn bit_test_sets_z_and_leaves_carry() {
    let (mut cpu, mut bus) = with_program(&[0xCB, 0x40]);
    cpu.regs.b = 0x00;
    cpu.set_flag(Flag::C, true);
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::N));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn interrupt_with_prefix_pending_is_deferred() {
    let (mut cpu, mut bus) = with_program(&[0xCB, 0x37]);
    cpu.ime = true;
    bus.memory[0xFFFF] = 0x1F;
    cpu.step(&mut bus);
    // Request arrives between the prefix and the extended opcode.
    bus.memory[0xFF0F] = 0x01;
    cpu.step(&mut bus);
    // The extended opcode ran; nothing was pushed, PC is past it.
    assert_eq!(cpu.regs.pc, 0x0102);
    assert!(cpu.ime);
    // The next iteration services the interrupt.
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0041);
    assert!(!cpu.ime);
}

#[test]
fn rlca_always_clears_zero() {
    let (mut cpu, mut bus) = with_program(&[0x07, 0x07]);
    cpu.regs.a = 0x80;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x01);
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::Z));

    cpu.regs.a = 0x00;
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(!cpu.get_flag(Flag::Z));
}

#[test]
fn sbc_borrows_through_carry() {
    let (mut cpu, mut bus) = with_program(&[0xDE, 0x00]);
    cpu.regs.a = 0x00;
    cpu.set_flag(Flag::C, true);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0xFF);
    assert!(cpu.get_flag(Flag::C));
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::N));
    assert!(!cpu.get_flag(Flag::Z));
}

#[test]
fn add_sp_r8_uses_byte_level_carries() {
    let (mut cpu, mut bus) = with_program(&[0xE8, 0x01]);
    cpu.regs.sp = 0x00FF;
    let ticks = cpu.step(&mut bus);
    assert_eq!(ticks, 16);
    assert_eq!(cpu.regs.sp, 0x0100);
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::Z));
    assert!(!cpu.get_flag(Flag::N));
}

#[test]
fn ld_hl_sp_r8_with_negative_offset() {
    let (mut cpu, mut bus) = with_program(&[0xF8, 0xFF]);
    cpu.regs.sp = 0x0000;
    let ticks = cpu.step(&mut bus);
    assert_eq!(ticks, 12);
    assert_eq!(cpu.regs.hl(), 0xFFFF);
    assert!(!cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn push_pop_roundtrip() {
    let (mut cpu, mut bus) = with_program(&[0xC5, 0xD1]);
    cpu.regs.set_bc(0xBEEF);
    let push_ticks = cpu.step(&mut bus);
    assert_eq!(push_ticks, 16);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    let pop_ticks = cpu.step(&mut bus);
    assert_eq!(pop_ticks, 12);
    assert_eq!(cpu.regs.de(), 0xBEEF);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn call_pushes_return_address_and_ret_restores_it() {
    let (mut cpu, mut bus) = with_program(&[0xCD, 0x00, 0x20]);
    bus.memory[0x2000] = 0xC9; // RET
    let call_ticks = cpu.step(&mut bus);
    assert_eq!(call_ticks, 24);
    assert_eq!(cpu.regs.pc, 0x2000);
    assert_eq!(bus.read16(cpu.regs.sp), 0x0103);
    let ret_ticks = cpu.step(&mut bus);
    assert_eq!(ret_ticks, 16);
    assert_eq!(cpu.regs.pc, 0x0103);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn ret_cc_costs_differ_between_arms() {
    let (mut cpu, mut bus) = with_program(&[0xC0]);
    cpu.push16(&mut bus, 0x2000);
    cpu.set_flag(Flag::Z, true);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.pc, 0x0101);

    let (mut cpu, mut bus) = with_program(&[0xC0]);
    cpu.push16(&mut bus, 0x2000);
    cpu.set_flag(Flag::Z, false);
    assert_eq!(cpu.step(&mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x2000);
}

#[test]
fn rst_vectors_into_low_memory() {
    let (mut cpu, mut bus) = with_program(&[0xEF]);
    let ticks = cpu.step(&mut bus);
    assert_eq!(ticks, 16);
    assert_eq!(cpu.regs.pc, 0x0028);
    assert_eq!(bus.read16(cpu.regs.sp), 0x0101);
}

#[test]
fn undefined_opcode_is_a_benign_noop() {
    let (mut cpu, mut bus) = with_program(&[0xD3]);
    let before = cpu.regs;
    let ticks = cpu.step(&mut bus);
    assert_eq!(ticks, 0);
    assert_eq!(cpu.regs.pc, 0x0101);
    assert_eq!(cpu.regs.a, before.a);
    assert_eq!(cpu.regs.f, before.f);
    assert_eq!(cpu.regs.sp, before.sp);
}

#[test]
fn highest_priority_interrupt_is_serviced_first() {
    let (mut cpu, mut bus) = with_program(&[0x00]);
    cpu.ime = true;
    bus.memory[0xFFFF] = 0x1F;
    bus.memory[0xFF0F] = 0x05; // VBlank and Timer both pending
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0041); // vectored to 0x40, then the fetch ran
    assert!(!cpu.ime);
    // Only the VBlank request was acknowledged.
    assert_eq!(bus.memory[0xFF0F], 0x04);
    // The interrupted PC is on the stack.
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.read16(cpu.regs.sp), 0x0100);
}

#[test]
fn masked_interrupt_is_not_serviced() {
    let (mut cpu, mut bus) = with_program(&[0x00]);
    cpu.ime = true;
    bus.memory[0xFFFF] = 0x01; // only VBlank enabled
    bus.memory[0xFF0F] = 0x04; // Timer requested
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0101);
    assert!(cpu.ime);
    assert_eq!(bus.memory[0xFF0F], 0x04);
}

#[test]
fn halt_wakes_on_request_even_when_masked() {
    let (mut cpu, mut bus) = with_program(&[0x76, 0x00]);
    cpu.ime = false;
    bus.memory[0xFFFF] = 0x00;
    cpu.step(&mut bus);
    assert!(cpu.halted);

    // Halted iterations burn four ticks and go nowhere.
    let ticks = cpu.step(&mut bus);
    assert_eq!(ticks, 4);
    assert_eq!(cpu.regs.pc, 0x0101);
    assert!(cpu.halted);

    // A request on a masked line still wakes the core.
    bus.memory[0xFF0F] = 0x10;
    let ticks = cpu.step(&mut bus);
    assert_eq!(ticks, 4);
    assert!(!cpu.halted);

    // With IME clear there is no service; execution just resumes.
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0102);
}

#[test]
fn ei_enables_service_of_pending_request() {
    let (mut cpu, mut bus) = with_program(&[0xFB, 0x00]);
    bus.memory[0xFFFF] = 0x04;
    bus.memory[0xFF0F] = 0x04;
    cpu.step(&mut bus);
    assert!(cpu.ime);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0051); // Timer vector plus the fetch
    assert_eq!(bus.memory[0xFF0F], 0x00);
}

#[test]
fn reti_restores_ime() {
    let (mut cpu, mut bus) = with_program(&[0xD9]);
    cpu.push16(&mut bus, 0x2000);
    cpu.ime = false;
    let ticks = cpu.step(&mut bus);
    assert_eq!(ticks, 16);
    assert!(cpu.ime);
    assert_eq!(cpu.regs.pc, 0x2000);
}

#[test]
fn hl_memory_operands_share_the_register_grid() {
    let (mut cpu, mut bus) = with_program(&[0x34, 0x46]);
    cpu.regs.set_hl(0xC050);
    bus.memory[0xC050] = 0x41;
    let ticks = cpu.step(&mut bus);
    assert_eq!(ticks, 12);
    assert_eq!(bus.memory[0xC050], 0x42);
    let ticks = cpu.step(&mut bus); // LD B, (HL)
    assert_eq!(ticks, 8);
    assert_eq!(cpu.regs.b, 0x42);
}

#[test]
fn interrupt_line_accessors_drive_ie_and_if() {
    let (mut cpu, mut bus) = with_program(&[0x00, 0x00]);
    cpu.ime = true;

    cpu.enable_interrupt(&mut bus, IntLine::SERIAL);
    assert!(cpu.interrupt_enabled(&bus, IntLine::SERIAL));
    assert!(!cpu.interrupt_enabled(&bus, IntLine::TIMER));
    assert!(!cpu.interrupt_requested(&bus, IntLine::SERIAL));

    cpu.request_interrupt(&mut bus, IntLine::SERIAL);
    assert!(cpu.interrupt_requested(&bus, IntLine::SERIAL));
    assert!(cpu.any_interrupt_requested(&bus));

    cpu.clear_interrupt(&mut bus, IntLine::SERIAL);
    assert!(!cpu.any_interrupt_requested(&bus));

    // A requested line whose enable bit is down is never serviced.
    cpu.request_interrupt(&mut bus, IntLine::SERIAL);
    cpu.disable_interrupt(&mut bus, IntLine::SERIAL);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0101);
    assert!(cpu.ime);

    cpu.enable_interrupt(&mut bus, IntLine::SERIAL);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0059); // Serial vector plus the fetch
    assert!(!cpu.ime);
}

#[test]
fn every_opcode_advances_pc_and_keeps_f_low_nibble_clear() {
    // Zero operand bytes make even the taken relative jumps land on the
    // following instruction, so every auto-advancing opcode must end at
    // pc plus its encoded size.
    for opcode in 0..=255u8 {
        let (mut cpu, mut bus) = with_program(&[opcode, 0x00, 0x00]);
        cpu.regs.set_hl(0xC000);
        let desc = &OPCODES[opcode as usize];
        let ticks = cpu.step(&mut bus);
        if desc.advance != 0 {
            assert_eq!(
                cpu.regs.pc,
                0x0100 + desc.size as u16,
                "pc after {opcode:#04X}"
            );
        }
        if desc.ticks != 0 {
            assert_eq!(ticks, desc.ticks, "ticks of {opcode:#04X}");
        }
        assert_eq!(cpu.regs.f & 0x0F, 0, "f low nibble after {opcode:#04X}");
    }

    for opcode in 0..=255u8 {
        let (mut cpu, mut bus) = with_program(&[0xCB, opcode]);
        cpu.regs.set_hl(0xC000);
        cpu.step(&mut bus);
        let ticks = cpu.step(&mut bus);
        let desc = &OPCODES_CB[opcode as usize];
        assert_eq!(ticks, desc.ticks, "ticks of CB {opcode:#04X}");
        assert_eq!(cpu.regs.pc, 0x0102, "pc after CB {opcode:#04X}");
        assert_eq!(cpu.regs.f & 0x0F, 0, "f low nibble after CB {opcode:#04X}");
    }
}

#[test]
fn base_table_is_internally_consistent() {
    for (index, desc) in OPCODES.iter().enumerate() {
        assert!(desc.size >= 1 && desc.size <= 3, "size of {index:#04X}");
        assert!(desc.advance <= desc.size, "advance of {index:#04X}");
        // Fixed-cost entries that auto-advance must charge something.
        if desc.advance != 0 && desc.ticks == 0 {
            assert!(
                matches!(index, 0x20 | 0x28 | 0x30 | 0x38) || desc.template == "UNDEF",
                "zero base cost on {index:#04X}"
            );
        }
    }
    for (index, desc) in OPCODES_CB.iter().enumerate() {
        assert_eq!(desc.size, 1);
        assert_eq!(desc.advance, 1);
        let expected = if index & 0x07 == 6 { 12 } else { 4 };
        assert_eq!(desc.ticks, expected, "ticks of CB {index:#04X}");
    }
}

#[test]
fn disassembly_substitutes_operands() {
    let (_, mut bus) = with_program(&[0x01, 0x34, 0x12]);
    assert_eq!(disassemble(&bus, 0x0100), "LD BC, 0x1234");
    bus.memory[0x0100..0x0102].copy_from_slice(&[0x20, 0xFE]);
    assert_eq!(disassemble(&bus, 0x0100), "JR NZ, -2");
    bus.memory[0x0100..0x0102].copy_from_slice(&[0xCB, 0xFE]);
    assert_eq!(disassemble(&bus, 0x0100), "SET 7, (HL)");
    bus.memory[0x0100..0x0102].copy_from_slice(&[0xE0, 0x44]);
    assert_eq!(disassemble(&bus, 0x0100), "LDH (0x44), A");
}
