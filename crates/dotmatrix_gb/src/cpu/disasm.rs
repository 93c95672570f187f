use super::{Bus, OPCODES, OPCODES_CB};

/// Render the instruction at `addr` from its descriptor display template.
/// Immediate markers in the template are substituted with the operand
/// bytes that follow the opcode.
pub fn disassemble(bus: &dyn Bus, addr: u16) -> String {
    let opcode = bus.read8(addr);
    let desc = if opcode == 0xCB {
        // Extended opcodes carry no immediates, so the second byte fully
        // determines the text.
        &OPCODES_CB[bus.read8(addr.wrapping_add(1)) as usize]
    } else {
        &OPCODES[opcode as usize]
    };

    let template = desc.template;
    if template.contains("16") {
        let value = bus.read16(addr.wrapping_add(1));
        let text = format!("{value:#06X}");
        template.replace("d16", &text).replace("a16", &text)
    } else if template.contains("d8") || template.contains("a8") {
        let value = bus.read8(addr.wrapping_add(1));
        let text = format!("{value:#04X}");
        template.replace("d8", &text).replace("a8", &text)
    } else if template.contains("r8") {
        let value = bus.read8_signed(addr.wrapping_add(1));
        template.replace("r8", &value.to_string())
    } else {
        template.to_string()
    }
}
