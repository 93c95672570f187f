use super::{disasm, Bus, Cpu, OPCODES, OPCODES_CB};

impl Cpu {
    /// Run one dispatcher iteration and return the T-cycles consumed.
    ///
    /// While halted the core burns 4 ticks per call and wakes as soon as
    /// any interrupt line is requested, whether or not it is enabled.
    /// In the normal state the bus housekeeping hook and interrupt
    /// service run before the fetch; after a 0xCB prefix both are
    /// skipped so the extended opcode executes back to back with it.
    pub fn step(&mut self, bus: &mut dyn Bus) -> u32 {
        if self.halted {
            if self.any_interrupt_requested(bus) {
                self.halted = false;
            }
            return 4;
        }

        if !self.ext_prefix {
            bus.remap();
            self.service_interrupts(bus);
            if log::log_enabled!(log::Level::Trace) {
                log::trace!("{:#06X}: {}", self.regs.pc, disasm::disassemble(bus, self.regs.pc));
            }
        }

        let opcode = bus.read8(self.regs.pc);
        let table = if self.ext_prefix { &OPCODES_CB } else { &OPCODES };
        self.ext_prefix = false;
        let desc = &table[opcode as usize];

        let ticks = (desc.exec)(self, bus, opcode) + desc.ticks;
        self.regs.pc = self.regs.pc.wrapping_add(desc.advance as u16);
        ticks
    }
}
