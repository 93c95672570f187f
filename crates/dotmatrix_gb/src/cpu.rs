mod alu;
mod bits;
mod disasm;
mod exec;
mod helpers;
mod interrupts;
mod opcodes;
mod regs;
mod step;
#[cfg(test)]
mod tests;

pub use disasm::disassemble;
pub use interrupts::{IntLine, INT_ENABLE, INT_REQUEST};
pub use opcodes::{OpHandler, Opcode, OPCODES, OPCODES_CB};
pub use regs::{Flag, Registers};

/// Memory-side interface the CPU executes against.
///
/// The real machine implements this on its memory unit; tests use a flat
/// 64 KiB array. The interrupt enable mask (0xFFFF) and request flags
/// (0xFF0F) live behind this interface, not in the CPU.
pub trait Bus {
    fn read8(&self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    fn read8_signed(&self, addr: u16) -> i8 {
        self.read8(addr) as i8
    }

    fn read16(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read8(addr), self.read8(addr.wrapping_add(1))])
    }

    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }

    /// Store a byte bypassing any write interception the bus performs.
    fn write8_privileged(&mut self, addr: u16, value: u8) {
        self.write8(addr, value);
    }

    /// Housekeeping hook, called once per iteration before interrupt
    /// service while the dispatcher is in the normal state. The memory
    /// unit uses it to unmap the boot ROM after 0xFF50 is written.
    fn remap(&mut self) {}
}

pub struct Cpu {
    pub regs: Registers,
    /// Master interrupt enable.
    pub ime: bool,
    pub halted: bool,
    /// One-shot 0xCB latch: the next dispatch goes through the extended
    /// table and clears it. No interrupt is serviced in between.
    pub(crate) ext_prefix: bool,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            ext_prefix: false,
        }
    }

    /// Hardware reset: everything zeroed, execution resumes at 0x0000
    /// inside the boot ROM.
    pub fn reset(&mut self) {
        self.regs = Registers::default();
        self.ime = false;
        self.halted = false;
        self.ext_prefix = false;
    }

    /// Register state the DMG boot ROM leaves behind when it hands
    /// control to cartridge code at 0x0100. Used when no boot ROM is
    /// loaded.
    pub fn skip_boot(&mut self) {
        self.regs.a = 0x01;
        self.regs.f = 0xB0;
        self.regs.b = 0x00;
        self.regs.c = 0x13;
        self.regs.d = 0x00;
        self.regs.e = 0xD8;
        self.regs.h = 0x01;
        self.regs.l = 0x4D;
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;
        self.ime = false;
    }

    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        self.regs.f & (1 << flag as u8) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, on: bool) {
        if on {
            self.regs.f |= 1 << flag as u8;
        } else {
            self.regs.f &= !(1 << flag as u8);
        }
    }
}
