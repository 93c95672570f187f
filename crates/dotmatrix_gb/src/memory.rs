mod mbc;

use crate::cartridge::Cartridge;
use crate::cpu::{Bus, IntLine, INT_REQUEST};
use crate::joypad::{Button, Joypad};
use mbc::Mbc;

pub const MEMORY_SIZE: usize = 0x10000;

const SERIAL_DATA: u16 = 0xFF01;
const SERIAL_CTRL: u16 = 0xFF02;
const DIV: u16 = 0xFF04;
const LY: u16 = 0xFF44;
const OAM_DMA: u16 = 0xFF46;
const BOOT_OFF: u16 = 0xFF50;

/// The machine's 64 KiB address space plus the cartridge mapper.
///
/// Regular writes go through interception: the ROM area drives the MBC
/// control registers, and a handful of IO addresses have side effects.
/// The timer and LCD units update their registers through
/// `write8_privileged`, which stores bytes verbatim.
pub struct Memory {
    bytes: Box<[u8; MEMORY_SIZE]>,
    mbc: Mbc,
    joypad: Joypad,
    boot: [u8; 0x100],
    boot_mapped: bool,
    serial_out: Vec<u8>,
    ram_dirty: bool,
}

impl Memory {
    pub fn new(cart: Cartridge) -> Self {
        Self {
            bytes: Box::new([0; MEMORY_SIZE]),
            mbc: Mbc::new(cart),
            joypad: Joypad::new(),
            boot: [0; 0x100],
            boot_mapped: false,
            serial_out: Vec::new(),
            ram_dirty: false,
        }
    }

    /// Map a 256-byte boot ROM over the bottom of the address space. It
    /// stays visible until the program writes a nonzero value to 0xFF50.
    pub fn load_boot(&mut self, image: &[u8; 0x100]) {
        self.boot.copy_from_slice(image);
        self.boot_mapped = true;
    }

    pub fn boot_mapped(&self) -> bool {
        self.boot_mapped
    }

    pub fn cartridge(&self) -> &Cartridge {
        self.mbc.cartridge()
    }

    /// Bytes collected from completed serial transfers.
    pub fn serial_output(&self) -> &[u8] {
        &self.serial_out
    }

    pub fn request_interrupt(&mut self, line: IntLine) {
        self.bytes[INT_REQUEST as usize] |= line.bits();
    }

    pub fn press_button(&mut self, button: Button) {
        if self.joypad.press(button) {
            self.request_interrupt(IntLine::JOYPAD);
        }
    }

    pub fn release_button(&mut self, button: Button) {
        self.joypad.release(button);
    }

    /// External (battery) RAM image, for save-file persistence.
    pub fn export_ram(&self) -> &[u8] {
        self.mbc.ram()
    }

    pub fn import_ram(&mut self, data: &[u8]) {
        self.mbc.import_ram(data);
        self.ram_dirty = false;
    }

    pub fn take_ram_dirty(&mut self) -> bool {
        std::mem::take(&mut self.ram_dirty)
    }

    fn oam_dma(&mut self, value: u8) {
        let src = (value as u16) << 8;
        for i in 0..0xA0u16 {
            let byte = self.read8(src.wrapping_add(i));
            self.bytes[0xFE00 + i as usize] = byte;
        }
        self.bytes[OAM_DMA as usize] = value;
        log::trace!("oam dma from {src:#06X}");
    }
}

impl Bus for Memory {
    fn read8(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x00FF if self.boot_mapped => self.boot[addr as usize],
            0x0000..=0x7FFF => self.mbc.rom_read(addr),
            0xA000..=0xBFFF => self.mbc.ram_read(addr),
            0xFF00 => self.joypad.register(),
            // Serial data reads as 0xFF with no link partner attached.
            SERIAL_DATA => 0xFF,
            _ => self.bytes[addr as usize],
        }
    }

    fn write8(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x7FFF => self.mbc.control_write(addr, value),
            0xA000..=0xBFFF => {
                if self.mbc.ram_write(addr, value) {
                    self.ram_dirty = true;
                }
            }
            0xFF00 => self.joypad.select_write(value),
            SERIAL_CTRL => {
                self.bytes[addr as usize] = value & 0x7F;
                // A transfer started with the internal clock completes
                // immediately: capture the byte and request Serial.
                if value & 0x81 == 0x81 {
                    let byte = self.bytes[SERIAL_DATA as usize];
                    self.serial_out.push(byte);
                    self.request_interrupt(IntLine::SERIAL);
                }
            }
            // Writing the divider or the current scanline clears it.
            DIV => self.bytes[addr as usize] = 0,
            LY => self.bytes[addr as usize] = 0,
            OAM_DMA => self.oam_dma(value),
            _ => self.bytes[addr as usize] = value,
        }
    }

    fn write8_privileged(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }

    fn remap(&mut self) {
        if self.boot_mapped && self.bytes[BOOT_OFF as usize] != 0 {
            self.boot_mapped = false;
            log::debug!("boot ROM unmapped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::Cartridge;

    fn test_rom(type_byte: u8, banks: usize) -> Vec<u8> {
        let mut rom = vec![0u8; banks * 0x4000];
        rom[0x147] = type_byte;
        rom[0x149] = 0x03; // 32 KiB external RAM
        // Tag each switchable bank with its index.
        for bank in 1..banks {
            rom[bank * 0x4000] = bank as u8;
        }
        rom
    }

    fn memory(type_byte: u8) -> Memory {
        Memory::new(Cartridge::new(test_rom(type_byte, 4)).unwrap())
    }

    #[test]
    fn rom_area_writes_never_store() {
        let mut mem = memory(0x00);
        mem.write8(0x1234, 0xAA);
        assert_eq!(mem.read8(0x1234), 0x00);
    }

    #[test]
    fn mbc1_switches_rom_banks() {
        let mut mem = memory(0x01);
        assert_eq!(mem.read8(0x4000), 1);
        mem.write8(0x2000, 2);
        assert_eq!(mem.read8(0x4000), 2);
        // Bank 0 is remapped to bank 1 by the controller.
        mem.write8(0x2000, 0);
        assert_eq!(mem.read8(0x4000), 1);
    }

    #[test]
    fn external_ram_is_gated_by_the_enable_register() {
        let mut mem = memory(0x03);
        assert_eq!(mem.read8(0xA000), 0xFF);
        mem.write8(0xA000, 0x55);
        assert!(!mem.take_ram_dirty());

        mem.write8(0x0000, 0x0A);
        mem.write8(0xA000, 0x55);
        assert_eq!(mem.read8(0xA000), 0x55);
        assert!(mem.take_ram_dirty());

        mem.write8(0x0000, 0x00);
        assert_eq!(mem.read8(0xA000), 0xFF);
    }

    #[test]
    fn div_and_ly_writes_reset_to_zero() {
        let mut mem = memory(0x00);
        mem.write8_privileged(0xFF04, 0x55);
        mem.write8_privileged(0xFF44, 0x90);
        mem.write8(0xFF04, 0x12);
        mem.write8(0xFF44, 0x12);
        assert_eq!(mem.read8(0xFF04), 0);
        assert_eq!(mem.read8(0xFF44), 0);
    }

    #[test]
    fn serial_transfer_completes_immediately() {
        let mut mem = memory(0x00);
        mem.write8(0xFF01, b'A');
        // The data register always reads as 0xFF with no partner.
        assert_eq!(mem.read8(0xFF01), 0xFF);
        mem.write8(0xFF02, 0x81);
        assert_eq!(mem.serial_output(), b"A");
        assert_ne!(mem.read8(INT_REQUEST) & IntLine::SERIAL.bits(), 0);
        // The start bit does not stick.
        assert_eq!(mem.read8(0xFF02) & 0x80, 0);

        // An external-clock start has no partner to drive it, so nothing
        // completes.
        mem.write8(0xFF01, b'B');
        mem.write8(0xFF02, 0x80);
        assert_eq!(mem.serial_output(), b"A");
    }

    #[test]
    fn oam_dma_copies_a0_bytes() {
        let mut mem = memory(0x00);
        for i in 0..0xA0u16 {
            mem.write8(0xC000 + i, i as u8);
        }
        mem.write8(0xFF46, 0xC0);
        for i in 0..0xA0u16 {
            assert_eq!(mem.read8(0xFE00 + i), i as u8);
        }
    }

    #[test]
    fn boot_rom_overlays_until_unmapped() {
        let mut mem = memory(0x00);
        mem.load_boot(&[0xAA; 0x100]);
        assert_eq!(mem.read8(0x0000), 0xAA);
        assert_eq!(mem.read8(0x0100), 0x00);

        mem.write8(0xFF50, 1);
        mem.remap();
        assert!(!mem.boot_mapped());
        assert_eq!(mem.read8(0x0000), 0x00);
    }

    #[test]
    fn button_press_shows_in_register_and_requests_interrupt() {
        let mut mem = memory(0x00);
        mem.write8(0xFF00, 0x20); // select the direction row
        assert_eq!(mem.read8(0xFF00) & 0x0F, 0x0F);
        mem.press_button(Button::Left);
        assert_eq!(mem.read8(0xFF00) & 0x0F, 0x0D);
        assert_ne!(mem.read8(INT_REQUEST) & IntLine::JOYPAD.bits(), 0);
        mem.release_button(Button::Left);
        assert_eq!(mem.read8(0xFF00) & 0x0F, 0x0F);
    }

    #[test]
    fn ram_image_roundtrips_through_export_import() {
        let mut mem = memory(0x03);
        mem.write8(0x0000, 0x0A);
        mem.write8(0xA000, 0x77);
        let image = mem.export_ram().to_vec();

        let mut restored = memory(0x03);
        restored.import_ram(&image);
        restored.write8(0x0000, 0x0A);
        assert_eq!(restored.read8(0xA000), 0x77);
    }
}
