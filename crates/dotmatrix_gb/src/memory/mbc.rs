use crate::cartridge::{Cartridge, MbcKind};

const ROM_BANK_SIZE: usize = 0x4000;
const RAM_BANK_SIZE: usize = 0x2000;

/// Memory bank controller state layered over the cartridge ROM.
///
/// Writes into the 0x0000..0x7FFF range never store anything; they steer
/// the banking registers below.
pub(super) struct Mbc {
    cart: Cartridge,
    ram: Vec<u8>,
    rom_bank: usize,
    ram_bank: usize,
    ram_enabled: bool,
    /// MBC1 mode select: 0 routes the 0x4000 register to the upper ROM
    /// bank bits, 1 routes it to the RAM bank.
    mode: u8,
}

impl Mbc {
    pub(super) fn new(cart: Cartridge) -> Self {
        let ram = vec![0; cart.header.ram_size.max(RAM_BANK_SIZE)];
        Self {
            cart,
            ram,
            rom_bank: 1,
            ram_bank: 0,
            ram_enabled: false,
            mode: 0,
        }
    }

    pub(super) fn cartridge(&self) -> &Cartridge {
        &self.cart
    }

    pub(super) fn ram(&self) -> &[u8] {
        &self.ram
    }

    pub(super) fn import_ram(&mut self, data: &[u8]) {
        let len = data.len().min(self.ram.len());
        self.ram[..len].copy_from_slice(&data[..len]);
    }

    pub(super) fn rom_read(&self, addr: u16) -> u8 {
        let offset = match addr {
            0x0000..=0x3FFF => addr as usize,
            _ => self.rom_bank * ROM_BANK_SIZE + (addr as usize - ROM_BANK_SIZE),
        };
        self.cart.rom.get(offset).copied().unwrap_or(0xFF)
    }

    pub(super) fn ram_read(&self, addr: u16) -> u8 {
        if !self.ram_enabled {
            return 0xFF;
        }
        let offset = self.ram_bank * RAM_BANK_SIZE + (addr as usize - 0xA000);
        self.ram.get(offset).copied().unwrap_or(0xFF)
    }

    /// Returns true when the byte was actually stored.
    pub(super) fn ram_write(&mut self, addr: u16, value: u8) -> bool {
        if !self.ram_enabled {
            return false;
        }
        let offset = self.ram_bank * RAM_BANK_SIZE + (addr as usize - 0xA000);
        match self.ram.get_mut(offset) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub(super) fn control_write(&mut self, addr: u16, value: u8) {
        match self.cart.header.kind {
            MbcKind::None => {}
            MbcKind::Mbc1 => self.mbc1_control(addr, value),
            MbcKind::Mbc3 => self.mbc3_control(addr, value),
            MbcKind::Mbc5 => self.mbc5_control(addr, value),
        }
    }

    fn mbc1_control(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram_enabled = value & 0x0F == 0x0A,
            0x2000..=0x3FFF => {
                // Bank 0 is not selectable through the low register.
                let low = (value & 0x1F).max(1) as usize;
                self.rom_bank = (self.rom_bank & !0x1F) | low;
            }
            0x4000..=0x5FFF => {
                if self.mode == 0 {
                    self.rom_bank = (self.rom_bank & 0x1F) | ((value as usize & 0x03) << 5);
                } else {
                    self.ram_bank = value as usize & 0x03;
                }
            }
            _ => self.mode = value & 0x01,
        }
    }

    fn mbc3_control(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram_enabled = value & 0x0F == 0x0A,
            0x2000..=0x3FFF => self.rom_bank = (value & 0x7F).max(1) as usize,
            0x4000..=0x5FFF => {
                // 0x08..=0x0C would map the RTC registers; without an RTC
                // only plain RAM banks are honored.
                if value <= 0x03 {
                    self.ram_bank = value as usize;
                }
            }
            _ => {} // RTC latch, ignored
        }
    }

    fn mbc5_control(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram_enabled = value & 0x0F == 0x0A,
            // MBC5 allows bank 0 here and carries a ninth bank bit.
            0x2000..=0x2FFF => self.rom_bank = (self.rom_bank & 0x100) | value as usize,
            0x3000..=0x3FFF => self.rom_bank = (self.rom_bank & 0xFF) | ((value as usize & 0x01) << 8),
            0x4000..=0x5FFF => self.ram_bank = value as usize & 0x0F,
            _ => {}
        }
    }
}
