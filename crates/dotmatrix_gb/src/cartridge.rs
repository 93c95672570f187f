use std::fmt;

/// Supported memory bank controllers, decoded from the cartridge type
/// byte at 0x147.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbcKind {
    None,
    Mbc1,
    Mbc3,
    Mbc5,
}

#[derive(Debug, Clone)]
pub struct Header {
    pub title: String,
    pub kind: MbcKind,
    /// Declared ROM size in bytes (0x148 code).
    pub rom_size: usize,
    /// External RAM size in bytes (0x149 code).
    pub ram_size: usize,
    /// Whether the mapper variant carries battery-backed RAM.
    pub battery: bool,
}

pub struct Cartridge {
    pub header: Header,
    pub rom: Vec<u8>,
}

#[derive(Debug)]
pub enum CartridgeError {
    /// The image is smaller than the 0x150-byte header area.
    TooShort(usize),
    /// Unknown or unsupported mapper code at 0x147.
    UnsupportedMapper(u8),
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartridgeError::TooShort(len) => {
                write!(f, "ROM image of {len} bytes is too short to hold a header")
            }
            CartridgeError::UnsupportedMapper(code) => {
                write!(f, "unsupported cartridge type {code:#04X}")
            }
        }
    }
}

impl std::error::Error for CartridgeError {}

impl Cartridge {
    pub fn new(rom: Vec<u8>) -> Result<Self, CartridgeError> {
        if rom.len() < 0x150 {
            return Err(CartridgeError::TooShort(rom.len()));
        }

        let type_byte = rom[0x147];
        let kind = match type_byte {
            0x00 | 0x08 | 0x09 => MbcKind::None,
            0x01..=0x03 => MbcKind::Mbc1,
            0x0F..=0x13 => MbcKind::Mbc3,
            0x19..=0x1E => MbcKind::Mbc5,
            other => return Err(CartridgeError::UnsupportedMapper(other)),
        };
        let battery = matches!(type_byte, 0x03 | 0x09 | 0x0F | 0x10 | 0x13 | 0x1B | 0x1E);

        let title = rom[0x134..0x144]
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '?' })
            .collect();
        let rom_size = 0x8000usize << (rom[0x148] & 0x0F);
        let ram_size = match rom[0x149] {
            0x01 => 0x800,
            0x02 => 0x2000,
            0x03 => 0x8000,
            0x04 => 0x20000,
            0x05 => 0x10000,
            _ => 0,
        };

        let header = Header {
            title,
            kind,
            rom_size,
            ram_size,
            battery,
        };
        log::info!(
            "cartridge \"{}\": {:?}, {} KiB ROM, {} KiB RAM{}",
            header.title,
            header.kind,
            header.rom_size / 1024,
            header.ram_size / 1024,
            if header.battery { ", battery" } else { "" },
        );

        Ok(Self { header, rom })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_rom() -> Vec<u8> {
        let mut rom = vec![0u8; 0x8000];
        rom[0x134..0x138].copy_from_slice(b"TEST");
        rom[0x148] = 0x01; // 64 KiB
        rom[0x149] = 0x02; // 8 KiB RAM
        rom
    }

    #[test]
    fn parses_header_fields() {
        let mut rom = base_rom();
        rom[0x147] = 0x03; // MBC1 + RAM + battery
        let cart = Cartridge::new(rom).unwrap();
        assert_eq!(cart.header.title, "TEST");
        assert_eq!(cart.header.kind, MbcKind::Mbc1);
        assert_eq!(cart.header.rom_size, 0x10000);
        assert_eq!(cart.header.ram_size, 0x2000);
        assert!(cart.header.battery);
    }

    #[test]
    fn plain_rom_has_no_mapper_or_battery() {
        let cart = Cartridge::new(base_rom()).unwrap();
        assert_eq!(cart.header.kind, MbcKind::None);
        assert!(!cart.header.battery);
    }

    #[test]
    fn unknown_mapper_code_is_an_error() {
        let mut rom = base_rom();
        rom[0x147] = 0xFC;
        assert!(matches!(
            Cartridge::new(rom),
            Err(CartridgeError::UnsupportedMapper(0xFC))
        ));
    }

    #[test]
    fn truncated_image_is_an_error() {
        assert!(matches!(
            Cartridge::new(vec![0; 0x100]),
            Err(CartridgeError::TooShort(0x100))
        ));
    }
}
