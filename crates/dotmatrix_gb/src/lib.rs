pub mod cartridge;
pub mod cpu;
pub mod joypad;
pub mod machine;
pub mod memory;
pub mod ppu;
pub mod timer;

pub use machine::Machine;

/// LR35902 master clock in T-cycles per second.
pub const CLOCK_RATE: u32 = 4_194_304;
/// Wall-clock nanoseconds per T-cycle at 4.194304 MHz.
pub const NS_PER_TICK: u64 = 238;
/// T-cycles per full LCD frame (154 scanlines of 456 ticks).
pub const FRAME_TICKS: u32 = 70_224;
