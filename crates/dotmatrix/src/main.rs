use std::path::{Path, PathBuf};
use std::{env, fs, process};

use anyhow::{anyhow, bail, Context, Result};
use dotmatrix_gb::Machine;

/// Battery RAM is flushed to disk every this many frames (~5 s).
const SAVE_INTERVAL_FRAMES: u32 = 300;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut rom_path: Option<PathBuf> = None;
    let mut boot_path: Option<PathBuf> = None;
    let mut pacing = true;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--boot" => {
                let path = args.next().context("--boot requires a path")?;
                boot_path = Some(PathBuf::from(path));
            }
            "--no-pacing" => pacing = false,
            "--help" | "-h" => {
                usage();
                return Ok(());
            }
            _ if arg.starts_with('-') => bail!("unknown option {arg}"),
            _ => {
                if rom_path.replace(PathBuf::from(&arg)).is_some() {
                    bail!("more than one ROM path given");
                }
            }
        }
    }
    let Some(rom_path) = rom_path else {
        usage();
        process::exit(1);
    };

    let rom = fs::read(&rom_path).with_context(|| format!("reading {}", rom_path.display()))?;
    let mut machine = match &boot_path {
        Some(path) => {
            let image = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let image: &[u8; 0x100] = image
                .as_slice()
                .try_into()
                .map_err(|_| anyhow!("boot ROM must be exactly 256 bytes"))?;
            Machine::with_boot(rom, image)?
        }
        None => Machine::new(rom)?,
    };
    machine.set_pacing(pacing);

    let save_path = rom_path.with_extension("sav");
    if machine.mem.cartridge().header.battery {
        match fs::read(&save_path) {
            Ok(data) => {
                machine.mem.import_ram(&data);
                log::info!("restored {} bytes of battery RAM", data.len());
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", save_path.display()))
            }
        }
    }

    log::info!(
        "starting emulation{}",
        if pacing { "" } else { " (unpaced)" }
    );
    let mut frames = 0u32;
    loop {
        machine.step_frame();
        frames = frames.wrapping_add(1);
        if frames % SAVE_INTERVAL_FRAMES == 0 {
            persist_ram(&mut machine, &save_path)?;
        }
    }
}

fn persist_ram(machine: &mut Machine, path: &Path) -> Result<()> {
    if machine.mem.cartridge().header.battery && machine.mem.take_ram_dirty() {
        fs::write(path, machine.mem.export_ram())
            .with_context(|| format!("writing {}", path.display()))?;
        log::debug!("battery RAM saved");
    }
    Ok(())
}

fn usage() {
    eprintln!("usage: dotmatrix <rom.gb> [--boot <boot.bin>] [--no-pacing]");
}
