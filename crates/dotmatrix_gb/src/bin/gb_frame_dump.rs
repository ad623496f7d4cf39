//! Headless runner: execute a ROM for a number of frames, then write the
//! framebuffer as raw RGB24 and print anything sent over the serial port.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use dotmatrix_gb::{Cartridge, GameBoy, SCREEN_HEIGHT, SCREEN_WIDTH};

const USAGE: &str = "usage: gb_frame_dump <rom_path> <out_rgb24_path> [frames]";

fn run(rom_path: PathBuf, out_path: PathBuf, frames: u32) -> Result<()> {
    let cartridge = Cartridge::from_file(&rom_path)?;
    let mut gb = GameBoy::new();
    gb.load_cartridge(&cartridge);

    for frame in 0..frames {
        gb.step_frame()
            .with_context(|| format!("emulation failed during frame {frame}"))?;
        if gb.is_stopped() {
            log::info!("STOP executed after {} frames", frame + 1);
            break;
        }
    }

    let mut buffer = vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT * 3];
    gb.video_frame(&mut buffer);
    std::fs::write(&out_path, &buffer)
        .with_context(|| format!("failed to write '{}'", out_path.display()))?;

    println!(
        "Wrote {} bytes ({}x{} rgb24) after {} ticks to '{}'",
        buffer.len(),
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        gb.ticks(),
        out_path.display()
    );
    if !gb.serial_output().is_empty() {
        println!("serial: {}", String::from_utf8_lossy(gb.serial_output()));
    }
    Ok(())
}

fn parse_args() -> Result<(PathBuf, PathBuf, u32)> {
    let mut args = std::env::args_os().skip(1);
    let (Some(rom), Some(out)) = (args.next(), args.next()) else {
        bail!(USAGE);
    };
    let frames = match args.next() {
        Some(arg) => arg
            .to_string_lossy()
            .parse()
            .with_context(|| format!("invalid frame count; {USAGE}"))?,
        None => 120,
    };
    Ok((rom.into(), out.into(), frames))
}

fn main() -> ExitCode {
    env_logger::init();

    let (rom_path, out_path, frames) = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::from(2);
        }
    };

    match run(rom_path, out_path, frames) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
