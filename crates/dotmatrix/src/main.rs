use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args_os().skip(1);
    let (Some(rom_path), None) = (args.next(), args.next()) else {
        eprintln!("usage: dotmatrix <rom.gb>");
        eprintln!("  RUST_LOG=info       log level (env_logger)");
        eprintln!("  DOTMATRIX_SCALE=N   window scale factor (default 4)");
        return ExitCode::from(2);
    };

    let rom_path = PathBuf::from(rom_path);
    log::info!("Playing ROM path: '{}'", rom_path.display());
    match dotmatrix::run(&rom_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
