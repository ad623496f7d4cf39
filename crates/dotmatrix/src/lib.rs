use std::path::Path;

use anyhow::{Context, Result};
use dotmatrix_common::app::App;
use dotmatrix_gb::{Cartridge, GameBoy, GameBoyApp, SCREEN_SCALE};
use dotmatrix_sdl2::{SdlContext, SdlInitInfo};

/// Environment variable overriding the window scale factor.
pub const SCALE_ENV: &str = "DOTMATRIX_SCALE";

/// Parse a `DOTMATRIX_SCALE` value. Anything that is not an integer >= 1
/// falls back to the default scale.
pub fn parse_scale(value: Option<&str>) -> u32 {
    match value.map(|v| v.trim().parse::<u32>()) {
        Some(Ok(scale)) if scale >= 1 => scale,
        Some(_) => {
            log::warn!("ignoring invalid {}; using scale {}", SCALE_ENV, SCREEN_SCALE);
            SCREEN_SCALE
        }
        None => SCREEN_SCALE,
    }
}

/// Load and validate `rom_path`, then run it in an SDL2 window.
pub fn run(rom_path: &Path) -> Result<()> {
    let cartridge = Cartridge::from_file(rom_path)
        .with_context(|| format!("cannot start {}", rom_path.display()))?;

    let mut gb = GameBoy::new();
    gb.load_cartridge(&cartridge);

    let scale = parse_scale(std::env::var(SCALE_ENV).ok().as_deref());
    let app = GameBoyApp::new(gb).with_scale(scale);

    let title = if cartridge.title().is_empty() {
        app.title()
    } else {
        format!("{} - {}", app.title(), cartridge.title())
    };
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(title)
        .build();
    SdlContext::run(init_info, app)
}

#[cfg(test)]
mod tests {
    use super::parse_scale;
    use dotmatrix_gb::SCREEN_SCALE;

    #[test]
    fn scale_override() {
        assert_eq!(parse_scale(None), SCREEN_SCALE);
        assert_eq!(parse_scale(Some("2")), 2);
        assert_eq!(parse_scale(Some(" 6 ")), 6);
        assert_eq!(parse_scale(Some("0")), SCREEN_SCALE);
        assert_eq!(parse_scale(Some("big")), SCREEN_SCALE);
    }
}
