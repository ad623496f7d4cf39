//! Cartridge loading and header validation.
//!
//! Only plain 32 KiB ROM-only cartridges are accepted. Header problems
//! that real hardware tolerates (logo, checksum) are kept as warnings.

use std::path::Path;

use crate::error::{GbError, Result};

use super::bus::ROM_SIZE;

const HEADER_END: usize = 0x150;
const LOGO_OFFSET: usize = 0x104;
const TITLE_OFFSET: usize = 0x134;
const TITLE_LEN: usize = 16;
const TYPE_OFFSET: usize = 0x147;
const ROM_SIZE_OFFSET: usize = 0x148;
const RAM_SIZE_OFFSET: usize = 0x149;
const CHECKSUM_OFFSET: usize = 0x14D;

/// Cartridge type byte for "ROM ONLY".
const ROM_ONLY: u8 = 0x00;

/// The boot ROM compares this bitmap against 0x0104..=0x0133.
pub const NINTENDO_LOGO: [u8; 48] = [
    0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D,
    0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99,
    0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
];

/// Non-fatal header problems.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum HeaderWarning {
    #[error("Nintendo logo does not match")]
    LogoMismatch,
    #[error("header checksum mismatch (stored 0x{stored:02X}, computed 0x{computed:02X})")]
    ChecksumMismatch { stored: u8, computed: u8 },
}

/// A validated ROM image.
#[derive(Clone, Debug)]
pub struct Cartridge {
    rom: Vec<u8>,
    title: String,
    cart_type: u8,
    ram_size_code: u8,
    warnings: Vec<HeaderWarning>,
}

impl Cartridge {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| GbError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded {} bytes from {}", bytes.len(), path.display());
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(rom: Vec<u8>) -> Result<Self> {
        if rom.len() < HEADER_END {
            return Err(GbError::MalformedRom {
                reason: format!("{} bytes is smaller than the 0x150-byte header", rom.len()),
            });
        }

        let cart_type = rom[TYPE_OFFSET];
        if cart_type != ROM_ONLY {
            return Err(GbError::UnsupportedCartridge { cart_type });
        }

        let rom_size_code = rom[ROM_SIZE_OFFSET];
        if rom_size_bytes(rom_size_code) != Some(ROM_SIZE) {
            return Err(GbError::UnsupportedRomSize {
                code: rom_size_code,
            });
        }
        if rom.len() != ROM_SIZE {
            return Err(GbError::MalformedRom {
                reason: format!(
                    "file is {} bytes but the header declares {} bytes",
                    rom.len(),
                    ROM_SIZE
                ),
            });
        }

        let mut warnings = Vec::new();
        if rom[LOGO_OFFSET..LOGO_OFFSET + NINTENDO_LOGO.len()] != NINTENDO_LOGO {
            warnings.push(HeaderWarning::LogoMismatch);
        }
        let stored = rom[CHECKSUM_OFFSET];
        let computed = header_checksum(&rom);
        if stored != computed {
            warnings.push(HeaderWarning::ChecksumMismatch { stored, computed });
        }

        let cartridge = Self {
            title: parse_title(&rom[TITLE_OFFSET..TITLE_OFFSET + TITLE_LEN]),
            cart_type,
            ram_size_code: rom[RAM_SIZE_OFFSET],
            rom,
            warnings,
        };

        log::info!(
            "cartridge \"{}\": type 0x{:02X}, 32 KiB ROM, {} bytes external RAM",
            cartridge.title,
            cartridge.cart_type,
            cartridge.ram_size()
        );
        for warning in &cartridge.warnings {
            log::warn!("cartridge header: {}", warning);
        }

        Ok(cartridge)
    }

    pub fn rom(&self) -> &[u8] {
        &self.rom
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cart_type(&self) -> u8 {
        self.cart_type
    }

    /// External RAM size declared by the header, in bytes.
    pub fn ram_size(&self) -> usize {
        match self.ram_size_code {
            0x01 => 0x800,
            0x02 => 0x2000,
            0x03 => 0x8000,
            0x04 => 0x20000,
            0x05 => 0x10000,
            _ => 0,
        }
    }

    pub fn warnings(&self) -> &[HeaderWarning] {
        &self.warnings
    }
}

/// ROM size in bytes for a header size code (32 KiB << code).
fn rom_size_bytes(code: u8) -> Option<usize> {
    (code <= 0x08).then(|| ROM_SIZE << code)
}

/// Header checksum over 0x0134..=0x014C: `x = x - byte - 1`.
pub fn header_checksum(rom: &[u8]) -> u8 {
    rom[TITLE_OFFSET..CHECKSUM_OFFSET]
        .iter()
        .fold(0u8, |x, &b| x.wrapping_sub(b).wrapping_sub(1))
}

fn parse_title(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                ' '
            }
        })
        .collect::<String>()
        .trim_end()
        .to_string()
}
