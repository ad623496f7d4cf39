use std::path::PathBuf;

/// Errors raised by the emulator core.
///
/// Load-time errors (`UnsupportedCartridge`, `UnsupportedRomSize`,
/// `MalformedRom`, `Io`) prevent emulation from starting. `FatalDecode`
/// is raised mid-execution and locks the CPU until the next reset.
#[derive(Debug, thiserror::Error)]
pub enum GbError {
    #[error("no handler for opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    FatalDecode { opcode: u8, pc: u16 },

    #[error("unsupported cartridge type 0x{cart_type:02X} (only ROM ONLY cartridges are supported)")]
    UnsupportedCartridge { cart_type: u8 },

    #[error("unsupported ROM size code 0x{code:02X} (only 32 KiB ROMs are supported)")]
    UnsupportedRomSize { code: u8 },

    #[error("malformed ROM: {reason}")]
    MalformedRom { reason: String },

    #[error("failed to read ROM file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GbError>;
