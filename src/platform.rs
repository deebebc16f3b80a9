//! Hardware platform validation.
//!
//! The detector and GPS wiring assumed by this program only exists on three
//! boards, so startup refuses to run anywhere else. Classification happens
//! against the board name the firmware exposes through DMI; everything outside
//! the whitelist is a fatal, non-retried startup error raised before any
//! device handle is constructed.

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Where the kernel exposes the DMI board name.
const BOARD_NAME_PATH: &str = "/sys/devices/virtual/dmi/id/board_name";

/// Process exit code for an unsupported platform.
///
/// Kept at 10, the "invalid platform" result code of the I/O library the
/// original deployment used, so fleet monitoring keyed on that code still
/// works.
pub const EXIT_UNSUPPORTED_PLATFORM: i32 = 10;

/// The boards this program is validated to run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Intel Galileo Gen 1.
    GalileoGen1,

    /// Intel Galileo Gen 2.
    GalileoGen2,

    /// Intel Edison (Fab C).
    EdisonFabC,
}

/// Why platform validation failed.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The board identifier is not on the whitelist.
    #[error("unsupported platform: {0:?}")]
    Unsupported(String),

    /// The board identifier could not be read at all.
    #[error("failed to read board name: {0}")]
    Unreadable(#[from] std::io::Error),
}

impl PlatformError {
    /// Process exit code to terminate with. Always non-zero.
    pub fn exit_code(&self) -> i32 {
        EXIT_UNSUPPORTED_PLATFORM
    }
}

impl Platform {
    /// Classify a DMI board name against the whitelist.
    ///
    /// The Galileo boards report `Galileo` / `GalileoGen2`; Edison Fab C
    /// modules report their carrier codename `BODEGA BAY`.
    pub fn from_board_name(name: &str) -> Result<Self, PlatformError> {
        match name.trim() {
            "Galileo" => Ok(Platform::GalileoGen1),
            "GalileoGen2" => Ok(Platform::GalileoGen2),
            "BODEGA BAY" => Ok(Platform::EdisonFabC),
            other => Err(PlatformError::Unsupported(other.to_string())),
        }
    }

    /// Detect the running platform from the DMI board name.
    pub fn detect() -> Result<Self, PlatformError> {
        Self::detect_from(Path::new(BOARD_NAME_PATH))
    }

    /// Detect from an explicit board-name file (injectable for tests).
    pub fn detect_from(board_name_path: &Path) -> Result<Self, PlatformError> {
        let name = fs::read_to_string(board_name_path)?;
        Self::from_board_name(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitelisted_boards() {
        assert_eq!(
            Platform::from_board_name("Galileo").unwrap(),
            Platform::GalileoGen1
        );
        assert_eq!(
            Platform::from_board_name("GalileoGen2").unwrap(),
            Platform::GalileoGen2
        );
        assert_eq!(
            Platform::from_board_name("BODEGA BAY").unwrap(),
            Platform::EdisonFabC
        );
    }

    #[test]
    fn test_trailing_newline_tolerated() {
        // The sysfs attribute ends with a newline
        assert_eq!(
            Platform::from_board_name("GalileoGen2\n").unwrap(),
            Platform::GalileoGen2
        );
    }

    #[test]
    fn test_unsupported_boards_rejected() {
        for name in ["Raspberry Pi 4 Model B", "MinnowBoard", "", "galileo"] {
            let err = Platform::from_board_name(name).unwrap_err();
            assert!(matches!(err, PlatformError::Unsupported(_)));
            assert_ne!(err.exit_code(), 0);
        }
    }

    #[test]
    fn test_unreadable_board_name_is_fatal() {
        let err = Platform::detect_from(Path::new("/nonexistent/board_name")).unwrap_err();
        assert!(matches!(err, PlatformError::Unreadable(_)));
        assert_ne!(err.exit_code(), 0);
    }
}
