// SPDX-License-Identifier: GPL-3.0
// error.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use std::error::Error;
use std::fmt::Display;

/// This enum classifies failures reported by a platform backend, so that callers
/// can react to the broad category without parsing the accompanying message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendErrorKind {

    /// No disc is present in the drive.
    NoDisc,

    /// The drive is busy with another operation.
    DeviceBusy,

    /// An I/O error occurred while talking to the drive.
    Io,

    /// The operation is not supported on this platform or drive.
    NotSupported,

    /// The drive returned a table of contents that does not cover the
    /// position it also reported.
    InconsistentToc,
}

/// Error types that may occur when driving the CD-ROM subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CdromError {

    /// An operation was attempted before `init`, or after `quit`.
    NotInitialised,

    /// A drive index at or beyond the detected drive count was used.
    InvalidDriveIndex,

    /// The backend could not allocate resources while opening a drive.
    OutOfMemory,

    /// The requested starting track does not exist on the disc.
    InvalidStartTrack,

    /// The requested track range runs past the end of the disc.
    InvalidPlayLength,

    /// The requested starting frame lies outside the named track.
    InvalidStartingFrame(i32),

    /// The requested ending frame lies outside the named track.
    InvalidEndingFrame(i32),

    /// An opaque failure passed through from the platform backend.
    Backend {
        kind: BackendErrorKind,
        message: String,
    },
}

impl Error for CdromError {}

impl Display for CdromError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CdromError::NotInitialised => f.write_str("CD-ROM subsystem not initialised"),
            CdromError::InvalidDriveIndex => f.write_str("Invalid CD-ROM drive index"),
            CdromError::OutOfMemory => f.write_str("Out of memory"),
            CdromError::InvalidStartTrack => f.write_str("Invalid starting track"),
            CdromError::InvalidPlayLength => f.write_str("Invalid play length"),
            CdromError::InvalidStartingFrame(track) => {
                write!(f, "Invalid starting frame for track {}", track)
            },
            CdromError::InvalidEndingFrame(track) => {
                write!(f, "Invalid ending frame for track {}", track)
            },
            CdromError::Backend { message, .. } => {
                write!(f, "CD-ROM backend error: {}", message)
            },
        }
    }
}

/// Result type for `philcd_core`.
pub type Result<T> = std::result::Result<T, CdromError>;
