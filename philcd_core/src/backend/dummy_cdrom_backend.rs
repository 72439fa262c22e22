// SPDX-License-Identifier: GPL-3.0
// dummy_cdrom_backend.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use super::CdromBackend;
use crate::cd::{CdStatus, Toc};
use crate::error::{BackendErrorKind, CdromError, Result};

/// This struct models the drive-less backend used on platforms without CD-ROM
/// support. It always enumerates zero drives, so no per-drive operation can be
/// reached through a correctly validated subsystem call - the per-session
/// methods exist only to satisfy the trait, and report the operation as
/// unsupported.
pub struct DummyCdromBackend;

/// Implementation functions for the drive-less backend itself.
impl DummyCdromBackend {

    /// Creates a new drive-less backend object. There is no state to set up.
    pub fn new() -> Self {
        DummyCdromBackend
    }

    /// Builds the error every unreachable per-session operation reports.
    fn unsupported() -> CdromError {
        CdromError::Backend {
            kind: BackendErrorKind::NotSupported,
            message: String::from("no CD-ROM drives available"),
        }
    }
}

/// Implementation functions to be called from anything that understands what
/// a CdromBackend object is.
impl CdromBackend for DummyCdromBackend {

    /// There are never any drives to find.
    fn init(&mut self) -> Result<i32> {
        Ok(0)
    }

    /// Nothing was acquired, so nothing needs releasing.
    fn quit(&mut self) {
    }

    /// No drive exists to name.
    fn name(&self, _drive: i32) -> String {
        String::new()
    }

    /// No drive exists to open.
    fn open(&mut self, _drive: i32) -> Result<i32> {
        Err(Self::unsupported())
    }

    fn read_toc(&mut self, _session: i32) -> Result<Toc> {
        Err(Self::unsupported())
    }

    fn status(&mut self, _session: i32) -> (CdStatus, Option<i32>) {
        (CdStatus::TrayEmpty, None)
    }

    fn play(&mut self, _session: i32, _start: i32, _length: i32) -> Result<()> {
        Err(Self::unsupported())
    }

    fn pause(&mut self, _session: i32) -> Result<()> {
        Err(Self::unsupported())
    }

    fn resume(&mut self, _session: i32) -> Result<()> {
        Err(Self::unsupported())
    }

    fn stop(&mut self, _session: i32) -> Result<()> {
        Err(Self::unsupported())
    }

    fn eject(&mut self, _session: i32) -> Result<()> {
        Err(Self::unsupported())
    }

    fn close(&mut self, _session: i32) {
    }
}
