// SPDX-License-Identifier: GPL-3.0
// subsystem.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use log::{debug, warn};

use crate::backend::CdromBackend;
use crate::cd::{Cd, CdStatus, Toc};
use crate::error::{BackendErrorKind, CdromError, Result};
use crate::playback::resolve_track_span;

/// This struct models the CD-ROM subsystem itself - the registry of detected
/// drives, and the platform backend used to reach them. Unlike the original,
/// which kept this as process-wide state, the subsystem is an explicitly
/// constructed object, so independent instances can coexist (one per test,
/// for example). Access is single-threaded by contract - nothing in here is
/// internally synchronised.
pub struct CdromSubsystem {

    // The platform backend all operations dispatch to.
    backend: Box<dyn CdromBackend>,

    // Number of drives found by the last scan.
    num_drives: i32,

    // Whether init has been called, and quit has not.
    initialised: bool,
}

/// Implementation functions for the CD-ROM subsystem itself.
impl CdromSubsystem {

    /// Creates a new subsystem around the given backend. The subsystem is not
    /// usable until `init` has scanned for drives.
    pub fn new(backend: Box<dyn CdromBackend>) -> Self {
        CdromSubsystem {

            // Store the supplied platform backend.
            backend,

            // No drives known until a scan happens.
            num_drives: 0,

            // Not initialised until init is called.
            initialised: false,
        }
    }

    /// Scans the platform for drives via the backend. The drive count is
    /// reset first, so calling this again rescans from scratch. Finding no
    /// drives is a success - only a backend that cannot query the platform
    /// at all fails here.
    pub fn init(&mut self) -> Result<()> {

        self.num_drives = 0;
        self.num_drives = self.backend.init()?;
        self.initialised = true;

        debug!("CD-ROM subsystem initialised with {} drive(s)", self.num_drives);

        Ok(())
    }

    /// Tears the backend down and forgets the detected drives. Handles still
    /// open against this subsystem must be closed before calling this - that
    /// is the caller's responsibility.
    pub fn quit(&mut self) {
        self.backend.quit();
        self.num_drives = 0;
        self.initialised = false;
    }

    /// Checks the subsystem has been initialised and not yet torn down.
    fn check_init(&self) -> Result<()> {
        if self.initialised {
            Ok(())
        } else {
            Err(CdromError::NotInitialised)
        }
    }

    /// This function returns the number of drives found by the last scan.
    pub fn num_drives(&self) -> Result<i32> {
        self.check_init()?;
        Ok(self.num_drives)
    }

    /// This function returns a human-readable name for the given drive, which
    /// may be empty if the backend does not supply names.
    pub fn drive_name(&self, drive: i32) -> Result<String> {

        self.check_init()?;

        if drive < 0 || drive >= self.num_drives {
            return Err(CdromError::InvalidDriveIndex);
        }

        Ok(self.backend.name(drive))
    }

    /// Opens the given drive, returning an exclusive handle for it. The
    /// handle starts with an unread table of contents, filled in by the
    /// first status query.
    pub fn open(&mut self, drive: i32) -> Result<Cd> {

        self.check_init()?;

        if drive < 0 || drive >= self.num_drives {
            return Err(CdromError::InvalidDriveIndex);
        }

        let id = self.backend.open(drive)?;

        Ok(Cd::new(id, drive))
    }

    /// Queries the drive's status, refreshing the handle's cached table of
    /// contents and play position on the way through. While a disc is in the
    /// drive, the table of contents is re-read on every query, as the disc
    /// may have changed since the last one. If the table of contents cannot
    /// be read, the returned status degrades to the error status, as playback
    /// requests cannot be trusted without one - the raw status remains
    /// readable on the handle.
    pub fn status(&mut self, cd: &mut Cd) -> Result<CdStatus> {

        self.check_init()?;

        // Get the current status of the drive.
        let (raw_status, position) = self.backend.status(cd.id);
        let mut status = raw_status;

        // Stage the new handle state locally, so that failing part-way
        // through leaves the handle as it was.
        let mut toc = Toc::new();
        let mut cur_track = 0;
        let mut cur_frame = 0;

        // Get the table of contents, if there's a disc available.
        if status.in_drive() {
            match self.backend.read_toc(cd.id) {
                Ok(read) => toc = read,
                Err(error) => {
                    warn!("Table of contents read failed: {}", error);
                    status = CdStatus::Error;
                },
            }

            // If the drive is playing, work out the current play position.
            if status == CdStatus::Playing || status == CdStatus::Paused {

                let position = position.unwrap_or(0);

                // Find the last track starting at or before the reported
                // position. A position covered by no track entry means the
                // backend's status and table of contents disagree.
                if toc.tracks.is_empty() || toc.tracks[0].offset > position {
                    return Err(CdromError::Backend {
                        kind: BackendErrorKind::InconsistentToc,
                        message: String::from("reported position precedes every track"),
                    });
                }

                // The scan is bounded by both the track count and the actual
                // list length, in case the backend served a short list.
                let mut index = 1;
                while (index as usize) < toc.tracks.len()
                    && index <= toc.numtracks
                    && toc.tracks[index as usize].offset <= position
                {
                    index += 1;
                }

                cur_track = index - 1;
                cur_frame = position - toc.tracks[cur_track as usize].offset;

                debug!(
                    "Current position: {}, track = {} (offset is {})",
                    position, cur_track, toc.tracks[cur_track as usize].offset
                );
            }
        }

        // Commit the refreshed state to the handle. The handle keeps the raw
        // status - the degraded value is only what we hand back.
        cd.status = raw_status;
        cd.toc = toc;
        cd.cur_track = cur_track;
        cd.cur_frame = cur_frame;

        Ok(status)
    }

    /// Plays a span of tracks. The handle's table of contents is refreshed
    /// with an implicit status query first, then the request is translated
    /// into an absolute frame span for the backend. A request that clips down
    /// to nothing succeeds without starting playback.
    pub fn play_tracks(
        &mut self,
        cd: &mut Cd,
        start_track: i32,
        start_frame: i32,
        ntracks: i32,
        nframes: i32
    ) -> Result<()> {

        self.check_init()?;

        // Refresh the cached table of contents before resolving against it.
        self.status(cd)?;

        let span = match resolve_track_span(&cd.toc, start_track, start_frame, ntracks, nframes)? {
            Some(span) => span,
            None => return Ok(()),
        };

        debug!("Playing {} frames at offset {}", span.length, span.start);

        self.backend.play(cd.id, span.start, span.length)
    }

    /// Plays a raw absolute frame range, bypassing track resolution entirely.
    /// The caller takes responsibility for the range making sense.
    pub fn play(&mut self, cd: &Cd, start: i32, length: i32) -> Result<()> {
        self.check_init()?;
        self.backend.play(cd.id, start, length)
    }

    /// Pauses playback, as a no-op success unless the drive is actually
    /// playing. Only the raw status is consulted here - the cached table of
    /// contents plays no part.
    pub fn pause(&mut self, cd: &Cd) -> Result<()> {

        self.check_init()?;

        let (status, _) = self.backend.status(cd.id);
        match status {
            CdStatus::Playing => self.backend.pause(cd.id),
            _ => Ok(()),
        }
    }

    /// Resumes paused playback, as a no-op success unless the drive is
    /// actually paused. The backend's result is handed back as-is.
    pub fn resume(&mut self, cd: &Cd) -> Result<()> {

        self.check_init()?;

        let (status, _) = self.backend.status(cd.id);
        match status {
            CdStatus::Paused => self.backend.resume(cd.id),
            _ => Ok(()),
        }
    }

    /// Stops playback if the drive is playing or paused, as a no-op success
    /// otherwise. The backend's result is handed back as-is.
    pub fn stop(&mut self, cd: &Cd) -> Result<()> {

        self.check_init()?;

        let (status, _) = self.backend.status(cd.id);
        match status {
            CdStatus::Playing | CdStatus::Paused => self.backend.stop(cd.id),
            _ => Ok(()),
        }
    }

    /// Ejects the disc, unconditionally - the backend is always asked. On
    /// success the cached table of contents is cleared, as it no longer
    /// describes anything in the drive.
    pub fn eject(&mut self, cd: &mut Cd) -> Result<()> {

        self.check_init()?;

        self.backend.eject(cd.id)?;
        cd.toc.clear();

        Ok(())
    }

    /// Closes the handle, releasing its backend session. Taking the handle by
    /// value is what makes double-close and use-after-close unrepresentable.
    pub fn close(&mut self, cd: Cd) {
        self.backend.close(cd.id);
    }
}
