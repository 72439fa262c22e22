// SPDX-License-Identifier: GPL-3.0
// cd.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use philcd_utility::FrameAddress;

/// The maximum number of real tracks a disc can carry in its table of contents.
pub const MAX_TRACKS: i32 = 99;

/// The track id given to the synthetic lead-out entry that marks end-of-disc.
/// This is the value the red-book table of contents uses on the wire.
pub const LEADOUT_TRACK_ID: i32 = 0xAA;

/// This enum models the two kinds of track found on a disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Audio,
    Data,
}

/// This enum models the possible states of a drive, as reported by the platform
/// backend. The legality of the transition operations depends on it - pause is
/// only meaningful when playing, resume only when paused, and stop or eject
/// when playing or paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CdStatus {
    TrayEmpty,
    Stopped,
    Playing,
    Paused,
    Error,
}

impl CdStatus {

    /// Tells us whether this status means a disc is present in the drive.
    pub fn in_drive(self) -> bool {
        matches!(self, CdStatus::Stopped | CdStatus::Playing | CdStatus::Paused)
    }
}

/// This struct models one entry in a disc's table of contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {

    // Track number, or LEADOUT_TRACK_ID for the synthetic lead-out entry.
    pub id: i32,

    // Whether this is an audio or data track.
    pub kind: TrackKind,

    // Absolute start position in frames from the start of the disc.
    pub offset: i32,

    // Length in frames. Zero for the lead-out entry, whose offset alone marks
    // the end boundary of the last real track.
    pub length: i32,
}

/// This struct models the table of contents of a disc. When populated, the
/// track list holds `numtracks` real tracks in ascending offset order,
/// followed by the synthetic lead-out entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toc {

    // Count of real tracks, not including the lead-out entry.
    pub numtracks: i32,

    // The track entries themselves.
    pub tracks: Vec<Track>,
}

impl Toc {

    /// Creates a new, unread table of contents.
    pub fn new() -> Self {
        Toc {

            // No tracks until a disc has been scanned.
            numtracks: 0,
            tracks: vec![],
        }
    }

    /// Clears the table of contents back to its unread state, for use when the
    /// disc is ejected or the handle is reset.
    pub fn clear(&mut self) {
        self.numtracks = 0;
        self.tracks.clear();
    }
}

/// This struct models one opened drive session. It owns the cached table of
/// contents and the last-known status and play position, all refreshed by the
/// subsystem's status query. A handle is exclusively owned by the caller that
/// opened it, and closing consumes it, so a stale handle cannot be reused.
pub struct Cd {

    // Opaque session id returned by the backend's open call.
    pub(crate) id: i32,

    // Which drive this session corresponds to within the registry.
    drive: i32,

    // Last raw status reported by the backend.
    pub(crate) status: CdStatus,

    // Cached table of contents, refreshed while a disc is present.
    pub(crate) toc: Toc,

    // Current track and intra-track frame offset, recomputed on every
    // status query. Both are zero outside of playback.
    pub(crate) cur_track: i32,
    pub(crate) cur_frame: i32,
}

/// Implementation functions for the drive session handle itself.
impl Cd {

    /// Creates a new handle for the given backend session. The status starts
    /// as stopped by convention, and is refreshed on the first status query.
    pub(crate) fn new(id: i32, drive: i32) -> Self {
        Cd {

            // Store the backend session id and registry drive index.
            id,
            drive,

            // Set status to stopped until the first query.
            status: CdStatus::Stopped,

            // Setup an unread table of contents.
            toc: Toc::new(),

            // Set play position to the start.
            cur_track: 0,
            cur_frame: 0,
        }
    }

    /// This function returns the registry drive index this handle was opened on.
    pub fn get_drive(&self) -> i32 {
        self.drive
    }

    /// This function returns the last raw status reported by the backend.
    pub fn get_status(&self) -> CdStatus {
        self.status
    }

    /// This function returns the cached table of contents.
    pub fn get_toc(&self) -> &Toc {
        &self.toc
    }

    /// This function returns the track the play head was last seen in.
    pub fn get_current_track(&self) -> i32 {
        self.cur_track
    }

    /// This function returns the frame offset of the play head within the
    /// current track.
    pub fn get_current_frame(&self) -> i32 {
        self.cur_frame
    }

    /// This function returns the intra-track play position in
    /// minute/second/frame form, for position displays.
    pub fn get_current_position_msf(&self) -> (i32, i32, i32) {
        self.cur_frame.to_msf()
    }
}
