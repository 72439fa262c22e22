// SPDX-License-Identifier: GPL-3.0
// playback.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use crate::cd::{Toc, TrackKind};
use crate::error::{CdromError, Result};

/// The number of frames clipped from the end of every resolved span. Some
/// drives won't go all the way, over-running into the next track or the
/// lead-out otherwise.
pub const CLIP_FRAMES: i32 = 10;

/// This struct models an absolute frame range, ready to hand to a backend
/// play call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSpan {

    // Absolute start position in frames from the start of the disc.
    pub start: i32,

    // Number of frames to play.
    pub length: i32,
}

/// This function translates a track-relative play request into an absolute
/// frame span against the given table of contents. A request with both
/// `ntracks` and `nframes` of zero means "play from `start_track` to the end
/// of the disc"; otherwise `nframes` extends past the last requested track,
/// measured from its start - unless no whole tracks were requested, in which
/// case it extends from `start_frame` within the starting track. Data tracks
/// at either end of the range are stepped over, as audio playback cannot
/// cover them.
///
/// Returns `Ok(None)` when end-clipping leaves nothing to play, which callers
/// must treat as a successful no-op rather than a failure.
pub fn resolve_track_span(
    toc: &Toc,
    start_track: i32,
    start_frame: i32,
    ntracks: i32,
    nframes: i32
) -> Result<Option<FrameSpan>> {

    // Determine the starting and ending tracks.
    if start_track < 0 || start_track >= toc.numtracks {
        return Err(CdromError::InvalidStartTrack);
    }

    let mut strack = start_track;
    let mut etrack;
    let eframe;

    if ntracks == 0 && nframes == 0 {
        etrack = toc.numtracks;
        eframe = 0;
    } else {
        etrack = strack + ntracks;
        eframe = if etrack == strack {
            start_frame + nframes
        } else {
            nframes
        };
    }

    if etrack > toc.numtracks {
        return Err(CdromError::InvalidPlayLength);
    }

    // Skip data tracks and verify frame offsets. The starting scan can step
    // just past the end track, which on a disc of nothing but data tracks
    // runs off the end of the track list - there is no audio to start in,
    // so that case fails the starting frame check below.
    while strack <= etrack && toc.tracks[strack as usize].kind == TrackKind::Data {
        strack += 1;
    }

    let start_length = match toc.tracks.get(strack as usize) {
        Some(track) => track.length,
        None => return Err(CdromError::InvalidStartingFrame(strack)),
    };
    if start_frame >= start_length {
        return Err(CdromError::InvalidStartingFrame(strack));
    }

    while etrack > strack && toc.tracks[(etrack - 1) as usize].kind == TrackKind::Data {
        etrack -= 1;
    }

    if eframe > toc.tracks[etrack as usize].length {
        return Err(CdromError::InvalidEndingFrame(etrack));
    }

    // Determine start frame and play length, clipping the end of the span.
    let start = toc.tracks[strack as usize].offset + start_frame;
    let mut length = (toc.tracks[etrack as usize].offset + eframe) - start;
    length -= CLIP_FRAMES;

    // Clipping a short request to below zero is not a failure - there is
    // simply nothing left to play.
    if length < 0 {
        return Ok(None);
    }

    Ok(Some(FrameSpan { start, length }))
}
