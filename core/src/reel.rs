// Copyright (c) 2024 The Botho Foundation

//! Reel animation planning.
//!
//! Given a winner, a plan synthesizes the scrolling strip the renderer will
//! animate: a long run of filler frames, the winner pinned near the end, and
//! the final pixel offset that parks the winner frame under the viewport's
//! pointer marker. Fillers are drawn uniformly from the full participant
//! list, deliberately ignoring multipliers: the strip should look like the
//! crowd, while the weighted odds were already settled by the sampler.
//!
//! The source is consumed in a fixed order (duration, slide delay, fillers
//! in frame order, offset jitter), so a scripted source reproduces a plan
//! bit for bit.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DrawError;
use crate::participant::Participant;
use crate::source::RandomSource;

/// Width of one reel frame in pixels.
pub const BLOCK_SIZE_PX: u32 = 100;

/// Hard floor on the spin duration, milliseconds.
pub const MIN_ROLL_DURATION_MS: i64 = 10_000;

/// Hard ceiling on the spin duration, milliseconds.
pub const MAX_ROLL_DURATION_MS: i64 = 60_000;

/// Shortest delay between reel steps, milliseconds.
pub const MIN_SLIDE_DELAY_MS: u32 = 100;

/// Longest delay between reel steps, milliseconds.
pub const MAX_SLIDE_DELAY_MS: u32 = 300;

/// Conventional viewport width for narrow (mobile) hosts.
pub const NARROW_VIEWPORT_PX: i32 = 350;

/// Conventional viewport width for wide (desktop) hosts.
pub const WIDE_VIEWPORT_PX: i32 = 750;

/// A fully scheduled spin, ready for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReelPlan {
    /// Frames in display order; `frames[winner_frame_index]` is the winner.
    pub frames: Vec<Participant>,

    /// Total animation duration, milliseconds.
    pub duration_ms: u32,

    /// Delay between reel steps actually drawn for this spin, milliseconds.
    pub slide_delay_ms: u32,

    /// Final horizontal translation of the strip, pixels.
    pub offset_px: f64,

    /// Index of the winner frame within `frames`.
    pub winner_frame_index: usize,
}

impl ReelPlan {
    /// Number of frames scrolled past before the reel settles.
    pub fn roll_frames(&self) -> usize {
        (self.duration_ms / self.slide_delay_ms) as usize
    }
}

/// Clamp caller-supplied duration bounds into `[10_000, 60_000]`.
///
/// The order matters and is observable: `max` is raised to `min` before the
/// ceiling applies, so an oversized `min` pins both bounds at 60 seconds.
pub fn clamp_duration_bounds(min_ms: i64, max_ms: i64) -> (u32, u32) {
    let min = min_ms.clamp(MIN_ROLL_DURATION_MS, MAX_ROLL_DURATION_MS);
    let max = max_ms.max(min).min(MAX_ROLL_DURATION_MS);
    (min as u32, max as u32)
}

/// Schedule a spin that lands on `winner`.
///
/// `participants` is the full entrant list used for filler frames;
/// `viewport_width_px` decides how many frames are visible at once. Duration
/// bounds accept any caller input (negative, zero, inverted) and are clamped
/// by [`clamp_duration_bounds`].
pub fn plan<S: RandomSource + ?Sized>(
    winner: &Participant,
    participants: &[Participant],
    min_duration_ms: i64,
    max_duration_ms: i64,
    viewport_width_px: i32,
    source: &mut S,
) -> Result<ReelPlan, DrawError> {
    if participants.is_empty() {
        return Err(DrawError::EmptyInput);
    }
    if viewport_width_px <= 0 {
        return Err(DrawError::InvalidViewport(viewport_width_px));
    }

    let (min_duration, max_duration) = clamp_duration_bounds(min_duration_ms, max_duration_ms);
    let viewport_blocks = (viewport_width_px as u32).div_ceil(BLOCK_SIZE_PX) as usize;

    let duration_ms = source.uniform_int(min_duration, max_duration);
    let slide_delay_ms = source.uniform_int(MIN_SLIDE_DELAY_MS, MAX_SLIDE_DELAY_MS);

    // At least 10_000 / 300 = 33 roll frames, so the winner index below
    // never underflows, even for a one-block viewport.
    let roll_frames = (duration_ms / slide_delay_ms) as usize;
    let winner_frame_index = roll_frames + viewport_blocks / 2 - 1;

    let total_frames = roll_frames + viewport_blocks;
    let mut frames = Vec::with_capacity(total_frames);
    for index in 0..total_frames {
        if index == winner_frame_index {
            frames.push(winner.clone());
        } else {
            frames.push(participants[source.uniform_index(participants.len())].clone());
        }
    }

    // Land 0.4 blocks short of the frame boundary plus up to 0.8 blocks of
    // jitter: randomized within the block, still centered under the pointer.
    let block = BLOCK_SIZE_PX as f64;
    let offset_px = block * roll_frames as f64 - block * 0.4 + source.uniform_range(0.0, block * 0.8);

    debug!(
        duration_ms,
        slide_delay_ms,
        frames = total_frames,
        winner_frame_index,
        "reel plan ready"
    );

    Ok(ReelPlan {
        frames,
        duration_ms,
        slide_delay_ms,
        offset_px,
        winner_frame_index,
    })
}
