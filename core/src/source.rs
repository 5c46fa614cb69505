// Copyright (c) 2024 The Botho Foundation

//! The randomness seam.
//!
//! Everything random in this crate derives from a single uniform float
//! generator over `[0, 1)`. Integer draws are floored products of that
//! float, inclusive on both ends, so a scripted source replays a draw or a
//! reel plan exactly.

use rand::Rng;

/// A uniform random source over `[0, 1)`.
///
/// The derived helpers define the exact arithmetic used throughout the
/// crate; implementations only supply [`RandomSource::next_f64`].
pub trait RandomSource {
    /// The next uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[lo, hi]`, inclusive on both ends.
    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo <= hi);
        let span = (hi - lo + 1) as f64;
        lo + (self.next_f64() * span) as u32
    }

    /// Uniform index in `[0, len)`.
    fn uniform_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.next_f64() * len as f64) as usize
    }

    /// Uniform float in `[lo, hi)`.
    fn uniform_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

/// Adapter exposing any `rand` generator as a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<rand::rngs::ThreadRng> {
    /// A thread-local source seeded from the OS.
    pub fn from_entropy() -> Self {
        RngSource(rand::thread_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_f64(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}
