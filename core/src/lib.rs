// Copyright (c) 2024 The Botho Foundation

//! Weighted draw and reel planning for the giveaway roulette.
//!
//! This crate is the algorithmic core of the roulette widget:
//!
//! - [`sampler::draw`] expands a participant list into a weighted pool and
//!   picks one winner, with probability exactly proportional to each
//!   participant's multiplier.
//! - [`reel::plan`] turns a winner into a [`reel::ReelPlan`]: the ordered
//!   filler frames of the scrolling reel, the animation duration, and the
//!   final offset that lands the winner under the viewport pointer.
//!
//! All randomness flows through the [`source::RandomSource`] seam, so a
//! scripted source reproduces any draw or plan bit for bit. Presentation
//! (markup, easing, i18n) and persistence live with the caller; see the
//! `roulette-widget` crate for the orchestration glue.

pub mod error;
pub mod participant;
pub mod reel;
pub mod sampler;
pub mod source;

pub use error::DrawError;
pub use participant::Participant;
pub use reel::{ReelPlan, BLOCK_SIZE_PX, NARROW_VIEWPORT_PX, WIDE_VIEWPORT_PX};
pub use source::{RandomSource, RngSource};
