// Copyright (c) 2024 The Botho Foundation

//! Draw orchestration for the giveaway roulette.
//!
//! This crate wires the `roulette-core` algorithms into a host application:
//!
//! - [`widget::Roulette`] runs the `Idle -> Rolling -> Revealed` state
//!   machine: one weighted draw and one reel plan per roll, a reveal
//!   deadline the host polls with [`widget::Roulette::tick`], and reroll
//!   handling once a winner is shown.
//! - [`config::RollConfig`] coerces free-form caller settings into usable
//!   duration bounds, substituting defaults instead of erroring.
//! - [`history::HistoryStore`] persists one [`history::HistoryRecord`] per
//!   raffle, read-modify-writing the whole history map like the browser
//!   storage it replaces.

pub mod config;
pub mod error;
pub mod history;
pub mod widget;

pub use config::{RollConfig, DEFAULT_MAX_ROLL_MS, DEFAULT_MIN_ROLL_MS};
pub use error::WidgetError;
pub use history::{HistoryError, HistoryRecord, HistoryStore, JsonFileHistory, MemoryHistory};
pub use widget::{DrawPhase, Roulette, REVEAL_SETTLE_MS};
