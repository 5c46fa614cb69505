// Copyright (c) 2024 The Botho Foundation

use roulette_core::DrawError;
use thiserror::Error;

/// Failures of draw orchestration requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// Input validation failed in the core draw or planner.
    #[error(transparent)]
    Draw(#[from] DrawError),

    /// A roll is already in progress; requests are rejected, never queued.
    #[error("a roll is already in progress")]
    AlreadyRolling,

    /// A winner is on display; use reroll (or reset) instead of a new draw.
    #[error("winner already revealed, reroll or reset instead")]
    AlreadyRevealed,

    /// Reroll requested before any winner was revealed.
    #[error("no winner has been revealed yet")]
    NotRevealed,
}
