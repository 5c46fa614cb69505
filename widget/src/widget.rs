// Copyright (c) 2024 The Botho Foundation

//! The roulette state machine.
//!
//! One `Roulette` runs one raffle at a time: a weighted draw picks the
//! winner up front, a reel plan schedules the animation, and the winner
//! stays hidden until the host's clock passes the reveal deadline. The
//! host drives time by polling [`Roulette::tick`] with its own
//! millisecond clock; there are no timers in here.

use roulette_core::{reel, sampler, Participant, RandomSource, ReelPlan};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::RollConfig;
use crate::error::WidgetError;
use crate::history::{HistoryRecord, HistoryStore};

/// Pause between the reel stopping and the winner banner, milliseconds.
pub const REVEAL_SETTLE_MS: u64 = 250;

/// Where a raffle currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPhase {
    /// No spin scheduled.
    Idle,

    /// The reel is animating; the winner is decided but not yet shown.
    Rolling {
        plan: ReelPlan,
        winner: Participant,
        reveal_at_ms: u64,
    },

    /// The winner is on display.
    Revealed { winner: Participant },
}

/// Draw orchestrator for a single giveaway.
pub struct Roulette<H: HistoryStore> {
    participants: Vec<Participant>,
    title: String,
    raffle_id: Uuid,
    min_roll_ms: i64,
    max_roll_ms: i64,
    history: H,
    phase: DrawPhase,
}

impl<H: HistoryStore> Roulette<H> {
    /// A fresh raffle over `participants`, idle until the first roll.
    pub fn new(
        participants: Vec<Participant>,
        title: impl Into<String>,
        config: &RollConfig,
        history: H,
    ) -> Self {
        let (min_roll_ms, max_roll_ms) = config.resolve();
        Self {
            participants,
            title: title.into(),
            raffle_id: Uuid::new_v4(),
            min_roll_ms,
            max_roll_ms,
            history,
            phase: DrawPhase::Idle,
        }
    }

    /// Draw a winner and schedule the reel.
    ///
    /// Only legal while idle: a spin in progress rejects with
    /// `AlreadyRolling`, a displayed winner with `AlreadyRevealed` (use
    /// [`Roulette::reroll`] for that). The winner is recorded to history
    /// immediately; a failing history sink is logged and does not block
    /// the spin.
    pub fn start_roll<S: RandomSource + ?Sized>(
        &mut self,
        source: &mut S,
        now_ms: u64,
        viewport_width_px: i32,
    ) -> Result<(), WidgetError> {
        match self.phase {
            DrawPhase::Idle => {}
            DrawPhase::Rolling { .. } => return Err(WidgetError::AlreadyRolling),
            DrawPhase::Revealed { .. } => return Err(WidgetError::AlreadyRevealed),
        }

        let winner = sampler::draw(&self.participants, source)?.clone();
        let plan = reel::plan(
            &winner,
            &self.participants,
            self.min_roll_ms,
            self.max_roll_ms,
            viewport_width_px,
            source,
        )?;

        if let Err(err) = self
            .history
            .record(HistoryRecord::new(self.raffle_id, &self.title, winner.clone()))
        {
            warn!(raffle_id = %self.raffle_id, "failed to record winner: {err}");
        }

        let reveal_at_ms = now_ms + u64::from(plan.duration_ms) + REVEAL_SETTLE_MS;
        info!(
            raffle_id = %self.raffle_id,
            duration_ms = plan.duration_ms,
            entries = self.participants.len(),
            "roll started"
        );

        self.phase = DrawPhase::Rolling {
            plan,
            winner,
            reveal_at_ms,
        };
        Ok(())
    }

    /// Advance the clock; returns the winner once the deadline has passed.
    ///
    /// Idempotent outside the Rolling phase. Returns `None` while idle,
    /// still rolling, or on ticks after the reveal already happened.
    pub fn tick(&mut self, now_ms: u64) -> Option<&Participant> {
        let due = matches!(&self.phase, DrawPhase::Rolling { reveal_at_ms, .. } if now_ms >= *reveal_at_ms);
        if !due {
            return None;
        }

        let previous = std::mem::replace(&mut self.phase, DrawPhase::Idle);
        if let DrawPhase::Rolling { winner, .. } = previous {
            info!(raffle_id = %self.raffle_id, winner = %winner.name, "winner revealed");
            self.phase = DrawPhase::Revealed { winner };
        }
        match &self.phase {
            DrawPhase::Revealed { winner } => Some(winner),
            _ => None,
        }
    }

    /// Discard the displayed winner and spin again under the same raffle id.
    ///
    /// The new outcome overwrites this raffle's history record. Only legal
    /// once a winner is revealed.
    pub fn reroll<S: RandomSource + ?Sized>(
        &mut self,
        source: &mut S,
        now_ms: u64,
        viewport_width_px: i32,
    ) -> Result<(), WidgetError> {
        match self.phase {
            DrawPhase::Revealed { .. } => {}
            DrawPhase::Rolling { .. } => return Err(WidgetError::AlreadyRolling),
            DrawPhase::Idle => return Err(WidgetError::NotRevealed),
        }

        self.phase = DrawPhase::Idle;
        self.start_roll(source, now_ms, viewport_width_px)
    }

    /// Abandon the current spin or displayed winner and go back to idle.
    pub fn reset(&mut self) {
        self.phase = DrawPhase::Idle;
    }

    /// Start a brand-new raffle: fresh id, idle phase. History from earlier
    /// raffles is kept.
    pub fn new_raffle(&mut self) {
        self.raffle_id = Uuid::new_v4();
        self.phase = DrawPhase::Idle;
    }

    /// Current phase.
    pub fn phase(&self) -> &DrawPhase {
        &self.phase
    }

    /// The scheduled reel, while rolling.
    pub fn plan(&self) -> Option<&ReelPlan> {
        match &self.phase {
            DrawPhase::Rolling { plan, .. } => Some(plan),
            _ => None,
        }
    }

    /// The displayed winner, once revealed.
    pub fn winner(&self) -> Option<&Participant> {
        match &self.phase {
            DrawPhase::Revealed { winner } => Some(winner),
            _ => None,
        }
    }

    /// Clock value at which the winner will be revealed, while rolling.
    pub fn reveal_deadline_ms(&self) -> Option<u64> {
        match &self.phase {
            DrawPhase::Rolling { reveal_at_ms, .. } => Some(*reveal_at_ms),
            _ => None,
        }
    }

    /// The entrant list this raffle draws from.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Total pool size after multiplier expansion.
    pub fn entry_count(&self) -> u64 {
        sampler::total_weight(&self.participants)
    }

    /// Id of the raffle in progress.
    pub fn raffle_id(&self) -> Uuid {
        self.raffle_id
    }

    /// The history sink.
    pub fn history(&self) -> &H {
        &self.history
    }
}
