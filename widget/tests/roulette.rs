// Copyright (c) 2024 The Botho Foundation

//! End-to-end giveaway flow against an in-memory history sink.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use roulette_core::{Participant, RngSource};
use roulette_widget::{
    DrawPhase, HistoryStore, MemoryHistory, RollConfig, Roulette, WidgetError,
};

fn entrants() -> Vec<Participant> {
    vec![
        Participant::new("ana", 1),
        Participant::new("bia", 3),
        Participant::new("cau", 2),
        Participant::new("dan", 1),
    ]
}

#[test]
fn full_raffle_cycle_with_reroll_and_fresh_raffle() {
    let config: RollConfig =
        serde_json::from_str(r#"{"minRollDuration": "12000ms", "maxRollDuration": 14000.7}"#)
            .unwrap();
    let mut widget = Roulette::new(entrants(), "channel giveaway", &config, MemoryHistory::new());
    let mut rng = RngSource(ChaCha20Rng::seed_from_u64(2024));

    assert_eq!(*widget.phase(), DrawPhase::Idle);
    assert_eq!(widget.entry_count(), 7);

    // Roll. The coerced bounds come from the odd config values above.
    widget.start_roll(&mut rng, 1_000, 750).unwrap();
    let plan = widget.plan().unwrap().clone();
    assert!((12_000..=14_000).contains(&plan.duration_ms));
    assert_eq!(plan.frames.len(), plan.roll_frames() + 8);
    assert!(plan.winner_frame_index < plan.frames.len());
    assert!(widget.winner().is_none(), "winner hidden while rolling");

    // The deadline covers the animation plus the settle pause.
    let deadline = widget.reveal_deadline_ms().unwrap();
    assert!(deadline > 1_000 + u64::from(plan.duration_ms));
    assert!(widget.tick(deadline - 1).is_none());

    let winner = widget.tick(deadline).unwrap().clone();
    assert_eq!(winner, plan.frames[plan.winner_frame_index]);

    // A revealed winner blocks plain rolls but allows a reroll under the
    // same raffle id, overwriting its history record.
    let raffle_id = widget.raffle_id();
    assert_eq!(
        widget.start_roll(&mut rng, deadline, 750),
        Err(WidgetError::AlreadyRevealed)
    );
    widget.reroll(&mut rng, deadline, 750).unwrap();
    assert_eq!(widget.raffle_id(), raffle_id);

    let deadline = widget.reveal_deadline_ms().unwrap();
    let rerolled = widget.tick(deadline).unwrap().clone();
    let history = widget.history().load().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[&raffle_id].winner, rerolled);
    assert_eq!(history[&raffle_id].title, "channel giveaway");

    // A fresh raffle mints a new id and adds a second history record.
    widget.new_raffle();
    assert_ne!(widget.raffle_id(), raffle_id);
    widget.start_roll(&mut rng, deadline, 350).unwrap();
    assert_eq!(widget.plan().unwrap().frames.len(), widget.plan().unwrap().roll_frames() + 4);
    assert_eq!(widget.history().load().unwrap().len(), 2);
}

#[test]
fn narrow_viewport_and_default_config() {
    let mut widget = Roulette::new(
        entrants(),
        "mobile giveaway",
        &RollConfig::default(),
        MemoryHistory::new(),
    );
    let mut rng = RngSource(ChaCha20Rng::seed_from_u64(7));

    widget.start_roll(&mut rng, 0, 350).unwrap();
    let plan = widget.plan().unwrap();
    assert!((10_000..=16_000).contains(&plan.duration_ms));
    assert_eq!(plan.frames.len(), plan.roll_frames() + 4);
    assert_eq!(plan.winner_frame_index, plan.roll_frames() + 1);
}
