// Copyright (c) 2024 The Botho Foundation

//! Weighted winner selection.
//!
//! A participant with multiplier N occupies N consecutive slots in the
//! sampling pool, so one uniform index draw gives a selection probability of
//! exactly `multiplier / total_weight`. The pool is rebuilt per draw and
//! discarded; identity is positional, so duplicate names stay distinct.

use tracing::debug;

use crate::error::DrawError;
use crate::participant::Participant;
use crate::source::RandomSource;

/// Sum of all multipliers, i.e. the size of the sampling pool.
pub fn total_weight(participants: &[Participant]) -> u64 {
    participants.iter().map(|p| p.multiplier as u64).sum()
}

/// Draw one winner, weighted by multiplier.
///
/// Fails with [`DrawError::EmptyInput`] when the list is empty or no entry
/// carries weight. Pure apart from consuming the random source.
pub fn draw<'a, S: RandomSource + ?Sized>(
    participants: &'a [Participant],
    source: &mut S,
) -> Result<&'a Participant, DrawError> {
    if participants.is_empty() {
        return Err(DrawError::EmptyInput);
    }

    let mut pool = Vec::with_capacity(total_weight(participants) as usize);
    for (index, entry) in participants.iter().enumerate() {
        for _ in 0..entry.multiplier {
            pool.push(index);
        }
    }

    if pool.is_empty() {
        return Err(DrawError::EmptyInput);
    }

    let slot = source.uniform_index(pool.len());
    let winner = &participants[pool[slot]];

    debug!(
        entries = participants.len(),
        pool = pool.len(),
        winner = %winner.name,
        "weighted draw complete"
    );

    Ok(winner)
}
