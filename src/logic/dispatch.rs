//! Single entry point turning a [`Command`] into a state transition.

use crate::models::{Command, Tournament, TournamentError};
use rand::Rng;

use super::advance::advance;
use super::placement::{clear_slot, place_participant, return_to_pool};
use super::scoring::{clear_scores, record_score};
use super::seeding::{assign_labels, reset, seed_random, seed_sequential};

/// Apply one command to a state snapshot, yielding the successor state.
/// The prior snapshot is untouched either way, so callers can keep it
/// for undo.
pub fn apply(
    state: &Tournament,
    command: &Command,
    rng: &mut impl Rng,
) -> Result<Tournament, TournamentError> {
    match command {
        Command::Place { name, target } => place_participant(state, name, *target),
        Command::ReturnToPool { name } => return_to_pool(state, name),
        Command::ClearSlot { round, index, slot } => clear_slot(state, *round, *index, *slot),
        Command::RecordScore {
            match_id,
            leg,
            slot,
            raw_value,
        } => record_score(state, match_id, *leg, *slot, raw_value),
        Command::ClearScores { round, index } => clear_scores(state, *round, *index),
        Command::Advance { round, index } => advance(state, *round, *index),
        Command::SeedSequential => seed_sequential(state),
        Command::SeedRandom => seed_random(state, rng),
        Command::AssignLabels => assign_labels(state, rng),
        Command::Reset => reset(state),
    }
}
