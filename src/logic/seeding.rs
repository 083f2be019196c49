//! Bracket seeding, label assignment, and reset.
//!
//! Random sources are injected so callers can seed them; the web layer
//! passes `rand::thread_rng()`.

use crate::models::{Bracket, Tournament, TournamentError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Rebuild an empty bracket with `order` paired into the quarterfinals:
/// positions (0,1), (2,3), (4,5), (6,7). Empties the pool; labels and
/// identity are kept, scores come back blank.
fn seeded(state: &Tournament, order: &[String]) -> Tournament {
    let mut next = state.clone();
    next.bracket = Bracket::new();
    for (game, pair) in next.bracket.quarters.iter_mut().zip(order.chunks_exact(2)) {
        game.slot_a = Some(pair[0].clone());
        game.slot_b = Some(pair[1].clone());
    }
    next.pool.clear();
    next
}

/// Seed the quarterfinals with the roster in entry order.
pub fn seed_sequential(state: &Tournament) -> Result<Tournament, TournamentError> {
    Ok(seeded(state, state.roster.names()))
}

/// Seed the quarterfinals with a uniformly shuffled roster.
pub fn seed_random(state: &Tournament, rng: &mut impl Rng) -> Result<Tournament, TournamentError> {
    let mut order = state.roster.names().to_vec();
    order.shuffle(rng);
    Ok(seeded(state, &order))
}

/// Randomly map each participant to a distinct display label. Surplus
/// labels stay unused; fewer labels than participants is an error.
pub fn assign_labels(state: &Tournament, rng: &mut impl Rng) -> Result<Tournament, TournamentError> {
    let participants = state.roster.names();
    let labels = state.roster.labels();
    if labels.len() < participants.len() {
        return Err(TournamentError::NotEnoughLabels {
            participants: participants.len(),
            labels: labels.len(),
        });
    }
    let mut shuffled = labels.to_vec();
    shuffled.shuffle(rng);
    let mut next = state.clone();
    next.assignments = participants.iter().cloned().zip(shuffled).collect();
    Ok(next)
}

/// Back to the initial state: empty bracket, full pool, no labels.
/// Tournament identity and creation time survive.
pub fn reset(state: &Tournament) -> Result<Tournament, TournamentError> {
    let mut next = state.clone();
    next.pool = next.roster.names().to_vec();
    next.bracket = Bracket::new();
    next.assignments.clear();
    Ok(next)
}
