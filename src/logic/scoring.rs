//! Score entry. Fields store the operator's raw text; winners are
//! derived from aggregates at read time, never stored.

use crate::models::{Leg, RoundKey, Slot, Tournament, TournamentError};

/// Store the raw text of one score field on the identified match.
///
/// No validation: non-numeric or negative text is kept verbatim for
/// display and counts 0 in the aggregate.
pub fn record_score(
    state: &Tournament,
    match_id: &str,
    leg: Leg,
    slot: Slot,
    raw_value: &str,
) -> Result<Tournament, TournamentError> {
    let mut next = state.clone();
    let game = next
        .bracket
        .match_by_id_mut(match_id)
        .ok_or_else(|| TournamentError::MatchNotFound(match_id.to_string()))?;
    game.record(leg, slot, raw_value);
    Ok(next)
}

/// Blank all four score fields of one match.
pub fn clear_scores(
    state: &Tournament,
    round: RoundKey,
    index: usize,
) -> Result<Tournament, TournamentError> {
    let mut next = state.clone();
    let game = next
        .bracket
        .match_at_mut(round, index)
        .ok_or(TournamentError::MatchIndexOutOfRange { round, index })?;
    game.clear_scores();
    Ok(next)
}
