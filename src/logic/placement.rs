//! Slot occupancy: drag-and-drop placement, pooling, slot clearing.

use crate::models::{Slot, SlotRef, RoundKey, Tournament, TournamentError};

/// Drop `name` onto `target`, displacing any previous occupant.
///
/// The name leaves the pool and every slot it already held, in any
/// round. The displaced occupant goes back to the pool unless it still
/// sits somewhere else in the bracket.
pub fn place_participant(
    state: &Tournament,
    name: &str,
    target: SlotRef,
) -> Result<Tournament, TournamentError> {
    state.ensure_participant(name)?;

    let mut next = state.clone();
    next.unpool(name);
    next.bracket.remove_name(name);

    let displaced = {
        let game = next
            .bracket
            .match_at_mut(target.round, target.index)
            .ok_or(TournamentError::MatchIndexOutOfRange {
                round: target.round,
                index: target.index,
            })?;
        game.slot_mut(target.slot).replace(name.to_string())
    };
    if let Some(prev) = displaced {
        if prev != name {
            next.pool_if_unplaced(&prev);
        }
    }
    Ok(next)
}

/// Remove `name` from every slot it occupies and pool it. Idempotent:
/// pooling an already pooled name changes nothing.
pub fn return_to_pool(state: &Tournament, name: &str) -> Result<Tournament, TournamentError> {
    state.ensure_participant(name)?;

    let mut next = state.clone();
    next.bracket.remove_name(name);
    if !next.is_pooled(name) {
        next.pool.push(name.to_string());
    }
    Ok(next)
}

/// Empty one slot. The removed occupant is pooled again unless it still
/// sits elsewhere in the bracket. No-op on an already empty slot.
pub fn clear_slot(
    state: &Tournament,
    round: RoundKey,
    index: usize,
    slot: Slot,
) -> Result<Tournament, TournamentError> {
    let mut next = state.clone();
    let removed = {
        let game = next
            .bracket
            .match_at_mut(round, index)
            .ok_or(TournamentError::MatchIndexOutOfRange { round, index })?;
        game.slot_mut(slot).take()
    };
    if let Some(name) = removed {
        next.pool_if_unplaced(&name);
    }
    Ok(next)
}
