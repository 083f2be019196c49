//! Winner advancement: quarterfinal winners feed the semifinals,
//! semifinal winners feed the final.

use crate::models::{MatchOutcome, RoundKey, Slot, SlotRef, Tournament, TournamentError};

/// Downstream slot fed by the winner of `round[index]`, if any.
///
/// Quarterfinal `i` feeds semifinal `i / 2`, side A when `i` is even;
/// semifinal `i` feeds the final, side A when `i == 0`. The final
/// feeds nothing.
pub fn downstream(round: RoundKey, index: usize) -> Option<SlotRef> {
    match round {
        RoundKey::Quarters => Some(SlotRef {
            round: RoundKey::Semis,
            index: index / 2,
            slot: if index % 2 == 0 { Slot::A } else { Slot::B },
        }),
        RoundKey::Semis => Some(SlotRef {
            round: RoundKey::Final,
            index: 0,
            slot: if index == 0 { Slot::A } else { Slot::B },
        }),
        RoundKey::Final => None,
    }
}

/// Copy the winner of `round[index]` into the slot it feeds.
///
/// The winner is recomputed here from the stored scores; the gesture
/// only names the source match. A drawn or undecided match advances
/// nothing and the state comes back unchanged, as does the final
/// round. The winner keeps its source slot; a displaced downstream
/// occupant is pooled again only once it appears nowhere in the
/// bracket.
pub fn advance(
    state: &Tournament,
    round: RoundKey,
    index: usize,
) -> Result<Tournament, TournamentError> {
    let source = state
        .bracket
        .match_at(round, index)
        .ok_or(TournamentError::MatchIndexOutOfRange { round, index })?;

    let mut next = state.clone();
    let Some(target) = downstream(round, index) else {
        return Ok(next);
    };
    let MatchOutcome::Winner(winner) = source.outcome() else {
        return Ok(next);
    };

    let displaced = {
        let game = next
            .bracket
            .match_at_mut(target.round, target.index)
            .ok_or(TournamentError::MatchIndexOutOfRange {
                round: target.round,
                index: target.index,
            })?;
        game.slot_mut(target.slot).replace(winner.clone())
    };
    if let Some(prev) = displaced {
        if prev != winner {
            next.pool_if_unplaced(&prev);
        }
    }
    Ok(next)
}
