//! Gesture commands: everything the presentation layer can ask of the
//! state manager, as plain serializable data.

use crate::models::bracket::{RoundKey, SlotRef};
use crate::models::game::{Leg, MatchId, Slot};
use serde::{Deserialize, Serialize};

/// One mutating operation, tagged by `action` on the wire.
///
/// The payloads carry only what the gesture knows: a drop carries the
/// dragged name and the target slot, an advance carries the source
/// match position. Derived facts (winners, aggregates) are recomputed
/// by the operation itself.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    /// Drop `name` onto a slot, displacing any previous occupant.
    Place { name: String, target: SlotRef },
    /// Remove `name` from every slot and pool it.
    ReturnToPool { name: String },
    /// Empty one slot.
    ClearSlot { round: RoundKey, index: usize, slot: Slot },
    /// Store the raw text of one score field.
    RecordScore {
        match_id: MatchId,
        leg: Leg,
        slot: Slot,
        raw_value: String,
    },
    /// Blank all four score fields of one match.
    ClearScores { round: RoundKey, index: usize },
    /// Copy the source match's winner into its downstream slot.
    Advance { round: RoundKey, index: usize },
    /// Seed quarterfinals with the roster in entry order.
    SeedSequential,
    /// Seed quarterfinals with a shuffled roster.
    SeedRandom,
    /// Randomly map participants to display labels.
    AssignLabels,
    /// Back to the initial state.
    Reset,
}
