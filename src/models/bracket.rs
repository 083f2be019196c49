//! The fixed tournament tree: four quarterfinals, two semifinals, one final.

use crate::models::game::{GameMatch, Slot};
use serde::{Deserialize, Serialize};

/// Round of the bracket, in play order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundKey {
    Quarters,
    Semis,
    Final,
}

impl RoundKey {
    /// Number of matches the round holds.
    pub fn match_count(self) -> usize {
        match self {
            RoundKey::Quarters => Bracket::QUARTERS,
            RoundKey::Semis => Bracket::SEMIS,
            RoundKey::Final => 1,
        }
    }
}

impl std::fmt::Display for RoundKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoundKey::Quarters => "quarters",
            RoundKey::Semis => "semis",
            RoundKey::Final => "final",
        };
        write!(f, "{name}")
    }
}

/// Address of one participant slot in the bracket.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SlotRef {
    pub round: RoundKey,
    pub index: usize,
    pub slot: Slot,
}

/// The whole tournament tree. Cardinalities are fixed for the lifetime of
/// the structure; the arrays make that type-level.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub quarters: [GameMatch; 4],
    pub semis: [GameMatch; 2],
    #[serde(rename = "final")]
    pub final_match: GameMatch,
}

impl Bracket {
    pub const QUARTERS: usize = 4;
    pub const SEMIS: usize = 2;
    /// Participants a fully seeded bracket seats.
    pub const ENTRANTS: usize = 2 * Self::QUARTERS;

    /// All matches empty; ids QF1..QF4, SF1, SF2, F1.
    pub fn new() -> Self {
        Self {
            quarters: std::array::from_fn(|i| GameMatch::empty(format!("QF{}", i + 1))),
            semis: std::array::from_fn(|i| GameMatch::empty(format!("SF{}", i + 1))),
            final_match: GameMatch::empty("F1"),
        }
    }

    /// Matches of one round, the final as a one-element slice.
    pub fn round(&self, round: RoundKey) -> &[GameMatch] {
        match round {
            RoundKey::Quarters => &self.quarters,
            RoundKey::Semis => &self.semis,
            RoundKey::Final => std::slice::from_ref(&self.final_match),
        }
    }

    fn round_mut(&mut self, round: RoundKey) -> &mut [GameMatch] {
        match round {
            RoundKey::Quarters => &mut self.quarters,
            RoundKey::Semis => &mut self.semis,
            RoundKey::Final => std::slice::from_mut(&mut self.final_match),
        }
    }

    pub fn match_at(&self, round: RoundKey, index: usize) -> Option<&GameMatch> {
        self.round(round).get(index)
    }

    pub fn match_at_mut(&mut self, round: RoundKey, index: usize) -> Option<&mut GameMatch> {
        self.round_mut(round).get_mut(index)
    }

    pub fn match_by_id(&self, id: &str) -> Option<&GameMatch> {
        self.matches().find(|m| m.id == id)
    }

    pub fn match_by_id_mut(&mut self, id: &str) -> Option<&mut GameMatch> {
        self.matches_mut().find(|m| m.id == id)
    }

    /// All seven matches in round order.
    pub fn matches(&self) -> impl Iterator<Item = &GameMatch> {
        self.quarters
            .iter()
            .chain(self.semis.iter())
            .chain(std::iter::once(&self.final_match))
    }

    pub fn matches_mut(&mut self) -> impl Iterator<Item = &mut GameMatch> {
        self.quarters
            .iter_mut()
            .chain(self.semis.iter_mut())
            .chain(std::iter::once(&mut self.final_match))
    }

    /// True when `name` occupies a slot in any round.
    pub fn contains_name(&self, name: &str) -> bool {
        self.matches().any(|m| m.contains_name(name))
    }

    /// Remove `name` from every slot it occupies, across all rounds.
    pub fn remove_name(&mut self, name: &str) {
        for m in self.matches_mut() {
            m.remove_name(name);
        }
    }
}

impl Default for Bracket {
    fn default() -> Self {
        Self::new()
    }
}
