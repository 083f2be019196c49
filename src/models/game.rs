//! A single bracket match: two participant slots, two legs of raw scores,
//! and the values derived from them (aggregate, outcome, phase).

use serde::{Deserialize, Serialize};

/// Identifier of a match within the bracket ("QF1".."QF4", "SF1", "SF2", "F1").
pub type MatchId = String;

/// Which side of a match a participant occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    A,
    B,
}

/// One of the two scored encounters (home/away) of a match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Leg {
    First,
    Second,
}

impl Leg {
    /// Position of this leg in `GameMatch::legs`.
    pub fn index(self) -> usize {
        match self {
            Leg::First => 0,
            Leg::Second => 1,
        }
    }
}

/// Raw operator-entered score text. Preserved verbatim for display; anything
/// that does not parse as a non-negative integer counts as 0 in aggregates.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawScore(pub String);

impl RawScore {
    /// Numeric value used for aggregation (blank/malformed text is 0).
    pub fn points(&self) -> u32 {
        self.0.trim().parse().unwrap_or(0)
    }

    /// True when no text (other than whitespace) has been entered.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for RawScore {
    fn from(text: &str) -> Self {
        RawScore(text.to_string())
    }
}

/// Scores of one leg, one raw field per side.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LegScore {
    pub a: RawScore,
    pub b: RawScore,
}

impl LegScore {
    pub fn side(&self, slot: Slot) -> &RawScore {
        match slot {
            Slot::A => &self.a,
            Slot::B => &self.b,
        }
    }

    pub fn side_mut(&mut self, slot: Slot) -> &mut RawScore {
        match slot {
            Slot::A => &mut self.a,
            Slot::B => &mut self.b,
        }
    }
}

/// Result of a match as far as it can be derived from slots and scores.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// At least one slot is empty.
    Undetermined,
    /// Both slots filled and the aggregates are equal; the tie has to be
    /// resolved manually.
    Draw,
    /// Occupant of the higher-scoring side.
    Winner(String),
}

/// Where a match sits in its lifecycle. Derived for display; transitions
/// never depend on it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    /// Both slots free.
    Empty,
    /// One slot filled.
    Partial,
    /// Both slots filled, no score text entered yet.
    Ready,
    /// Score text entered and the aggregate yields a winner.
    Decided,
    /// Score text entered and the aggregates are equal.
    Drawn,
}

/// A single match: two optional participant slots and two legs of scores.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    /// Participant on side A, if placed.
    pub slot_a: Option<String>,
    /// Participant on side B, if placed.
    pub slot_b: Option<String>,
    /// First and second leg scores.
    pub legs: [LegScore; 2],
}

impl GameMatch {
    /// A match with both slots free and blank scores.
    pub fn empty(id: impl Into<MatchId>) -> Self {
        Self {
            id: id.into(),
            slot_a: None,
            slot_b: None,
            legs: [LegScore::default(), LegScore::default()],
        }
    }

    pub fn occupant(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::A => self.slot_a.as_deref(),
            Slot::B => self.slot_b.as_deref(),
        }
    }

    pub fn slot_mut(&mut self, slot: Slot) -> &mut Option<String> {
        match slot {
            Slot::A => &mut self.slot_a,
            Slot::B => &mut self.slot_b,
        }
    }

    /// True when `name` occupies either slot.
    pub fn contains_name(&self, name: &str) -> bool {
        self.slot_a.as_deref() == Some(name) || self.slot_b.as_deref() == Some(name)
    }

    /// Remove `name` from whichever slots it occupies.
    pub fn remove_name(&mut self, name: &str) {
        if self.slot_a.as_deref() == Some(name) {
            self.slot_a = None;
        }
        if self.slot_b.as_deref() == Some(name) {
            self.slot_b = None;
        }
    }

    /// Store raw text in one score field.
    pub fn record(&mut self, leg: Leg, slot: Slot, raw: &str) {
        *self.legs[leg.index()].side_mut(slot) = RawScore::from(raw);
    }

    /// Blank all four score fields.
    pub fn clear_scores(&mut self) {
        self.legs = [LegScore::default(), LegScore::default()];
    }

    /// True when any of the four score fields holds text.
    pub fn has_score_text(&self) -> bool {
        self.legs.iter().any(|l| !l.a.is_blank() || !l.b.is_blank())
    }

    /// Aggregate score over both legs, (side A, side B).
    pub fn aggregate(&self) -> (u32, u32) {
        let a = self.legs[0].a.points().saturating_add(self.legs[1].a.points());
        let b = self.legs[0].b.points().saturating_add(self.legs[1].b.points());
        (a, b)
    }

    /// Winner by aggregate, a draw, or undetermined while a slot is empty.
    pub fn outcome(&self) -> MatchOutcome {
        let (Some(a), Some(b)) = (&self.slot_a, &self.slot_b) else {
            return MatchOutcome::Undetermined;
        };
        let (score_a, score_b) = self.aggregate();
        if score_a > score_b {
            MatchOutcome::Winner(a.clone())
        } else if score_b > score_a {
            MatchOutcome::Winner(b.clone())
        } else {
            MatchOutcome::Draw
        }
    }

    /// Lifecycle position, for display.
    pub fn phase(&self) -> MatchPhase {
        match (&self.slot_a, &self.slot_b) {
            (None, None) => MatchPhase::Empty,
            (Some(_), None) | (None, Some(_)) => MatchPhase::Partial,
            (Some(_), Some(_)) if !self.has_score_text() => MatchPhase::Ready,
            (Some(_), Some(_)) => match self.outcome() {
                MatchOutcome::Draw => MatchPhase::Drawn,
                _ => MatchPhase::Decided,
            },
        }
    }
}

/// Display view of a match with its derived values (for API / display).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchView {
    pub id: MatchId,
    pub slot_a: Option<String>,
    pub slot_b: Option<String>,
    pub legs: [LegScore; 2],
    pub aggregate_a: u32,
    pub aggregate_b: u32,
    pub outcome: MatchOutcome,
    pub phase: MatchPhase,
}

impl MatchView {
    pub fn from_match(m: &GameMatch) -> Self {
        let (aggregate_a, aggregate_b) = m.aggregate();
        Self {
            id: m.id.clone(),
            slot_a: m.slot_a.clone(),
            slot_b: m.slot_b.clone(),
            legs: m.legs.clone(),
            aggregate_a,
            aggregate_b,
            outcome: m.outcome(),
            phase: m.phase(),
        }
    }
}
