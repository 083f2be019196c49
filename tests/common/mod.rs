//! Shared helpers for the integration tests.
#![allow(dead_code)]

use knockout_bracket_web::{record_score, Leg, Roster, RoundKey, Slot, SlotRef, Tournament};

pub const NAMES: [&str; 8] = [
    "Alice", "Bruno", "Carmen", "Diego", "Elena", "Fabio", "Gloria", "Hector",
];

pub const LABELS: [&str; 8] = [
    "Real Madrid",
    "Barcelona",
    "Liverpool",
    "Arsenal",
    "Bayern Munich",
    "Inter",
    "Ajax",
    "Porto",
];

pub fn sample_roster() -> Roster {
    Roster::new(
        NAMES.iter().map(|s| s.to_string()).collect(),
        LABELS.iter().map(|s| s.to_string()).collect(),
    )
    .unwrap()
}

pub fn fresh() -> Tournament {
    Tournament::new(sample_roster())
}

pub fn at(round: RoundKey, index: usize, slot: Slot) -> SlotRef {
    SlotRef { round, index, slot }
}

/// Occupancy invariant: every roster name is pooled or placed somewhere
/// in the bracket, never both and never neither.
pub fn occupancy_holds(t: &Tournament) -> bool {
    t.roster
        .names()
        .iter()
        .all(|name| t.pool.iter().any(|n| n == name) != t.bracket.contains_name(name))
}

/// Record all four score fields of one match: leg 1 then leg 2, side A
/// then side B.
pub fn score_match(t: &Tournament, id: &str, leg1: (&str, &str), leg2: (&str, &str)) -> Tournament {
    let t = record_score(t, id, Leg::First, Slot::A, leg1.0).unwrap();
    let t = record_score(&t, id, Leg::First, Slot::B, leg1.1).unwrap();
    let t = record_score(&t, id, Leg::Second, Slot::A, leg2.0).unwrap();
    record_score(&t, id, Leg::Second, Slot::B, leg2.1).unwrap()
}
