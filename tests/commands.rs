//! Integration tests for the command layer and the snapshot view.

mod common;

use common::{fresh, occupancy_holds};
use knockout_bracket_web::{
    apply, Command, Leg, MatchOutcome, RoundKey, Slot, SlotRef, TournamentError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0)
}

#[test]
fn place_command_parses_from_wire_json() {
    let cmd: Command = serde_json::from_value(json!({
        "action": "place",
        "name": "Alice",
        "target": { "round": "quarters", "index": 0, "slot": "a" },
    }))
    .unwrap();
    assert_eq!(
        cmd,
        Command::Place {
            name: "Alice".to_string(),
            target: SlotRef {
                round: RoundKey::Quarters,
                index: 0,
                slot: Slot::A
            },
        }
    );
}

#[test]
fn record_score_command_parses_from_wire_json() {
    let cmd: Command = serde_json::from_value(json!({
        "action": "record_score",
        "match_id": "SF2",
        "leg": "second",
        "slot": "b",
        "raw_value": "3",
    }))
    .unwrap();
    assert_eq!(
        cmd,
        Command::RecordScore {
            match_id: "SF2".to_string(),
            leg: Leg::Second,
            slot: Slot::B,
            raw_value: "3".to_string(),
        }
    );
}

#[test]
fn bare_action_variants_parse() {
    for (text, expected) in [
        ("seed_sequential", Command::SeedSequential),
        ("seed_random", Command::SeedRandom),
        ("assign_labels", Command::AssignLabels),
        ("reset", Command::Reset),
    ] {
        let cmd: Command = serde_json::from_value(json!({ "action": text })).unwrap();
        assert_eq!(cmd, expected);
    }
}

#[test]
fn apply_runs_a_whole_session() {
    let mut rng = rng();
    let t = fresh();
    let t = apply(&t, &Command::SeedSequential, &mut rng).unwrap();
    let t = apply(
        &t,
        &Command::RecordScore {
            match_id: "QF1".to_string(),
            leg: Leg::First,
            slot: Slot::A,
            raw_value: "2".to_string(),
        },
        &mut rng,
    )
    .unwrap();
    let t = apply(
        &t,
        &Command::Advance {
            round: RoundKey::Quarters,
            index: 0,
        },
        &mut rng,
    )
    .unwrap();
    assert_eq!(t.bracket.semis[0].slot_a.as_deref(), Some("Alice"));
    assert!(occupancy_holds(&t));

    let t = apply(&t, &Command::Reset, &mut rng).unwrap();
    assert_eq!(t.pool.len(), 8);
    assert!(!t.bracket.contains_name("Alice"));
}

#[test]
fn apply_reports_operation_errors() {
    let mut rng = rng();
    let t = fresh();
    let err = apply(
        &t,
        &Command::ReturnToPool {
            name: "Zoe".to_string(),
        },
        &mut rng,
    )
    .unwrap_err();
    assert_eq!(err, TournamentError::UnknownParticipant("Zoe".to_string()));
}

#[test]
fn clear_commands_dispatch_by_position() {
    let mut rng = rng();
    let t = apply(&fresh(), &Command::SeedSequential, &mut rng).unwrap();
    let t = apply(
        &t,
        &Command::RecordScore {
            match_id: "QF2".to_string(),
            leg: Leg::First,
            slot: Slot::B,
            raw_value: "4".to_string(),
        },
        &mut rng,
    )
    .unwrap();
    let t = apply(
        &t,
        &Command::ClearScores {
            round: RoundKey::Quarters,
            index: 1,
        },
        &mut rng,
    )
    .unwrap();
    assert!(t.bracket.quarters[1].legs[0].b.is_blank());

    let t = apply(
        &t,
        &Command::ClearSlot {
            round: RoundKey::Quarters,
            index: 1,
            slot: Slot::A,
        },
        &mut rng,
    )
    .unwrap();
    assert_eq!(t.bracket.quarters[1].slot_a, None);
    assert!(t.pool.iter().any(|n| n == "Carmen"));
}

#[test]
fn snapshot_exposes_derived_values() {
    let mut rng = rng();
    let t = apply(&fresh(), &Command::SeedSequential, &mut rng).unwrap();
    let t = common::score_match(&t, "QF1", ("2", "1"), ("0", "2"));

    let snap = t.snapshot();
    assert_eq!(snap.quarters[0].aggregate_a, 2);
    assert_eq!(snap.quarters[0].aggregate_b, 3);
    assert_eq!(
        snap.quarters[0].outcome,
        MatchOutcome::Winner("Bruno".to_string())
    );
    assert_eq!(snap.champion, None);

    let v = serde_json::to_value(&snap).unwrap();
    assert_eq!(v["final"]["id"], "F1");
    assert_eq!(v["quarters"][0]["outcome"], json!({ "winner": "Bruno" }));
    assert_eq!(v["semis"][0]["outcome"], json!("undetermined"));
    assert!(v["champion"].is_null());
    assert_eq!(v["quarters"][0]["legs"][0]["a"], "2");
}
