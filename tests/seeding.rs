//! Integration tests for seeding, label assignment, and reset.

mod common;

use common::{at, fresh, occupancy_holds, score_match, NAMES};
use knockout_bracket_web::{
    assign_labels, place_participant, reset, seed_random, seed_sequential, Bracket, Roster,
    RoundKey, Slot, Tournament, TournamentError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn sequential_seed_pairs_roster_in_entry_order() {
    let t = seed_sequential(&fresh()).unwrap();
    for (i, q) in t.bracket.quarters.iter().enumerate() {
        assert_eq!(q.slot_a.as_deref(), Some(NAMES[2 * i]));
        assert_eq!(q.slot_b.as_deref(), Some(NAMES[2 * i + 1]));
        assert!(q.legs.iter().all(|l| l.a.is_blank() && l.b.is_blank()));
    }
    assert!(t.pool.is_empty());
    assert!(occupancy_holds(&t));
}

#[test]
fn seeding_discards_previous_scores_and_later_rounds() {
    let t = seed_sequential(&fresh()).unwrap();
    let t = score_match(&t, "QF1", ("2", "0"), ("1", "1"));
    let t = place_participant(&t, "Hector", at(RoundKey::Final, 0, Slot::A)).unwrap();

    let t = seed_sequential(&t).unwrap();
    assert!(t.bracket.quarters[0].legs.iter().all(|l| l.a.is_blank() && l.b.is_blank()));
    assert_eq!(t.bracket.final_match.slot_a, None);
    assert_eq!(t.bracket.quarters[3].slot_b.as_deref(), Some("Hector"));
}

#[test]
fn seeding_keeps_assigned_labels() {
    let mut rng = StdRng::seed_from_u64(3);
    let t = assign_labels(&fresh(), &mut rng).unwrap();
    let labels = t.assignments.clone();
    let t = seed_sequential(&t).unwrap();
    assert_eq!(t.assignments, labels);
}

#[test]
fn random_seed_is_reproducible() {
    let t = fresh();
    let mut rng_one = StdRng::seed_from_u64(42);
    let mut rng_two = StdRng::seed_from_u64(42);
    let a = seed_random(&t, &mut rng_one).unwrap();
    let b = seed_random(&t, &mut rng_two).unwrap();
    assert_eq!(a.bracket, b.bracket);
}

#[test]
fn random_seed_places_every_name_exactly_once() {
    let mut rng = StdRng::seed_from_u64(9);
    let t = seed_random(&fresh(), &mut rng).unwrap();
    assert!(t.pool.is_empty());
    for name in NAMES {
        let count = t
            .bracket
            .quarters
            .iter()
            .flat_map(|q| [q.slot_a.as_deref(), q.slot_b.as_deref()])
            .filter(|s| *s == Some(name))
            .count();
        assert_eq!(count, 1, "{name} should be seeded exactly once");
    }
    assert!(t.bracket.semis.iter().all(|m| m.slot_a.is_none() && m.slot_b.is_none()));
    assert!(occupancy_holds(&t));
}

#[test]
fn assign_labels_covers_every_participant() {
    let mut rng = StdRng::seed_from_u64(1);
    let t = assign_labels(&fresh(), &mut rng).unwrap();
    assert_eq!(t.assignments.len(), 8);
    let mut seen: Vec<&str> = Vec::new();
    for name in NAMES {
        let label = t.assignments.get(name).map(String::as_str);
        let label = label.unwrap_or_else(|| panic!("{name} has no label"));
        assert!(t.roster.labels().iter().any(|l| l == label));
        assert!(!seen.contains(&label), "label {label} handed out twice");
        seen.push(label);
    }
}

#[test]
fn assign_labels_is_reproducible() {
    let t = fresh();
    let mut rng_one = StdRng::seed_from_u64(5);
    let mut rng_two = StdRng::seed_from_u64(5);
    let a = assign_labels(&t, &mut rng_one).unwrap();
    let b = assign_labels(&t, &mut rng_two).unwrap();
    assert_eq!(a.assignments, b.assignments);
}

#[test]
fn assign_labels_needs_a_label_per_participant() {
    let roster = Roster::new(
        NAMES.iter().map(|s| s.to_string()).collect(),
        vec!["Etar".to_string(), "Botev".to_string()],
    )
    .unwrap();
    let t = Tournament::new(roster);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        assign_labels(&t, &mut rng),
        Err(TournamentError::NotEnoughLabels {
            participants: 8,
            labels: 2
        })
    );
}

#[test]
fn reset_restores_the_initial_state() {
    let mut rng = StdRng::seed_from_u64(11);
    let t = fresh();
    let id = t.id;
    let created_at = t.created_at;

    let t = seed_random(&t, &mut rng).unwrap();
    let t = score_match(&t, "QF2", ("4", "2"), ("0", "0"));
    let t = assign_labels(&t, &mut rng).unwrap();

    let t = reset(&t).unwrap();
    assert_eq!(t.id, id);
    assert_eq!(t.created_at, created_at);
    assert_eq!(t.pool, t.roster.names());
    assert_eq!(t.bracket, Bracket::new());
    assert!(t.assignments.is_empty());
    assert!(occupancy_holds(&t));
}
