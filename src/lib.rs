//! Knockout bracket organizer: library with models and transition logic.
//!
//! The library is the whole state manager; the web binary only routes
//! gestures to [`logic::apply`] and serves snapshots back.

pub mod logic;
pub mod models;

pub use logic::{
    advance, apply, assign_labels, clear_scores, clear_slot, downstream, place_participant,
    record_score, reset, return_to_pool, seed_random, seed_sequential,
};
pub use models::{
    Bracket, Command, GameMatch, Leg, LegScore, MatchId, MatchOutcome, MatchPhase, MatchView,
    RawScore, Roster, RosterLoadError, RoundKey, Slot, SlotRef, Tournament, TournamentError,
    TournamentId, TournamentSnapshot,
};
