//! Data structures for the bracket organizer: matches, the bracket tree,
//! roster, tournament state, and gesture commands.

mod bracket;
mod command;
mod game;
mod roster;
mod tournament;

pub use bracket::{Bracket, RoundKey, SlotRef};
pub use command::Command;
pub use game::{GameMatch, Leg, LegScore, MatchId, MatchOutcome, MatchPhase, MatchView, RawScore, Slot};
pub use roster::{Roster, RosterLoadError};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentSnapshot};
