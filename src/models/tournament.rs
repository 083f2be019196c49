//! Tournament state and the errors its operations raise.

use crate::models::bracket::{Bracket, RoundKey};
use crate::models::game::{MatchOutcome, MatchView};
use crate::models::roster::Roster;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Roster does not hold exactly the number of names the bracket seats.
    RosterSize { required: usize, provided: usize },
    /// A roster name is empty after trimming.
    BlankParticipant,
    /// The same name appears twice in the roster.
    DuplicateParticipant(String),
    /// Fewer labels than participants; assignment needs one label each.
    NotEnoughLabels { participants: usize, labels: usize },
    /// The named participant is not on the roster.
    UnknownParticipant(String),
    /// No match carries the given id.
    MatchNotFound(String),
    /// The round has no match at the given position.
    MatchIndexOutOfRange { round: RoundKey, index: usize },
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::RosterSize { required, provided } => {
                write!(f, "Roster must hold exactly {} names (got {})", required, provided)
            }
            TournamentError::BlankParticipant => write!(f, "Roster names must not be blank"),
            TournamentError::DuplicateParticipant(name) => {
                write!(f, "Duplicate roster name: {}", name)
            }
            TournamentError::NotEnoughLabels { participants, labels } => {
                write!(f, "Need {} labels for {} participants (got {})", participants, participants, labels)
            }
            TournamentError::UnknownParticipant(name) => {
                write!(f, "Participant not on the roster: {}", name)
            }
            TournamentError::MatchNotFound(id) => write!(f, "No match with id {}", id),
            TournamentError::MatchIndexOutOfRange { round, index } => {
                write!(f, "No match at {}[{}]", round, index)
            }
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Full tournament state: roster, pool, bracket, and display labels.
///
/// Values are snapshots: operations never mutate one in place, they
/// build the successor and return it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub created_at: DateTime<Utc>,
    /// Fixed participant names and the label set.
    pub roster: Roster,
    /// Names not placed in any match slot, in display order.
    pub pool: Vec<String>,
    pub bracket: Bracket,
    /// Cosmetic participant -> label mapping.
    pub assignments: HashMap<String, String>,
}

impl Tournament {
    /// Fresh state: empty bracket, every roster name pooled, no labels
    /// assigned.
    pub fn new(roster: Roster) -> Self {
        let pool = roster.names().to_vec();
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            roster,
            pool,
            bracket: Bracket::new(),
            assignments: HashMap::new(),
        }
    }

    /// Err unless `name` is on the roster.
    pub fn ensure_participant(&self, name: &str) -> Result<(), TournamentError> {
        if self.roster.contains(name) {
            Ok(())
        } else {
            Err(TournamentError::UnknownParticipant(name.to_string()))
        }
    }

    pub fn is_pooled(&self, name: &str) -> bool {
        self.pool.iter().any(|n| n == name)
    }

    /// Drop `name` from the pool if present.
    pub(crate) fn unpool(&mut self, name: &str) {
        self.pool.retain(|n| n != name);
    }

    /// Append `name` to the pool unless it still occupies a slot
    /// somewhere in the bracket. A name advanced into a later round
    /// stays out of the pool even after its source slot is cleared.
    pub(crate) fn pool_if_unplaced(&mut self, name: &str) {
        if !self.bracket.contains_name(name) && !self.is_pooled(name) {
            self.pool.push(name.to_string());
        }
    }

    /// Winner of the final, if decided.
    pub fn champion(&self) -> Option<String> {
        match self.bracket.final_match.outcome() {
            MatchOutcome::Winner(name) => Some(name),
            _ => None,
        }
    }

    /// Read-only view handed to the presentation layer: the state plus
    /// the derived per-match values and the champion.
    pub fn snapshot(&self) -> TournamentSnapshot {
        TournamentSnapshot {
            id: self.id,
            created_at: self.created_at,
            roster: self.roster.names().to_vec(),
            labels: self.roster.labels().to_vec(),
            pool: self.pool.clone(),
            quarters: self.bracket.quarters.iter().map(MatchView::from_match).collect(),
            semis: self.bracket.semis.iter().map(MatchView::from_match).collect(),
            final_match: MatchView::from_match(&self.bracket.final_match),
            assignments: self.assignments.clone(),
            champion: self.champion(),
        }
    }
}

/// Serialized view of a tournament for the presentation layer.
#[derive(Clone, Debug, Serialize)]
pub struct TournamentSnapshot {
    pub id: TournamentId,
    pub created_at: DateTime<Utc>,
    pub roster: Vec<String>,
    pub labels: Vec<String>,
    pub pool: Vec<String>,
    pub quarters: Vec<MatchView>,
    pub semis: Vec<MatchView>,
    #[serde(rename = "final")]
    pub final_match: MatchView,
    pub assignments: HashMap<String, String>,
    pub champion: Option<String>,
}
