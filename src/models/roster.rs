//! Participant roster and label set, fixed at tournament creation.

use crate::models::bracket::Bracket;
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The names entering the tournament plus the display labels that
/// `assign_labels` draws from. Validated on construction and immutable
/// afterwards.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    names: Vec<String>,
    labels: Vec<String>,
}

impl Roster {
    /// Validates and builds a roster. Names are trimmed; a blank or
    /// duplicate name is rejected, and the count must be exactly
    /// [`Bracket::ENTRANTS`]. Labels are trimmed and blanks dropped;
    /// their count is only checked by `assign_labels`.
    pub fn new(names: Vec<String>, labels: Vec<String>) -> Result<Self, TournamentError> {
        let mut cleaned: Vec<String> = Vec::with_capacity(names.len());
        for name in &names {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(TournamentError::BlankParticipant);
            }
            if cleaned.iter().any(|n| n == trimmed) {
                return Err(TournamentError::DuplicateParticipant(trimmed.to_string()));
            }
            cleaned.push(trimmed.to_string());
        }
        if cleaned.len() != Bracket::ENTRANTS {
            return Err(TournamentError::RosterSize {
                required: Bracket::ENTRANTS,
                provided: cleaned.len(),
            });
        }
        let labels = labels
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        Ok(Self { names: cleaned, labels })
    }

    /// Participant names in entry order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Display labels available to `assign_labels`.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Reads `name,label` rows (no header); rows may omit the label.
    /// Blank rows are skipped.
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Self, RosterLoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut names = Vec::new();
        let mut labels = Vec::new();
        for result in rdr.records() {
            let record = result?;
            if record.iter().all(|field| field.is_empty()) {
                continue;
            }
            if let Some(name) = record.get(0) {
                names.push(name.to_string());
            }
            if let Some(label) = record.get(1) {
                if !label.is_empty() {
                    labels.push(label.to_string());
                }
            }
        }
        Ok(Self::new(names, labels)?)
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, RosterLoadError> {
        let file = std::fs::File::open(path.as_ref())
            .map_err(|e| RosterLoadError::Csv(e.to_string()))?;
        Self::from_csv_reader(file)
    }
}

/// Errors from loading a roster CSV file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RosterLoadError {
    /// The file could not be read or parsed as CSV.
    Csv(String),
    /// The rows parsed but do not form a valid roster.
    Invalid(TournamentError),
}

impl std::fmt::Display for RosterLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterLoadError::Csv(msg) => write!(f, "Failed to read roster CSV: {}", msg),
            RosterLoadError::Invalid(err) => write!(f, "Invalid roster: {}", err),
        }
    }
}

impl std::error::Error for RosterLoadError {}

impl From<csv::Error> for RosterLoadError {
    fn from(err: csv::Error) -> Self {
        RosterLoadError::Csv(err.to_string())
    }
}

impl From<TournamentError> for RosterLoadError {
    fn from(err: TournamentError) -> Self {
        RosterLoadError::Invalid(err)
    }
}
