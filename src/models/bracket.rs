//! Bracket: a stored, named fixture list with its result-recording state.

use crate::models::fixture::{Fixture, MalformedMatchError, MatchId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Errors that can occur when building or updating a bracket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BracketError {
    /// A fixture failed validation.
    Malformed(MalformedMatchError),
    /// Two fixtures share an id.
    DuplicateMatchId(MatchId),
    /// No fixture with this id in the bracket.
    MatchNotFound(MatchId),
    /// The named winner does not play in the match.
    WinnerNotInMatch { match_id: MatchId, winner: String },
}

impl std::fmt::Display for BracketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketError::Malformed(e) => write!(f, "{}", e),
            BracketError::DuplicateMatchId(id) => write!(f, "Duplicate match id {}", id),
            BracketError::MatchNotFound(id) => write!(f, "Match {} not found", id),
            BracketError::WinnerNotInMatch { match_id, winner } => {
                write!(f, "{} does not play in match {}", winner, match_id)
            }
        }
    }
}

impl std::error::Error for BracketError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BracketError::Malformed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MalformedMatchError> for BracketError {
    fn from(e: MalformedMatchError) -> Self {
        BracketError::Malformed(e)
    }
}

/// Unique identifier for a stored bracket.
pub type BracketId = Uuid;

/// A named fixture list. Edges and graph are always derived from `fixtures`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Bracket {
    pub id: BracketId,
    pub name: String,
    pub fixtures: Vec<Fixture>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bracket {
    /// Create a bracket from fixtures. Every fixture must be valid and ids must be unique.
    /// Team names are trimmed.
    pub fn new(name: impl Into<String>, mut fixtures: Vec<Fixture>) -> Result<Self, BracketError> {
        fixtures.iter_mut().for_each(Fixture::trim_names);
        let mut seen = HashSet::new();
        for f in &fixtures {
            crate::logic::validate_fixture(f)?;
            crate::logic::validate_result(f)?;
            if !seen.insert(f.id.as_str()) {
                return Err(BracketError::DuplicateMatchId(f.id.clone()));
            }
        }
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            fixtures,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn fixture(&self, match_id: &str) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.id == match_id)
    }

    /// Mutable reference to a fixture by id, or `MatchNotFound`.
    pub fn fixture_mut(&mut self, match_id: &str) -> Result<&mut Fixture, BracketError> {
        self.fixtures
            .iter_mut()
            .find(|f| f.id == match_id)
            .ok_or_else(|| BracketError::MatchNotFound(match_id.to_string()))
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
