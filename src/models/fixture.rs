//! Fixture (a single match of the bracket) and its result status.

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a fixture. Numeric ids from the platform are kept as their decimal string.
pub type MatchId = String;

/// Result state of a fixture.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    Completed,
    Tie,
}

/// Optional scores reported alongside a result.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub score1: Option<u32>,
    pub score2: Option<u32>,
}

/// A single match: round number, two team names, and an optional result.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    #[serde(deserialize_with = "deserialize_match_id")]
    pub id: MatchId,
    /// 1-based round number.
    pub round: u32,
    /// `None` or blank is rejected by validation.
    #[serde(default)]
    pub team1: Option<String>,
    #[serde(default)]
    pub team2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_number: Option<u32>,
    #[serde(default)]
    pub status: MatchStatus,
    /// Set when `status` is `Completed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score1: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score2: Option<u32>,
}

impl Fixture {
    /// Create a pending fixture between two teams.
    pub fn new(
        id: impl Into<MatchId>,
        round: u32,
        team1: impl Into<String>,
        team2: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            round,
            team1: Some(team1.into()),
            team2: Some(team2.into()),
            match_number: None,
            status: MatchStatus::Pending,
            winner: None,
            score1: None,
            score2: None,
        }
    }

    /// Both team names in the fixed linking order (team1, then team2).
    pub fn teams(&self) -> [Option<&str>; 2] {
        [self.team1.as_deref(), self.team2.as_deref()]
    }

    /// True if `team` plays in this fixture on either side.
    pub fn has_team(&self, team: &str) -> bool {
        self.team1.as_deref() == Some(team) || self.team2.as_deref() == Some(team)
    }

    /// True if the fixture is completed and `team` is not its winner.
    pub fn is_loser(&self, team: &str) -> bool {
        self.status == MatchStatus::Completed && self.winner.as_deref() != Some(team)
    }

    /// Strip surrounding whitespace from team and winner names, as CSV import does.
    pub fn trim_names(&mut self) {
        for name in [&mut self.team1, &mut self.team2, &mut self.winner]
            .into_iter()
            .flatten()
        {
            let trimmed = name.trim();
            if trimmed.len() != name.len() {
                *name = trimmed.to_string();
            }
        }
    }

    pub fn set_scores(&mut self, scores: Scores) {
        self.score1 = scores.score1;
        self.score2 = scores.score2;
    }
}

/// Accept either a JSON string or a JSON integer (signed or unsigned 64-bit) for a fixture id.
/// Floats such as `1.0` are rejected.
fn deserialize_match_id<'de, D>(deserializer: D) -> Result<MatchId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    match RawId::deserialize(deserializer) {
        Ok(RawId::Text(s)) => Ok(s),
        Ok(RawId::Signed(n)) => Ok(n.to_string()),
        Ok(RawId::Unsigned(n)) => Ok(n.to_string()),
        Err(_) => Err(serde::de::Error::custom(
            "fixture id must be a string or an integer",
        )),
    }
}

/// What is wrong with a malformed fixture.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedKind {
    MissingTeam1,
    MissingTeam2,
    /// Both sides name the same team.
    SameTeam,
    NonPositiveRound,
    /// Completed without a winner.
    MissingWinner,
    /// Winner is neither team1 nor team2.
    InvalidWinner,
}

/// A fixture that cannot be linked or rendered. Aborts the whole computation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MalformedMatchError {
    pub match_id: MatchId,
    pub kind: MalformedKind,
}

impl MalformedMatchError {
    pub fn new(match_id: &str, kind: MalformedKind) -> Self {
        Self {
            match_id: match_id.to_string(),
            kind,
        }
    }
}

impl std::fmt::Display for MalformedMatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = &self.match_id;
        match self.kind {
            MalformedKind::MissingTeam1 => write!(f, "Match {} is missing team1", id),
            MalformedKind::MissingTeam2 => write!(f, "Match {} is missing team2", id),
            MalformedKind::SameTeam => write!(f, "Match {} has the same team on both sides", id),
            MalformedKind::NonPositiveRound => write!(f, "Match {} has a non-positive round number", id),
            MalformedKind::MissingWinner => write!(f, "Match {} is completed but has no winner", id),
            MalformedKind::InvalidWinner => {
                write!(f, "Match {} has a winner that is not one of its teams", id)
            }
        }
    }
}

impl std::error::Error for MalformedMatchError {}
