//! Fixture validation and bracket integrity diagnostics.

use crate::logic::linking::group_by_round;
use crate::models::{Fixture, MalformedKind, MalformedMatchError, MatchId, MatchStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Structural checks needed for linking: both teams present and distinct, round >= 1.
pub fn validate_fixture(fixture: &Fixture) -> Result<(), MalformedMatchError> {
    let team1 = present(fixture.team1.as_deref())
        .ok_or_else(|| MalformedMatchError::new(&fixture.id, MalformedKind::MissingTeam1))?;
    let team2 = present(fixture.team2.as_deref())
        .ok_or_else(|| MalformedMatchError::new(&fixture.id, MalformedKind::MissingTeam2))?;
    if team1 == team2 {
        return Err(MalformedMatchError::new(&fixture.id, MalformedKind::SameTeam));
    }
    if fixture.round == 0 {
        return Err(MalformedMatchError::new(
            &fixture.id,
            MalformedKind::NonPositiveRound,
        ));
    }
    Ok(())
}

/// Result checks: a completed fixture names one of its own teams as winner.
pub fn validate_result(fixture: &Fixture) -> Result<(), MalformedMatchError> {
    if fixture.status != MatchStatus::Completed {
        return Ok(());
    }
    match fixture.winner.as_deref() {
        None => Err(MalformedMatchError::new(
            &fixture.id,
            MalformedKind::MissingWinner,
        )),
        Some(w) if !fixture.has_team(w) => Err(MalformedMatchError::new(
            &fixture.id,
            MalformedKind::InvalidWinner,
        )),
        Some(_) => Ok(()),
    }
}

/// Structural checks on every fixture, stopping at the first malformed one.
pub fn validate_fixtures(fixtures: &[Fixture]) -> Result<(), MalformedMatchError> {
    fixtures.iter().try_for_each(validate_fixture)
}

fn present(team: Option<&str>) -> Option<&str> {
    team.filter(|t| !t.trim().is_empty())
}

/// A non-fatal integrity problem in an otherwise well-formed bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BracketIssue {
    DuplicateMatchId {
        match_id: MatchId,
    },
    /// `round + 1` has no fixtures although a later round does; nothing links across the gap.
    RoundGap { round: u32, next_round: u32 },
    /// The team plays in several next-round fixtures; the first one is linked.
    AmbiguousAdvancement {
        match_id: MatchId,
        team: String,
        candidates: Vec<MatchId>,
    },
    /// The team did not lose this fixture but plays in no next-round fixture.
    MissingAdvancement { match_id: MatchId, team: String },
}

impl std::fmt::Display for BracketIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketIssue::DuplicateMatchId { match_id } => {
                write!(f, "Match id {} is used more than once", match_id)
            }
            BracketIssue::RoundGap { round, next_round } => {
                write!(f, "No fixtures between round {} and round {}", round, next_round)
            }
            BracketIssue::AmbiguousAdvancement {
                match_id,
                team,
                candidates,
            } => write!(
                f,
                "{} from match {} appears in several next-round matches: {}",
                team,
                match_id,
                candidates.join(", ")
            ),
            BracketIssue::MissingAdvancement { match_id, team } => write!(
                f,
                "{} from match {} has no next-round match and was not eliminated",
                team, match_id
            ),
        }
    }
}

/// Integrity diagnostics for a fixture list.
///
/// A team that lost a completed fixture and is absent from the next round has been
/// eliminated and is not reported. Any other team without a next-round fixture is
/// reported as `MissingAdvancement`. Malformed fixtures abort with an error.
pub fn bracket_issues(fixtures: &[Fixture]) -> Result<Vec<BracketIssue>, MalformedMatchError> {
    validate_fixtures(fixtures)?;
    fixtures.iter().try_for_each(validate_result)?;

    let mut issues = Vec::new();

    let mut seen = HashSet::new();
    for f in fixtures {
        if !seen.insert(f.id.as_str()) {
            issues.push(BracketIssue::DuplicateMatchId {
                match_id: f.id.clone(),
            });
        }
    }

    let rounds = group_by_round(fixtures);
    let round_numbers: Vec<u32> = rounds.keys().copied().collect();
    for pair in round_numbers.windows(2) {
        let (round, next_round) = (pair[0], pair[1]);
        if next_round != round + 1 {
            issues.push(BracketIssue::RoundGap { round, next_round });
            continue;
        }
        let next = &rounds[&next_round];
        for m in &rounds[&round] {
            for team in m.teams().into_iter().flatten() {
                let candidates: Vec<MatchId> = next
                    .iter()
                    .filter(|n| n.has_team(team))
                    .map(|n| n.id.clone())
                    .collect();
                if candidates.len() > 1 {
                    issues.push(BracketIssue::AmbiguousAdvancement {
                        match_id: m.id.clone(),
                        team: team.to_string(),
                        candidates,
                    });
                } else if candidates.is_empty() && !m.is_loser(team) {
                    issues.push(BracketIssue::MissingAdvancement {
                        match_id: m.id.clone(),
                        team: team.to_string(),
                    });
                }
            }
        }
    }

    Ok(issues)
}
