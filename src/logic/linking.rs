//! Advancement linking: which fixture each team moves on to in the next round.

use crate::logic::validation::validate_fixtures;
use crate::models::{Edge, Fixture, MalformedMatchError};
use std::collections::BTreeMap;

/// Fixtures grouped by round, rounds ascending, input order kept within a round.
pub(crate) type Rounds<'a> = BTreeMap<u32, Vec<&'a Fixture>>;

pub(crate) fn group_by_round(fixtures: &[Fixture]) -> Rounds<'_> {
    let mut rounds: Rounds<'_> = BTreeMap::new();
    for f in fixtures {
        rounds.entry(f.round).or_default().push(f);
    }
    rounds
}

/// Compute the advancement edges of a bracket.
///
/// 1. Validate every fixture; the first malformed one aborts the computation.
/// 2. Group by round and walk the rounds in ascending order, skipping the last.
/// 3. For each fixture and each of its teams (team1, then team2), link to the first
///    fixture of round + 1 (input order) in which that team plays.
///
/// A team with no fixture in round + 1 produces no edge. A round whose successor
/// round number has no fixtures produces no edges.
pub fn compute_advancement_edges(fixtures: &[Fixture]) -> Result<Vec<Edge>, MalformedMatchError> {
    validate_fixtures(fixtures)?;
    let rounds = group_by_round(fixtures);
    Ok(link_rounds(&rounds)
        .into_iter()
        .map(|(_, edge)| edge)
        .collect())
}

/// Link already validated rounds. Each edge is returned with its source fixture.
pub(crate) fn link_rounds<'a>(rounds: &Rounds<'a>) -> Vec<(&'a Fixture, Edge)> {
    let mut edges = Vec::new();
    let round_numbers: Vec<u32> = rounds.keys().copied().collect();
    let linked = round_numbers.len().saturating_sub(1);

    for &round in &round_numbers[..linked] {
        let next = match round.checked_add(1).and_then(|r| rounds.get(&r)) {
            Some(next) => next,
            None => {
                log::debug!("Round {} has no successor round to link into", round);
                continue;
            }
        };

        for &m in &rounds[&round] {
            for team in m.teams().into_iter().flatten() {
                let mut found = next.iter().filter(|n| n.has_team(team));
                match found.next() {
                    Some(target) => {
                        if let Some(other) = found.next() {
                            log::warn!(
                                "{} from match {} appears in matches {} and {}; linking to {}",
                                team,
                                m.id,
                                target.id,
                                other.id,
                                target.id
                            );
                        }
                        edges.push((m, Edge::new(&m.id, &target.id, team)));
                    }
                    None => log::debug!("No next match found for team {} from {}", team, m.id),
                }
            }
        }
    }

    edges
}
