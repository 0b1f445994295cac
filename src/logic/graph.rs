//! Bracket view: layered layout of fixtures plus progress-annotated advancement edges.

use crate::logic::linking::{group_by_round, link_rounds};
use crate::logic::validation::{validate_fixtures, validate_result};
use crate::models::{
    BracketGraph, Edge, Fixture, MalformedMatchError, MatchNode, MatchStatus, Position, Progress,
    ProgressEdge,
};

/// Horizontal distance between round columns.
pub const COLUMN_SPACING: f64 = 400.0;
/// Vertical distance between fixtures of one round.
pub const ROW_SPACING: f64 = 180.0;

/// Build the bracket view for a fixture list.
///
/// Edges of the losing team of a completed fixture are left out (that team is eliminated).
/// Winners of completed fixtures advance with their name as label; both teams of a tied
/// fixture continue with the label `Tie`.
pub fn build_graph(fixtures: &[Fixture]) -> Result<BracketGraph, MalformedMatchError> {
    validate_fixtures(fixtures)?;
    fixtures.iter().try_for_each(validate_result)?;

    let rounds = group_by_round(fixtures);

    let mut nodes = Vec::with_capacity(fixtures.len());
    for (column, matches) in rounds.values().enumerate() {
        let start_y = -(matches.len() as f64 * ROW_SPACING) / 2.0;
        for (row, &m) in matches.iter().enumerate() {
            nodes.push(MatchNode {
                fixture: m.clone(),
                column,
                row,
                position: Position {
                    x: column as f64 * COLUMN_SPACING,
                    y: start_y + row as f64 * ROW_SPACING,
                },
            });
        }
    }

    let edges = link_rounds(&rounds)
        .into_iter()
        .filter_map(|(source, edge)| progress_edge(source, edge))
        .collect();

    Ok(BracketGraph { nodes, edges })
}

/// Annotate an edge from `source`; `None` if the edge's team was eliminated there.
fn progress_edge(source: &Fixture, edge: Edge) -> Option<ProgressEdge> {
    let (progress, label) = match source.status {
        MatchStatus::Pending => (Progress::Pending, None),
        MatchStatus::Tie => (Progress::Tie, Some("Tie".to_string())),
        MatchStatus::Completed if source.winner.as_deref() == Some(edge.team.as_str()) => {
            (Progress::Advanced, Some(edge.team.clone()))
        }
        MatchStatus::Completed => return None,
    };
    Some(ProgressEdge {
        edge,
        progress,
        label,
    })
}
