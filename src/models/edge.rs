//! Advancement edges and the annotated edges used by the rendered graph.

use crate::models::fixture::MatchId;
use serde::{Deserialize, Serialize};

/// A team in `source` proceeds to `target` in the next round.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// `edge-{source}-to-{target}-{team}`.
    pub id: String,
    pub source: MatchId,
    pub target: MatchId,
    pub team: String,
}

impl Edge {
    pub fn new(source: &str, target: &str, team: &str) -> Self {
        Self {
            id: Self::compose_id(source, target, team),
            source: source.to_string(),
            target: target.to_string(),
            team: team.to_string(),
        }
    }

    /// Edge id composition shared with existing consumers of the graph.
    pub fn compose_id(source: &str, target: &str, team: &str) -> String {
        format!("edge-{}-to-{}-{}", source, target, team)
    }
}

/// How far a team has progressed along an edge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Progress {
    /// Source match not decided yet.
    Pending,
    /// Source match completed and this team won it.
    Advanced,
    /// Source match ended in a tie; both teams continue.
    Tie,
}

/// An advancement edge with its progress state, as shown in the bracket view.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProgressEdge {
    #[serde(flatten)]
    pub edge: Edge,
    pub progress: Progress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}
