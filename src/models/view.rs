//! Rendered bracket view: positioned match nodes and progress edges.

use crate::models::edge::ProgressEdge;
use crate::models::fixture::Fixture;
use serde::Serialize;

/// Canvas coordinates of a node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A fixture placed in the bracket view. One column per round, rows centered on y = 0.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchNode {
    #[serde(flatten)]
    pub fixture: Fixture,
    /// Index of the round in the sorted list of rounds.
    pub column: usize,
    /// Index of the fixture within its round.
    pub row: usize,
    pub position: Position,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BracketGraph {
    pub nodes: Vec<MatchNode>,
    pub edges: Vec<ProgressEdge>,
}
