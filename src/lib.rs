//! Fixture graph: library with bracket models, advancement linking and result logic.

pub mod config;
pub mod logic;
pub mod models;
pub mod web;

pub use config::ServerConfig;
pub use logic::{
    bracket_issues, build_graph, compute_advancement_edges, fixtures_from_csv, fixtures_from_json,
    fixtures_from_path, reset_match, set_match_tie, set_match_winner, validate_fixture,
    validate_fixtures, validate_result, BracketIssue, ImportError, COLUMN_SPACING, ROW_SPACING,
};
pub use models::{
    Bracket, BracketError, BracketGraph, BracketId, Edge, Fixture, MalformedKind,
    MalformedMatchError, MatchId, MatchNode, MatchStatus, Position, Progress, ProgressEdge, Scores,
};
