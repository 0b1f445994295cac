//! Fixture graph logic: linking, validation, layout, results, import.

mod graph;
mod import;
mod linking;
mod results;
mod validation;

pub use graph::{build_graph, COLUMN_SPACING, ROW_SPACING};
pub use import::{fixtures_from_csv, fixtures_from_json, fixtures_from_path, ImportError};
pub use linking::compute_advancement_edges;
pub use results::{reset_match, set_match_tie, set_match_winner};
pub use validation::{
    bracket_issues, validate_fixture, validate_fixtures, validate_result, BracketIssue,
};
