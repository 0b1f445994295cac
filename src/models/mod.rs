//! Data structures for the fixture graph: fixtures, edges, stored brackets, rendered view.

mod bracket;
mod edge;
mod fixture;
mod view;

pub use bracket::{Bracket, BracketError, BracketId};
pub use edge::{Edge, Progress, ProgressEdge};
pub use fixture::{Fixture, MalformedKind, MalformedMatchError, MatchId, MatchStatus, Scores};
pub use view::{BracketGraph, MatchNode, Position};
