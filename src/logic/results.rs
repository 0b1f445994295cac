//! Recording match results on a stored bracket.

use crate::models::{Bracket, BracketError, MatchStatus, Scores};

/// Mark a match completed with `winner`, who must be one of its two teams.
pub fn set_match_winner(
    bracket: &mut Bracket,
    match_id: &str,
    winner: &str,
    scores: Scores,
) -> Result<(), BracketError> {
    let fixture = bracket.fixture_mut(match_id)?;
    if !fixture.has_team(winner) {
        return Err(BracketError::WinnerNotInMatch {
            match_id: match_id.to_string(),
            winner: winner.to_string(),
        });
    }
    fixture.status = MatchStatus::Completed;
    fixture.winner = Some(winner.to_string());
    fixture.set_scores(scores);
    log::info!("Match {} won by {}", match_id, winner);
    bracket.touch();
    Ok(())
}

/// Mark a match tied. Any previous winner is cleared.
pub fn set_match_tie(
    bracket: &mut Bracket,
    match_id: &str,
    scores: Scores,
) -> Result<(), BracketError> {
    let fixture = bracket.fixture_mut(match_id)?;
    fixture.status = MatchStatus::Tie;
    fixture.winner = None;
    fixture.set_scores(scores);
    log::info!("Match {} set to tie", match_id);
    bracket.touch();
    Ok(())
}

/// Put a match back to pending, clearing winner and scores.
pub fn reset_match(bracket: &mut Bracket, match_id: &str) -> Result<(), BracketError> {
    let fixture = bracket.fixture_mut(match_id)?;
    fixture.status = MatchStatus::Pending;
    fixture.winner = None;
    fixture.set_scores(Scores::default());
    log::info!("Match {} reset", match_id);
    bracket.touch();
    Ok(())
}
