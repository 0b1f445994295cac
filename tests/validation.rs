//! Integration tests for bracket integrity diagnostics.

use fixture_graph::{bracket_issues, BracketIssue, Fixture, MalformedKind, MatchStatus};

fn won(mut f: Fixture, winner: &str) -> Fixture {
    f.status = MatchStatus::Completed;
    f.winner = Some(winner.to_string());
    f
}

#[test]
fn consistent_bracket_has_no_issues() {
    let fixtures = vec![
        won(Fixture::new("s1", 1, "A", "B"), "A"),
        won(Fixture::new("s2", 1, "C", "D"), "D"),
        Fixture::new("f", 2, "A", "D"),
    ];
    assert!(bracket_issues(&fixtures).unwrap().is_empty());
}

#[test]
fn pending_team_missing_from_next_round_is_reported() {
    let fixtures = vec![
        Fixture::new("s1", 1, "A", "B"),
        Fixture::new("f", 2, "A", "C"),
    ];
    assert_eq!(
        bracket_issues(&fixtures).unwrap(),
        vec![BracketIssue::MissingAdvancement {
            match_id: "s1".to_string(),
            team: "B".to_string(),
        }]
    );
}

#[test]
fn winner_missing_from_next_round_is_reported_loser_is_not() {
    let fixtures = vec![
        won(Fixture::new("s1", 1, "A", "B"), "B"),
        Fixture::new("f", 2, "A", "C"),
    ];
    // A lost and still plays on: not an elimination issue. B won but has no next match.
    assert_eq!(
        bracket_issues(&fixtures).unwrap(),
        vec![BracketIssue::MissingAdvancement {
            match_id: "s1".to_string(),
            team: "B".to_string(),
        }]
    );
}

#[test]
fn ambiguity_and_gaps_and_duplicates() {
    let fixtures = vec![
        Fixture::new("m1", 1, "A", "B"),
        Fixture::new("m2", 2, "A", "B"),
        Fixture::new("m3", 2, "A", "C"),
        Fixture::new("m2", 4, "A", "C"),
    ];
    let issues = bracket_issues(&fixtures).unwrap();
    assert_eq!(
        issues,
        vec![
            BracketIssue::DuplicateMatchId {
                match_id: "m2".to_string()
            },
            BracketIssue::AmbiguousAdvancement {
                match_id: "m1".to_string(),
                team: "A".to_string(),
                candidates: vec!["m2".to_string(), "m3".to_string()],
            },
            BracketIssue::RoundGap {
                round: 2,
                next_round: 4
            },
        ]
    );
}

#[test]
fn invalid_winner_aborts() {
    let fixtures = vec![won(Fixture::new("s1", 1, "A", "B"), "C")];
    let err = bracket_issues(&fixtures).unwrap_err();
    assert_eq!(err.kind, MalformedKind::InvalidWinner);
    assert_eq!(
        err.to_string(),
        "Match s1 has a winner that is not one of its teams"
    );
}

#[test]
fn issues_serialize_with_kind_tag() {
    let issue = BracketIssue::RoundGap {
        round: 1,
        next_round: 3,
    };
    let json = serde_json::to_value(&issue).unwrap();
    assert_eq!(json["kind"], "round_gap");
    assert_eq!(json["next_round"], 3);
}
