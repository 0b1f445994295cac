//! Integration tests for advancement linking.

use fixture_graph::{compute_advancement_edges, Edge, Fixture, MalformedKind};
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Reference data: 3 matches per round, every round-1 team plays again in round 2.
fn reference_fixtures() -> Vec<Fixture> {
    vec![
        Fixture::new("match-1", 1, "Blue Strikers", "Red Raptors"),
        Fixture::new("match-2", 1, "Green Warriors", "Yellow Dragons"),
        Fixture::new("match-3", 1, "Purple Knights", "Orange Tigers"),
        Fixture::new("match-4", 2, "Blue Strikers", "Green Warriors"),
        Fixture::new("match-5", 2, "Yellow Dragons", "Red Raptors"),
        Fixture::new("match-6", 2, "Orange Tigers", "Purple Knights"),
    ]
}

#[test]
fn reference_data_links_every_team() {
    let edges = compute_advancement_edges(&reference_fixtures()).unwrap();
    assert_eq!(edges.len(), 6);
    for source in ["match-1", "match-2", "match-3"] {
        assert_eq!(edges.iter().filter(|e| e.source == source).count(), 2);
    }
    assert_eq!(
        edges[0],
        Edge {
            id: "edge-match-1-to-match-4-Blue Strikers".to_string(),
            source: "match-1".to_string(),
            target: "match-4".to_string(),
            team: "Blue Strikers".to_string(),
        }
    );
    assert_eq!(edges[1].target, "match-5");
    assert_eq!(edges[1].team, "Red Raptors");
}

#[test]
fn single_match_has_no_edges() {
    let fixtures = vec![Fixture::new("m1", 1, "A", "B")];
    assert!(compute_advancement_edges(&fixtures).unwrap().is_empty());
}

#[test]
fn empty_input_has_no_edges() {
    assert!(compute_advancement_edges(&[]).unwrap().is_empty());
}

#[test]
fn both_teams_into_same_next_match() {
    let fixtures = vec![
        Fixture::new("m1", 1, "A", "B"),
        Fixture::new("m2", 2, "B", "A"),
    ];
    let edges = compute_advancement_edges(&fixtures).unwrap();
    assert_eq!(edges.len(), 2);
    assert!(edges.iter().all(|e| e.target == "m2"));
    assert_eq!(edges[0].team, "A");
    assert_eq!(edges[1].team, "B");
}

#[test]
fn team_absent_from_next_round_gets_no_edge() {
    let fixtures = vec![
        Fixture::new("m1", 1, "A", "B"),
        Fixture::new("m2", 2, "C", "D"),
    ];
    assert!(compute_advancement_edges(&fixtures).unwrap().is_empty());
}

#[test]
fn last_round_never_emits_edges() {
    let fixtures = vec![
        Fixture::new("q1", 1, "A", "B"),
        Fixture::new("q2", 1, "C", "D"),
        Fixture::new("s1", 2, "A", "C"),
        Fixture::new("f1", 3, "A", "E"),
        Fixture::new("f2", 3, "C", "F"),
    ];
    let edges = compute_advancement_edges(&fixtures).unwrap();
    let last_round: HashSet<&str> = ["f1", "f2"].into_iter().collect();
    assert!(edges.iter().all(|e| !last_round.contains(e.source.as_str())));

    // 3 rounds, at most 2 of them have outgoing edges
    let rounds_with_edges: HashSet<u32> = edges
        .iter()
        .map(|e| fixtures.iter().find(|f| f.id == e.source).unwrap().round)
        .collect();
    assert!(rounds_with_edges.len() <= 2);
    assert_eq!(edges.len(), 4);
}

#[test]
fn rounds_are_processed_in_numeric_order() {
    let fixtures = vec![
        Fixture::new("final", 3, "A", "C"),
        Fixture::new("semi-2", 2, "C", "D"),
        Fixture::new("r1", 1, "A", "B"),
        Fixture::new("semi-1", 2, "A", "B"),
    ];
    let edges = compute_advancement_edges(&fixtures).unwrap();
    let order: Vec<(&str, &str)> = edges
        .iter()
        .map(|e| (e.source.as_str(), e.team.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("r1", "A"),
            ("r1", "B"),
            ("semi-2", "C"),
            ("semi-1", "A"),
        ]
    );
}

#[test]
fn round_gap_links_nothing_across_it() {
    let fixtures = vec![
        Fixture::new("m1", 1, "A", "B"),
        Fixture::new("m3", 3, "A", "B"),
    ];
    assert!(compute_advancement_edges(&fixtures).unwrap().is_empty());
}

#[test]
fn ambiguous_team_links_to_first_match_in_input_order() {
    let fixtures = vec![
        Fixture::new("m1", 1, "A", "B"),
        Fixture::new("m2", 2, "C", "A"),
        Fixture::new("m3", 2, "A", "D"),
    ];
    let edges = compute_advancement_edges(&fixtures).unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].target, "m2");
}

#[test]
fn output_is_deterministic() {
    let fixtures = reference_fixtures();
    let first = compute_advancement_edges(&fixtures).unwrap();
    let second = compute_advancement_edges(&fixtures.clone()).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn shuffling_within_a_round_keeps_edge_count() {
    let mut rng = rand::thread_rng();
    let fixtures = reference_fixtures();
    let expected: HashSet<Edge> = compute_advancement_edges(&fixtures)
        .unwrap()
        .into_iter()
        .collect();

    for _ in 0..20 {
        let mut round_1 = fixtures[..3].to_vec();
        let mut round_2 = fixtures[3..].to_vec();
        round_1.shuffle(&mut rng);
        round_2.shuffle(&mut rng);
        let mut shuffled = round_2;
        shuffled.extend(round_1);

        let edges = compute_advancement_edges(&shuffled).unwrap();
        assert_eq!(edges.len(), 6);
        assert_eq!(edges.into_iter().collect::<HashSet<_>>(), expected);
    }
}

#[test]
fn missing_team_aborts_the_whole_computation() {
    let mut broken = Fixture::new("m2", 1, "C", "D");
    broken.team2 = None;
    let fixtures = vec![
        Fixture::new("m1", 1, "A", "B"),
        broken,
        Fixture::new("m3", 2, "A", "C"),
    ];
    let err = compute_advancement_edges(&fixtures).unwrap_err();
    assert_eq!(err.match_id, "m2");
    assert_eq!(err.kind, MalformedKind::MissingTeam2);
}

#[test]
fn same_team_on_both_sides_is_rejected() {
    let fixtures = vec![
        Fixture::new("m1", 1, "A", "A"),
        Fixture::new("m2", 2, "A", "B"),
    ];
    let err = compute_advancement_edges(&fixtures).unwrap_err();
    assert_eq!(err.kind, MalformedKind::SameTeam);
}

#[test]
fn round_zero_is_rejected() {
    let fixtures = vec![Fixture::new("m0", 0, "A", "B")];
    let err = compute_advancement_edges(&fixtures).unwrap_err();
    assert_eq!(err.kind, MalformedKind::NonPositiveRound);
}

#[test]
fn result_fields_do_not_affect_linking() {
    let mut decided = Fixture::new("m1", 1, "A", "B");
    decided.status = fixture_graph::MatchStatus::Completed;
    decided.winner = Some("Z".to_string());
    let fixtures = vec![decided, Fixture::new("m2", 2, "A", "B")];
    assert_eq!(compute_advancement_edges(&fixtures).unwrap().len(), 2);
}
