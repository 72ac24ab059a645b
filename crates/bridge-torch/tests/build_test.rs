//! End-to-end checks of graph construction through the public API.

use std::collections::HashSet;

use bridge_torch::{
    eligible_crossers, BridgeError, BridgeGraph, BridgeState, Crossers, CrossingTimes,
    END_INDEX, MAX_PEOPLE, START_INDEX,
};

#[test_log::test]
fn build_from_json_document() {
    let times = CrossingTimes::from_json(r#"{"times": [1, 2, 5, 10]}"#).unwrap();
    let graph = BridgeGraph::build(&times).unwrap();

    assert_eq!(graph.people_count(), 4);
    assert_eq!(graph.len(), 30);
    assert_eq!(graph.start_index(), START_INDEX);
    assert_eq!(graph.end_index(), END_INDEX);
    assert_eq!(graph.start().display_form(), "0000 0");
    assert_eq!(graph.end().display_form(), "1111 1");
}

#[test]
fn every_state_round_trips_through_display_form() {
    let times: CrossingTimes = "4,8,15,16,23".parse().unwrap();
    let graph = BridgeGraph::build(&times).unwrap();

    let mut seen = HashSet::new();
    for node in &graph {
        let parsed: BridgeState = node.state.display_form().parse().unwrap();
        assert_eq!(parsed, node.state);
        assert!(seen.insert(parsed));
    }
    assert_eq!(seen.len(), graph.len());
}

#[test]
fn neighbours_differ_by_the_crossers_only() {
    let times: CrossingTimes = "1,3,6".parse().unwrap();
    let graph = BridgeGraph::build(&times).unwrap();

    for node in &graph {
        let eligible = eligible_crossers(node.state);
        for crossing in &node.crossings {
            let other = graph.state(crossing.target).unwrap();
            let moved = match crossing.crossers {
                Crossers::Single(p) => vec![p],
                Crossers::Double(a, b) => vec![a, b],
            };

            // The torch travels with the crossers, so they stand beside it on both ends
            assert!(moved.iter().all(|&p| eligible.contains(p)));
            assert!(moved.iter().all(|&p| eligible_crossers(other).contains(p)));

            for person in 0..times.people_count() {
                let flipped = node.state.has_crossed(person).unwrap()
                    != other.has_crossed(person).unwrap();
                assert_eq!(flipped, moved.contains(&person));
            }
        }
    }
}

#[test]
fn rejects_too_many_people() {
    let err = CrossingTimes::new(vec![1; MAX_PEOPLE + 1]).unwrap_err();
    assert_eq!(
        err,
        BridgeError::InvalidPeopleCount {
            count: MAX_PEOPLE + 1,
            min: 1,
            max: MAX_PEOPLE,
        }
    );
}

#[test]
fn end_is_reachable_in_one_move_for_small_groups() {
    for times in ["7", "7,9"] {
        let times: CrossingTimes = times.parse().unwrap();
        let graph = BridgeGraph::build(&times).unwrap();
        let from_start = graph.crossings(START_INDEX).unwrap();
        assert!(from_start.iter().any(|c| c.target == END_INDEX));
    }

    let times: CrossingTimes = "7,9,11".parse().unwrap();
    let graph = BridgeGraph::build(&times).unwrap();
    let from_start = graph.crossings(START_INDEX).unwrap();
    assert!(from_start.iter().all(|c| c.target != END_INDEX));
}
