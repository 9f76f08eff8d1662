// Unit tests for graph construction, importance scores and the highlight
// threshold.

use postlens::error::GraphError;
use postlens::network::build::{build_graph, NodeKind, Relation};
use postlens::network::importance::{BlendWeights, Importance};
use postlens::network::model::NetworkData;
use postlens::network::sample::sample_network;
use postlens::network::threshold::{highlight_threshold, ScoredPosts};
use serde_json::json;

fn network(value: serde_json::Value) -> NetworkData {
    serde_json::from_value(value).unwrap()
}

// ============================================================
// Scores
// ============================================================

#[test]
fn views_and_blend_scores_for_three_viewers() {
    let data = network(json!({
        "users": ["alice", "bob", "carol", "dave"],
        "posts": {"p": {"author": "alice", "views": ["bob", "carol", "dave"], "comments": []}}
    }));

    let (_, views) = build_graph(&data, Importance::Views).unwrap();
    assert_eq!(views["p"], 3.0);

    let blend = Importance::Blend(BlendWeights::new(0.7, 0.3).unwrap());
    let (_, blended) = build_graph(&data, blend).unwrap();
    assert!((blended["p"] - 2.1).abs() < 1e-9);
}

#[test]
fn sample_network_scores() {
    let data = sample_network();
    let (_, comments) = build_graph(&data, Importance::Comments).unwrap();
    assert_eq!(comments["post1"], 1.0);
    assert_eq!(comments["post2"], 2.0);
    assert_eq!(comments["post3"], 0.0);

    let (_, blend) = build_graph(&data, Importance::default()).unwrap();
    assert!((blend["post1"] - 2.0).abs() < 1e-9);
    assert!((blend["post2"] - 2.0).abs() < 1e-9);
    assert!((blend["post3"] - 0.5).abs() < 1e-9);
}

#[test]
fn scores_are_never_negative() {
    let (_, scores) = build_graph(&sample_network(), Importance::default()).unwrap();
    assert!(scores.values().all(|&s| s >= 0.0));
}

// ============================================================
// Graph structure
// ============================================================

#[test]
fn every_post_has_exactly_one_authored_edge() {
    let data = sample_network();
    let (graph, _) = build_graph(&data, Importance::Views).unwrap();

    for post_id in data.posts.keys() {
        let authored = graph
            .edges()
            .filter(|(_, to, rel)| *to == post_id.as_str() && *rel == Relation::Authored)
            .count();
        assert_eq!(authored, 1, "{post_id}");
    }
}

#[test]
fn sample_graph_shape() {
    let (graph, _) = build_graph(&sample_network(), Importance::Views).unwrap();
    // 4 users + 3 posts; 3 authored + 6 viewed
    assert_eq!(graph.node_count(), 7);
    assert_eq!(graph.edge_count(), 9);
    assert_eq!(graph.relation("dave", "post3"), Some(Relation::Viewed));
    assert_eq!(graph.relation("post3", "dave"), None);
    assert_eq!(graph.node("post2").map(|n| n.kind), Some(NodeKind::Post));
}

#[test]
fn undeclared_author_is_a_validation_error() {
    let data = network(json!({
        "users": ["alice"],
        "posts": {"p": {"author": "zed"}}
    }));
    assert_eq!(
        build_graph(&data, Importance::Views).unwrap_err(),
        GraphError::UndeclaredAuthor {
            post: "p".into(),
            author: "zed".into()
        }
    );
}

#[test]
fn empty_network_builds_empty_graph() {
    let (graph, scores) = build_graph(&NetworkData::default(), Importance::Views).unwrap();
    assert_eq!(graph.node_count(), 0);
    assert!(scores.is_empty());
    assert_eq!(ScoredPosts::new(scores).threshold, 0.0);
}

// ============================================================
// Threshold
// ============================================================

#[test]
fn threshold_boundary_cases() {
    assert_eq!(highlight_threshold(&[]), 0.0);
    assert_eq!(highlight_threshold(&[4.0]), 4.0);
    // N = 4: floor(0.8) = 0 -> max(1, 0) - 1 = 0
    assert_eq!(highlight_threshold(&[1.0, 9.0, 3.0, 2.0]), 9.0);
    // N = 10: floor(2.0) = 2 -> index 1
    let ten = [5.0, 1.0, 8.0, 2.0, 9.0, 3.0, 7.0, 4.0, 6.0, 0.0];
    assert_eq!(highlight_threshold(&ten), 8.0);
}

#[test]
fn tied_top_scores_all_highlight() {
    let scored = ScoredPosts::new(
        [("a", 10.0), ("b", 10.0), ("c", 5.0), ("d", 5.0), ("e", 1.0)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    );
    assert_eq!(scored.threshold, 10.0);
    assert_eq!(scored.highlighted(), vec!["a", "b"]);
}

#[test]
fn all_equal_scores_all_highlight() {
    let scored = ScoredPosts::new(
        (0..7).map(|i| (format!("p{i}"), 0.0)).collect(),
    );
    assert_eq!(scored.highlighted().len(), 7);
}
