// Unit tests for post filtering.
//
// Covers the check order, the age parsing rules, keyword matching and the
// order-preservation guarantee of filter_posts.

use std::collections::BTreeMap;

use postlens::posts::filter::{filter_posts, FilterCriteria, Rejection};
use postlens::posts::models::Post;
use serde_json::json;

fn posts_from(value: serde_json::Value) -> Vec<Post> {
    serde_json::from_value(value).unwrap()
}

fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================
// Reference example
// ============================================================

#[test]
fn python_example_keeps_only_first_post() {
    let posts = posts_from(json!([
        {"text": "I love python", "age": 25, "gender": "female", "region": "california"},
        {"text": "I hate python", "age": 25, "gender": "female", "region": "california"},
        {"text": "python is great", "age": 15, "gender": "female", "region": "california"}
    ]));

    let criteria = FilterCriteria {
        include_keywords: vec!["python".into()],
        exclude_keywords: vec!["hate".into()],
        attribute_filters: attrs(&[("gender", "female"), ("region", "california")]),
        min_age: Some(20),
        max_age: None,
    };

    let kept = filter_posts(&posts, &criteria);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].text, "I love python");
}

// ============================================================
// Ordering
// ============================================================

#[test]
fn output_is_an_ordered_subsequence() {
    let posts: Vec<Post> = (0..20)
        .map(|i| Post::new(if i % 3 == 0 { format!("rust {i}") } else { format!("go {i}") }))
        .collect();
    let criteria = FilterCriteria {
        include_keywords: vec!["rust".into()],
        ..Default::default()
    };

    let kept = filter_posts(&posts, &criteria);
    let positions: Vec<usize> = kept
        .iter()
        .map(|k| posts.iter().position(|p| std::ptr::eq(p, *k)).unwrap())
        .collect();

    assert_eq!(positions, vec![0, 3, 6, 9, 12, 15, 18]);
}

// ============================================================
// Attribute filters
// ============================================================

#[test]
fn attribute_match_is_case_insensitive() {
    let criteria = FilterCriteria {
        attribute_filters: attrs(&[("region", "California")]),
        ..Default::default()
    };
    assert!(criteria.matches(&Post::new("x").with_attribute("region", "CALIFORNIA")));
    assert!(!criteria.matches(&Post::new("x").with_attribute("region", "californian")));
}

#[test]
fn missing_attribute_rejects() {
    let criteria = FilterCriteria {
        attribute_filters: attrs(&[("gender", "none")]),
        ..Default::default()
    };
    assert_eq!(
        criteria.check(&Post::new("x")),
        Err(Rejection::Attribute("gender".into()))
    );
}

#[test]
fn numeric_attribute_compares_by_text() {
    let criteria = FilterCriteria {
        attribute_filters: attrs(&[("age", "25")]),
        ..Default::default()
    };
    assert!(criteria.matches(&Post::new("x").with_age(25)));
    assert!(criteria.matches(&Post::new("x").with_age("25")));
    assert!(!criteria.matches(&Post::new("x").with_age(26)));
}

#[test]
fn all_attribute_filters_must_hold() {
    let criteria = FilterCriteria {
        attribute_filters: attrs(&[("gender", "male"), ("region", "oregon")]),
        ..Default::default()
    };
    let post = Post::new("x")
        .with_attribute("gender", "male")
        .with_attribute("region", "texas");
    assert!(!criteria.matches(&post));
}

// ============================================================
// Age
// ============================================================

#[test]
fn unparseable_age_never_passes_an_active_bound() {
    let criteria = FilterCriteria {
        min_age: Some(0),
        ..Default::default()
    };
    let posts = posts_from(json!([
        {"text": "a", "age": "twenty"},
        {"text": "b", "age": null},
        {"text": "c"},
        {"text": "d", "age": [20]},
        {"text": "e", "age": "20"}
    ]));

    let kept: Vec<&str> = filter_posts(&posts, &criteria)
        .iter()
        .map(|p| p.text.as_str())
        .collect();
    assert_eq!(kept, vec!["e"]);
}

#[test]
fn max_age_only() {
    let criteria = FilterCriteria {
        max_age: Some(17),
        ..Default::default()
    };
    assert!(criteria.matches(&Post::new("x").with_age(17)));
    assert!(!criteria.matches(&Post::new("x").with_age(18)));
}

// ============================================================
// Keywords
// ============================================================

#[test]
fn include_keywords_are_substring_or_matched() {
    let criteria = FilterCriteria {
        include_keywords: vec!["Rust".into(), "zig".into()],
        ..Default::default()
    };
    assert!(criteria.matches(&Post::new("I like rustaceans")));
    assert!(criteria.matches(&Post::new("ZIG is neat")));
    assert_eq!(
        criteria.check(&Post::new("go is fine")),
        Err(Rejection::NoIncludedKeyword)
    );
}

#[test]
fn exclude_wins_over_include() {
    let criteria = FilterCriteria {
        include_keywords: vec!["python".into()],
        exclude_keywords: vec!["bad".into()],
        ..Default::default()
    };
    assert_eq!(
        criteria.check(&Post::new("python is bad")),
        Err(Rejection::ExcludedKeyword("bad".into()))
    );
}

#[test]
fn empty_keyword_lists_are_inactive() {
    let criteria = FilterCriteria {
        include_keywords: vec![],
        exclude_keywords: vec![],
        ..Default::default()
    };
    assert!(criteria.matches(&Post::new("anything")));
}
