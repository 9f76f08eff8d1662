// Post filtering: narrows a post collection to the ones a word cloud is
// built from.
//
// Checks run in a fixed order and a post is dropped at the first one it
// fails: attribute match, age range, include keywords, exclude keywords.
// Output order always follows input order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::models::Post;
use crate::error::ConfigError;

/// What a post must satisfy to be kept.
///
/// Empty keyword lists and an empty attribute map are inactive, as are
/// unset age bounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Keep posts containing at least one of these (case-insensitive substring)
    #[serde(default)]
    pub include_keywords: Vec<String>,
    /// Drop posts containing any of these (case-insensitive substring)
    #[serde(default)]
    pub exclude_keywords: Vec<String>,
    /// Attribute name -> required value, case-insensitive exact match, all must hold
    #[serde(default)]
    pub attribute_filters: BTreeMap<String, String>,
    /// Inclusive lower age bound
    #[serde(default)]
    pub min_age: Option<i64>,
    /// Inclusive upper age bound
    #[serde(default)]
    pub max_age: Option<i64>,
}

/// Why a post was left out. Only used for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The attribute is missing or has a different value
    Attribute(String),
    /// An age bound is active but the post has no usable age
    UnreadableAge,
    /// Age is below `min_age` or above `max_age`
    AgeOutOfRange(i64),
    /// None of the include keywords appear in the text
    NoIncludedKeyword,
    /// One of the exclude keywords appears in the text
    ExcludedKeyword(String),
}

impl FilterCriteria {
    /// Reject contradictory bounds before running a filter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(min), Some(max)) = (self.min_age, self.max_age) {
            if min > max {
                return Err(ConfigError::InvalidAgeRange { min, max });
            }
        }
        Ok(())
    }

    pub fn has_age_bound(&self) -> bool {
        self.min_age.is_some() || self.max_age.is_some()
    }

    /// Run every active check against a single post.
    pub fn check(&self, post: &Post) -> Result<(), Rejection> {
        for (key, wanted) in &self.attribute_filters {
            let matches = post
                .attribute(key)
                .is_some_and(|actual| actual.to_lowercase() == wanted.to_lowercase());
            if !matches {
                return Err(Rejection::Attribute(key.clone()));
            }
        }

        if self.has_age_bound() {
            let age = post.parsed_age().ok_or(Rejection::UnreadableAge)?;
            if self.min_age.is_some_and(|min| age < min)
                || self.max_age.is_some_and(|max| age > max)
            {
                return Err(Rejection::AgeOutOfRange(age));
            }
        }

        let text = post.text.to_lowercase();

        if !self.include_keywords.is_empty()
            && !self
                .include_keywords
                .iter()
                .any(|kw| text.contains(&kw.to_lowercase()))
        {
            return Err(Rejection::NoIncludedKeyword);
        }

        if let Some(kw) = self
            .exclude_keywords
            .iter()
            .find(|kw| text.contains(&kw.to_lowercase()))
        {
            return Err(Rejection::ExcludedKeyword(kw.clone()));
        }

        Ok(())
    }

    pub fn matches(&self, post: &Post) -> bool {
        self.check(post).is_ok()
    }
}

/// Parse a `key=value` attribute filter as given on the command line.
pub fn parse_attribute_filter(raw: &str) -> Result<(String, String), ConfigError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(ConfigError::MalformedFilter(raw.to_string())),
    }
}

/// Return the posts that pass every active check, in input order.
pub fn filter_posts<'a>(posts: &'a [Post], criteria: &FilterCriteria) -> Vec<&'a Post> {
    let kept: Vec<&Post> = posts
        .iter()
        .enumerate()
        .filter_map(|(index, post)| match criteria.check(post) {
            Ok(()) => Some(post),
            Err(reason) => {
                debug!(index, ?reason, "Post filtered out");
                None
            }
        })
        .collect();

    info!(total = posts.len(), kept = kept.len(), "Filtered posts");
    kept
}
