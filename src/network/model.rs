// Input model for the network pipeline.
//
// Mirrors the JSON shape `{ "users": [...], "posts": { id: {...} } }`.
// `author` is mandatory on every post; `views` and `comments` default to
// empty.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Users and the posts they wrote, viewed and commented on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkData {
    pub users: BTreeSet<String>,
    pub posts: BTreeMap<String, PostRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub author: String,
    /// Viewer names in view order. Repeat views are allowed.
    #[serde(default)]
    pub views: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub user: String,
    pub content: String,
    pub timestamp: String,
}

impl Comment {
    /// Parse the timestamp. Accepts RFC 3339 and naive `YYYY-MM-DDTHH:MM[:SS]`
    /// (treated as UTC).
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = self.timestamp.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| naive.and_utc())
    }
}

impl PostRecord {
    /// Most recent comment time, skipping unparseable timestamps.
    pub fn latest_comment(&self) -> Option<DateTime<Utc>> {
        self.comments
            .iter()
            .filter_map(Comment::parsed_timestamp)
            .max()
    }
}

impl NetworkData {
    /// Load network data from a JSON file.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let raw = std::fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| InputError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
