// Loading posts and stopwords from disk.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;
use stop_words::{get, LANGUAGE};
use tracing::info;

use super::models::Post;
use crate::error::InputError;

/// Load a JSON array of posts.
///
/// Every element must be an object with a string `text` field; the first one
/// that isn't fails the whole load with its index.
pub fn load_posts(path: &Path) -> Result<Vec<Post>, InputError> {
    let raw = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&raw).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Array(items) = value else {
        return Err(InputError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    let posts = parse_posts(items)?;

    info!(count = posts.len(), path = %path.display(), "Loaded posts");
    Ok(posts)
}

/// Convert already-parsed JSON values into posts.
pub fn parse_posts(items: Vec<Value>) -> Result<Vec<Post>, InputError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|source| InputError::MalformedPost { index, source })
        })
        .collect()
}

/// Load a newline-delimited stopword file.
pub fn load_stopwords(path: &Path) -> Result<HashSet<String>, InputError> {
    let raw = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let stopwords = parse_stopwords(&raw);
    info!(count = stopwords.len(), path = %path.display(), "Loaded stopwords");
    Ok(stopwords)
}

/// One stopword per line, trimmed and lower-cased. Blank lines are ignored.
pub fn parse_stopwords(raw: &str) -> HashSet<String> {
    raw.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// The English list shipped with the `stop-words` crate.
pub fn builtin_stopwords() -> HashSet<String> {
    get(LANGUAGE::English)
        .into_iter()
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}
