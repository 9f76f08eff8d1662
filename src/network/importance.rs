// Importance scoring for posts.
//
// A post's importance is its view count, its comment count, or a weighted
// blend of the two. Scores are never negative: counts can't be, and blend
// weights are validated on construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::model::PostRecord;
use crate::error::ConfigError;

/// Weights for blend mode. They don't need to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBlendWeights")]
pub struct BlendWeights {
    pub views: f64,
    pub comments: f64,
}

/// Unchecked weights as they appear in JSON.
#[derive(Deserialize)]
struct RawBlendWeights {
    views: f64,
    comments: f64,
}

impl TryFrom<RawBlendWeights> for BlendWeights {
    type Error = ConfigError;

    fn try_from(raw: RawBlendWeights) -> Result<Self, Self::Error> {
        Self::new(raw.views, raw.comments)
    }
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            views: 0.5,
            comments: 0.5,
        }
    }
}

impl BlendWeights {
    pub fn new(views: f64, comments: f64) -> Result<Self, ConfigError> {
        for (name, value) in [("views", views), ("comments", comments)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        Ok(Self { views, comments })
    }

    /// Parse `W_VIEWS,W_COMMENTS`, e.g. `0.7,0.3`.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let malformed = || ConfigError::MalformedWeights(raw.to_string());
        let (v, c) = raw.split_once(',').ok_or_else(malformed)?;
        let views: f64 = v.trim().parse().map_err(|_| malformed())?;
        let comments: f64 = c.trim().parse().map_err(|_| malformed())?;
        Self::new(views, comments)
    }
}

/// How a post's importance is measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "mode")]
pub enum Importance {
    Views,
    Comments,
    Blend(BlendWeights),
}

impl Default for Importance {
    fn default() -> Self {
        Importance::Blend(BlendWeights::default())
    }
}

impl Importance {
    /// Build from a mode name and the weights to use if it is `blend`.
    pub fn from_mode(mode: &str, weights: BlendWeights) -> Result<Self, ConfigError> {
        match mode.parse::<Importance>()? {
            Importance::Blend(_) => Ok(Importance::Blend(weights)),
            other => Ok(other),
        }
    }

    /// Build from command-line strings. `weights` is only parsed when the
    /// mode is `blend`, so it can't fail a views or comments run.
    pub fn from_cli(mode: &str, weights: &str) -> Result<Self, ConfigError> {
        match mode.parse::<Importance>()? {
            Importance::Blend(_) => Ok(Importance::Blend(BlendWeights::parse(weights)?)),
            other => Ok(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Views => "views",
            Importance::Comments => "comments",
            Importance::Blend(_) => "blend",
        }
    }

    /// Score one post.
    pub fn score(&self, post: &PostRecord) -> f64 {
        let views = post.views.len() as f64;
        let comments = post.comments.len() as f64;
        match self {
            Importance::Views => views,
            Importance::Comments => comments,
            Importance::Blend(w) => w.views * views + w.comments * comments,
        }
    }
}

impl FromStr for Importance {
    type Err = ConfigError;

    /// Parse a mode name. `blend` gets the default weights.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "views" => Ok(Importance::Views),
            "comments" => Ok(Importance::Comments),
            "blend" => Ok(Importance::Blend(BlendWeights::default())),
            _ => Err(ConfigError::UnknownImportance(s.to_string())),
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::model::Comment;

    fn post(views: usize, comments: usize) -> PostRecord {
        PostRecord {
            author: "alice".into(),
            views: (0..views).map(|i| format!("viewer{i}")).collect(),
            comments: (0..comments)
                .map(|i| Comment {
                    user: format!("c{i}"),
                    content: "hi".into(),
                    timestamp: "2025-07-20T10:00".into(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_score_modes() {
        let p = post(3, 1);
        assert_eq!(Importance::Views.score(&p), 3.0);
        assert_eq!(Importance::Comments.score(&p), 1.0);
        assert!((Importance::default().score(&p) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_repeat_views_count() {
        let mut p = post(0, 0);
        p.views = vec!["bob".into(), "bob".into()];
        assert_eq!(Importance::Views.score(&p), 2.0);
    }

    #[test]
    fn test_unknown_mode_is_error() {
        assert_eq!(
            "likes".parse::<Importance>(),
            Err(ConfigError::UnknownImportance("likes".into()))
        );
    }

    #[test]
    fn test_from_mode_applies_weights_to_blend_only() {
        let w = BlendWeights::new(0.7, 0.3).unwrap();
        assert_eq!(Importance::from_mode("blend", w).unwrap(), Importance::Blend(w));
        assert_eq!(Importance::from_mode("VIEWS", w).unwrap(), Importance::Views);
    }

    #[test]
    fn test_weights_validation() {
        assert!(BlendWeights::new(-0.1, 1.0).is_err());
        assert!(BlendWeights::new(f64::NAN, 1.0).is_err());
        assert!(BlendWeights::new(2.0, 3.0).is_ok());
        assert_eq!(
            BlendWeights::parse("0.7, 0.3").unwrap(),
            BlendWeights { views: 0.7, comments: 0.3 }
        );
        assert!(matches!(
            BlendWeights::parse("0.7"),
            Err(ConfigError::MalformedWeights(_))
        ));
    }

    #[test]
    fn test_cli_weights_only_parsed_for_blend() {
        assert_eq!(Importance::from_cli("views", "junk").unwrap(), Importance::Views);
        assert_eq!(Importance::from_cli("comments", "").unwrap(), Importance::Comments);
        assert!(matches!(
            Importance::from_cli("blend", "junk"),
            Err(ConfigError::MalformedWeights(_))
        ));
        assert_eq!(
            Importance::from_cli("blend", "0.7,0.3").unwrap(),
            Importance::Blend(BlendWeights { views: 0.7, comments: 0.3 })
        );
    }

    #[test]
    fn test_deserialized_weights_are_validated() {
        let negative = serde_json::json!({"mode": "blend", "views": -1.0, "comments": 0.0});
        assert!(serde_json::from_value::<Importance>(negative).is_err());

        let valid = serde_json::json!({"mode": "blend", "views": 0.7, "comments": 0.3});
        let importance: Importance = serde_json::from_value(valid).unwrap();
        assert!((importance.score(&post(3, 0)) - 2.1).abs() < 1e-9);

        let views: Importance = serde_json::from_value(serde_json::json!({"mode": "views"})).unwrap();
        assert_eq!(views, Importance::Views);
    }
}
