// Network pipeline.
//
// Build the user/post graph, score posts, find the highlight cutoff, and
// draw the picture.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::Result;
use crate::network::build::{build_graph, SocialGraph};
use crate::network::importance::Importance;
use crate::network::model::NetworkData;
use crate::network::threshold::ScoredPosts;
use crate::render::graph::{GraphPicture, GraphStyle};
use crate::render::render_to_file;

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub importance: Importance,
    pub style: GraphStyle,
    pub output: PathBuf,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            importance: Importance::default(),
            style: GraphStyle::default(),
            output: PathBuf::from("output/graph.svg"),
        }
    }
}

/// One row of the per-post summary.
#[derive(Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub id: String,
    pub author: String,
    pub views: usize,
    pub comments: usize,
    pub score: f64,
    pub highlighted: bool,
    pub latest_comment: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct GraphReport {
    pub importance: Importance,
    pub nodes: usize,
    pub edges: usize,
    pub threshold: f64,
    /// Highest score first, ties by post id
    pub posts: Vec<PostSummary>,
    pub output: PathBuf,
}

/// Build the graph and score posts without drawing anything.
pub fn analyze(data: &NetworkData, importance: Importance) -> Result<(SocialGraph, ScoredPosts)> {
    let (graph, scores) = build_graph(data, importance)?;
    let scored = ScoredPosts::new(scores);
    info!(
        threshold = scored.threshold,
        highlighted = scored.highlighted().len(),
        "Computed highlight threshold"
    );
    Ok((graph, scored))
}

/// Per-post rows, highest score first.
pub fn summarize(data: &NetworkData, scored: &ScoredPosts) -> Vec<PostSummary> {
    let mut rows: Vec<PostSummary> = data
        .posts
        .iter()
        .map(|(id, post)| PostSummary {
            id: id.clone(),
            author: post.author.clone(),
            views: post.views.len(),
            comments: post.comments.len(),
            score: scored.score(id),
            highlighted: scored.is_highlighted(id),
            latest_comment: post.latest_comment(),
        })
        .collect();
    rows.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id)));
    rows
}

/// Run the whole pipeline and write the image.
pub fn run(data: &NetworkData, options: &GraphOptions) -> Result<GraphReport> {
    let (graph, scored) = analyze(data, options.importance)?;
    let picture = GraphPicture::build(&graph, &scored, &options.importance, &options.style)?;

    render_to_file(&picture, &options.output)?;

    Ok(GraphReport {
        importance: options.importance,
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        threshold: scored.threshold,
        posts: summarize(data, &scored),
        output: options.output.clone(),
    })
}
