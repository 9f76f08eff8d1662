// Graph construction.
//
// Users and posts become nodes of a directed graph. Each post gets one
// `authored` edge from its author and one `viewed` edge per distinct viewer.
// Every author and viewer must be a declared user; we refuse to invent
// nodes that are neither users nor posts.

use std::collections::{BTreeMap, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::info;

use super::importance::Importance;
use super::model::NetworkData;
use crate::error::GraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    User,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Authored,
    Viewed,
}

impl Relation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Authored => "authored",
            Relation::Viewed => "viewed",
        }
    }
}

/// Directed user/post graph with lookup by node id.
#[derive(Debug, Default)]
pub struct SocialGraph {
    graph: DiGraph<Node, Relation>,
    index: HashMap<String, NodeIndex>,
}

impl SocialGraph {
    fn add_node(&mut self, id: &str, kind: NodeKind) -> NodeIndex {
        let idx = self.graph.add_node(Node {
            id: id.to_string(),
            kind,
        });
        self.index.insert(id.to_string(), idx);
        idx
    }

    /// Add an edge unless one already joins the same pair.
    fn add_edge_once(&mut self, from: NodeIndex, to: NodeIndex, relation: Relation) {
        if self.graph.find_edge(from, to).is_none() {
            self.graph.add_edge(from, to, relation);
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in insertion order: users first, then posts.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.raw_nodes().iter().map(|n| &n.weight)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&idx| &self.graph[idx])
    }

    /// Position of a node in `nodes()` order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).map(|idx| idx.index())
    }

    /// All edges as (from id, to id, relation).
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, Relation)> {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()].id.as_str(),
                self.graph[e.target()].id.as_str(),
                *e.weight(),
            )
        })
    }

    /// Edges as index pairs into `nodes()` order, for layout.
    pub fn edge_indices(&self) -> Vec<(usize, usize)> {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
            .collect()
    }

    pub fn relation(&self, from: &str, to: &str) -> Option<Relation> {
        let (&a, &b) = (self.index.get(from)?, self.index.get(to)?);
        self.graph.find_edge(a, b).map(|e| self.graph[e])
    }
}

/// Build the graph and score every post.
pub fn build_graph(
    data: &NetworkData,
    importance: Importance,
) -> Result<(SocialGraph, BTreeMap<String, f64>), GraphError> {
    let mut graph = SocialGraph::default();

    for user in &data.users {
        graph.add_node(user, NodeKind::User);
    }

    // Check everything before adding post nodes so a collision can't be
    // masked by the post node itself.
    for (post_id, post) in &data.posts {
        if data.users.contains(post_id) {
            return Err(GraphError::IdCollision(post_id.clone()));
        }
        if !data.users.contains(&post.author) {
            return Err(GraphError::UndeclaredAuthor {
                post: post_id.clone(),
                author: post.author.clone(),
            });
        }
        if let Some(viewer) = post.views.iter().find(|v| !data.users.contains(*v)) {
            return Err(GraphError::UndeclaredViewer {
                post: post_id.clone(),
                viewer: viewer.clone(),
            });
        }
    }

    let mut scores = BTreeMap::new();

    for (post_id, post) in &data.posts {
        let post_idx = graph.add_node(post_id, NodeKind::Post);

        let author_idx = graph.index[&post.author];
        graph.add_edge_once(author_idx, post_idx, Relation::Authored);

        for viewer in &post.views {
            let viewer_idx = graph.index[viewer];
            graph.add_edge_once(viewer_idx, post_idx, Relation::Viewed);
        }

        scores.insert(post_id.clone(), importance.score(post));
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        posts = scores.len(),
        importance = %importance,
        "Built social graph"
    );

    Ok((graph, scores))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::model::PostRecord;

    fn data(users: &[&str], posts: &[(&str, &str, &[&str])]) -> NetworkData {
        NetworkData {
            users: users.iter().map(|u| u.to_string()).collect(),
            posts: posts
                .iter()
                .map(|(id, author, views)| {
                    (
                        id.to_string(),
                        PostRecord {
                            author: author.to_string(),
                            views: views.iter().map(|v| v.to_string()).collect(),
                            comments: vec![],
                        },
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_repeat_viewers_collapse_to_one_edge() {
        let d = data(&["alice", "bob"], &[("p1", "alice", &["bob", "bob", "bob"])]);
        let (graph, scores) = build_graph(&d, Importance::Views).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(scores["p1"], 3.0);
    }

    #[test]
    fn test_author_viewing_own_post_keeps_authored_edge() {
        let d = data(&["alice"], &[("p1", "alice", &["alice"])]);
        let (graph, _) = build_graph(&d, Importance::Views).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.relation("alice", "p1"), Some(Relation::Authored));
    }

    #[test]
    fn test_undeclared_author_rejected() {
        let d = data(&["alice"], &[("p1", "mallory", &[])]);
        assert_eq!(
            build_graph(&d, Importance::Views).unwrap_err(),
            GraphError::UndeclaredAuthor {
                post: "p1".into(),
                author: "mallory".into()
            }
        );
    }

    #[test]
    fn test_undeclared_viewer_rejected() {
        let d = data(&["alice"], &[("p1", "alice", &["eve"])]);
        assert!(matches!(
            build_graph(&d, Importance::Views),
            Err(GraphError::UndeclaredViewer { .. })
        ));
    }

    #[test]
    fn test_post_id_colliding_with_user_rejected() {
        let d = data(&["alice", "bob"], &[("bob", "alice", &[])]);
        assert_eq!(
            build_graph(&d, Importance::Views).unwrap_err(),
            GraphError::IdCollision("bob".into())
        );
    }

    #[test]
    fn test_nodes_are_users_then_posts() {
        let d = data(&["bob", "alice"], &[("p1", "alice", &[])]);
        let (graph, _) = build_graph(&d, Importance::Views).unwrap();
        let kinds: Vec<NodeKind> = graph.nodes().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NodeKind::User, NodeKind::User, NodeKind::Post]);
        assert_eq!(graph.position("p1"), Some(2));
        assert_eq!(graph.node("alice").map(|n| n.kind), Some(NodeKind::User));
    }
}
