// Postlens: word clouds and engagement graphs for social media posts
//
// This is the library root. Each module corresponds to a stage of one of
// the two pipelines: posts -> text -> render (word cloud) and
// network -> render (user/post graph).

pub mod config;
pub mod error;
pub mod network;
pub mod output;
pub mod pipeline;
pub mod posts;
pub mod render;
pub mod text;
