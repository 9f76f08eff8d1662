// Error types for the library.
//
// Each pipeline stage has its own error enum so callers can tell input
// problems apart from configuration mistakes. `Error` wraps them all for the
// pipeline entry points; the binary converts it into anyhow.

use std::path::PathBuf;

use thiserror::Error;

/// Problems with the data we were asked to process. Always fatal for the run.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed post at index {index}: {source}")]
    MalformedPost {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON array of posts in {path}")]
    NotAnArray { path: PathBuf },
}

/// Invalid options passed to a pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Unknown importance mode '{0}' (expected views, comments or blend)")]
    UnknownImportance(String),

    #[error("Blend weight {name} must be a finite, non-negative number (got {value})")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("Blend weights must look like W_VIEWS,W_COMMENTS (got '{0}')")]
    MalformedWeights(String),

    #[error("min_age ({min}) is greater than max_age ({max})")]
    InvalidAgeRange { min: i64, max: i64 },

    #[error("Attribute filter must look like key=value (got '{0}')")]
    MalformedFilter(String),

    #[error("Unknown colour '{0}' (use a name like 'orange' or a hex code like '#ff8800')")]
    UnknownColor(String),

    #[error("Canvas size must be non-zero (got {width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },
}

/// Graph input that violates the user/post structure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Post '{post}' is authored by '{author}', who is not a declared user")]
    UndeclaredAuthor { post: String, author: String },

    #[error("Post '{post}' was viewed by '{viewer}', who is not a declared user")]
    UndeclaredViewer { post: String, viewer: String },

    #[error("Post id '{0}' is also a user name")]
    IdCollision(String),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Draw(String),

    #[error("Unsupported output format '{0}' (build with --features png for PNG output)")]
    UnsupportedFormat(String),

    #[error("Failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Any failure from a pipeline run.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
