use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use postlens::config::Config;
use postlens::network::importance::{BlendWeights, Importance};
use postlens::network::model::NetworkData;
use postlens::network::sample::sample_network;
use postlens::pipeline::network::GraphOptions;
use postlens::pipeline::wordcloud::{CloudOptions, StopwordSource};
use postlens::posts::filter::{parse_attribute_filter, FilterCriteria};
use postlens::render::graph::GraphStyle;
use postlens::render::wordcloud::CloudStyle;

/// Postlens: word clouds and engagement graphs for social media posts.
///
/// `cloud` filters posts by keyword, attributes and age and draws a word
/// cloud from what's left. `graph` draws users and posts as a network and
/// highlights the most viewed or discussed posts.
#[derive(Parser)]
#[command(name = "postlens", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter posts and render a word cloud
    Cloud {
        /// JSON array of posts (default: $POSTLENS_POSTS or ./posts.json)
        #[arg(long)]
        posts: Option<PathBuf>,

        /// Stopword file, one word per line (default: $POSTLENS_STOPWORDS or ./stopwords.txt)
        #[arg(long, conflicts_with = "builtin_stopwords")]
        stopwords: Option<PathBuf>,

        /// Use the bundled English stopword list instead of a file
        #[arg(long)]
        builtin_stopwords: bool,

        /// Keep posts containing any of these keywords (repeatable)
        #[arg(long = "include", value_name = "KEYWORD")]
        include: Vec<String>,

        /// Drop posts containing any of these keywords (repeatable)
        #[arg(long = "exclude", value_name = "KEYWORD")]
        exclude: Vec<String>,

        /// Require an attribute value, e.g. --filter region=california (repeatable)
        #[arg(long = "filter", value_name = "KEY=VALUE")]
        filters: Vec<String>,

        /// Minimum author age (inclusive)
        #[arg(long)]
        min_age: Option<i64>,

        /// Maximum author age (inclusive)
        #[arg(long)]
        max_age: Option<i64>,

        /// Canvas width in pixels
        #[arg(long, default_value = "800")]
        width: u32,

        /// Canvas height in pixels
        #[arg(long, default_value = "400")]
        height: u32,

        /// Background colour (name or #rrggbb)
        #[arg(long, default_value = "white")]
        background: String,

        /// Maximum number of words in the cloud
        #[arg(long, default_value = "200")]
        max_words: usize,

        /// Output image (.svg, or .png with the png feature)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Render the user/post network with important posts highlighted
    Graph {
        /// Network JSON ({"users": [...], "posts": {...}}); built-in sample if omitted
        #[arg(long)]
        input: Option<PathBuf>,

        /// Importance measure: views, comments or blend
        #[arg(long, default_value = "blend")]
        importance: String,

        /// Blend weights as W_VIEWS,W_COMMENTS
        #[arg(long, default_value = "0.5,0.5")]
        weights: String,

        /// Render views, comments and blend(0.7,0.3) one after another
        #[arg(long, conflicts_with_all = ["importance", "weights"])]
        all_modes: bool,

        #[arg(long, default_value = "lightblue")]
        user_color: String,

        #[arg(long, default_value = "gray")]
        post_color: String,

        #[arg(long, default_value = "orange")]
        highlight_color: String,

        /// User node size (marker area, points²)
        #[arg(long, default_value = "500")]
        user_size: f64,

        /// Post node size before importance is added
        #[arg(long, default_value = "500")]
        base_post_size: f64,

        /// Extra post node size per importance point
        #[arg(long, default_value = "100")]
        size_scale: f64,

        /// Figure width in inches
        #[arg(long, default_value = "12")]
        fig_width: f64,

        /// Figure height in inches
        #[arg(long, default_value = "8")]
        fig_height: f64,

        /// Layout seed (same seed, same picture)
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Output image (.svg, or .png with the png feature)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("postlens=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Commands::Cloud {
            posts,
            stopwords,
            builtin_stopwords,
            include,
            exclude,
            filters,
            min_age,
            max_age,
            width,
            height,
            background,
            max_words,
            output,
        } => {
            let attribute_filters: BTreeMap<String, String> = filters
                .iter()
                .map(|raw| parse_attribute_filter(raw))
                .collect::<Result<_, _>>()?;

            let stopwords = if builtin_stopwords {
                StopwordSource::Builtin
            } else {
                StopwordSource::File(stopwords.unwrap_or_else(|| config.stopwords_path.clone()))
            };

            let options = CloudOptions {
                posts_path: posts.unwrap_or_else(|| config.posts_path.clone()),
                stopwords,
                criteria: FilterCriteria {
                    include_keywords: include,
                    exclude_keywords: exclude,
                    attribute_filters,
                    min_age,
                    max_age,
                },
                style: CloudStyle {
                    width,
                    height,
                    background,
                    ..Default::default()
                },
                max_words,
                output: output.unwrap_or_else(|| config.output_file("wordcloud.svg")),
            };

            println!(
                "Building word cloud from {}...",
                options.posts_path.display()
            );
            postlens::output::terminal::display_criteria(&options.criteria);

            let report = postlens::pipeline::wordcloud::run(&options)
                .context("Word cloud run failed")?;
            postlens::output::terminal::display_cloud_report(&report, 15);
        }

        Commands::Graph {
            input,
            importance,
            weights,
            all_modes,
            user_color,
            post_color,
            highlight_color,
            user_size,
            base_post_size,
            size_scale,
            fig_width,
            fig_height,
            seed,
            output,
        } => {
            let data = match &input {
                Some(path) => NetworkData::load(path)?,
                None => {
                    println!("{}", "No --input given, using the built-in sample network.".dimmed());
                    sample_network()
                }
            };

            let style = GraphStyle {
                user_color,
                post_color,
                highlight_color,
                user_size,
                base_post_size,
                size_scale,
                figsize: (fig_width, fig_height),
                seed,
                ..Default::default()
            };

            let modes = if all_modes {
                vec![
                    Importance::Views,
                    Importance::Comments,
                    Importance::Blend(BlendWeights::new(0.7, 0.3)?),
                ]
            } else {
                vec![Importance::from_cli(&importance, &weights)?]
            };

            for mode in modes {
                let output = match (&output, all_modes) {
                    (Some(path), false) => path.clone(),
                    (Some(path), true) => suffixed(path, mode.as_str()),
                    (None, _) => config.output_file(&format!("graph-{}.svg", mode.as_str())),
                };

                info!(importance = %mode, output = %output.display(), "Rendering graph");
                let options = GraphOptions {
                    importance: mode,
                    style: style.clone(),
                    output,
                };
                let report = postlens::pipeline::network::run(&data, &options)
                    .with_context(|| format!("Graph run failed (importance '{mode}')"))?;
                postlens::output::terminal::display_graph_report(&report);
            }
        }
    }

    Ok(())
}

/// `out/graph.svg` + `views` -> `out/graph-views.svg`
fn suffixed(path: &std::path::Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "graph".to_string());
    let name = match path.extension() {
        Some(ext) => format!("{stem}-{suffix}.{}", ext.to_string_lossy()),
        None => format!("{stem}-{suffix}"),
    };
    path.with_file_name(name)
}
