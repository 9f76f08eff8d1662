// Word cloud pipeline.
//
// Load posts and stopwords, keep the posts that pass the filter, join their
// text, strip stopwords, count words, and draw the cloud.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::Result;
use crate::posts::filter::{filter_posts, FilterCriteria};
use crate::posts::load::{builtin_stopwords, load_posts, load_stopwords};
use crate::posts::models::Post;
use crate::render::render_to_file;
use crate::render::wordcloud::{CloudStyle, WordCloud};
use crate::text::clean::{clean_text, combine_texts};
use crate::text::frequency::{word_frequencies, WordCount};

/// Where stopwords come from.
#[derive(Debug, Clone, PartialEq)]
pub enum StopwordSource {
    /// Newline-delimited file
    File(PathBuf),
    /// English list bundled with the `stop-words` crate
    Builtin,
}

/// Everything the word cloud run needs.
#[derive(Debug, Clone)]
pub struct CloudOptions {
    pub posts_path: PathBuf,
    pub stopwords: StopwordSource,
    pub criteria: FilterCriteria,
    pub style: CloudStyle,
    /// Most words drawn in the cloud
    pub max_words: usize,
    pub output: PathBuf,
}

impl Default for CloudOptions {
    fn default() -> Self {
        Self {
            posts_path: PathBuf::from("posts.json"),
            stopwords: StopwordSource::File(PathBuf::from("stopwords.txt")),
            criteria: FilterCriteria::default(),
            style: CloudStyle::default(),
            max_words: 200,
            output: PathBuf::from("output/wordcloud.svg"),
        }
    }
}

/// Result of filtering and cleaning, before anything is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudText {
    pub total_posts: usize,
    pub matched_posts: usize,
    pub cleaned_text: String,
}

/// Filter posts and produce the stopword-free text the cloud is drawn from.
pub fn prepare_text(
    posts: &[Post],
    criteria: &FilterCriteria,
    stopwords: &HashSet<String>,
) -> CloudText {
    let matched = filter_posts(posts, criteria);
    let combined = combine_texts(matched.iter().copied());
    CloudText {
        total_posts: posts.len(),
        matched_posts: matched.len(),
        cleaned_text: clean_text(&combined, stopwords),
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone)]
pub struct CloudReport {
    pub total_posts: usize,
    pub matched_posts: usize,
    pub top_words: Vec<WordCount>,
    pub placed_words: usize,
    pub output: PathBuf,
}

/// Run the whole pipeline and write the image.
pub fn run(options: &CloudOptions) -> Result<CloudReport> {
    options.criteria.validate()?;
    options.style.validate()?;

    let stopwords = match &options.stopwords {
        StopwordSource::File(path) => load_stopwords(path)?,
        StopwordSource::Builtin => builtin_stopwords(),
    };
    let posts = load_posts(&options.posts_path)?;

    let text = prepare_text(&posts, &options.criteria, &stopwords);
    if text.matched_posts == 0 {
        warn!("No posts matched the filter; the word cloud will be empty");
    }

    let words = word_frequencies(&text.cleaned_text, &stopwords, options.max_words);
    let cloud = WordCloud::build(&words, &options.style)?;

    info!(
        matched = text.matched_posts,
        distinct_words = words.len(),
        placed = cloud.words.len(),
        "Laid out word cloud"
    );

    render_to_file(&cloud, &options.output)?;

    Ok(CloudReport {
        total_posts: text.total_posts,
        matched_posts: text.matched_posts,
        placed_words: cloud.words.len(),
        top_words: words,
        output: options.output.clone(),
    })
}
