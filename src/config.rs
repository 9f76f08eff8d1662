use std::env;
use std::path::PathBuf;

/// Default input/output locations, overridable from the environment.
///
/// The .env file is loaded automatically at startup via dotenvy. Command-line
/// flags take precedence over everything here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// JSON array of posts (POSTLENS_POSTS, default ./posts.json)
    pub posts_path: PathBuf,
    /// Newline-delimited stopword file (POSTLENS_STOPWORDS, default ./stopwords.txt)
    pub stopwords_path: PathBuf,
    /// Where images are written when no explicit output path is given
    /// (POSTLENS_OUTPUT_DIR, default ./output)
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            posts_path: PathBuf::from("./posts.json"),
            stopwords_path: PathBuf::from("./stopwords.txt"),
            output_dir: PathBuf::from("./output"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset or empty.
    pub fn load() -> Self {
        let defaults = Self::default();
        Self {
            posts_path: env_path("POSTLENS_POSTS").unwrap_or(defaults.posts_path),
            stopwords_path: env_path("POSTLENS_STOPWORDS").unwrap_or(defaults.stopwords_path),
            output_dir: env_path("POSTLENS_OUTPUT_DIR").unwrap_or(defaults.output_dir),
        }
    }

    /// Output file inside `output_dir`.
    pub fn output_file(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}
