// Word frequency counting for the word cloud.
//
// Words are runs of Unicode word characters (apostrophes allowed inside),
// at least two characters long, lower-cased. Stopwords are dropped again
// here since tokenisation strips punctuation the cleaner left attached
// ("(the" -> "the").

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[\w']+").unwrap_or_else(|_| unreachable!()));

/// A word and how many times it appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Count words in `text`, returning at most `max_words` entries ordered by
/// count descending, then alphabetically.
pub fn word_frequencies(
    text: &str,
    stopwords: &HashSet<String>,
    max_words: usize,
) -> Vec<WordCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for m in WORD_RE.find_iter(text) {
        let word = m.as_str().trim_end_matches('\'').to_lowercase();
        if word.chars().count() < 2 || stopwords.contains(&word) {
            continue;
        }
        *counts.entry(word).or_insert(0) += 1;
    }

    let mut ranked: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    ranked.truncate(max_words);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_orders() {
        let freqs = word_frequencies("Python rust python Go, python RUST", &HashSet::new(), 10);
        assert_eq!(
            freqs,
            vec![
                WordCount { word: "python".into(), count: 3 },
                WordCount { word: "rust".into(), count: 2 },
                WordCount { word: "go".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_single_letters_and_stopwords_skipped() {
        let stopwords: HashSet<String> = ["the".to_string()].into();
        let freqs = word_frequencies("a (the) I love it", &stopwords, 10);
        let words: Vec<&str> = freqs.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["it", "love"]);
    }

    #[test]
    fn test_truncates_to_max_words() {
        let freqs = word_frequencies("aa bb cc dd", &HashSet::new(), 2);
        assert_eq!(freqs.len(), 2);
    }

    #[test]
    fn test_accented_and_non_latin_words_stay_whole() {
        let freqs = word_frequencies("Café naïve résumé 日本語 café", &HashSet::new(), 10);
        let words: Vec<&str> = freqs.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["café", "naïve", "résumé", "日本語"]);
        assert_eq!(freqs[0].count, 2);
    }
}
