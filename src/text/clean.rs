// Stopword removal.
//
// Tokens are whitespace-separated and compared to the stopword set after
// lower-casing, so "The" is dropped when "the" is a stopword but "the," is
// kept. Surviving tokens keep their original case and order.

use std::collections::HashSet;

use crate::posts::models::Post;

/// Join post texts with single spaces, in order.
pub fn combine_texts<'a, I>(posts: I) -> String
where
    I: IntoIterator<Item = &'a Post>,
{
    posts
        .into_iter()
        .map(|post| post.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove stopwords from `text`, rejoining the rest with single spaces.
pub fn clean_text(text: &str, stopwords: &HashSet<String>) -> String {
    text.split_whitespace()
        .filter(|token| !stopwords.contains(&token.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stopwords(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_clean_drops_case_insensitive_matches() {
        let sw = stopwords(&["the", "is"]);
        assert_eq!(clean_text("The weather IS nice", &sw), "weather nice");
    }

    #[test]
    fn test_clean_keeps_punctuated_tokens() {
        let sw = stopwords(&["the"]);
        assert_eq!(clean_text("the end, the.", &sw), "end, the.");
    }

    #[test]
    fn test_clean_collapses_whitespace() {
        let sw = HashSet::new();
        assert_eq!(clean_text("  a \t b\n\nc ", &sw), "a b c");
        assert_eq!(clean_text("", &sw), "");
    }

    #[test]
    fn test_combine_texts() {
        let posts = vec![Post::new("one"), Post::new("two three")];
        assert_eq!(combine_texts(&posts), "one two three");
    }
}
