// Text processing: stopword removal and word counting for the word cloud.

pub mod clean;
pub mod frequency;
