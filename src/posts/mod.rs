// Posts: the social media records, how they are loaded, and how they are
// filtered down to the subset a word cloud is built from.

pub mod filter;
pub mod load;
pub mod models;
