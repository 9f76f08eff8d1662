// Pipelines: the two end-to-end runs. Each builds everything fresh from
// its inputs, renders one image, and returns a report for display.

pub mod network;
pub mod wordcloud;
