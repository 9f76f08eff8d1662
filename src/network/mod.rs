// User/post network: input model, graph construction, importance scoring
// and the highlight cutoff.

pub mod build;
pub mod importance;
pub mod model;
pub mod sample;
pub mod threshold;
