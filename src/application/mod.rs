//! Application layer - Pipeline orchestration

pub mod normalize;
pub mod pipeline;

pub use normalize::{categories, normalize};
pub use pipeline::{analyze, run, JournalReport};
