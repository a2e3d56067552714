//! Pluggable model collaborators

pub mod embedder;
pub mod summarizer;

pub use embedder::{cosine_similarity, HashingEmbedder, TextEmbedder};
pub use summarizer::{LeadSummarizer, Summarizer, SummaryBounds};
