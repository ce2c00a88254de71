//! # merit-embeddings
//!
//! Vector math over feedback embeddings: cosine similarity with an explicit
//! zero-norm policy, dimension validation, and batch comparison of one
//! embedding against many.

pub mod similarity;

pub use similarity::{cosine_similarity, similarities_against, validate_dimensions};
