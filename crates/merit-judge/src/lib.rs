//! # merit-judge
//!
//! The contract between the reward engine and an external LLM judge. The
//! judge itself lives outside this workspace; this crate renders the prompt
//! it is given and turns its free-form reply into validated
//! [`QualityAssessment`](merit_core::QualityAssessment) values.
//!
//! A reply that cannot be parsed is an error, never a default score.

pub mod llm;
pub mod prompt;
pub mod response;

pub use llm::{CompletionClient, LlmJudge};
pub use prompt::render_prompt;
pub use response::parse_response;
