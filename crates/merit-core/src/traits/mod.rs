mod embedding;
mod judge;

pub use embedding::EmbeddingProvider;
pub use judge::{JudgeRequest, QualityJudge};
