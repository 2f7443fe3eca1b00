use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("embedding backend failed: {0}")]
    Embedding(#[from] EmbeddingError),
}
