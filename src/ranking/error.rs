use thiserror::Error;

use crate::scoring::ScoringError;

#[derive(Debug, Error)]
pub enum RankingError {
    /// The embedding backend failed; the whole ranking pass is aborted and
    /// no partial result is produced. Retrying is the caller's concern.
    #[error("embedding backend unavailable: {0}")]
    ModelUnavailable(#[from] ScoringError),
}
