//! Query-to-listing semantic similarity via the shared text encoder.

use std::sync::Arc;

use tracing::debug;

use crate::embedding::TextEncoder;

use super::error::ScoringError;

/// Scores listing texts against a query by embedding cosine similarity.
///
/// Holds a process-scoped [`TextEncoder`] shared read-only across ranking
/// passes; concurrent scorers over the same encoder need no locking.
pub struct SemanticScorer {
    encoder: Arc<TextEncoder>,
}

impl std::fmt::Debug for SemanticScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScorer")
            .field("encoder", &self.encoder)
            .finish()
    }
}

impl SemanticScorer {
    pub fn new(encoder: Arc<TextEncoder>) -> Self {
        Self { encoder }
    }

    pub fn encoder(&self) -> &TextEncoder {
        &self.encoder
    }

    /// Embeds the query once and every text through one batch call, and
    /// returns one cosine similarity in `[-1, 1]` per text, positionally
    /// mapped to the input.
    ///
    /// A backend failure aborts the whole batch; a zero score would be
    /// indistinguishable from "no match", so no partial result is produced.
    pub fn score_batch(&self, query: &str, texts: &[&str]) -> Result<Vec<f32>, ScoringError> {
        let query_embedding = self.encoder.embed(query)?;
        let text_embeddings = self.encoder.embed_batch(texts)?;

        debug!(
            query_len = query.len(),
            num_texts = texts.len(),
            "Scored batch against query embedding"
        );

        Ok(text_embeddings
            .iter()
            .map(|embedding| cosine_similarity(&query_embedding, embedding))
            .collect())
    }
}

/// Cosine similarity between two vectors.
///
/// Mismatched lengths, empty vectors, and zero vectors all score `0.0`.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&av, &bv)| {
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}
