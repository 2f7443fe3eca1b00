//! Embedding backend for the semantic scorer.
//!
//! - [`encoder`] provides the [`TextEncoder`] used for all embeddings.
//! - [`device`] selects the compute device (CPU / Metal / CUDA).

/// BERT sentence-encoder wrapper.
pub mod bert;
/// Device selection.
pub mod device;
mod error;
/// Text encoder (model or stub backend).
pub mod encoder;

pub use encoder::{ENCODER_EMBEDDING_DIM, ENCODER_MAX_SEQ_LEN, EncoderConfig, TextEncoder};
pub use error::EmbeddingError;
