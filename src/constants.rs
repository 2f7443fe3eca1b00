//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary constants from primary ones to avoid drift.

/// Default embedding dimension (MiniLM-class sentence encoders).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Default max tokens fed to the encoder per text.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Floor applied to the inverse-price score so expensive listings keep a
/// strictly positive price signal.
pub const MIN_PRICE_SCORE: f32 = 0.001;
