//! Error types for Yuca
//!
//! Serialization failures come in two kinds: `Decode` for malformed or
//! structurally incompatible input, `Encode` for marshal failures. Both
//! propagate to the caller unmodified.

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum YucaError {
    #[error("decode error: {0}")]
    Decode(String),

    #[error("encode error: {0}")]
    Encode(String),
}
