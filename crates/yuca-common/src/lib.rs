//! Yuca Common - Shared error types and serialization support
//!
//! This crate provides the foundational pieces used across all Yuca
//! components:
//! - Error types
//! - The pluggable serialization capability and its JSON implementation

pub mod codec;
pub mod error;

// Re-exports for convenience
pub use codec::{Codec, JsonCodec, convert_to_json, load_from_json};
pub use error::YucaError;
