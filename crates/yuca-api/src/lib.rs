//! Yuca API - Application option models
//!
//! This crate provides:
//! - The `OptionInfo` key/value record
//! - The `OptionList` JSON envelope for bulk transfer

pub mod model;

// Re-export commonly used types
pub use model::*;
