//! Utility functions for id and token generation.

pub mod token;

// Re-export commonly used functions at module level
pub use token::{generate_id, generate_token};
