//! Services layer - orchestration logic
//!
//! This module coordinates between domain logic and infrastructure.

pub mod release_query;

// Re-export commonly used types
pub use release_query::ReleaseQueryService;
