//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - Profile repositories (in-memory, YAML file)
//! - `content` - Content sources

pub mod content;
pub mod storage;

pub use content::InMemoryContentSource;
pub use storage::{FileProfileRepository, InMemoryProfileRepository};
