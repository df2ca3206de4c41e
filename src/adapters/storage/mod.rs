//! Storage adapters for the preference profile.
//!
//! - `InMemoryProfileRepository` - For testing and development
//! - `FileProfileRepository` - YAML file on local disk

mod file_profile_repository;
mod in_memory_profile_repository;

pub use file_profile_repository::FileProfileRepository;
pub use in_memory_profile_repository::InMemoryProfileRepository;
