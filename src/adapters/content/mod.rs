//! Content source adapters.

mod in_memory_content_source;

pub use in_memory_content_source::InMemoryContentSource;
