//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProfileRepository` - Durable storage for the preference profile
//! - `ContentSource` - Supplies the catalog to rank

mod content_source;
mod profile_repository;

pub use content_source::{ContentSource, ContentSourceError};
pub use profile_repository::{ProfileRepository, RepositoryError};
