//! Reading repositories
//!
//! Provides the read-only history collaborator the resolver queries.

pub mod readings;

pub use readings::{InMemoryReadingStore, ReadingStore};
