// Port describing what the people module needs from storage.
//
// Boundaries
// - No business rules here. Duplicate detection belongs to the register use case.
// - Lookups never reorder the collection; results follow insertion order.

pub mod in_memory;

use crate::modules::people::core::person::{NewPerson, Person};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersonStoreError {
    #[error("person not found: {first_name} {last_name}")]
    NotFound {
        first_name: String,
        last_name: String,
    },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait PersonStore: Send + Sync {
    /// All people whose last name matches ignoring case. Empty when none do.
    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Person>, PersonStoreError>;

    /// The first person, in insertion order, matching both names ignoring case.
    async fn find_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Person, PersonStoreError>;

    /// Assigns the next id and appends the record.
    async fn add(&self, person: NewPerson) -> Result<Person, PersonStoreError>;
}
