use crate::modules::people::core::person::{NewPerson, Person, PersonId, seed_people};
use crate::shared::core::names::names_match;
use crate::shared::infrastructure::person_store::{PersonStore, PersonStoreError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

struct Collection {
    people: Vec<Person>,
    next_id: PersonId,
}

impl Default for Collection {
    fn default() -> Self {
        Self {
            people: Vec::new(),
            next_id: 1,
        }
    }
}

impl Collection {
    fn push(&mut self, person: NewPerson) -> Person {
        let person = person.with_id(self.next_id);
        self.next_id += 1;
        self.people.push(person.clone());
        person
    }
}

#[derive(Default)]
pub struct InMemoryPersonStore {
    inner: RwLock<Collection>,
    is_offline: bool,
    delay_add_ms: AtomicU64,
}

impl InMemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the fixed seed records.
    pub fn seeded() -> Self {
        let mut collection = Collection::default();
        for person in seed_people() {
            collection.push(person);
        }
        Self {
            inner: RwLock::new(collection),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_add_ms(&self, ms: u64) {
        self.delay_add_ms.store(ms, Ordering::Relaxed);
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.people.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn snapshot(&self) -> Vec<Person> {
        self.inner.read().await.people.clone()
    }

    fn ensure_online(&self) -> Result<(), PersonStoreError> {
        if self.is_offline {
            return Err(PersonStoreError::Backend("Person store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl PersonStore for InMemoryPersonStore {
    async fn find_by_last_name(&self, last_name: &str) -> Result<Vec<Person>, PersonStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .people
            .iter()
            .filter(|p| names_match(&p.last_name, last_name))
            .cloned()
            .collect())
    }

    async fn find_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Person, PersonStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        guard
            .people
            .iter()
            .find(|p| names_match(&p.first_name, first_name) && names_match(&p.last_name, last_name))
            .cloned()
            .ok_or_else(|| PersonStoreError::NotFound {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            })
    }

    async fn add(&self, person: NewPerson) -> Result<Person, PersonStoreError> {
        self.ensure_online()?;
        let delay = self.delay_add_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        Ok(self.inner.write().await.push(person))
    }
}
