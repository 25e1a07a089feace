use crate::modules::people::core::person::Person;
use crate::modules::people::use_cases::register_person::command::RegisterPerson;
use crate::modules::people::use_cases::register_person::decide::decide_register;
use crate::modules::people::use_cases::register_person::decision::{DecideError, Decision};
use crate::shared::infrastructure::person_store::{PersonStore, PersonStoreError};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] PersonStoreError),

    #[error("domain rejected: {0}")]
    Domain(DecideError),
}

pub struct RegisterPersonHandler<TStore>
where
    TStore: PersonStore + 'static,
{
    store: Arc<TStore>,
    // Lookup and append must not interleave with another registration.
    registering: Mutex<()>,
}

impl<TStore> RegisterPersonHandler<TStore>
where
    TStore: PersonStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            store,
            registering: Mutex::new(()),
        }
    }

    pub async fn handle(&self, command: RegisterPerson) -> Result<Person, ApplicationError> {
        let _guard = self.registering.lock().await;

        let same_last_name = self.store.find_by_last_name(&command.last_name).await?;

        match decide_register(&same_last_name, command) {
            Decision::Accepted { person } => {
                let stored = self.store.add(person).await?;
                tracing::info!(
                    id = stored.id,
                    first_name = %stored.first_name,
                    last_name = %stored.last_name,
                    "person registered"
                );
                Ok(stored)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
        }
    }
}
