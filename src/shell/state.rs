use crate::modules::people::use_cases::register_person::handler::RegisterPersonHandler;
use crate::shared::infrastructure::person_store::PersonStore;
use crate::shared::infrastructure::person_store::in_memory::InMemoryPersonStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub people: Arc<dyn PersonStore>,
    pub register_handler: Arc<RegisterPersonHandler<InMemoryPersonStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryPersonStore>) -> Self {
        Self {
            people: store.clone(),
            register_handler: Arc::new(RegisterPersonHandler::new(store)),
        }
    }
}
