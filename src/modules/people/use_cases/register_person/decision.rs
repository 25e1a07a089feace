use crate::modules::people::core::person::NewPerson;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Person already exists")]
    AlreadyExists,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { person: NewPerson },
    Rejected { reason: DecideError },
}
