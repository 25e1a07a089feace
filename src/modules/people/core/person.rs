use serde::{Deserialize, Serialize};

pub type PersonId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
}

/// A person that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
}

impl NewPerson {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn with_id(self, id: PersonId) -> Person {
        Person {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

/// Records present at process start, in insertion order.
pub fn seed_people() -> Vec<NewPerson> {
    vec![
        NewPerson::new("Mary", "Smith"),
        NewPerson::new("Brian", "Archer"),
        NewPerson::new("Collin", "Brown"),
    ]
}
