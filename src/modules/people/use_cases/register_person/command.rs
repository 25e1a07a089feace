#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterPerson {
    pub first_name: String,
    pub last_name: String,
}
