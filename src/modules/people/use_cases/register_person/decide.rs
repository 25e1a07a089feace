// Pure decision function for registration.
//
// Responsibilities
// - Reject the command when a person with the same first name is already
//   stored under the command's last name, ignoring case.
// - Never perform input or output. The caller loads the people sharing the last name.

use crate::modules::people::core::person::{NewPerson, Person};
use crate::modules::people::use_cases::register_person::command::RegisterPerson;
use crate::modules::people::use_cases::register_person::decision::{DecideError, Decision};
use crate::shared::core::names::names_match;

pub fn decide_register(same_last_name: &[Person], command: RegisterPerson) -> Decision {
    let exists = same_last_name.iter().any(|p| {
        names_match(&p.first_name, &command.first_name)
            && names_match(&p.last_name, &command.last_name)
    });
    if exists {
        return Decision::Rejected {
            reason: DecideError::AlreadyExists,
        };
    }
    Decision::Accepted {
        person: NewPerson::new(command.first_name, command.last_name),
    }
}
