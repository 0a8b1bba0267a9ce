use crate::db::{id_gen, Directory};
use crate::error::{PhonebookError, PhonebookResult};
use crate::model::Contact;
use crate::validation;

pub fn add_contact(
    directory: &mut Directory,
    name: Option<&str>,
    number: Option<&str>,
) -> PhonebookResult<Contact> {
    let (name, number) = validation::required_pair(name, number)?;

    if let Some(existing) = directory.find_by_name(name) {
        return Err(PhonebookError::NameTaken {
            name: existing.name.clone(),
        });
    }

    let contact = Contact::new(id_gen::generate(directory), name, number);
    directory.insert(contact.clone());
    tracing::debug!(id = %contact.id, name = %contact.name, "Contact added");
    Ok(contact)
}

/// Removing an absent id is a no-op, not an error.
pub fn delete_contact(directory: &mut Directory, id: &str) -> PhonebookResult<()> {
    let removed = directory.remove(id);
    tracing::debug!(id = %id, removed, "Contact delete");
    Ok(())
}
