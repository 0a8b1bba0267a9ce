use crate::db::Directory;
use crate::error::{PhonebookError, PhonebookResult};
use crate::model::Contact;

pub fn all_contacts(directory: &Directory) -> Vec<Contact> {
    directory.contacts().to_vec()
}

pub fn get_contact(directory: &Directory, id: &str) -> PhonebookResult<Contact> {
    directory
        .find_by_id(id)
        .cloned()
        .ok_or_else(|| PhonebookError::NotFound {
            entity_type: "Contact".into(),
            id: id.to_string(),
        })
}
