use crate::model::{Contact, ContactId};

/// In-memory, insertion-ordered contact store.
///
/// Holds no lock of its own; callers that share a `Directory` across tasks
/// wrap it and keep the guard for the whole read-check-write sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    contacts: Vec<Contact>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Appends at the end, preserving insertion order.
    pub fn insert(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Removes every contact with the given id. Returns how many were removed.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != *id);
        before - self.contacts.len()
    }

    /// First contact whose id equals `id` exactly.
    pub fn find_by_id(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == *id)
    }

    /// First contact whose name matches `name` ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.has_name(name))
    }

    pub fn contains_id(&self, id: &ContactId) -> bool {
        self.find_by_id(id.as_str()).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: &str, name: &str) -> Contact {
        Contact::new(ContactId::new(id), name, "555")
    }

    #[test]
    fn insert_appends_in_order() {
        let mut dir = Directory::new();
        dir.insert(contact("1", "Alice"));
        dir.insert(contact("2", "Bob"));
        let names: Vec<_> = dir.contacts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn remove_reports_count() {
        let mut dir = Directory::from_contacts(vec![contact("1", "Alice"), contact("2", "Bob")]);
        assert_eq!(dir.remove("1"), 1);
        assert_eq!(dir.remove("1"), 0);
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn find_by_name_ignores_case() {
        let dir = Directory::from_contacts(vec![contact("1", "Alice")]);
        assert!(dir.find_by_name("aLiCe").is_some());
        assert!(dir.find_by_name("Alicia").is_none());
    }

    #[test]
    fn find_by_id_is_exact() {
        let dir = Directory::from_contacts(vec![contact("1", "Alice")]);
        assert!(dir.find_by_id("1").is_some());
        assert!(dir.find_by_id("01").is_none());
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let dir = Directory::from_contacts(vec![contact("1", "Alice"), contact("1", "Bob")]);
        assert_eq!(dir.find_by_id("1").unwrap().name, "Alice");
    }
}
