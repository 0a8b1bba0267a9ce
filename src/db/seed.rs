use crate::db::Directory;
use crate::model::{Contact, ContactId};

const SEED: [(&str, &str, &str); 4] = [
    ("1", "Arto Hellas", "040-123456"),
    ("2", "Ada Lovelace", "39-44-5323523"),
    ("3", "Dan Abramov", "12-43-234345"),
    ("4", "Mary Poppendieck", "39-23-6423122"),
];

/// Builds the directory every process starts with.
pub fn initialize() -> Directory {
    Directory::from_contacts(
        SEED.iter()
            .map(|(id, name, number)| Contact::new(ContactId::new(*id), *name, *number))
            .collect(),
    )
}

/// Fresh seeded directory for tests.
pub fn test_directory() -> Directory {
    initialize()
}
