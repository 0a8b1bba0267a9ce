use rand::Rng;

use crate::db::Directory;
use crate::model::ContactId;

/// Upper bound (exclusive) for generated ids.
pub const ID_RANGE: u32 = 1_000_000_000;

/// Draws random ids until one is not already taken in `directory`.
pub fn generate(directory: &Directory) -> ContactId {
    let mut rng = rand::rng();
    loop {
        let candidate = ContactId::new(rng.random_range(0..ID_RANGE).to_string());
        if !directory.contains_id(&candidate) {
            return candidate;
        }
    }
}
