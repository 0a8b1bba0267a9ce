pub mod ids;
pub mod contact;

pub use ids::ContactId;
pub use contact::{Contact, NewContact};
