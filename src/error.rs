use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhonebookError {
    #[error("name and number are required")]
    MissingFields,

    #[error("name must be unique")]
    NameTaken { name: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },
}

pub type PhonebookResult<T> = Result<T, PhonebookError>;
