pub mod contact_queries;
pub mod info_queries;
