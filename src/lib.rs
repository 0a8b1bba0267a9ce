pub mod error;
pub mod validation;
pub mod model;
pub mod db;
pub mod ops;
pub mod queries;
pub mod config;
pub mod logging;
pub mod http;
